//! Lookup views over a resolved rule
//!
//! All views keep the rule's insertion order so the first violation reported
//! is stable across runs.

use shared::models::{
    Order, OrderRuleExclusion, OrderRuleSubcategoryLimit, RuleTarget, TargetKind,
};

/// All exclusions of the winning rule, any kind combination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionTable {
    entries: Vec<OrderRuleExclusion>,
}

impl ExclusionTable {
    pub fn new(entries: Vec<OrderRuleExclusion>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRuleExclusion> {
        self.entries.iter()
    }

    /// Targets excluded by `(kind, name)`
    pub fn lookup(&self, kind: TargetKind, name: &str) -> Vec<&RuleTarget> {
        self.entries
            .iter()
            .filter(|e| e.source.kind() == kind && e.source.name() == name)
            .map(|e| &e.excluded)
            .collect()
    }

    /// Subcategory -> subcategory pairs only
    pub fn subcategory_pairs(&self) -> SubcategoryExclusions {
        let mut pairs = SubcategoryExclusions::default();
        for e in &self.entries {
            if let (RuleTarget::Subcategory { name: source, .. }, RuleTarget::Subcategory { name: excluded, .. }) =
                (&e.source, &e.excluded)
            {
                pairs.insert(source, excluded);
            }
        }
        pairs
    }

    /// Whether a category is blocked: an exclusion pairs it with a side already in the order
    pub fn blocks_category(&self, category_id: i64, order: &Order) -> bool {
        self.blocks(order, |t| matches!(t, RuleTarget::Category { id, .. } if *id == category_id))
    }

    /// Whether a subcategory is blocked: an exclusion pairs it with a side already in the order
    pub fn blocks_subcategory(&self, subcategory: &str, order: &Order) -> bool {
        self.blocks(order, |t| matches!(t, RuleTarget::Subcategory { name, .. } if name == subcategory))
    }

    fn blocks(&self, order: &Order, is_target: impl Fn(&RuleTarget) -> bool) -> bool {
        self.entries.iter().any(|e| {
            (is_target(&e.source) && side_in_order(&e.excluded, order))
                || (is_target(&e.excluded) && side_in_order(&e.source, order))
        })
    }
}

/// Whether any line of the order matches an exclusion side
pub fn side_in_order(target: &RuleTarget, order: &Order) -> bool {
    match target {
        RuleTarget::Category { id, .. } => order.has_category(*id),
        RuleTarget::Subcategory { name, .. } => order.has_subcategory(name),
    }
}

/// Subcategory name -> excluded subcategory names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubcategoryExclusions {
    entries: Vec<(String, Vec<String>)>,
}

impl SubcategoryExclusions {
    pub fn insert(&mut self, source: &str, excluded: &str) {
        match self.entries.iter_mut().find(|(s, _)| s == source) {
            Some((_, list)) => {
                if !list.iter().any(|e| e == excluded) {
                    list.push(excluded.to_string());
                }
            }
            None => self
                .entries
                .push((source.to_string(), vec![excluded.to_string()])),
        }
    }

    pub fn get(&self, source: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(s, _)| s == source)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(s, l)| (s.as_str(), l.as_slice()))
    }
}

/// Subcategory name -> product quota
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubcategoryLimits {
    entries: Vec<(String, u32)>,
}

impl SubcategoryLimits {
    pub fn from_limits(limits: &[OrderRuleSubcategoryLimit]) -> Self {
        let mut view = Self::default();
        for limit in limits {
            view.set(&limit.subcategory.name, limit.max_products);
        }
        view
    }

    /// Later entries for the same subcategory replace earlier ones
    pub fn set(&mut self, subcategory: &str, max_products: u32) {
        match self.entries.iter_mut().find(|(s, _)| s == subcategory) {
            Some((_, max)) => *max = max_products,
            None => self.entries.push((subcategory.to_string(), max_products)),
        }
    }

    pub fn get(&self, subcategory: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(s, _)| s == subcategory)
            .map(|(_, max)| *max)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(s, m)| (s.as_str(), *m))
    }
}

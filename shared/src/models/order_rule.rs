//! Order Rule Model (订单规则)
//!
//! Operator-authored rules scoped to a role + permission pair and optionally
//! to companies. Exclusions are polymorphic: either side may be a category or
//! a subcategory.

use serde::{Deserialize, Serialize};

use super::subcategory::Subcategory;
use super::user::{PermissionName, RoleName};

/// Rule type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderRuleType {
    SubcategoryExclusion,
    ProductLimitPerSubcategory,
}

impl OrderRuleType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SubcategoryExclusion => "subcategory_exclusion",
            Self::ProductLimitPerSubcategory => "product_limit_per_subcategory",
        }
    }
}

/// Kind of an exclusion side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Category,
    Subcategory,
}

impl TargetKind {
    /// Spanish label used in rejection messages
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Category => "categoría",
            Self::Subcategory => "subcategoría",
        }
    }
}

/// One side of an exclusion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleTarget {
    Category { id: i64, name: String },
    Subcategory { id: i64, name: String },
}

impl RuleTarget {
    pub fn category(id: i64, name: impl Into<String>) -> Self {
        Self::Category {
            id,
            name: name.into(),
        }
    }

    pub fn subcategory(id: i64, name: impl Into<String>) -> Self {
        Self::Subcategory {
            id,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Category { .. } => TargetKind::Category,
            Self::Subcategory { .. } => TargetKind::Subcategory,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Category { id, .. } | Self::Subcategory { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Category { name, .. } | Self::Subcategory { name, .. } => name,
        }
    }
}

impl From<&Subcategory> for RuleTarget {
    fn from(s: &Subcategory) -> Self {
        Self::subcategory(s.id, s.name.clone())
    }
}

/// "source cannot be combined with excluded"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRuleExclusion {
    pub id: i64,
    pub source: RuleTarget,
    pub excluded: RuleTarget,
}

/// Product quota for a subcategory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRuleSubcategoryLimit {
    pub id: i64,
    pub subcategory: Subcategory,
    pub max_products: u32,
}

/// Order rule entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRule {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub rule_type: OrderRuleType,
    pub role: RoleName,
    pub permission: PermissionName,
    /// Lower wins
    pub priority: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Empty = general rule
    #[serde(default)]
    pub company_ids: Vec<i64>,
    #[serde(default)]
    pub exclusions: Vec<OrderRuleExclusion>,
    #[serde(default)]
    pub subcategory_limits: Vec<OrderRuleSubcategoryLimit>,
}

fn default_true() -> bool {
    true
}

impl OrderRule {
    pub fn is_general(&self) -> bool {
        self.company_ids.is_empty()
    }

    pub fn applies_to_company(&self, company_id: i64) -> bool {
        self.company_ids.contains(&company_id)
    }
}

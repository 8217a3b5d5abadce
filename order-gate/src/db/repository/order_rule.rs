//! Order Rule Repository

use std::collections::HashMap;

use shared::models::{
    OrderRule, OrderRuleExclusion, OrderRuleSubcategoryLimit, OrderRuleType, RuleTarget,
    Subcategory, TargetKind,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, CatalogRepository, RepoResult};
use crate::db::models::{ExclusionRow, OrderRuleRow, SubcategoryLimitRow, TargetRef};

const TABLE: &str = "order_rule";

#[derive(Clone)]
pub struct OrderRuleRepository {
    base: BaseRepository,
    catalog: CatalogRepository,
}

impl OrderRuleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            catalog: CatalogRepository::new(db.clone()),
            base: BaseRepository::new(db),
        }
    }

    /// Save a rule; exclusion sides and limits are stored as id references
    pub async fn save(&self, rule: &OrderRule) -> RepoResult<()> {
        let row = OrderRuleRow {
            id: rule.id,
            name: rule.name.clone(),
            description: rule.description.clone(),
            rule_type: rule.rule_type,
            role: rule.role,
            permission: rule.permission,
            priority: rule.priority,
            is_active: rule.is_active,
            company_ids: rule.company_ids.clone(),
            exclusions: rule
                .exclusions
                .iter()
                .map(|e| ExclusionRow {
                    id: e.id,
                    source: target_ref(&e.source),
                    excluded: target_ref(&e.excluded),
                })
                .collect(),
            subcategory_limits: rule
                .subcategory_limits
                .iter()
                .map(|l| SubcategoryLimitRow {
                    id: l.id,
                    subcategory_id: l.subcategory.id,
                    max_products: l.max_products,
                })
                .collect(),
        };
        self.base.upsert(TABLE, rule.id, row).await
    }

    /// All rules of a type, with exclusion/limit targets resolved to names
    pub async fn find_by_type(&self, rule_type: OrderRuleType) -> RepoResult<Vec<OrderRule>> {
        let rows: Vec<OrderRuleRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, description, rule_type, role, permission, priority, \
                 is_active, company_ids, exclusions, subcategory_limits \
                 FROM order_rule WHERE rule_type = $rule_type",
            )
            .bind(("rule_type", rule_type))
            .await?
            .take(0)?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let subcategories = self.catalog.subcategories().await?;
        let categories = self.catalog.category_names().await?;
        let names = TargetNames {
            subcategories: &subcategories,
            categories: &categories,
        };

        let mut rules: Vec<OrderRule> = rows.into_iter().map(|row| names.hydrate(row)).collect();
        rules.sort_by_key(|r| r.id);
        Ok(rules)
    }
}

fn target_ref(target: &RuleTarget) -> TargetRef {
    TargetRef {
        kind: target.kind(),
        id: target.id(),
    }
}

struct TargetNames<'a> {
    subcategories: &'a HashMap<i64, Subcategory>,
    categories: &'a HashMap<i64, String>,
}

impl TargetNames<'_> {
    fn resolve(&self, target: TargetRef) -> Option<RuleTarget> {
        match target.kind {
            TargetKind::Category => self
                .categories
                .get(&target.id)
                .map(|name| RuleTarget::category(target.id, name.clone())),
            TargetKind::Subcategory => self.subcategories.get(&target.id).map(RuleTarget::from),
        }
    }

    fn hydrate(&self, row: OrderRuleRow) -> OrderRule {
        let rule_id = row.id;

        let exclusions = row
            .exclusions
            .into_iter()
            .filter_map(|e| match (self.resolve(e.source), self.resolve(e.excluded)) {
                (Some(source), Some(excluded)) => Some(OrderRuleExclusion {
                    id: e.id,
                    source,
                    excluded,
                }),
                _ => {
                    tracing::warn!(rule_id, exclusion_id = e.id, "Exclusion points at unknown target, skipped");
                    None
                }
            })
            .collect();

        let subcategory_limits = row
            .subcategory_limits
            .into_iter()
            .filter_map(|l| match self.subcategories.get(&l.subcategory_id) {
                Some(subcategory) => Some(OrderRuleSubcategoryLimit {
                    id: l.id,
                    subcategory: subcategory.clone(),
                    max_products: l.max_products,
                }),
                None => {
                    tracing::warn!(rule_id, limit_id = l.id, "Limit points at unknown subcategory, skipped");
                    None
                }
            })
            .collect();

        OrderRule {
            id: row.id,
            name: row.name,
            description: row.description,
            rule_type: row.rule_type,
            role: row.role,
            permission: row.permission,
            priority: row.priority,
            is_active: row.is_active,
            company_ids: row.company_ids,
            exclusions,
            subcategory_limits,
        }
    }
}

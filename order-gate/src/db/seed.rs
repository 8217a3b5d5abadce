//! Default rule data
//!
//! The stock exclusion table and subcategory quotas, written as ordinary
//! general-scope rules so operators can shadow them with company rules.
//! Seeding is idempotent: every record is upserted under a fixed id.

use shared::models::{
    ALL_KNOWN_SUBCATEGORIES, KnownSubcategory, OrderRule, OrderRuleExclusion,
    OrderRuleSubcategoryLimit, OrderRuleType, PermissionName, RoleName, RuleTarget, Subcategory,
};

use super::repository::{CatalogRepository, OrderRuleRepository, RepoResult};
use super::DbService;

pub const DEFAULT_EXCLUSION_RULE_ID: i64 = 1;
pub const DEFAULT_LIMIT_RULE_ID: i64 = 2;

/// Priority of the stock rules; operator rules with a lower value win
pub const DEFAULT_RULE_PRIORITY: i32 = 100;

/// Known subcategories with ids 1..=8
pub fn default_subcategories() -> Vec<Subcategory> {
    ALL_KNOWN_SUBCATEGORIES
        .iter()
        .zip(1..)
        .map(|(known, id)| Subcategory::new(id, known.as_str()))
        .collect()
}

fn known(subcategories: &[Subcategory], which: KnownSubcategory) -> RuleTarget {
    subcategories
        .iter()
        .find(|s| s.name == which.as_str())
        .map(RuleTarget::from)
        .unwrap_or_else(|| RuleTarget::subcategory(0, which.as_str()))
}

/// Stock exclusions for individual agreement users
pub fn default_exclusion_rule() -> OrderRule {
    use KnownSubcategory::*;

    let subcategories = default_subcategories();
    let pairs = [
        (PlatoDeFondo, PlatoDeFondo),
        (Entrada, Entrada),
        (Fria, Hipocalorico),
        (PanDeAcompanamiento, Sandwich),
    ];

    OrderRule {
        id: DEFAULT_EXCLUSION_RULE_ID,
        name: "Exclusiones por defecto".to_string(),
        description: Some("Combinaciones de subcategorías no permitidas".to_string()),
        rule_type: OrderRuleType::SubcategoryExclusion,
        role: RoleName::Agreement,
        permission: PermissionName::Individual,
        priority: DEFAULT_RULE_PRIORITY,
        is_active: true,
        company_ids: vec![],
        exclusions: pairs
            .into_iter()
            .zip(1..)
            .map(|((source, excluded), id)| OrderRuleExclusion {
                id,
                source: known(&subcategories, source),
                excluded: known(&subcategories, excluded),
            })
            .collect(),
        subcategory_limits: vec![],
    }
}

/// Stock quotas: one main course, one starter, one bread
pub fn default_limit_rule() -> OrderRule {
    use KnownSubcategory::*;

    let subcategories = default_subcategories();
    let subcategory_limits = [PlatoDeFondo, Entrada, PanDeAcompanamiento]
        .into_iter()
        .zip(1..)
        .filter_map(|(which, id)| {
            subcategories
                .iter()
                .find(|s| s.name == which.as_str())
                .map(|s| OrderRuleSubcategoryLimit {
                    id,
                    subcategory: s.clone(),
                    max_products: 1,
                })
        })
        .collect();

    OrderRule {
        id: DEFAULT_LIMIT_RULE_ID,
        name: "Límites por defecto".to_string(),
        description: Some("Cantidad de productos por subcategoría".to_string()),
        rule_type: OrderRuleType::ProductLimitPerSubcategory,
        role: RoleName::Agreement,
        permission: PermissionName::Individual,
        priority: DEFAULT_RULE_PRIORITY,
        is_active: true,
        company_ids: vec![],
        exclusions: vec![],
        subcategory_limits,
    }
}

/// Write the known subcategories and the stock rules
pub async fn seed_defaults(db: &DbService) -> RepoResult<()> {
    let catalog = CatalogRepository::new(db.db.clone());
    let rules = OrderRuleRepository::new(db.db.clone());

    for subcategory in default_subcategories() {
        catalog.save_subcategory(&subcategory).await?;
    }
    rules.save(&default_exclusion_rule()).await?;
    rules.save(&default_limit_rule()).await?;

    tracing::info!(
        exclusion_rule = DEFAULT_EXCLUSION_RULE_ID,
        limit_rule = DEFAULT_LIMIT_RULE_ID,
        "Default order rules seeded"
    );
    Ok(())
}

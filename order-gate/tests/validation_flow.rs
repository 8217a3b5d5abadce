//! Chain-level behaviour over an in-memory snapshot
//! Run: cargo test -p order-gate --test validation_flow

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{
    Order, OrderRule, OrderRuleExclusion, OrderRuleSubcategoryLimit, OrderStatus, RuleTarget, User,
};

use order_gate::db::seed::{default_exclusion_rule, default_limit_rule};
use order_gate::validation::actions::{OrderNotProcessedValidation, SubcategoryExclusion};
use order_gate::validation::{order_update_chain, status_update_chain};
use order_gate::{
    InMemoryCatalog, OrderValidation, ValidationChain, ValidationContext, ValidationResult,
    validate_order_transition,
};

use common::*;

async fn run_chain(
    chain: &ValidationChain,
    catalog: &InMemoryCatalog,
    order: &Order,
    acting: &User,
    owner: &User,
) -> ValidationResult<()> {
    let ctx = ValidationContext::new(catalog, catalog, now());
    validate_order_transition(&ctx, order, acting, owner, dispatch_date(), chain).await
}

fn rejection(result: ValidationResult<()>) -> String {
    match result {
        Err(e) if e.is_rejection() => e.to_string(),
        other => panic!("expected a rejection, got {other:?}"),
    }
}

/// Counts how often it runs and always passes
struct Spy(Arc<AtomicUsize>);

#[async_trait]
impl OrderValidation for Spy {
    fn name(&self) -> &'static str {
        "spy"
    }

    async fn check(
        &self,
        _ctx: &ValidationContext<'_>,
        _order: &Order,
        _user: &User,
        _date: NaiveDate,
    ) -> ValidationResult<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn limit_rule(subcategory: &str, max_products: u32) -> OrderRule {
    OrderRule {
        subcategory_limits: vec![OrderRuleSubcategoryLimit {
            id: 1,
            subcategory: common::subcategory(subcategory),
            max_products,
        }],
        ..default_limit_rule()
    }
}

#[tokio::test]
async fn test_super_master_skips_every_rule() {
    let owner = individual();
    let main = category(1, "Platos", &["PLATO DE FONDO"]);
    let mut processed = order(&[(&main, 1)]);
    processed.status = OrderStatus::Processed;

    // no menu at all: every menu-dependent rule would fail
    let catalog = InMemoryCatalog::new();
    let chain = status_update_chain();

    assert!(run_chain(&chain, &catalog, &processed, &super_master(), &owner).await.is_ok());
    let msg = rejection(run_chain(&chain, &catalog, &processed, &owner, &owner).await);
    assert_eq!(msg, "La orden ya ha sido procesada");
}

#[tokio::test]
async fn test_first_rejection_stops_the_chain() {
    let owner = individual();
    let main = category(1, "Platos", &["PLATO DE FONDO"]);
    let mut processed = order(&[(&main, 1)]);
    processed.status = OrderStatus::Processed;

    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));
    let chain = ValidationChain::new()
        .link(Spy(before.clone()))
        .link(OrderNotProcessedValidation)
        .link(Spy(after.clone()));

    let result = run_chain(&chain, &InMemoryCatalog::new(), &processed, &owner, &owner).await;
    assert!(result.is_err());
    assert_eq!(before.load(Ordering::SeqCst), 1);
    assert_eq!(after.load(Ordering::SeqCst), 0);

    processed.status = OrderStatus::Pending;
    assert!(run_chain(&chain, &InMemoryCatalog::new(), &processed, &owner, &owner).await.is_ok());
    assert_eq!(after.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_consolidated_portions_must_match() {
    let owner = consolidated();
    let lunch = category(1, "Almuerzo", &[]);
    let salads = category(2, "Ensaladas", &[]);
    let desserts = category(3, "Postres", &[]);
    let catalog = in_memory(&snapshot(&owner, &[(&lunch, 2), (&salads, 2), (&desserts, 2)]));
    let chain = status_update_chain();

    let even = order(&[(&lunch, 3), (&salads, 3), (&desserts, 3)]);
    assert!(run_chain(&chain, &catalog, &even, &owner, &owner).await.is_ok());

    let uneven = order(&[(&lunch, 3), (&salads, 3), (&desserts, 4)]);
    let msg = rejection(run_chain(&chain, &catalog, &uneven, &owner, &owner).await);
    assert_eq!(msg, "Cada categoría debe tener la misma cantidad de productos.");
}

#[tokio::test]
async fn test_category_without_orderable_products_is_not_required() {
    let owner = consolidated();
    let lunch = category(1, "Almuerzo", &[]);
    let drinks = category(4, "Bebidas", &[]);
    let mut snapshot = snapshot(&owner, &[(&lunch, 1)]);

    // pinned to a product with no price: the placement does not count
    let mut pinned = placement(2, &drinks);
    pinned.show_all_products = false;
    pinned.product_ids = vec![product(&drinks, 1).id];
    snapshot.placements.push(pinned);
    snapshot.products.push(product(&drinks, 1));

    let catalog = in_memory(&snapshot);
    let only_lunch = order(&[(&lunch, 2)]);
    assert!(run_chain(&status_update_chain(), &catalog, &only_lunch, &owner, &owner).await.is_ok());
}

#[tokio::test]
async fn test_exclusion_in_either_order() {
    let owner = individual();
    let cold = category(5, "Fríos", &["FRIA"]);
    let light = category(6, "Livianos", &["HIPOCALORICO"]);
    let mut snapshot = snapshot(&owner, &[(&cold, 1), (&light, 1)]);
    snapshot.rules.push(default_exclusion_rule());
    let catalog = in_memory(&snapshot);
    let chain = order_update_chain();

    let expected = "No puedes combinar las subcategorías: FRIA con HIPOCALORICO.";
    let forward = order(&[(&cold, 1), (&light, 1)]);
    assert_eq!(rejection(run_chain(&chain, &catalog, &forward, &owner, &owner).await), expected);
    let backward = order(&[(&light, 1), (&cold, 1)]);
    assert_eq!(rejection(run_chain(&chain, &catalog, &backward, &owner, &owner).await), expected);
}

#[tokio::test]
async fn test_null_product_never_conflicts() {
    let owner = individual();
    let cold = category(5, "Fríos", &["FRIA"]);
    let light = category(6, "Livianos", &["HIPOCALORICO"]);
    let mut snapshot = snapshot(&owner, &[(&cold, 1), (&light, 1)]);
    snapshot.rules.push(default_exclusion_rule());
    let catalog = in_memory(&snapshot);

    let mut nothing_light = order(&[(&cold, 1), (&light, 1)]);
    nothing_light.lines[1].product.is_null_product = true;
    assert!(run_chain(&order_update_chain(), &catalog, &nothing_light, &owner, &owner).await.is_ok());
}

#[tokio::test]
async fn test_company_rule_beats_general_rule() {
    let owner = individual();
    let starters = category(2, "Entradas", &["ENTRADA"]);
    let two_starters = order(&[(&starters, 1), (&starters, 1)]);
    let chain = ValidationChain::new().link(SubcategoryExclusion);

    let general = in_memory(&snapshot(&owner, &[(&starters, 2)])).with_rule(default_exclusion_rule());
    let msg = rejection(run_chain(&chain, &general, &two_starters, &owner, &owner).await);
    assert_eq!(msg, "No puedes combinar las subcategorías: ENTRADA con ENTRADA.");

    // company scope wins even with a worse priority number
    let company_rule = OrderRule {
        id: 30,
        name: "Constructora Andes".into(),
        priority: 900,
        company_ids: vec![owner.company.id],
        exclusions: vec![OrderRuleExclusion {
            id: 1,
            source: RuleTarget::from(&common::subcategory("FRIA")),
            excluded: RuleTarget::from(&common::subcategory("HIPOCALORICO")),
        }],
        ..default_exclusion_rule()
    };
    let scoped = general.with_rule(company_rule);
    assert!(run_chain(&chain, &scoped, &two_starters, &owner, &owner).await.is_ok());
}

#[tokio::test]
async fn test_exact_count_reports_shortfall() {
    let owner = individual();
    let starters = category(2, "Entradas", &["ENTRADA"]);
    let mut snapshot = snapshot(&owner, &[(&starters, 2)]);
    snapshot.rules.push(limit_rule("ENTRADA", 2));
    let catalog = in_memory(&snapshot);

    let one_starter = order(&[(&starters, 1)]);
    let msg = rejection(run_chain(&status_update_chain(), &catalog, &one_starter, &owner, &owner).await);
    assert_eq!(
        msg,
        "Tu pedido debe incluir exactamente 2 productos de tipo ENTRADA, pero tiene 1."
    );
}

#[tokio::test]
async fn test_individual_menu_to_processed() {
    let owner = individual();
    let main = category(1, "Platos", &["PLATO DE FONDO"]);
    let starters = category(2, "Entradas", &["ENTRADA"]);
    let desserts = category(8, "POSTRES", &[]);

    let mut snapshot = snapshot(&owner, &[(&main, 1), (&starters, 2), (&desserts, 1)]);
    snapshot.rules.push(default_exclusion_rule());
    snapshot.rules.push(limit_rule("ENTRADA", 1));
    let catalog = in_memory(&snapshot);
    let chain = status_update_chain();

    let complete = order(&[(&main, 1), (&starters, 1), (&desserts, 1)]);
    assert!(run_chain(&chain, &catalog, &complete, &owner, &owner).await.is_ok());

    let extra_starter = order(&[(&main, 1), (&starters, 1), (&starters, 1), (&desserts, 1)]);
    let msg = rejection(run_chain(&chain, &catalog, &extra_starter, &owner, &owner).await);
    assert_eq!(msg, "No puedes combinar las subcategorías: ENTRADA con ENTRADA.");
}

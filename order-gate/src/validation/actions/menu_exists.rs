use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{Order, User};

use crate::validation::{OrderValidation, ValidationContext, ValidationError, ValidationResult};

/// A menu must be published for the dispatch date
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuExistsValidation;

#[async_trait]
impl OrderValidation for MenuExistsValidation {
    fn name(&self) -> &'static str {
        "menu_exists"
    }

    async fn check(
        &self,
        ctx: &ValidationContext<'_>,
        _order: &Order,
        user: &User,
        date: NaiveDate,
    ) -> ValidationResult<()> {
        if ctx.current_menu(date, user).await?.is_none() {
            return Err(ValidationError::rejected(
                "No hay un menú disponible para esta fecha de despacho",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::validation::fixtures::{catalog, individual, order, rejection, run};

    #[tokio::test]
    async fn test_menu_exists() {
        let user = individual();
        let catalog = catalog(&user, &[]);
        assert!(run(&MenuExistsValidation, &catalog, &order(&[]), &user).await.is_ok());
    }

    #[tokio::test]
    async fn test_no_menu() {
        let user = individual();
        let msg = rejection(run(&MenuExistsValidation, &InMemoryCatalog::new(), &order(&[]), &user).await);
        assert_eq!(msg, "No hay un menú disponible para esta fecha de despacho");
    }
}

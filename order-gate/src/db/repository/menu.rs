//! Menu Repository (menus and their category placements)

use chrono::NaiveDate;
use shared::models::{CategoryMenu, Menu};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::{CategoryMenuRow, MenuRow};

const MENU_TABLE: &str = "menu";
const CATEGORY_MENU_TABLE: &str = "category_menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn save_menu(&self, menu: &Menu) -> RepoResult<()> {
        let row = MenuRow {
            id: menu.id,
            title: menu.title.clone(),
            publication_date: menu.publication_date,
            role: menu.role,
            permission: menu.permission,
            active: menu.active,
            max_order_date: menu.max_order_date,
        };
        self.base.upsert(MENU_TABLE, menu.id, row).await
    }

    /// Save a placement; the category itself is stored by the catalog repository
    pub async fn save_category_menu(&self, placement: &CategoryMenu) -> RepoResult<()> {
        let row = CategoryMenuRow {
            id: placement.id,
            menu_id: placement.menu_id,
            category_id: placement.category.id,
            display_order: placement.display_order,
            is_active: placement.is_active,
            mandatory_category: placement.mandatory_category,
            show_all_products: placement.show_all_products,
            product_ids: placement.product_ids.clone(),
        };
        self.base.upsert(CATEGORY_MENU_TABLE, placement.id, row).await
    }

    /// Menus published on a date, ordered by id
    pub async fn find_by_publication_date(&self, date: NaiveDate) -> RepoResult<Vec<Menu>> {
        let rows: Vec<MenuRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, title, publication_date, role, permission, active, max_order_date \
                 FROM menu WHERE publication_date = $date",
            )
            .bind(("date", date))
            .await?
            .take(0)?;

        let mut menus: Vec<Menu> = rows
            .into_iter()
            .map(|r| Menu {
                id: r.id,
                title: r.title,
                publication_date: r.publication_date,
                role: r.role,
                permission: r.permission,
                active: r.active,
                max_order_date: r.max_order_date,
            })
            .collect();
        menus.sort_by_key(|m| m.id);
        Ok(menus)
    }

    /// Placement rows of a menu (categories not loaded)
    pub async fn placements(&self, menu_id: i64) -> RepoResult<Vec<CategoryMenuRow>> {
        let rows: Vec<CategoryMenuRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, menu_id, category_id, display_order, is_active, \
                 mandatory_category, show_all_products, product_ids \
                 FROM category_menu WHERE menu_id = $menu_id",
            )
            .bind(("menu_id", menu_id))
            .await?
            .take(0)?;
        Ok(rows)
    }
}

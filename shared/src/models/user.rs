//! User Model
//!
//! A user orders on behalf of a company/branch. Role and permission decide the
//! agreement tier; the boolean toggles decide which order rules apply.

use serde::{Deserialize, Serialize};

/// Role names as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Café")]
    Cafe,
    #[serde(rename = "Convenio")]
    Agreement,
}

impl RoleName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Cafe => "Café",
            Self::Agreement => "Convenio",
        }
    }
}

/// Permission names as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionName {
    #[serde(rename = "Consolidado")]
    Consolidated,
    #[serde(rename = "Individual")]
    Individual,
}

impl PermissionName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Consolidated => "Consolidado",
            Self::Individual => "Individual",
        }
    }
}

/// Company the user orders for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    /// Price list that decides which products are orderable
    pub price_list_id: Option<i64>,
}

/// Company branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    /// Minimum order total in cents (0 = no minimum)
    #[serde(default)]
    pub min_price_order: i64,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Option<RoleName>,
    pub permission: Option<PermissionName>,
    pub company: Company,
    pub branch: Option<Branch>,
    #[serde(default)]
    pub validate_subcategory_rules: bool,
    #[serde(default)]
    pub validate_min_price: bool,
    #[serde(default)]
    pub allow_late_orders: bool,
    /// Unconditional bypass of every order rule
    #[serde(default)]
    pub super_master_user: bool,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, company: Company) -> Self {
        Self {
            id,
            name: name.into(),
            role: None,
            permission: None,
            company,
            branch: None,
            validate_subcategory_rules: false,
            validate_min_price: false,
            allow_late_orders: false,
            super_master_user: false,
        }
    }

    pub fn with_access(mut self, role: RoleName, permission: PermissionName) -> Self {
        self.role = Some(role);
        self.permission = Some(permission);
        self
    }

    pub fn price_list_id(&self) -> Option<i64> {
        self.company.price_list_id
    }

    pub fn min_price_order(&self) -> i64 {
        self.branch.as_ref().map_or(0, |b| b.min_price_order)
    }
}

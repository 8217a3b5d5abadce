//! Agreement tier classification
//!
//! Pure predicates over a user's role + permission. A user lacking either
//! attribute belongs to no tier.

use shared::models::{PermissionName, RoleName, User};

fn has_access(user: &User, role: RoleName, permission: PermissionName) -> bool {
    user.role == Some(role) && user.permission == Some(permission)
}

/// Convenio + Consolidado: quantities must balance across menu categories
pub fn is_agreement_consolidated(user: &User) -> bool {
    has_access(user, RoleName::Agreement, PermissionName::Consolidated)
}

/// Convenio + Individual: subcategory quotas and exclusions apply
pub fn is_agreement_individual(user: &User) -> bool {
    has_access(user, RoleName::Agreement, PermissionName::Individual)
}

pub fn is_agreement(user: &User) -> bool {
    is_agreement_consolidated(user) || is_agreement_individual(user)
}

/// Café + Individual
pub fn is_cafe_individual(user: &User) -> bool {
    has_access(user, RoleName::Cafe, PermissionName::Individual)
}

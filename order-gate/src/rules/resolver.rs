//! Order Rule Resolver
//!
//! Picks the single winning rule for a user:
//! 1. Only active rules of the requested type whose role + permission match
//! 2. Company scope beats general scope, whatever the priority numbers say
//! 3. Within a scope the lowest priority wins, then the lowest id

use shared::models::{OrderRule, OrderRuleType, User};

/// Scope tier of a rule relative to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleScope {
    /// Rule names the user's company
    Company,
    /// Rule names no company
    General,
}

/// Scope of `rule` for `user`, `None` when the rule cannot apply to the user's company
pub fn scope_for(rule: &OrderRule, user: &User) -> Option<RuleScope> {
    if rule.applies_to_company(user.company.id) {
        Some(RuleScope::Company)
    } else if rule.is_general() {
        Some(RuleScope::General)
    } else {
        None
    }
}

/// Check if a rule is a candidate for the user (active, type, role, permission)
pub fn matches_user(rule: &OrderRule, user: &User, rule_type: OrderRuleType) -> bool {
    let (Some(role), Some(permission)) = (user.role, user.permission) else {
        return false;
    };

    rule.is_active
        && rule.rule_type == rule_type
        && rule.role == role
        && rule.permission == permission
}

/// Resolve the winning rule among `candidates`
pub fn resolve_order_rule<'a>(
    candidates: &'a [OrderRule],
    user: &User,
    rule_type: OrderRuleType,
) -> Option<&'a OrderRule> {
    candidates
        .iter()
        .filter(|rule| matches_user(rule, user, rule_type))
        .filter_map(|rule| scope_for(rule, user).map(|scope| (scope, rule)))
        .min_by_key(|(scope, rule)| (*scope, rule.priority, rule.id))
        .map(|(_, rule)| rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Company, PermissionName, RoleName};

    fn make_user(company_id: i64) -> User {
        let company = Company {
            id: company_id,
            name: format!("Company {company_id}"),
            price_list_id: Some(1),
        };
        User::new(1, "Ana", company).with_access(RoleName::Agreement, PermissionName::Individual)
    }

    /// Helper to create a test rule
    fn make_rule(id: i64, priority: i32, company_ids: Vec<i64>) -> OrderRule {
        OrderRule {
            id,
            name: format!("rule_{id}"),
            description: None,
            rule_type: OrderRuleType::SubcategoryExclusion,
            role: RoleName::Agreement,
            permission: PermissionName::Individual,
            priority,
            is_active: true,
            company_ids,
            exclusions: vec![],
            subcategory_limits: vec![],
        }
    }

    #[test]
    fn test_company_scope_beats_lower_priority_general() {
        let rules = vec![make_rule(1, 100, vec![]), make_rule(2, 200, vec![42])];
        let winner = resolve_order_rule(&rules, &make_user(42), OrderRuleType::SubcategoryExclusion);
        assert_eq!(winner.map(|r| r.id), Some(2));
    }

    #[test]
    fn test_general_rule_when_company_not_listed() {
        let rules = vec![make_rule(1, 100, vec![]), make_rule(2, 1, vec![7])];
        let winner = resolve_order_rule(&rules, &make_user(42), OrderRuleType::SubcategoryExclusion);
        assert_eq!(winner.map(|r| r.id), Some(1));
    }

    #[test]
    fn test_lowest_priority_wins_within_scope() {
        let rules = vec![
            make_rule(1, 50, vec![42]),
            make_rule(2, 10, vec![42, 43]),
            make_rule(3, 30, vec![42]),
        ];
        let winner = resolve_order_rule(&rules, &make_user(42), OrderRuleType::SubcategoryExclusion);
        assert_eq!(winner.map(|r| r.id), Some(2));
    }

    #[test]
    fn test_priority_tie_goes_to_lowest_id() {
        let rules = vec![
            make_rule(9, 100, vec![]),
            make_rule(4, 100, vec![]),
            make_rule(6, 100, vec![]),
        ];
        let winner = resolve_order_rule(&rules, &make_user(42), OrderRuleType::SubcategoryExclusion);
        assert_eq!(winner.map(|r| r.id), Some(4));
    }

    #[test]
    fn test_inactive_and_mismatched_rules_are_skipped() {
        let mut inactive = make_rule(1, 1, vec![42]);
        inactive.is_active = false;

        let mut other_type = make_rule(2, 1, vec![42]);
        other_type.rule_type = OrderRuleType::ProductLimitPerSubcategory;

        let mut other_permission = make_rule(3, 1, vec![42]);
        other_permission.permission = PermissionName::Consolidated;

        let fallback = make_rule(4, 500, vec![]);

        let rules = vec![inactive, other_type, other_permission, fallback];
        let winner = resolve_order_rule(&rules, &make_user(42), OrderRuleType::SubcategoryExclusion);
        assert_eq!(winner.map(|r| r.id), Some(4));
    }

    #[test]
    fn test_user_without_access_gets_nothing() {
        let rules = vec![make_rule(1, 100, vec![])];
        let mut user = make_user(42);
        user.permission = None;
        assert!(resolve_order_rule(&rules, &user, OrderRuleType::SubcategoryExclusion).is_none());
    }
}

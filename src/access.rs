//! Role-based access resolution.
//!
//! All role gating funnels through two functions: [`role_permissions`], which
//! resolves a role to its per-module CRUD bundle, and
//! [`can_view_purchaser_only_doc`], the one document-level predicate. Both
//! are advisory; they decide what the client renders, not what the server
//! will actually serve.

use crate::types::{ModuleActions, Permission, Property, Role, User};

/// Resolve a role to its permission bundle.
pub fn role_permissions(role: Role) -> Permission {
    match role {
        Role::Admin | Role::Owner => Permission::full(role.as_str()),

        Role::Agent => Permission {
            properties: ModuleActions::read_only(),
            units: ModuleActions::read_only(),
            commissions: ModuleActions::read_only(),
            leads: ModuleActions {
                create: true,
                read: true,
                update: true,
                delete: false,
            },
            ..Permission::empty("agent")
        },

        Role::Contractor => Permission {
            units: ModuleActions::read_only(),
            invoices: ModuleActions::read_only(),
            ..Permission::empty("contractor")
        },

        Role::Customer => Permission {
            properties: ModuleActions::read_only(),
            invoices: ModuleActions::read_only(),
            ..Permission::empty("customer")
        },

        Role::Accountant => Permission {
            invoices: ModuleActions::read_only(),
            payments: ModuleActions::read_only(),
            budget: ModuleActions::read_only(),
            ..Permission::empty("accountant")
        },
    }
}

/// Whether `user` may see a property's purchaser-only documents.
///
/// Admins and owners always may; a customer only when the property records
/// them as its purchaser. Everyone else (and no user at all) may not.
pub fn can_view_purchaser_only_doc(user: Option<&User>, property: &Property) -> bool {
    let Some(user) = user else {
        return false;
    };

    match user.role {
        Role::Admin | Role::Owner => true,
        Role::Customer => property
            .purchased_customer_id
            .as_deref()
            .is_some_and(|id| !id.is_empty() && id == user.id),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, Facing, Module, RegistrationStatus};

    fn property(purchased_customer_id: Option<&str>) -> Property {
        Property {
            id: "p1".to_string(),
            project_number: String::new(),
            plot_number: String::new(),
            facing: Facing::East,
            status: RegistrationStatus::Registered,
            total_amount: 0,
            amount_received: 0,
            balance_amount: 0,
            purchased_customer_id: purchased_customer_id.map(str::to_string),
            building_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_no_user_sees_nothing() {
        assert!(!can_view_purchaser_only_doc(None, &property(Some("u1"))));
        assert!(!can_view_purchaser_only_doc(None, &property(None)));
    }

    #[test]
    fn test_admin_and_owner_always_see_docs() {
        for role in [Role::Admin, Role::Owner] {
            let user = User::local("anyone".to_string(), role);
            assert!(can_view_purchaser_only_doc(Some(&user), &property(None)));
            assert!(can_view_purchaser_only_doc(
                Some(&user),
                &property(Some("someone-else"))
            ));
        }
    }

    #[test]
    fn test_customer_sees_only_their_own() {
        let user = User::local("u1".to_string(), Role::Customer);
        assert!(can_view_purchaser_only_doc(Some(&user), &property(Some("u1"))));
        assert!(!can_view_purchaser_only_doc(
            Some(&user),
            &property(Some("u2"))
        ));
        assert!(!can_view_purchaser_only_doc(Some(&user), &property(None)));
        assert!(!can_view_purchaser_only_doc(Some(&user), &property(Some(""))));
    }

    #[test]
    fn test_other_roles_never_see_docs() {
        for role in [Role::Agent, Role::Contractor, Role::Accountant] {
            let user = User::local("u1".to_string(), role);
            assert!(!can_view_purchaser_only_doc(
                Some(&user),
                &property(Some("u1"))
            ));
        }
    }

    #[test]
    fn test_admin_permissions_are_full() {
        let p = role_permissions(Role::Admin);
        assert!(p.allows(Module::Units, Action::Delete));
        assert!(p.allows(Module::Customers, Action::Read));
    }

    #[test]
    fn test_agent_permissions() {
        let p = role_permissions(Role::Agent);
        assert!(p.allows(Module::Leads, Action::Create));
        assert!(p.allows(Module::Commissions, Action::Read));
        assert!(!p.allows(Module::Leads, Action::Delete));
        assert!(!p.allows(Module::Payments, Action::Read));
        assert!(!p.allows(Module::Units, Action::Update));
    }

    #[test]
    fn test_contractor_permissions() {
        let p = role_permissions(Role::Contractor);
        assert!(p.allows(Module::Invoices, Action::Read));
        assert!(!p.allows(Module::Invoices, Action::Create));
        assert!(!p.allows(Module::Customers, Action::Read));
    }

    #[test]
    fn test_accountant_permissions() {
        let p = role_permissions(Role::Accountant);
        assert!(p.allows(Module::Payments, Action::Read));
        assert!(p.allows(Module::Budget, Action::Read));
        assert!(!p.allows(Module::Units, Action::Read));
    }
}

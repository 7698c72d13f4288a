use serde::{Deserialize, Serialize};

/// Portal modules that permissions are granted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Properties,
    Units,
    Customers,
    Invoices,
    Payments,
    Commissions,
    Leads,
    Budget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

/// CRUD flags for one module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleActions {
    pub create: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
}

impl ModuleActions {
    pub const fn all() -> Self {
        Self {
            create: true,
            read: true,
            update: true,
            delete: true,
        }
    }

    pub const fn read_only() -> Self {
        Self {
            create: false,
            read: true,
            update: false,
            delete: false,
        }
    }

    pub const fn none() -> Self {
        Self {
            create: false,
            read: false,
            update: false,
            delete: false,
        }
    }

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Create => self.create,
            Action::Read => self.read,
            Action::Update => self.update,
            Action::Delete => self.delete,
        }
    }
}

/// A named bundle of per-module CRUD flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub name: String,
    pub properties: ModuleActions,
    pub units: ModuleActions,
    pub customers: ModuleActions,
    pub invoices: ModuleActions,
    pub payments: ModuleActions,
    pub commissions: ModuleActions,
    pub leads: ModuleActions,
    pub budget: ModuleActions,
}

impl Permission {
    /// Every flag set, under the given bundle name.
    pub fn full(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: ModuleActions::all(),
            units: ModuleActions::all(),
            customers: ModuleActions::all(),
            invoices: ModuleActions::all(),
            payments: ModuleActions::all(),
            commissions: ModuleActions::all(),
            leads: ModuleActions::all(),
            budget: ModuleActions::all(),
        }
    }

    /// No flag set.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: ModuleActions::none(),
            units: ModuleActions::none(),
            customers: ModuleActions::none(),
            invoices: ModuleActions::none(),
            payments: ModuleActions::none(),
            commissions: ModuleActions::none(),
            leads: ModuleActions::none(),
            budget: ModuleActions::none(),
        }
    }

    /// The single predicate views consult.
    pub fn allows(&self, module: Module, action: Action) -> bool {
        let actions = match module {
            Module::Properties => self.properties,
            Module::Units => self.units,
            Module::Customers => self.customers,
            Module::Invoices => self.invoices,
            Module::Payments => self.payments,
            Module::Commissions => self.commissions,
            Module::Leads => self.leads,
            Module::Budget => self.budget,
        };
        actions.allows(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_allows_everything() {
        let p = Permission::full("admin");
        assert!(p.allows(Module::Units, Action::Delete));
        assert!(p.allows(Module::Budget, Action::Read));
    }

    #[test]
    fn test_empty_allows_nothing() {
        let p = Permission::empty("guest");
        assert!(!p.allows(Module::Properties, Action::Read));
    }

    #[test]
    fn test_module_actions_matrix() {
        let actions = ModuleActions {
            create: true,
            read: true,
            update: false,
            delete: false,
        };
        assert!(actions.allows(Action::Create));
        assert!(actions.allows(Action::Read));
        assert!(!actions.allows(Action::Update));
        assert!(!actions.allows(Action::Delete));
    }
}

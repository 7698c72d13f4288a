use serde::{Deserialize, Serialize};

/// Portal ids are backend-issued opaque strings.
pub type Id = String;

/// Roles the portal recognizes.
///
/// The role only selects what the client *renders*; the server enforces
/// what is actually fetchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Owner,
    Agent,
    Contractor,
    Customer,
    Accountant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Agent => "agent",
            Role::Contractor => "contractor",
            Role::Customer => "customer",
            Role::Accountant => "accountant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "owner" => Ok(Role::Owner),
            "agent" => Ok(Role::Agent),
            "contractor" => Ok(Role::Contractor),
            "customer" => Ok(Role::Customer),
            "accountant" => Ok(Role::Accountant),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// A portal user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
}

impl User {
    /// A minimal identity for client-side rendering decisions, built from
    /// config rather than a fetched account.
    pub fn local(id: Id, role: Role) -> Self {
        Self {
            id,
            name: String::new(),
            email: None,
            phone: None,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("owner".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("agent".parse::<Role>().unwrap(), Role::Agent);
        assert_eq!("contractor".parse::<Role>().unwrap(), Role::Contractor);
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert_eq!("accountant".parse::<Role>().unwrap(), Role::Accountant);
    }

    #[test]
    fn test_role_from_str_case_insensitive() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("CUSTOMER".parse::<Role>().unwrap(), Role::Customer);
    }

    #[test]
    fn test_role_from_str_invalid() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_roundtrip() {
        for role in [
            Role::Admin,
            Role::Owner,
            Role::Agent,
            Role::Contractor,
            Role::Customer,
            Role::Accountant,
        ] {
            let s = role.as_str();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_user_wire_shape() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "name": "Asha", "role": "customer"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Customer);
        assert!(user.email.is_none());
    }
}

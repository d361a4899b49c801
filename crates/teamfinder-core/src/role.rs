//! Team roles shared by achievements and hackathon applications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TeamfinderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Backend,
    Frontend,
    Fullstack,
    Data,
    Product,
    Designer,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Backend,
        Role::Frontend,
        Role::Fullstack,
        Role::Data,
        Role::Product,
        Role::Designer,
    ];

    /// Wire value, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Backend => "Backend",
            Role::Frontend => "Frontend",
            Role::Fullstack => "Fullstack",
            Role::Data => "Data",
            Role::Product => "Product",
            Role::Designer => "Designer",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Data => "Data / ML",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TeamfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TeamfinderError::validation(format!("unknown role '{}'", wanted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("backend".parse::<Role>().unwrap(), Role::Backend);
        assert_eq!(" DATA ".parse::<Role>().unwrap(), Role::Data);
        assert!("astronaut".parse::<Role>().unwrap_err().is_validation());
    }

    #[test]
    fn test_label() {
        assert_eq!(Role::Data.label(), "Data / ML");
        assert_eq!(Role::Designer.label(), "Designer");
    }
}

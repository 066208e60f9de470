use crate::error::SetupError;
use std::env;

pub const EMAIL_VAR: &str = "FAUNA_TEST_EMAIL";
pub const PASSWORD_VAR: &str = "FAUNA_TEST_PASSWORD";

/// Account credentials validated from the process environment.
///
/// Never persisted by this tool; they live only for the duration of the run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub email: String,
    pub password: String,
}

impl Settings {
    /// Read both credential variables from the process environment.
    ///
    /// An absent or empty variable is reported as [`SetupError::MissingCredentials`]
    /// naming the first offending variable.
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SetupError> {
        let email = Self::require(&lookup, EMAIL_VAR)?;
        let password = Self::require(&lookup, PASSWORD_VAR)?;
        Ok(Self { email, password })
    }

    fn require(lookup: impl Fn(&str) -> Option<String>, name: &'static str) -> Result<String, SetupError> {
        match lookup(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(SetupError::MissingCredentials { missing: name }),
        }
    }
}

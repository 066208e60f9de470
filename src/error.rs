use crate::fauna::error::ApiError;
use thiserror::Error;

/// Exit code when required credentials are absent from the environment.
pub const EXIT_MISSING_CREDENTIALS: u8 = 1;
/// Exit code when the HTTP client stack cannot be initialized.
pub const EXIT_MISSING_DEPENDENCY: u8 = 2;

/// Failures with a dedicated exit code, caught before the provisioning run starts.
///
/// Everything that goes wrong after this point (network, authorization, malformed
/// responses, file writes) propagates as an `anyhow` chain and terminates with the
/// default failure status instead.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Fauna account not configured: {missing} must be defined in the environment")]
    MissingCredentials { missing: &'static str },
    #[error("failed to initialize the Fauna HTTP client")]
    MissingDependency(#[source] ApiError),
}

impl SetupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::MissingCredentials { .. } => EXIT_MISSING_CREDENTIALS,
            SetupError::MissingDependency(_) => EXIT_MISSING_DEPENDENCY,
        }
    }
}

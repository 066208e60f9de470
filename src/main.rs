use clap::Parser;
use fauna_bootstrap::config::{EMAIL_VAR, PASSWORD_VAR, Settings};
use fauna_bootstrap::credentials::DEFAULT_CREDENTIALS_FILE;
use fauna_bootstrap::error::SetupError;
use fauna_bootstrap::fauna::http::HttpClient;
use fauna_bootstrap::{CRATE_NAME, DEFAULT_API_URL, bootstrap};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

const ENV_FILTER_NAME: &str = "FAUNA_BOOTSTRAP_LOG";

#[derive(Debug, Parser)]
#[command(version, about, long_about = "")]
struct CommandLineArguments {
    /// Path of the credentials header to write
    #[arg(default_value = DEFAULT_CREDENTIALS_FILE)]
    output: PathBuf,
    /// Base URL of the REST API (only useful when testing against a local mock)
    #[arg(long, env = "FAUNA_API_URL", hide = true, default_value = DEFAULT_API_URL)]
    api_url: Url,
    /// Shorthand option to enable debug logging (logging can be fine-tuned via `FAUNA_BOOTSTRAP_LOG` environment variable)
    #[clap(long, short, action)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // The HTTP stack is checked before the argument list or any environment
    // variable is consulted; without it there is nothing this tool can do
    let http_client = match HttpClient::try_new() {
        Ok(http_client) => http_client,
        Err(e) => {
            let err = SetupError::MissingDependency(e);
            eprintln!(">> Could not initialize the Fauna HTTP client: {err}");
            eprintln!(">> This usually indicates a broken TLS installation on this machine.");
            return ExitCode::from(err.exit_code());
        }
    };

    let cli = CommandLineArguments::parse();
    let filter = EnvFilter::try_from_env(ENV_FILTER_NAME).unwrap_or_else(|_| {
        EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "fauna_bootstrap=debug,info" } else { "info" }))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!(">> Fauna account not configured.");
            eprintln!(">> {EMAIL_VAR} and {PASSWORD_VAR} must be defined in your environment to run tests.");
            eprintln!(">> One option is to start Xcode with:");
            eprintln!(">> $ env {EMAIL_VAR}=<email> {PASSWORD_VAR}=<pass> open Fauna-iOS.xcworkspace");
            return ExitCode::from(err.exit_code());
        }
    };
    info!("Using Fauna account {} for fauna-ios tests", settings.email);

    match bootstrap::run(settings, cli.api_url, &cli.output, http_client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{CRATE_NAME} failed: {err:?}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CommandLineArguments::command().debug_assert();
    }

    #[test]
    fn test_output_path_defaults_to_fixed_filename() {
        let cli = CommandLineArguments::parse_from(["fauna-bootstrap"]);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_CREDENTIALS_FILE));
    }

    #[test]
    fn test_explicit_output_path_is_used_verbatim() {
        let cli = CommandLineArguments::parse_from(["fauna-bootstrap", "Support/TestCredentials.h"]);
        assert_eq!(cli.output, PathBuf::from("Support/TestCredentials.h"));
    }
}

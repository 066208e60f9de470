use crate::config::Settings;
use crate::credentials::CredentialsFile;
use crate::fauna::client::{FaunaClient, SessionAuth};
use crate::fauna::http::HttpClient;
use crate::fauna::object::KeyRole;
use crate::schema::SchemaDefinition;
use anyhow::Context;
use std::path::Path;
use tracing::{info, warn};
use url::Url;

/// Run the whole bootstrap: reset the account, mint both keys, apply the schema,
/// write the credentials header.
///
/// Strictly sequential with no retries. The reset is irreversible; a failure after
/// [`FaunaClient::delete_everything`] leaves the remote account emptied with no keys
/// issued, and the caller gets the error unchanged.
pub async fn run(settings: Settings, api_url: Url, output: &Path, http_client: HttpClient) -> anyhow::Result<()> {
    let root = FaunaClient::builder(
        api_url,
        SessionAuth::Root {
            email: settings.email,
            password: settings.password,
        },
    )
    .with_http_client(http_client)
    .try_build()
    .context("Failed to create root session")?;

    warn!("Deleting all existing data under the account's root path");
    root.delete_everything()
        .await
        .context("Failed to reset the account")?;

    let publisher_key = root
        .create_key(KeyRole::Publisher)
        .await
        .context("Failed to create publisher key")?;
    info!("Added publisher key {}", publisher_key.secret);
    let client_key = root
        .create_key(KeyRole::Client)
        .await
        .context("Failed to create client key")?;
    info!("Added client key {}", client_key.secret);

    // Schema changes run under the publisher key, not the root session
    let publisher = root
        .with_auth(SessionAuth::Key(publisher_key.secret.clone()))
        .context("Failed to create publisher session")?;
    SchemaDefinition::chat()
        .apply(&publisher)
        .await
        .context("Failed to migrate schema")?;

    info!("Writing credentials file {}", output.display());
    CredentialsFile::new(publisher_key.secret, client_key.secret)
        .write_to(output)
        .with_context(|| format!("Failed to write credentials file {}", output.display()))?;
    Ok(())
}

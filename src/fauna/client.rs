use crate::fauna::error::{ApiError, ApiResult};
use crate::fauna::http::HttpClient;
use crate::fauna::object::{ApiKey, ClassConfig, KeyResource, KeyRole, ResourceEnvelope};
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use reqwest::StatusCode;
use reqwest::header::HeaderValue;
use url::Url;

/// Credentials for one session against the REST service.
///
/// Both variants map to HTTP basic authentication: a root session sends
/// `email:password`, a key session sends the key secret as the username with an
/// empty password.
#[derive(Debug, Clone)]
pub enum SessionAuth {
    Root { email: String, password: String },
    Key(String),
}

impl SessionAuth {
    fn header_value(&self) -> ApiResult<HeaderValue> {
        let raw = match self {
            SessionAuth::Root { email, password } => format!("{email}:{password}"),
            SessionAuth::Key(secret) => format!("{secret}:"),
        };
        let encoded = BASE64_STANDARD.encode(raw);
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|_| ApiError::ProtocolViolation("credentials contain bytes not allowed in an HTTP header"))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

pub struct FaunaClientBuilder {
    api_url: Url,
    auth: SessionAuth,
    http_client: Option<HttpClient>,
}

impl FaunaClientBuilder {
    pub fn new(api_url: Url, auth: SessionAuth) -> FaunaClientBuilder {
        Self {
            api_url,
            auth,
            http_client: None,
        }
    }

    #[must_use]
    pub fn with_http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn try_build(self) -> ApiResult<FaunaClient> {
        let http_client = match self.http_client {
            Some(http_client) => http_client,
            None => HttpClient::try_new()?,
        };
        let mut api_url = self.api_url;
        // Relative endpoint paths drop the last segment of a base URL without a
        // trailing slash
        if !api_url.path().ends_with('/') {
            api_url.set_path(&format!("{}/", api_url.path()));
        }
        Ok(FaunaClient {
            auth: self.auth.header_value()?,
            http_client,
            api_url,
        })
    }
}

/// An authenticated session against the REST service.
#[derive(Debug)]
pub struct FaunaClient {
    http_client: HttpClient,
    api_url: Url,
    auth: HeaderValue,
}

impl FaunaClient {
    pub fn builder(api_url: Url, auth: SessionAuth) -> FaunaClientBuilder {
        FaunaClientBuilder::new(api_url, auth)
    }

    /// Derive a new session with different credentials, reusing the same connection pool.
    pub fn with_auth(&self, auth: SessionAuth) -> ApiResult<FaunaClient> {
        Ok(FaunaClient {
            http_client: self.http_client.clone(),
            api_url: self.api_url.clone(),
            auth: auth.header_value()?,
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.api_url.join(path)?)
    }

    /// Delete every resource under the account's root path.
    ///
    /// Destructive and irreversible: all prior data and all previously issued keys
    /// are invalidated by this call.
    pub async fn delete_everything(&self) -> ApiResult<()> {
        let url = self.endpoint("everything")?;
        let response = self.http_client.delete(url, &self.auth).await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Create a new API key with the given scope and return its secret.
    pub async fn create_key(&self, role: KeyRole) -> ApiResult<ApiKey> {
        let url = self.endpoint(&format!("keys/{role}"))?;
        let response = self.http_client.post(url, &self.auth, None::<&()>).await?;
        let response = Self::check(response).await?;
        let envelope: ResourceEnvelope<KeyResource> = response.json().await?;
        if envelope.resource.key.is_empty() {
            return Err(ApiError::ProtocolViolation("server returned an empty key secret"));
        }
        Ok(ApiKey {
            role,
            secret: envelope.resource.key,
        })
    }

    /// Replace the configuration of a class, creating the class if necessary.
    pub async fn update_class_config(&self, class_name: &str, config: &ClassConfig) -> ApiResult<()> {
        let url = self.endpoint(&format!("classes/{class_name}/config"))?;
        let response = self.http_client.put(url, &self.auth, config).await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(response),
            _ => Err(ApiError::get_error_from_http(response).await),
        }
    }
}

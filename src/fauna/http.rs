use crate::fauna::error::ApiResult;
use reqwest::header::HeaderValue;
use reqwest::{ClientBuilder, Method, Response};
use serde::Serialize;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " reqwest/",
    env!("REQWEST_VERSION")
);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(120);

/// Thin wrapper around reqwest with the connection settings shared by every session.
///
/// Authentication is per-request: each call takes the precomputed `Authorization`
/// header of the session issuing it.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn try_new() -> ApiResult<Self> {
        let client_builder = ClientBuilder::new()
            // The service only speaks HTTPS, except for test runs against a local mock
            .https_only(!cfg!(test))
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            // Make TRACE logs available for test or debug builds (still needs to be enabled separately)
            .connection_verbose(cfg!(any(test, debug_assertions)));
        Ok(Self {
            client: client_builder.build()?,
        })
    }

    pub async fn delete(&self, url: Url, auth: &HeaderValue) -> ApiResult<Response> {
        self.execute(Method::DELETE, url, auth, None::<&()>).await
    }

    pub async fn post<T: Serialize>(&self, url: Url, auth: &HeaderValue, body: Option<&T>) -> ApiResult<Response> {
        self.execute(Method::POST, url, auth, body).await
    }

    pub async fn put<T: Serialize>(&self, url: Url, auth: &HeaderValue, body: &T) -> ApiResult<Response> {
        self.execute(Method::PUT, url, auth, Some(body)).await
    }

    async fn execute<T: Serialize>(
        &self,
        method: Method,
        url: Url,
        auth: &HeaderValue,
        body: Option<&T>,
    ) -> ApiResult<Response> {
        let mut request_builder = self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, auth.clone());
        if let Some(body) = body {
            request_builder = request_builder.json(body);
        }
        let request = request_builder.build()?;
        Ok(self.client.execute(request).await?)
    }
}

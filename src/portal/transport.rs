//! Shared HTTP transport for the portal API.
//!
//! Every request goes through here: one configured origin, cookie
//! credentials on every call, and a single place that unwraps the response
//! envelope and maps status codes. Resource modules never touch reqwest
//! directly.

use reqwest::multipart::Form;
use reqwest::{Client, Response, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::error::PortalError;

const USER_AGENT: &str = concat!("estate-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP transport bound to one portal origin.
pub struct Transport {
    client: Client,
    base_url: Url,
}

impl Transport {
    /// Build a transport for the given origin, attaching the session cookie
    /// to every request when one is configured.
    pub fn new(base_url: &str, session: Option<&SecretString>) -> Result<Self, PortalError> {
        let base_url = Url::parse(base_url)?;

        let mut headers = header::HeaderMap::new();
        if let Some(session) = session {
            let cookie = format!("session={}", session.expose_secret());
            let mut value = header::HeaderValue::from_str(&cookie)
                .map_err(|_| PortalError::InvalidSession)?;
            value.set_sensitive(true);
            headers.insert(header::COOKIE, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// GET a list endpoint. A missing or null `data` field is an empty list,
    /// not an error.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, PortalError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        decode_list(check(response).await?)
    }

    /// GET a single-object endpoint.
    pub async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, PortalError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        decode_one(path, check(response).await?)
    }

    /// POST a multipart form, returning the created object.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, PortalError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST multipart");
        let response = self.client.post(url).multipart(form).send().await?;
        decode_one(path, check(response).await?)
    }

    /// PATCH a multipart form, returning the updated object.
    pub async fn patch_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, PortalError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "PATCH multipart");
        let response = self.client.patch(url).multipart(form).send().await?;
        decode_one(path, check(response).await?)
    }

    /// DELETE an object. The body is discarded once the status checks out.
    pub async fn delete(&self, path: &str) -> Result<(), PortalError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "DELETE");
        let response = self.client.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, PortalError> {
        Ok(self.base_url.join(path)?)
    }
}

/// Map status codes once, then parse the body as JSON.
async fn check(response: Response) -> Result<Value, PortalError> {
    let status = response.status();
    match status {
        s if s.is_success() => Ok(response.json().await?),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PortalError::Unauthorized),
        StatusCode::NOT_FOUND => Err(PortalError::NotFound(response.url().path().to_string())),
        StatusCode::TOO_MANY_REQUESTS => Err(PortalError::RateLimited),
        s => Err(PortalError::Status(s.as_u16())),
    }
}

/// The portal wraps payloads as `{data: T}` and on some endpoints
/// `{data: {data: T}}`. Peel up to two layers here so resource modules never
/// special-case shapes. Raw (unwrapped) bodies pass through untouched.
fn peel_envelope(mut body: Value) -> Value {
    for _ in 0..2 {
        match body {
            Value::Object(ref mut map) if map.contains_key("data") => {
                body = map.remove("data").unwrap_or(Value::Null);
            }
            _ => break,
        }
    }
    body
}

fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, PortalError> {
    match peel_envelope(body) {
        Value::Null => Ok(Vec::new()),
        value => Ok(serde_json::from_value(value)?),
    }
}

fn decode_one<T: DeserializeOwned>(path: &str, body: Value) -> Result<T, PortalError> {
    match peel_envelope(body) {
        Value::Null => Err(PortalError::NotFound(path.to_string())),
        value => Ok(serde_json::from_value(value)?),
    }
}

use reqwest::{Client, Method, RequestBuilder, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, info};

use crate::config::{Credentials, HarvestConfig};
use crate::error::{ConfigError, HarvestError, Result};

pub const ACCOUNT_ID_HEADER: &str = "harvest-account-id";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a client that sends the Harvest credentials with every request.
pub fn harvest_client_init(credentials: &Credentials) -> std::result::Result<Client, ConfigError> {
    info!("Initializing Harvest client");

    let mut bearer = header::HeaderValue::from_str(&format!("Bearer {}", credentials.api_token))
        .map_err(|source| {
            error!("Failed to create Authorization header value: {}", source);
            ConfigError::InvalidHeader {
                name: "Authorization",
                source,
            }
        })?;
    bearer.set_sensitive(true);

    let account_id = header::HeaderValue::from_str(&credentials.account_id).map_err(|source| {
        error!("Failed to create account id header value: {}", source);
        ConfigError::InvalidHeader {
            name: "Harvest-Account-ID",
            source,
        }
    })?;

    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, bearer);
    headers.insert(header::HeaderName::from_static(ACCOUNT_ID_HEADER), account_id);

    match Client::builder()
        .default_headers(headers)
        .user_agent(USER_AGENT)
        .build()
    {
        Ok(client) => {
            info!("Harvest client initialized successfully");
            Ok(client)
        }
        Err(e) => {
            error!("Failed to build Harvest client: {}", e);
            Err(ConfigError::Client(e))
        }
    }
}

/// Thin wrapper over the Harvest REST API.
#[derive(Clone)]
pub struct HarvestApi {
    client: Client,
    base_url: String,
}

impl HarvestApi {
    pub fn new(config: &HarvestConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            client: harvest_client_init(&config.credentials)?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path`, expecting `200 OK`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        info!("Get: {}", url);
        let request = self.client.get(&url);
        self.send(Method::GET, url, request, StatusCode::OK).await
    }

    /// POST a form-encoded `body` to `path`, expecting `201 Created`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        info!("Post: {}", url);
        let request = self.client.post(&url).form(body);
        self.send(Method::POST, url, request, StatusCode::CREATED).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> Result<T> {
        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Failed to send request to Harvest API: {}", e);
                return Err(HarvestError::Transport(e));
            }
        };

        let status = response.status();
        if status != expected {
            let error_text = response.text().await.unwrap_or_default();
            error!("Harvest API returned status {}: {}", status, error_text);
            let body = serde_json::from_str(&error_text)
                .unwrap_or(serde_json::Value::String(error_text));
            return Err(HarvestError::Request {
                method,
                url,
                status,
                body,
            });
        }

        let text = response.text().await?;
        debug!("Received {} bytes from {}", text.len(), url);

        match serde_json::from_str::<T>(&text) {
            Ok(value) => Ok(value),
            Err(source) => {
                error!("Failed to parse Harvest response: {}", source);
                error!("Raw response: {}", text);
                Err(HarvestError::Decode { url, source })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HarvestConfig {
        HarvestConfig::new(Credentials {
            account_id: "123456".into(),
            api_token: "token".into(),
        })
    }

    #[test]
    fn joins_paths_onto_base_url() {
        let api = HarvestApi::new(&config()).unwrap();
        assert_eq!(
            api.url("users/me.json"),
            "https://api.harvestapp.com/api/v2/users/me.json"
        );
    }

    #[test]
    fn rejects_credentials_that_are_not_header_safe() {
        let mut config = config();
        config.credentials.api_token = "bad\ntoken".into();
        let err = HarvestApi::new(&config).err().unwrap();
        assert!(matches!(
            err,
            ConfigError::InvalidHeader {
                name: "Authorization",
                ..
            }
        ));
    }
}

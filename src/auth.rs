//! Authentication credentials and request header resolution

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{ClientError, ClientResult};

/// Header carrying the API-key secret
pub const API_KEY_HEADER: &str = "x-api-key";
/// Header carrying the API client id
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Credentials presented to the Agent Monitor API
///
/// A bearer token and an API-key pair may both be configured; the token always wins.
/// The client id travels independently of whichever mode is active.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// JWT bearer token, usually obtained through `login`
    pub token: Option<String>,
    /// API-key secret sent as `X-API-KEY`
    pub client_secret: Option<String>,
    /// API client id sent as `X-Client-ID`
    pub client_id: Option<String>,
}

/// Which authentication header a request carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Bearer,
    ApiKey,
    None,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("client_id", &self.client_id)
            .finish()
    }
}

impl Credentials {
    /// Credentials holding only a bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Credentials holding an API-key pair
    pub fn api_key(client_secret: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            token: None,
            client_secret: Some(client_secret.into()),
            client_id: Some(client_id.into()),
        }
    }

    /// Active authentication mode, empty strings count as unset
    pub fn mode(&self) -> AuthMode {
        if non_empty(&self.token).is_some() {
            AuthMode::Bearer
        } else if non_empty(&self.client_secret).is_some() {
            AuthMode::ApiKey
        } else {
            AuthMode::None
        }
    }

    /// Resolve the headers for one request
    ///
    /// Always sets JSON `Content-Type` and `Accept`. Adds `Authorization: Bearer <token>`
    /// when a token is present, otherwise `X-API-KEY` when a secret is present.
    /// `X-Client-ID` is added whenever a client id is configured.
    pub fn headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        match self.mode() {
            AuthMode::Bearer => {
                let token = non_empty(&self.token).unwrap_or_default();
                headers.insert(
                    AUTHORIZATION,
                    header_value(&format!("Bearer {}", token), "bearer token")?,
                );
            }
            AuthMode::ApiKey => {
                let secret = non_empty(&self.client_secret).unwrap_or_default();
                headers.insert(
                    HeaderName::from_static(API_KEY_HEADER),
                    header_value(secret, "API key")?,
                );
            }
            AuthMode::None => {}
        }

        if let Some(client_id) = non_empty(&self.client_id) {
            headers.insert(
                HeaderName::from_static(CLIENT_ID_HEADER),
                header_value(client_id, "client id")?,
            );
        }

        Ok(headers)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn header_value(value: &str, what: &str) -> ClientResult<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| ClientError::config_error(format!("Invalid {}: {}", what, e)))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_sets_only_json_headers() {
        let headers = Credentials::default().headers().unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(headers.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_bearer_token_headers() {
        let headers = Credentials::bearer("jwt-token").headers().unwrap();

        assert_eq!(headers.get("authorization").unwrap(), "Bearer jwt-token");
        assert!(headers.get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_api_key_headers() {
        let headers = Credentials::api_key("secret", "client-1").headers().unwrap();

        assert_eq!(headers.get("x-api-key").unwrap(), "secret");
        assert_eq!(headers.get("x-client-id").unwrap(), "client-1");
        assert!(headers.get("authorization").is_none());
    }

    #[test]
    fn test_token_takes_priority_over_api_key() {
        let credentials = Credentials {
            token: Some("abc".to_string()),
            client_secret: Some("secret".to_string()),
            client_id: Some("client-1".to_string()),
        };
        let headers = credentials.headers().unwrap();

        assert_eq!(credentials.mode(), AuthMode::Bearer);
        assert_eq!(headers.get("authorization").unwrap(), "Bearer abc");
        assert!(headers.get("x-api-key").is_none());
        // client id is attached regardless of the active mode
        assert_eq!(headers.get("x-client-id").unwrap(), "client-1");
    }

    #[test]
    fn test_client_id_without_secret() {
        let credentials = Credentials {
            client_id: Some("client-1".to_string()),
            ..Default::default()
        };
        let headers = credentials.headers().unwrap();

        assert_eq!(credentials.mode(), AuthMode::None);
        assert!(headers.get("authorization").is_none());
        assert!(headers.get("x-api-key").is_none());
        assert_eq!(headers.get("x-client-id").unwrap(), "client-1");
    }

    #[test]
    fn test_empty_token_falls_back_to_api_key() {
        let credentials = Credentials {
            token: Some(String::new()),
            client_secret: Some("secret".to_string()),
            client_id: None,
        };

        assert_eq!(credentials.mode(), AuthMode::ApiKey);
        assert_eq!(
            credentials.headers().unwrap().get("x-api-key").unwrap(),
            "secret"
        );
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let err = Credentials::bearer("bad\ntoken").headers().unwrap_err();
        assert!(matches!(err, ClientError::ConfigError(_)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", Credentials::api_key("top-secret", "client-1"));

        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("client-1"));
    }
}

//! REST client for the catalog API.
//!
//! Wraps the four `/api/characters` endpoints using [`reqwest`]. Every
//! mutation returns the server's full post-mutation list.

use charcat_core::types::DbId;
use charcat_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use serde::Deserialize;

/// HTTP client for one catalog API server.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the catalog REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection refused, DNS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` message, or the raw body if it had none.
        message: String,
    },
}

/// Result of a successful create, update or delete.
#[derive(Debug, Clone, Deserialize)]
pub struct Mutation {
    /// Human-readable confirmation from the server.
    pub message: String,
    /// The full catalog after the mutation.
    pub characters: Vec<Character>,
}

#[derive(Deserialize)]
struct ListBody {
    #[serde(default)]
    characters: Vec<Character>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl CatalogClient {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/characters`.
    pub async fn list(&self) -> Result<Vec<Character>, ClientError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let body: ListBody = Self::parse_response(response).await?;
        Ok(body.characters)
    }

    /// `POST /api/characters`.
    pub async fn create(&self, input: &CreateCharacter) -> Result<Mutation, ClientError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /api/characters/{id}` with only the fields set in `input`.
    pub async fn update(&self, id: DbId, input: &UpdateCharacter) -> Result<Mutation, ClientError> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/characters/{id}`.
    pub async fn delete(&self, id: DbId) -> Result<Mutation, ClientError> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn collection_url(&self) -> String {
        format!("{}/api/characters", self.base_url)
    }

    fn record_url(&self, id: DbId) -> String {
        format!("{}/api/characters/{id}", self.base_url)
    }

    /// Turn a non-2xx response into [`ClientError::Api`], preferring the
    /// server's JSON `error` message over the raw body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.record_url(4), "http://localhost:3000/api/characters/4");
    }

    #[test]
    fn api_error_displays_server_message_and_status() {
        let err = ClientError::Api {
            status: 404,
            message: "Character with id 4 not found".into(),
        };
        assert_eq!(err.to_string(), "Character with id 4 not found (HTTP 404)");
    }
}

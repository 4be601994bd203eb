// SPDX-License-Identifier: MPL-2.0
//! Typed client for the coaching backend's REST API.
//!
//! Every call is a plain HTTP request with a JSON body and, when a token is
//! configured, a bearer `Authorization` header. Token issuance happens
//! elsewhere; this client only consumes one.

pub mod models;

use crate::error::{Error, Result};
use crate::library::Exercise;
use models::{Client, ClientIntake, CoachProfile, WorkoutPlan};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Backend base URL used when neither flag nor config provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Shared handle to the backend API. Cheap to clone (the inner
/// `reqwest::Client` is reference-counted), which lets async tasks own one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// `GET /api/clients/` answers either a bare array or a DRF page envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClientListResponse {
    Paged { results: Vec<Client> },
    Plain(Vec<Client>),
}

/// `GET /api/exercises/` wraps rows in a `{columns, count, items}` envelope.
#[derive(Debug, Deserialize)]
struct ExerciseListResponse {
    items: Vec<Exercise>,
}

impl ApiClient {
    /// Creates a client for the given base URL (trailing slash tolerated).
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Returns the configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether a bearer token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetches the signed-in coach's profile.
    pub async fn me(&self) -> Result<CoachProfile> {
        self.get_json("/api/auth/me/").await
    }

    /// Fetches all clients belonging to the signed-in coach.
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        let response: ClientListResponse = self.get_json("/api/clients/").await?;
        Ok(match response {
            ClientListResponse::Paged { results } => results,
            ClientListResponse::Plain(clients) => clients,
        })
    }

    /// Submits an intake form, creating a new client.
    pub async fn create_client(&self, intake: &ClientIntake) -> Result<Client> {
        let builder = self
            .http
            .post(self.url("/api/clients/"))
            .json(intake);
        self.execute(builder).await
    }

    /// Asks the backend to generate a workout plan for a client.
    ///
    /// With `save: false` the plan is a preview; with `save: true` the
    /// backend persists it.
    pub async fn generate_plan(&self, client_id: &str, save: bool) -> Result<WorkoutPlan> {
        let builder = self
            .http
            .get(self.url(&format!("/api/clients/{client_id}/plan/")))
            .query(&[("save", save)]);
        self.execute(builder).await
    }

    /// Fetches the full exercise library.
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        let response: ExerciseListResponse = self.get_json("/api/exercises/").await?;
        Ok(response.items)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.get(self.url(path));
        self.execute(builder).await
    }

    /// Attaches auth, sends, and maps non-success statuses to
    /// [`Error::Api`] with the backend's `detail` message when present.
    async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| format!("Request failed with status {status}"));
            return Err(Error::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let api = ApiClient::new("http://localhost:8000///", None);
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/api/clients/"), "http://localhost:8000/api/clients/");
    }

    #[test]
    fn client_list_accepts_bare_array() {
        let response: ClientListResponse = serde_json::from_str(
            r#"[{"id":"c-1","first_name":"A","last_name":"B","created_at":"2025-11-02T09:30:00Z"}]"#,
        )
        .unwrap();
        match response {
            ClientListResponse::Plain(clients) => assert_eq!(clients.len(), 1),
            ClientListResponse::Paged { .. } => panic!("expected plain list"),
        }
    }

    #[test]
    fn client_list_accepts_page_envelope() {
        let response: ClientListResponse = serde_json::from_str(
            r#"{"results":[{"id":"c-1","first_name":"A","last_name":"B","created_at":"2025-11-02T09:30:00Z"}]}"#,
        )
        .unwrap();
        match response {
            ClientListResponse::Paged { results } => assert_eq!(results.len(), 1),
            ClientListResponse::Plain(_) => panic!("expected page envelope"),
        }
    }

    #[test]
    fn exercise_list_unwraps_items_envelope() {
        let response: ExerciseListResponse = serde_json::from_str(
            r#"{"columns":["Exercise"],"count":1,"items":[{"Exercise":"Push-Up"}]}"#,
        )
        .unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Push-Up");
    }
}

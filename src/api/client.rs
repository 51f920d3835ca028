//! HTTP client for the content backend

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::constants::{self, actions, endpoints, params, post_action_path, post_path};
use super::{
    ApiError, ApproveRequest, Backend, ImprovePromptRequest, ImproveTextRequest, ImprovedText,
    PostQuery, PostUpdate, PublishRequest, ScheduleRequest,
};
use crate::model::{AiModel, Post, TargetChannel};

/// Blocking JSON client for `<api_url>/api`
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the backend at `api_url` (without the `/api` suffix)
    pub fn new(
        api_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(constants::CONNECT_TIMEOUT.min(timeout))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: format!("{}{}", api_url.trim_end_matches('/'), constants::API_PREFIX),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Base URL requests are sent to (ends in `/api`)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a JSON response
    fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(method, path, "sending request");

        let response = self
            .authorized(request)
            .send()
            .map_err(|e| ApiError::Request(describe_transport_error(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        debug!(method, path, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send("GET", path, request)
    }

    fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.url(path)).json(body);
        self.send("POST", path, request)
    }

    fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.client.put(self.url(path)).json(body);
        self.send("PUT", path, request)
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_connect() {
        format!("cannot connect to backend ({})", err)
    } else if err.is_timeout() {
        format!("request timed out ({})", err)
    } else {
        err.to_string()
    }
}

impl Backend for ApiClient {
    fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
        self.get(endpoints::POSTS, query)
    }

    fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.get(&post_path(id), &[] as &[(&str, &str)])
    }

    fn update_post(&self, id: i64, update: &PostUpdate) -> Result<Post, ApiError> {
        self.put(&post_path(id), update)
    }

    fn approve_post(&self, id: i64, request: &ApproveRequest) -> Result<Post, ApiError> {
        self.post(&post_action_path(id, actions::APPROVE), request)
    }

    fn schedule_post(&self, id: i64, request: &ScheduleRequest) -> Result<Post, ApiError> {
        self.post(&post_action_path(id, actions::SCHEDULE), request)
    }

    fn publish_post(&self, id: i64, request: &PublishRequest) -> Result<Post, ApiError> {
        self.post(&post_action_path(id, actions::PUBLISH), request)
    }

    fn classify_post(&self, id: i64) -> Result<Post, ApiError> {
        self.post(
            &post_action_path(id, actions::CLASSIFY),
            &serde_json::json!({}),
        )
    }

    fn improve_text(&self, request: &ImproveTextRequest) -> Result<ImprovedText, ApiError> {
        self.post(endpoints::IMPROVE_TEXT, request)
    }

    fn improve_text_with_prompt(
        &self,
        request: &ImprovePromptRequest,
    ) -> Result<ImprovedText, ApiError> {
        self.post(endpoints::IMPROVE_TEXT_WITH_PROMPT, request)
    }

    fn list_target_channels(&self, active_only: bool) -> Result<Vec<TargetChannel>, ApiError> {
        self.get(endpoints::TARGET_CHANNELS, &[(params::ACTIVE_ONLY, active_only)])
    }

    fn list_ai_models(&self, active_only: bool) -> Result<Vec<AiModel>, ApiError> {
        self.get(endpoints::AI_MODELS, &[(params::ACTIVE_ONLY, active_only)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_appends_api_prefix() {
        let client = ApiClient::new("http://localhost:8000/", None, Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/posts"), "http://localhost:8000/api/posts");
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client =
            ApiClient::new("http://localhost:8000", Some(String::new()), Duration::from_secs(5))
                .unwrap();
        assert!(client.token.is_none());
    }
}

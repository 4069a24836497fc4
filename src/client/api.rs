use crate::models::models::{
    AddInsightRequest, AuthResponse, CollectionRequest, CollectionResponse, InsightRequest,
    InsightResponse, LoginRequest, MessageResponse, ProfileResponse, RegisterRequest,
    UpdateProfileRequest, UserProfile,
};
use http::StatusCode;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub enum ClientError {
    Http(reqwest::Error),
    Api { status: StatusCode, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "HTTP error: {}", e),
            ClientError::Api { status, message } => write!(f, "API error ({}): {}", status, message),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Typed client for every InsightSync endpoint. Holds the bearer token
/// after a successful register or login.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Forgets the session token; the server keeps no session state.
    pub fn logout(&mut self) {
        self.token = None;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // Surface the server's {"error": ...} string; fall back to the
        // status text for anything unparseable.
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        Err(ClientError::Api { status, message })
    }

    // ---------- auth ----------

    pub async fn register(&mut self, payload: &RegisterRequest) -> Result<UserProfile, ClientError> {
        let response = self
            .request(Method::POST, "/api/auth/register")
            .json(payload)
            .send()
            .await?;
        let auth: AuthResponse = Self::handle(response).await?;
        self.token = Some(auth.token);
        Ok(auth.user)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, ClientError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/api/auth/login")
            .json(&payload)
            .send()
            .await?;
        let auth: AuthResponse = Self::handle(response).await?;
        self.token = Some(auth.token);
        Ok(auth.user)
    }

    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        let response = self.request(Method::GET, "/api/auth/me").send().await?;
        let profile: ProfileResponse = Self::handle(response).await?;
        Ok(profile.user)
    }

    pub async fn update_profile(
        &self,
        payload: &UpdateProfileRequest,
    ) -> Result<UserProfile, ClientError> {
        let response = self
            .request(Method::PUT, "/api/auth/profile")
            .json(payload)
            .send()
            .await?;
        let profile: ProfileResponse = Self::handle(response).await?;
        Ok(profile.user)
    }

    pub async fn user_profile(&self, username: &str) -> Result<UserProfile, ClientError> {
        let response = self
            .request(Method::GET, &format!("/api/auth/user/{}", username))
            .send()
            .await?;
        let profile: ProfileResponse = Self::handle(response).await?;
        Ok(profile.user)
    }

    // ---------- insights ----------

    pub async fn list_insights(&self) -> Result<Vec<InsightResponse>, ClientError> {
        let response = self.request(Method::GET, "/api/insights").send().await?;
        Self::handle(response).await
    }

    pub async fn my_insights(&self) -> Result<Vec<InsightResponse>, ClientError> {
        let response = self.request(Method::GET, "/api/insights/my").send().await?;
        Self::handle(response).await
    }

    pub async fn user_insights(&self, username: &str) -> Result<Vec<InsightResponse>, ClientError> {
        let response = self
            .request(Method::GET, &format!("/api/insights/user/{}", username))
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn create_insight(
        &self,
        payload: &InsightRequest,
    ) -> Result<InsightResponse, ClientError> {
        let response = self
            .request(Method::POST, "/api/insights")
            .json(payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn update_insight(
        &self,
        id: Uuid,
        payload: &InsightRequest,
    ) -> Result<InsightResponse, ClientError> {
        let response = self
            .request(Method::PUT, &format!("/api/insights/{}", id))
            .json(payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn delete_insight(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let response = self
            .request(Method::DELETE, &format!("/api/insights/{}", id))
            .send()
            .await?;
        Self::handle(response).await
    }

    // ---------- collections ----------

    pub async fn list_collections(&self) -> Result<Vec<CollectionResponse>, ClientError> {
        let response = self.request(Method::GET, "/api/collections").send().await?;
        Self::handle(response).await
    }

    pub async fn my_collections(&self) -> Result<Vec<CollectionResponse>, ClientError> {
        let response = self
            .request(Method::GET, "/api/collections/my")
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn public_collections(&self) -> Result<Vec<CollectionResponse>, ClientError> {
        let response = self
            .request(Method::GET, "/api/collections/public")
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn user_collections(
        &self,
        username: &str,
    ) -> Result<Vec<CollectionResponse>, ClientError> {
        let response = self
            .request(Method::GET, &format!("/api/collections/user/{}", username))
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn get_collection(&self, id: Uuid) -> Result<CollectionResponse, ClientError> {
        let response = self
            .request(Method::GET, &format!("/api/collections/{}", id))
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn create_collection(
        &self,
        payload: &CollectionRequest,
    ) -> Result<CollectionResponse, ClientError> {
        let response = self
            .request(Method::POST, "/api/collections")
            .json(payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn update_collection(
        &self,
        id: Uuid,
        payload: &CollectionRequest,
    ) -> Result<CollectionResponse, ClientError> {
        let response = self
            .request(Method::PUT, &format!("/api/collections/{}", id))
            .json(payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn delete_collection(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let response = self
            .request(Method::DELETE, &format!("/api/collections/{}", id))
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn add_collection_insight(
        &self,
        collection_id: Uuid,
        insight_id: Uuid,
    ) -> Result<CollectionResponse, ClientError> {
        let payload = AddInsightRequest { insight_id };
        let response = self
            .request(
                Method::POST,
                &format!("/api/collections/{}/insights", collection_id),
            )
            .json(&payload)
            .send()
            .await?;
        Self::handle(response).await
    }

    pub async fn remove_collection_insight(
        &self,
        collection_id: Uuid,
        insight_id: Uuid,
    ) -> Result<CollectionResponse, ClientError> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/api/collections/{}/insights/{}", collection_id, insight_id),
            )
            .send()
            .await?;
        Self::handle(response).await
    }
}

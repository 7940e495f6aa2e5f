//! HTTP client for the auth API.

use lahwita_shared::{
    ApiError, AuthResponse, LoginRequest, RegisterRequest, RegisterResponse,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON client for the REST backend. The bearer token is handed in by the
/// caller; the client never reads storage itself.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut rb = self
            .client
            .request(method, self.url(path))
            .header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            rb = rb.bearer_auth(token);
        }
        rb
    }

    /// Run a request and return the body of a 2xx response.
    async fn execute(&self, rb: RequestBuilder) -> Result<String, ApiError> {
        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }
        Ok(text)
    }

    async fn send<TRes: DeserializeOwned>(&self, rb: RequestBuilder) -> Result<TRes, ApiError> {
        let text = self.execute(rb).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body = serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;
        self.send(self.request(Method::POST, path).body(body)).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login/", &req).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json("/auth/register/", req).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, "/auth/logout/"))
            .await
            .map(|_| ())
    }

    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, "/auth/deleteaccount/"))
            .await
            .map(|_| ())
    }
}

//! Authentication and profile gateway.

use gradalyze_core::{Result, UserProfile};
use serde::{Deserialize, Serialize};

use crate::config::ApiClient;
use crate::http::ensure_success;

/// Thin client for the login/signup/profile endpoints.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    api: ApiClient,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    course: &'a str,
}

/// Credential exchange result: opaque bearer token plus the user profile.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

impl AuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .api
            .http()
            .post(self.api.url("/api/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let response = ensure_success(response, "Failed to log in").await?;
        Ok(response.json().await?)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        course: &str,
    ) -> Result<AuthResponse> {
        let response = self
            .api
            .http()
            .post(self.api.url("/api/signup"))
            .json(&SignupRequest {
                name,
                email,
                password,
                course,
            })
            .send()
            .await?;
        let response = ensure_success(response, "Failed to sign up").await?;
        Ok(response.json().await?)
    }

    /// Fetch a profile by email, including transcript pointers and the prior
    /// analysis snapshot blob.
    pub async fn profile_by_email(&self, email: &str) -> Result<UserProfile> {
        let response = self
            .api
            .http()
            .get(self.api.url(&format!("/api/profile/{email}")))
            .send()
            .await?;
        let response = ensure_success(response, "Failed to load profile").await?;
        Ok(response.json().await?)
    }
}

use crate::api::{decode, to_body};
use crate::client::{ApiwongClient, RequestOptions};
use crate::error::Result;
use crate::types::{
    LoginRequest, LoginResponse, RegisterRequest, RegisteredUser, UpdateProfileRequest, User,
};
use reqwest::Method;

impl ApiwongClient {
    /// Authenticate and return the issued token plus the user identity.
    ///
    /// The token is not stored automatically; call
    /// [`set_token`](ApiwongClient::set_token) to use it for later requests.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoginResponse> {
        let req = LoginRequest {
            username: username.into(),
            password: password.into(),
        };
        let value = self
            .request(
                "/api/auth/login",
                RequestOptions::default()
                    .method(Method::POST)
                    .body(to_body(&req)?),
            )
            .await?;
        decode(value)
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<RegisteredUser> {
        let value = self
            .request(
                "/api/auth/register",
                RequestOptions::default()
                    .method(Method::POST)
                    .body(to_body(req)?),
            )
            .await?;
        decode(value)
    }

    pub async fn profile(&self) -> Result<User> {
        let value = self
            .request("/api/auth/profile", RequestOptions::default())
            .await?;
        decode(value)
    }

    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<()> {
        self.request(
            "/api/auth/profile",
            RequestOptions::default()
                .method(Method::PUT)
                .body(to_body(req)?),
        )
        .await?;
        Ok(())
    }
}

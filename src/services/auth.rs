use crate::api::{self, ApiClient};
use crate::common::ApiError;
use crate::models::UserProfile;
use crate::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// Login, logout and registration against the API, keeping the stored
/// session (`token`, `role`) in step with the server.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Stores the token, then the role reported by `/auth/me`.
    ///
    /// If the profile lookup fails the token is discarded again so the
    /// session never holds a token without knowing its role.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::InvalidRequest("email and password are required".into()));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let LoginResponse { token } = self.client.send(api::auth::login(&request)?).await?;

        let session = self.client.session();
        session.clear();
        session.set_token(&token);

        match self.client.send::<UserProfile>(api::auth::me()).await {
            Ok(profile) => {
                session.set_role(&profile.role);
                log::info!("signed in as {} ({})", profile.email, profile.role);
                Ok(profile)
            }
            Err(e) => {
                session.clear();
                Err(e)
            }
        }
    }

    pub async fn register(&self, input: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        if input.email.trim().is_empty() || !input.email.contains('@') {
            return Err(ApiError::InvalidRequest("invalid email address".into()));
        }
        if input.password.is_empty() {
            return Err(ApiError::InvalidRequest("password is required".into()));
        }

        self.client.send(api::auth::register(input)?).await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.client.send(api::auth::me()).await
    }

    /// Always clears the local session; a failed server call is only logged.
    pub async fn logout(&self) {
        if self.client.session().load().is_authenticated() {
            if let Err(e) = self.client.send::<MessageResponse>(api::auth::logout()).await {
                log::error!("logout request failed: {}", e);
            }
        }
        self.client.session().clear();
    }
}

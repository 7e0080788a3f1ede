use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, Profile},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = Self::send(self.http_client().post(&url).json(request)).await?;
        Self::decode(response).await
    }

    /// Validates a stored token and returns the profile it belongs to.
    pub async fn get_me(&self, token: &str) -> Result<Profile, ApiError> {
        let url = self.endpoint("/auth/me").await;
        let response = Self::send(Self::authorized(self.http_client().get(&url), token)).await?;
        Self::decode(response).await
    }
}

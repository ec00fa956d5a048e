//! Typed backend endpoints

use super::{error::ClientError, ApiClient};
use portfolio_core::{
    DashboardResponse, LoginRequest, LoginResponse, PortfolioResponse, SignupRequest,
    SignupResponse,
};
use reqwest::Method;

impl ApiClient {
    /// Register a new account
    pub async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse, ClientError> {
        let request = self.request(Method::POST, "/api/signup").json(req);
        self.execute(request).await
    }

    /// Exchange credentials for a session token
    ///
    /// Wrong credentials come back as [`ClientError::Unauthorized`].
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let request = self.request(Method::POST, "/api/login").json(req);
        self.execute(request).await
    }

    /// Dashboard summary for the signed-in user (requires a token)
    pub async fn dashboard(&self) -> Result<DashboardResponse, ClientError> {
        let request = self.request(Method::GET, "/api/dashboard");
        self.execute(request).await
    }

    /// Stock holdings for the signed-in user (requires a token)
    pub async fn portfolio(&self) -> Result<PortfolioResponse, ClientError> {
        let request = self.request(Method::GET, "/api/portfolio");
        self.execute(request).await
    }
}

//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.
//! Registration also appends the new user to the feed store's directory
//! so they can immediately send and receive shoutouts.

use brag_common::auth::{hash_password, validate_password_strength, verify_password};
use brag_common::AppError;
use brag_core::{Snowflake, User};
use brag_store::Account;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before doing any work
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.accounts().email_exists(&request.email) {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let department = request.department.unwrap_or_default();
        let user = User::new(user_id, request.name.trim(), department.trim());

        self.ctx
            .feed()
            .write()
            .add_user(user.clone())
            .map_err(ServiceError::from)?;

        let account = Account::new(
            user_id,
            &request.email,
            password_hash,
            request.role.unwrap_or_default(),
        );
        self.ctx
            .accounts()
            .insert(account.clone())
            .map_err(|_| ServiceError::conflict("Email already registered"))?;

        info!(user_id = %user_id, "User registered successfully");

        self.issue_tokens(&user, &account)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let account = self
            .ctx
            .accounts()
            .find_by_email(&request.email)
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &account.password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !is_valid {
            warn!(user_id = %account.user_id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let user = self
            .ctx
            .feed()
            .read()
            .user(account.user_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("User", account.user_id.to_string()))?;

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user, &account)
    }

    /// Rotate tokens using a valid refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        let data = self
            .ctx
            .refresh_tokens()
            .validate(&request.refresh_token)
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let account = self
            .ctx
            .accounts()
            .find_by_user_id(data.user_id)
            .ok_or_else(|| ServiceError::not_found("User", data.user_id.to_string()))?;
        let user = self
            .ctx
            .feed()
            .read()
            .user(data.user_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("User", data.user_id.to_string()))?;

        // Rotation: the presented token is dead once it has been used
        self.ctx.refresh_tokens().revoke(&request.refresh_token);

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user, &account)
    }

    /// Logout by revoking one refresh token, or all of the user's sessions
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx.refresh_tokens().revoke(&token);
        } else {
            self.ctx.refresh_tokens().revoke_all_for_user(user_id);
        }

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Profile of the authenticated user
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let account = self
            .ctx
            .accounts()
            .find_by_user_id(user_id)
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
        let user = self
            .ctx
            .feed()
            .read()
            .user(user_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::new(&user, &account))
    }

    /// Generate a token pair, record the refresh session, build the response
    fn issue_tokens(&self, user: &User, account: &Account) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let session_id = Uuid::new_v4().to_string();
        self.ctx
            .refresh_tokens()
            .store(&token_pair.refresh_token, user.id, session_id);

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::new(user, account),
        ))
    }
}

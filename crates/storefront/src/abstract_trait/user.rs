use crate::{
    domain::{
        requests::{LoginRequest, RegisterUserRequest},
        responses::{LoginResponse, RegisterResponse},
    },
    model::User,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    /// Inserts the user or, when the email already exists, updates the stored
    /// profile and refreshes `last_login`.
    async fn save_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(&self, req: &RegisterUserRequest) -> Result<RegisterResponse, ServiceError>;
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ServiceError>;
}

use crate::{
    abstract_trait::{AuthServiceTrait, DynUserRepository},
    domain::{
        requests::{LoginRequest, RegisterUserRequest},
        responses::{LoginResponse, RegisterResponse, UserResponse},
    },
};
use async_trait::async_trait;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::ServiceError,
};
use tracing::info;

pub struct AuthService {
    users: DynUserRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(users: DynUserRepository, hashing: DynHashing, jwt: DynJwtService) -> Self {
        Self { users, hashing, jwt }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, req: &RegisterUserRequest) -> Result<RegisterResponse, ServiceError> {
        let password_hash = self.hashing.hash_password(&req.password).await?;

        let user = self
            .users
            .save_user(&req.email, &req.name, &password_hash)
            .await?;

        info!("✅ Registered user {}", user.email);

        Ok(RegisterResponse {
            success: true,
            user: UserResponse::from(user),
        })
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        let user = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await?;

        let token = self.jwt.generate_token(i64::from(user.id))?;

        info!("🔑 User {} logged in", user.email);

        Ok(LoginResponse {
            success: true,
            token,
            user: UserResponse::from(user),
        })
    }
}

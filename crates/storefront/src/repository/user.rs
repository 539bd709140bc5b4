use crate::{abstract_trait::UserRepositoryTrait, model::User};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};

pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn save_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
        INSERT INTO users (email, name, password, last_login)
        VALUES ($1, $2, $3, current_timestamp)
        ON CONFLICT (email) DO UPDATE
        SET name       = EXCLUDED.name,
            password   = EXCLUDED.password,
            last_login = current_timestamp
        RETURNING id, email, name, password, last_login, created_at
        "#,
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to save user {email}: {err:?}");
            RepositoryError::from_sqlx(err)
        })?;

        info!("✅ Saved user ID {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
        SELECT id, email, name, password, last_login, created_at
        FROM users
        WHERE email = $1
        "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to look up user {email}: {err:?}");
            RepositoryError::from_sqlx(err)
        })?;

        Ok(user)
    }
}

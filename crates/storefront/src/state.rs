use crate::di::{DependenciesInject, DependenciesInjectDeps};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{ConnectionPool, Hashing, JwtConfig},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl AppState {
    pub fn new(pool: ConnectionPool, jwt_secret: &str, gemini_api_key: String) -> Self {
        let jwt_config: DynJwtService = Arc::new(JwtConfig::new(jwt_secret));
        let hashing: DynHashing = Arc::new(Hashing::new());

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hashing,
            jwt: jwt_config.clone(),
            gemini_api_key,
        });

        Self {
            di_container,
            jwt_config,
        }
    }
}

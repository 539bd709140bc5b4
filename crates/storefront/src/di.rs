use crate::{
    abstract_trait::{
        DynAuthService, DynFavoriteRepository, DynFavoriteService, DynOrderCommandRepository,
        DynOrderQueryRepository, DynOrderService, DynOutfitAnalysisService, DynProductRepository,
        DynProductService, DynUserRepository,
    },
    repository::{
        FavoriteRepository, OrderCommandRepository, OrderQueryRepository, ProductRepository,
        UserRepository,
    },
    service::{AuthService, FavoriteService, OrderService, OutfitAnalysisService, ProductService},
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_service: DynProductService,
    pub favorite_service: DynFavoriteService,
    pub order_service: DynOrderService,
    pub analysis_service: DynOutfitAnalysisService,
    /// Exposed for the startup seeder.
    pub product_repository: DynProductRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("product_service", &"ProductService")
            .field("favorite_service", &"FavoriteService")
            .field("order_service", &"OrderService")
            .field("analysis_service", &"OutfitAnalysisService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
    pub gemini_api_key: String,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hashing,
            jwt,
            gemini_api_key,
        } = deps;

        let user_repository: DynUserRepository = Arc::new(UserRepository::new(pool.clone()));
        let product_repository: DynProductRepository =
            Arc::new(ProductRepository::new(pool.clone()));
        let favorite_repository: DynFavoriteRepository =
            Arc::new(FavoriteRepository::new(pool.clone()));
        let order_command: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let order_query: DynOrderQueryRepository = Arc::new(OrderQueryRepository::new(pool));

        let auth_service: DynAuthService =
            Arc::new(AuthService::new(user_repository, hashing, jwt));
        let product_service: DynProductService =
            Arc::new(ProductService::new(product_repository.clone()));
        let favorite_service: DynFavoriteService =
            Arc::new(FavoriteService::new(favorite_repository));
        let order_service: DynOrderService =
            Arc::new(OrderService::new(order_command, order_query));
        let analysis_service: DynOutfitAnalysisService =
            Arc::new(OutfitAnalysisService::new(gemini_api_key));

        Self {
            auth_service,
            product_service,
            favorite_service,
            order_service,
            analysis_service,
            product_repository,
        }
    }
}

mod analysis;
mod favorite;
mod order;
mod product;
mod user;

pub use self::analysis::{DynOutfitAnalysisService, OutfitAnalysisServiceTrait};
pub use self::favorite::{
    DynFavoriteRepository, DynFavoriteService, FavoriteRepositoryTrait, FavoriteServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynOrderService,
    OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::user::{AuthServiceTrait, DynAuthService, DynUserRepository, UserRepositoryTrait};

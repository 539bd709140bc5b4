mod analysis;
mod auth;
mod favorite;
mod order;
mod product;

pub use self::analysis::OutfitAnalysisService;
pub use self::auth::AuthService;
pub use self::favorite::FavoriteService;
pub use self::order::OrderService;
pub use self::product::ProductService;

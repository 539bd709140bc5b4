pub mod favorite;
pub mod order;
pub mod product;
pub mod user;

pub use self::favorite::FavoriteRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::ProductRepository;
pub use self::user::UserRepository;

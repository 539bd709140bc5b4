mod auth;
mod favorite;
mod order;
mod product;

pub use self::auth::{LoginRequest, RegisterUserRequest};
pub use self::favorite::CreateFavoriteRequest;
pub use self::order::{OrderHeaderRequest, OrderItemRequest, PlaceOrderRequest};
pub use self::product::{CreateProductRequest, FindProducts};

mod analysis;
mod favorite;
mod order;
mod product;
mod user;

pub use self::analysis::{AiAnalysis, StylingSuggestion, SuggestedCombination};
pub use self::favorite::CreateFavoriteResponse;
pub use self::order::{CreateOrderResponse, OrderDetailResponse, OrderItemResponse, OrderResponse};
pub use self::product::{ProductResponse, ProductsResponse};
pub use self::user::{LoginResponse, RegisterResponse, UserResponse};

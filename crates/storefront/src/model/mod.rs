mod favorite;
mod order;
mod order_item;
mod product;
mod user;

pub use self::favorite::Favorite;
pub use self::order::Order;
pub use self::order_item::OrderItem;
pub use self::product::Product;
pub use self::user::User;

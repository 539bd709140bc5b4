use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub subcategory: String,
    pub target: String,
    pub brand: String,
    pub image_url: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub rating: Decimal,
    pub is_featured: bool,
    pub is_new: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let sizes = product
            .sizes
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.trim().to_string())
            .collect();

        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            subcategory: product.subcategory,
            target: product.target,
            brand: product.brand,
            image_url: product.image_url,
            stock: product.stock,
            sizes,
            rating: product.rating,
            is_featured: product.is_featured,
            is_new: product.is_new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_sizes_become_an_array() {
        let product = Product {
            id: 1,
            name: "Urban Nike Hoodie".into(),
            description: String::new(),
            price: "1200.00".parse().unwrap(),
            category: "Tops".into(),
            subcategory: "Hoodies".into(),
            target: "Men".into(),
            brand: "Nike".into(),
            image_url: String::new(),
            stock: 10,
            sizes: "XS,S,M,L,XL".into(),
            rating: "4.5".parse().unwrap(),
            is_featured: false,
            is_new: true,
        };

        let response = ProductResponse::from(product);
        assert_eq!(response.sizes, vec!["XS", "S", "M", "L", "XL"]);
    }

    #[test]
    fn empty_sizes_become_an_empty_array() {
        let product = Product {
            id: 1,
            name: "Tee".into(),
            description: String::new(),
            price: "300.00".parse().unwrap(),
            category: String::new(),
            subcategory: String::new(),
            target: String::new(),
            brand: String::new(),
            image_url: String::new(),
            stock: 0,
            sizes: String::new(),
            rating: Decimal::ZERO,
            is_featured: false,
            is_new: false,
        };

        assert!(ProductResponse::from(product).sizes.is_empty());
    }
}

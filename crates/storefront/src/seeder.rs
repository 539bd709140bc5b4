use crate::{abstract_trait::DynProductRepository, domain::requests::CreateProductRequest};
use anyhow::Result;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

const ADJECTIVES: &[&str] = &[
    "Urban", "Vintage", "Modern", "Essential", "Premium", "Street", "Cozy", "Active", "Classic",
    "Retro", "Bold", "Minimal", "Tech", "Luxury", "Casual",
];

const COLORS: &[&str] = &[
    "Black", "White", "Grey", "Navy", "Beige", "Red", "Olive", "Blue", "Cream", "Charcoal",
    "Burgundy", "Teal",
];

const MATERIALS: &[&str] = &[
    "Cotton",
    "Fleece",
    "Denim",
    "Polyester",
    "Wool Blend",
    "Organic Cotton",
    "Leather",
    "French Terry",
    "Linen",
];

const BRANDS: &[&str] = &[
    "Nike",
    "Adidas",
    "Zara",
    "H&M",
    "Uniqlo",
    "Puma",
    "New Balance",
    "Ralph Lauren",
    "Tommy Hilfiger",
    "Calvin Klein",
];

struct CategorySpec {
    key: &'static str,
    suffixes: &'static [&'static str],
    price_min: i64,
    price_max: i64,
    images: &'static [&'static str],
    category: &'static str,
    subcategory: &'static str,
}

const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        key: "Hoodies",
        suffixes: &["Hoodie", "Pullover", "Sweatshirt", "Fleece Zip"],
        price_min: 800,
        price_max: 1500,
        images: &[
            "https://images.unsplash.com/photo-1556905055-8f358a7a47b2?w=800&q=80",
            "https://images.unsplash.com/photo-1578768079052-aa76e52ff62e?w=800&q=80",
            "https://images.unsplash.com/photo-1509942774463-acf339cf87d5?w=800&q=80",
            "https://images.unsplash.com/photo-1620799140408-ed5341cd2431?w=800&q=80",
        ],
        category: "Tops",
        subcategory: "Hoodies",
    },
    CategorySpec {
        key: "T-Shirts",
        suffixes: &["Tee", "T-Shirt", "Crewneck", "Graphic Tee", "Oversized Tee"],
        price_min: 300,
        price_max: 800,
        images: &[
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&q=80",
            "https://images.unsplash.com/photo-1583743814966-8936f5b7be1a?w=800&q=80",
            "https://images.unsplash.com/photo-1576566588028-4147f3842f27?w=800&q=80",
            "https://images.unsplash.com/photo-1503341455253-b2e72333dbdb?w=800&q=80",
        ],
        category: "Tops",
        subcategory: "T-Shirts",
    },
    CategorySpec {
        key: "Pants",
        suffixes: &[
            "Joggers",
            "Cargo Pants",
            "Chinos",
            "Denim Jeans",
            "Sweatpants",
            "Trousers",
        ],
        price_min: 600,
        price_max: 1200,
        images: &[
            "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=800&q=80",
            "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=800&q=80",
            "https://images.unsplash.com/photo-1552902865-b72c031ac5ea?w=800&q=80",
            "https://images.unsplash.com/photo-1473966968600-fa801b869a1a?w=800&q=80",
        ],
        category: "Bottoms",
        subcategory: "Pants",
    },
    CategorySpec {
        key: "Shoes",
        suffixes: &["Sneakers", "Runners", "Trainers", "High Tops", "Boots", "Slides"],
        price_min: 900,
        price_max: 2500,
        images: &[
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=800&q=80",
            "https://images.unsplash.com/photo-1600185365926-3a6d3de66f06?w=800&q=80",
            "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=800&q=80",
            "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?w=800&q=80",
        ],
        category: "Footwear",
        subcategory: "Sneakers",
    },
];

const TARGETS: &[&str] = &["Men", "Women", "Children"];
const ITEMS_PER_TARGET: usize = 50;

fn pick<'a, R: Rng>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list[rng.random_range(0..list.len())]
}

fn sizes_for(category_key: &str, target: &str) -> &'static str {
    if category_key == "Shoes" {
        if target == "Children" {
            "28,30,32,34"
        } else {
            "38,40,42,44,45"
        }
    } else if target == "Children" {
        "4Y,6Y,8Y,10Y,12Y"
    } else {
        "XS,S,M,L,XL"
    }
}

/// Builds the full 150-item catalog: 50 items per audience, cycling through
/// the four category families so every slice of the shop looks stocked.
pub fn generate_catalog() -> Vec<CreateProductRequest> {
    let mut rng = rand::rng();
    let mut products = Vec::with_capacity(TARGETS.len() * ITEMS_PER_TARGET);

    for target in TARGETS {
        for i in 0..ITEMS_PER_TARGET {
            let spec = &CATEGORIES[i % CATEGORIES.len()];

            let adjective = pick(&mut rng, ADJECTIVES);
            let color = pick(&mut rng, COLORS);
            let suffix = pick(&mut rng, spec.suffixes);
            let brand = pick(&mut rng, BRANDS);
            let material = pick(&mut rng, MATERIALS);
            let image_url = pick(&mut rng, spec.images);

            let price = rng.random_range(spec.price_min..=spec.price_max);
            let stock = rng.random_range(5..=50);
            let rating = rng.random_range(35..=50);

            products.push(CreateProductRequest {
                name: format!("{adjective} {brand} {suffix}"),
                description: format!(
                    "Stay stylish with this {adjective} {color} {suffix}. \
                     Crafted from premium {material} for maximum comfort and durability."
                ),
                price: Decimal::from(price),
                category: spec.category.to_string(),
                subcategory: spec.subcategory.to_string(),
                target: target.to_string(),
                brand: brand.to_string(),
                image_url: image_url.to_string(),
                stock,
                sizes: sizes_for(spec.key, target).to_string(),
                rating: Decimal::new(rating, 1),
                is_featured: rng.random_range(0..=10) > 8,
                is_new: rng.random_range(0..=10) > 7,
            });
        }
    }

    products
}

/// Fills an empty catalog with generated stock. A catalog that already has
/// rows is left alone, so restarts never wipe real data.
pub async fn seed_catalog(products: &DynProductRepository) -> Result<()> {
    let existing = products.count().await?;
    if existing > 0 {
        info!("🌱 Catalog already holds {existing} products, skipping seed");
        return Ok(());
    }

    // Generate everything before the first insert; the rng is not Send.
    let catalog = generate_catalog();
    let total = catalog.len();

    for request in &catalog {
        products.create_product(request).await?;
    }

    info!("🌱 Seeded {total} products");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn catalog_has_fifty_items_per_audience() {
        let catalog = generate_catalog();
        assert_eq!(catalog.len(), 150);

        for target in TARGETS {
            let count = catalog.iter().filter(|p| p.target == *target).count();
            assert_eq!(count, 50, "target {target}");
        }
    }

    #[test]
    fn every_generated_product_is_valid() {
        for product in generate_catalog() {
            product.validate().expect("generated product should validate");
            assert!(product.price >= Decimal::from(300));
            assert!(product.price <= Decimal::from(2500));
        }
    }

    #[test]
    fn shoe_sizes_differ_from_clothing_sizes() {
        assert_eq!(sizes_for("Shoes", "Men"), "38,40,42,44,45");
        assert_eq!(sizes_for("Shoes", "Children"), "28,30,32,34");
        assert_eq!(sizes_for("Hoodies", "Children"), "4Y,6Y,8Y,10Y,12Y");
        assert_eq!(sizes_for("Hoodies", "Women"), "XS,S,M,L,XL");
    }

    #[test]
    fn ratings_stay_on_a_five_star_scale() {
        for product in generate_catalog() {
            assert!(product.rating >= Decimal::new(35, 1));
            assert!(product.rating <= Decimal::new(50, 1));
        }
    }
}

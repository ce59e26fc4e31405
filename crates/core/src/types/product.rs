//! Product domain type and the in-place category filter.

use serde::{Deserialize, Serialize};

use super::Category;

/// A product as served by the demo API.
///
/// Price, rating, and stock are trusted as given; the API is read-only from
/// our side and enforces no invariants of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID assigned by the demo API.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Price in USD.
    pub price: f64,
    /// Average rating (0.0 - 5.0).
    pub rating: f64,
    /// Units in stock.
    pub stock: i64,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category label this product belongs to.
    pub category: Category,
}

/// Filter a product list down to one category, in place.
///
/// Returns references into the original list, so clearing the selection
/// (passing every product through again) always yields the original list
/// unchanged. Matching is an exact string match on the category label, the
/// same relation the demo API models.
#[must_use]
pub fn in_category<'a>(products: &'a [Product], category: &Category) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| &product.category == category)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price: 9.99,
            rating: 4.5,
            stock: 10,
            thumbnail: String::new(),
            images: Vec::new(),
            category: Category::parse(category).unwrap(),
        }
    }

    #[test]
    fn test_in_category_matches_by_label() {
        let products = vec![product(1, "a"), product(2, "b"), product(3, "a")];
        let category = Category::parse("a").unwrap();

        let filtered = in_category(&products, &category);
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_in_category_no_matches() {
        let products = vec![product(1, "a")];
        let category = Category::parse("missing").unwrap();
        assert!(in_category(&products, &category).is_empty());
    }

    #[test]
    fn test_select_then_clear_round_trip() {
        // Selecting a category and then clearing it must leave the original
        // list untouched.
        let products = vec![product(1, "a"), product(2, "b"), product(3, "a")];
        let category = Category::parse("a").unwrap();

        let _filtered = in_category(&products, &category);
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_deserialize_demo_api_payload() {
        let json = r#"{
            "id": 1,
            "title": "iPhone 9",
            "description": "An apple mobile which is nothing like apple",
            "price": 549.0,
            "discountPercentage": 12.96,
            "rating": 4.69,
            "stock": 94,
            "brand": "Apple",
            "category": "smartphones",
            "thumbnail": "https://cdn.dummyjson.com/product-images/1/thumbnail.jpg",
            "images": ["https://cdn.dummyjson.com/product-images/1/1.jpg"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category.as_str(), "smartphones");
        assert_eq!(product.images.len(), 1);
        assert!((product.price - 549.0).abs() < f64::EPSILON);
    }
}

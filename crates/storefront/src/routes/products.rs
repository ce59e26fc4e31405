//! Product listing route handler.
//!
//! The full product list is fetched once and filtered/paginated locally:
//! the category dropdown narrows the list in place and the pager slices the
//! visible window. Both the category selection and the page number travel
//! in the query string.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use ash_store_core::{Category, Pager, Product, in_category};

use crate::filters;
use crate::middleware::CurrentEmail;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub stock: i64,
    pub thumbnail: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            rating: product.rating,
            stock: product.stock,
            thumbnail: product.thumbnail.clone(),
        }
    }
}

/// One entry in the category dropdown.
#[derive(Clone)]
pub struct CategoryOption {
    pub value: String,
    pub selected: bool,
}

/// One numbered pagination link.
#[derive(Clone)]
pub struct PageLink {
    pub number: u32,
    pub href: String,
    pub current: bool,
}

/// Filter and pagination query parameters.
///
/// An absent or empty `category` means "all categories". The page number
/// deliberately survives a category change (see DESIGN.md).
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
    pub page: Option<u32>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<CategoryOption>,
    pub page_links: Vec<PageLink>,
    pub current_page: u32,
    pub has_category_selected: bool,
    pub current_email: Option<String>,
}

/// Display the product grid.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
    CurrentEmail(current_email): CurrentEmail,
) -> impl IntoResponse {
    let selected = query
        .category
        .as_deref()
        .and_then(|raw| Category::parse(raw).ok());
    let pager = Pager::new(query.page.unwrap_or(1), Pager::DEFAULT_PER_PAGE);

    let products = state.gateway().products().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch products: {e}");
            Vec::new()
        },
        |products| products,
    );
    let categories = state.gateway().categories().await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch categories: {e}");
            Vec::new()
        },
        |categories| categories,
    );

    // A category smaller than the current page offset renders an empty
    // grid; the cursor is only ever moved by pagination clicks.
    let filtered: Vec<&Product> = match &selected {
        Some(category) => in_category(&products, category),
        None => products.iter().collect(),
    };

    let visible: Vec<ProductCardView> = pager
        .slice(&filtered)
        .iter()
        .map(|product| ProductCardView::from(*product))
        .collect();

    let page_links: Vec<PageLink> = pager
        .page_numbers(filtered.len())
        .into_iter()
        .map(|number| PageLink {
            number,
            href: products_href(selected.as_ref(), number),
            current: number == pager.page(),
        })
        .collect();

    let category_options: Vec<CategoryOption> = categories
        .iter()
        .map(|category| CategoryOption {
            value: category.as_str().to_string(),
            selected: selected.as_ref() == Some(category),
        })
        .collect();

    ProductsTemplate {
        products: visible,
        categories: category_options,
        page_links,
        current_page: pager.page(),
        has_category_selected: selected.is_some(),
        current_email,
    }
}

/// Build a listing href carrying both query parameters.
fn products_href(category: Option<&Category>, page: u32) -> String {
    category.map_or_else(
        || format!("/products?page={page}"),
        |category| {
            format!(
                "/products?category={}&page={page}",
                urlencoding::encode(category.as_str())
            )
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_products_href_without_category() {
        assert_eq!(products_href(None, 2), "/products?page=2");
    }

    #[test]
    fn test_products_href_encodes_category() {
        let category = Category::parse("mens shirts").unwrap();
        assert_eq!(
            products_href(Some(&category), 1),
            "/products?category=mens%20shirts&page=1"
        );
    }

    #[test]
    fn test_product_card_view_from_product() {
        let product = Product {
            id: 7,
            title: "Perfume Oil".to_string(),
            description: "Mega discount".to_string(),
            price: 13.0,
            rating: 4.26,
            stock: 65,
            thumbnail: "https://cdn.dummyjson.com/7/thumbnail.jpg".to_string(),
            images: Vec::new(),
            category: Category::parse("fragrances").unwrap(),
        };

        let view = ProductCardView::from(&product);
        assert_eq!(view.title, "Perfume Oil");
        assert_eq!(view.stock, 65);
        assert!((view.price - 13.0).abs() < f64::EPSILON);
    }
}

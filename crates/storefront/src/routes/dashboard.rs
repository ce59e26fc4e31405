//! Dashboard route handler.
//!
//! Renders the pie chart of product counts per category. Counts are fetched
//! from the demo API one category at a time, only after the category list
//! itself has resolved.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use ash_store_core::Category;

use crate::chart::PieChart;
use crate::dummyjson::{DummyJsonClient, DummyJsonError};
use crate::filters;
use crate::middleware::CurrentEmail;
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Full chart configuration, embedded into the page script.
    pub chart_json: String,
    /// Whether there is anything to draw.
    pub has_data: bool,
    /// Email for the nav bar label, when logged in.
    pub current_email: Option<String>,
}

/// Display the dashboard.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    CurrentEmail(current_email): CurrentEmail,
) -> impl IntoResponse {
    let chart = fetch_category_chart(state.gateway()).await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch category counts: {e}");
            PieChart::empty()
        },
        |chart| chart,
    );

    DashboardTemplate {
        has_data: !chart.labels().is_empty(),
        chart_json: chart.config_json(),
        current_email,
    }
}

/// Fetch the category list, then one count per category.
///
/// A failure for any category abandons the whole chart - the page then
/// degrades to an empty pie, exactly as the original did when its batched
/// count fetch rejected.
async fn fetch_category_chart(gateway: &DummyJsonClient) -> Result<PieChart, DummyJsonError> {
    let categories = gateway.categories().await?;

    let mut counts = Vec::with_capacity(categories.len());
    for category in &categories {
        counts.push(gateway.products_in_category(category).await?.total);
    }

    let labels = categories.into_iter().map(Category::into_inner).collect();
    Ok(PieChart::new(labels, counts))
}

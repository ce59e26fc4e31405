//! Pie-chart payload for the dashboard.
//!
//! The chart itself is drawn in the browser by the charting library; this
//! module only assembles the data it is handed: index-aligned category
//! labels and counts, plus one random slice color per label. Colors are
//! unseeded, so tests assert structure rather than exact values.

use rand::Rng;
use serde_json::json;

/// Slice opacity used for every generated color.
const SLICE_ALPHA: &str = "0.7";

/// Data for one pie chart: labels, counts, and slice colors.
#[derive(Debug, Clone)]
pub struct PieChart {
    labels: Vec<String>,
    counts: Vec<i64>,
    colors: Vec<String>,
}

impl PieChart {
    /// Build a chart payload from index-aligned labels and counts.
    ///
    /// One color is generated per label. Empty inputs produce a degenerate
    /// empty pie, which the charting library renders as nothing.
    #[must_use]
    pub fn new(labels: Vec<String>, counts: Vec<i64>) -> Self {
        let colors = random_slice_colors(labels.len());
        Self {
            labels,
            counts,
            colors,
        }
    }

    /// An empty chart, used when the counts fetch fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Category labels, one per slice.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Product counts, index-aligned with the labels.
    #[must_use]
    pub fn counts(&self) -> &[i64] {
        &self.counts
    }

    /// Slice colors, index-aligned with the labels.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The full charting-library configuration as a JSON string.
    ///
    /// Embedded verbatim into the dashboard template; the page script hands
    /// it to the chart constructor together with an explicit element handle.
    #[must_use]
    pub fn config_json(&self) -> String {
        json!({
            "type": "pie",
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "data": self.counts,
                    "backgroundColor": self.colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": {
                        "position": "left",
                        "align": "start"
                    }
                }
            }
        })
        .to_string()
    }
}

/// Generate one random `rgba(r, g, b, 0.7)` color per slice.
fn random_slice_colors(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let r: u8 = rng.random();
            let g: u8 = rng.random();
            let b: u8 = rng.random();
            format!("rgba({r}, {g}, {b}, {SLICE_ALPHA})")
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> PieChart {
        PieChart::new(
            vec!["smartphones".to_string(), "laptops".to_string()],
            vec![5, 5],
        )
    }

    #[test]
    fn test_one_color_per_label() {
        let chart = sample();
        assert_eq!(chart.colors().len(), chart.labels().len());
        assert_eq!(chart.counts().len(), chart.labels().len());
    }

    #[test]
    fn test_color_format() {
        let colors = random_slice_colors(8);
        assert_eq!(colors.len(), 8);
        for color in colors {
            assert!(color.starts_with("rgba("), "unexpected color: {color}");
            assert!(color.ends_with(", 0.7)"), "unexpected alpha: {color}");
        }
    }

    #[test]
    fn test_empty_chart() {
        let chart = PieChart::empty();
        assert!(chart.labels().is_empty());
        assert!(chart.colors().is_empty());
    }

    #[test]
    fn test_config_json_structure() {
        let chart = sample();
        let config: serde_json::Value = serde_json::from_str(&chart.config_json()).unwrap();

        assert_eq!(config["type"], "pie");
        assert_eq!(config["data"]["labels"][0], "smartphones");
        assert_eq!(config["data"]["datasets"][0]["data"][1], 5);
        assert_eq!(config["data"]["datasets"][0]["borderWidth"], 1);
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "left");

        let colors = config["data"]["datasets"][0]["backgroundColor"]
            .as_array()
            .unwrap();
        assert_eq!(colors.len(), 2);
    }
}

use crate::data::summary::SalesSummary;

use super::format::{percent, thousands};

/// One read-only metric display.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
}

impl MetricCard {
    fn new(title: &'static str, value: String) -> Self {
        Self { title, value }
    }
}

/// The five headline cards, in display order.
pub fn metric_cards(summary: &SalesSummary) -> Vec<MetricCard> {
    vec![
        MetricCard::new("Total Sales", thousands(summary.total_sales)),
        MetricCard::new("Total Forecasted Sales", thousands(summary.total_forecast)),
        MetricCard::new("7-day vs. 30-day Growth %", percent(summary.growth_pct)),
        MetricCard::new("Total FBA & 3PL Stock", thousands(summary.total_stock)),
        MetricCard::new("Top Selling SKU", summary.top_sku.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterSelection, filter};
    use crate::data::summary::{fixtures, summarize};

    #[test]
    fn cards_for_two_row_table() {
        let t = fixtures::two_rows();
        let summary = summarize(&filter(&t, &FilterSelection::default())).unwrap();
        let values: Vec<(&str, String)> = metric_cards(&summary)
            .into_iter()
            .map(|c| (c.title, c.value))
            .collect();

        assert_eq!(
            values,
            vec![
                ("Total Sales", "30".to_string()),
                ("Total Forecasted Sales", "23".to_string()),
                ("7-day vs. 30-day Growth %", "-8.33%".to_string()),
                ("Total FBA & 3PL Stock", "8".to_string()),
                ("Top Selling SKU", "A2".to_string()),
            ]
        );
    }

    #[test]
    fn empty_summary_cards() {
        let cards = metric_cards(&SalesSummary::empty());
        assert_eq!(cards[0].value, "0");
        assert_eq!(cards[2].value, "0.00%");
        assert_eq!(cards[4].value, "No Data");
    }
}

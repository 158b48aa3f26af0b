//! Built-in sample datasets offered by the data panel.

use serde::Serialize;

use crate::chart::DataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleDataset {
    Sales,
    Analytics,
    Products,
}

/// A sample dataset as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub key: SampleDataset,
    pub name: &'static str,
    pub data: Vec<DataPoint>,
}

impl SampleDataset {
    pub const ALL: [SampleDataset; 3] = [
        SampleDataset::Sales,
        SampleDataset::Analytics,
        SampleDataset::Products,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SampleDataset::Sales => "Sales Performance",
            SampleDataset::Analytics => "Website Analytics",
            SampleDataset::Products => "Product Comparison",
        }
    }

    pub fn points(self) -> Vec<DataPoint> {
        let rows: &[(&str, f64)] = match self {
            SampleDataset::Sales => &[
                ("Jan", 45000.0),
                ("Feb", 52000.0),
                ("Mar", 38000.0),
                ("Apr", 61000.0),
                ("May", 48000.0),
                ("Jun", 55000.0),
            ],
            SampleDataset::Analytics => &[
                ("Page Views", 12500.0),
                ("Unique Visitors", 8300.0),
                ("Sessions", 9200.0),
                ("Bounce Rate", 32.0),
            ],
            SampleDataset::Products => &[
                ("Product A", 85.0),
                ("Product B", 92.0),
                ("Product C", 78.0),
                ("Product D", 96.0),
            ],
        };
        rows.iter().map(|(l, v)| DataPoint::new(*l, *v)).collect()
    }

    pub fn sample(self) -> Sample {
        Sample {
            key: self,
            name: self.display_name(),
            data: self.points(),
        }
    }
}

/// Twelve months of revenue used for the chart every fresh store starts with.
pub fn quarterly_sales_points() -> Vec<DataPoint> {
    const MONTHS: [(&str, f64); 12] = [
        ("Jan", 45000.0),
        ("Feb", 52000.0),
        ("Mar", 38000.0),
        ("Apr", 61000.0),
        ("May", 48000.0),
        ("Jun", 55000.0),
        ("Jul", 49000.0),
        ("Aug", 67000.0),
        ("Sep", 59000.0),
        ("Oct", 62000.0),
        ("Nov", 48000.0),
        ("Dec", 58000.0),
    ];
    MONTHS.iter().map(|(l, v)| DataPoint::new(*l, *v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sizes() {
        assert_eq!(SampleDataset::Sales.points().len(), 6);
        assert_eq!(SampleDataset::Analytics.points().len(), 4);
        assert_eq!(SampleDataset::Products.points().len(), 4);
    }

    #[test]
    fn sample_serializes_with_lowercase_key() {
        let value = serde_json::to_value(SampleDataset::Products.sample()).unwrap();
        assert_eq!(value["key"], "products");
        assert_eq!(value["name"], "Product Comparison");
        assert_eq!(value["data"][3]["label"], "Product D");
    }

    #[test]
    fn quarterly_sales_covers_a_year_in_order() {
        let points = quarterly_sales_points();
        assert_eq!(points.len(), 12);
        assert_eq!(points[0].label, "Jan");
        assert_eq!(points[11].label, "Dec");
        assert_eq!(points[7].value, 67000.0);
    }
}

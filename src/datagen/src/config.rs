use std::path::PathBuf;

/// A product category with the price and margin intervals its SKUs are
/// generated from. Margins are fractions, strictly inside (0, 1).
#[derive(Debug, Clone)]
pub struct CategorySpec {
    pub name: String,
    pub price_range: (f64, f64),
    pub margin_range: (f64, f64),
}

impl CategorySpec {
    pub fn new(name: &str, price_range: (f64, f64), margin_range: (f64, f64)) -> Self {
        Self {
            name: name.to_string(),
            price_range,
            margin_range,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub product_count: usize,
    pub transaction_count: usize,
    pub out_path: PathBuf,
    pub categories: Vec<CategorySpec>,
    pub customers: Vec<String>,
    pub regions: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            product_count: 1000,
            transaction_count: 5000,
            out_path: PathBuf::from("sample_transactions_1000_skus.csv"),
            categories: vec![
                CategorySpec::new("Cleaning", (3., 25.), (0.45, 0.65)),
                CategorySpec::new("Personal Care", (5., 40.), (0.50, 0.70)),
                CategorySpec::new("Medical Supplies", (8., 60.), (0.30, 0.55)),
                CategorySpec::new("Paper Goods", (6., 30.), (0.35, 0.55)),
                CategorySpec::new("Food & Beverage", (2., 15.), (0.25, 0.45)),
                CategorySpec::new("Health & Wellness", (10., 50.), (0.45, 0.65)),
                CategorySpec::new("Beauty", (8., 60.), (0.55, 0.75)),
                CategorySpec::new("Home Goods", (10., 80.), (0.40, 0.60)),
            ],
            customers: [
                "Walmart",
                "Target",
                "Costco",
                "Amazon",
                "CVS",
                "Walgreens",
                "Kroger",
                "Albertsons",
                "Dollar General",
                "Family Dollar",
                "Rite Aid",
                "Sam's Club",
                "BJ's Wholesale",
                "Meijer",
                "Publix",
                "H-E-B",
                "Wegmans",
                "Whole Foods",
            ]
            .map(String::from)
            .to_vec(),
            regions: [
                "Northeast",
                "Southeast",
                "Midwest",
                "West",
                "Southwest",
                "National",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

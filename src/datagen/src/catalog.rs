use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::config::GeneratorConfig;
use crate::error::DataGenError;
use crate::error::Result;

const SKU_BASE: usize = 1000;

const NAME_ADJECTIVES: &[&str] = &[
    "Ultra", "Super", "Mega", "Premium", "Essential", "Pro", "Elite", "Advanced", "Fresh", "Pure",
];
const NAME_KINDS: &[&str] = &[
    "Clean", "Care", "Guard", "Shield", "Soft", "Bright", "Fresh", "Plus", "Max", "Comfort",
];
// empty entry makes the size tag optional
const NAME_SIZES: &[&str] = &["6-ct", "12-ct", "24-ct", "36-ct", "48-ct", ""];
const NAME_FORMATS: &[&str] = &["Pack", "Bundle", "Box", "Case", "Set", "Kit", "Collection"];

#[derive(Debug, Clone)]
pub struct Product {
    pub sku_code: String,
    pub sku_name: String,
    pub category: String,
    pub base_price: Decimal,
    pub base_cost: Decimal,
    pub target_margin: f64,
}

impl Product {
    /// Margin as the percentage reported next to the product, one decimal place.
    pub fn target_margin_pct(&self) -> f64 {
        (self.target_margin * 1000.).round() / 10.
    }
}

pub struct CatalogProvider {
    pub products: Vec<Product>,
}

impl CatalogProvider {
    /// Generates exactly `cfg.product_count` products. SKU codes are sequential
    /// and unique within a run; names may collide.
    pub fn generate<R: Rng>(cfg: &GeneratorConfig, rng: &mut R) -> Result<Self> {
        let mut products = Vec::with_capacity(cfg.product_count);
        for i in 0..cfg.product_count {
            let category = cfg
                .categories
                .choose(rng)
                .ok_or_else(|| DataGenError::Internal("no categories configured".to_string()))?;
            let (price_lo, price_hi) = category.price_range;
            let (margin_lo, margin_hi) = category.margin_range;
            let price = rng.gen_range(price_lo..=price_hi);
            let margin = rng.gen_range(margin_lo..=margin_hi);

            products.push(Product {
                sku_code: format!("SKU-{}", SKU_BASE + i),
                sku_name: product_name(&category.name, rng),
                category: category.name.clone(),
                base_price: currency(price)?,
                // cost is derived from the unrounded price, then rounded on its own
                base_cost: currency(price * (1. - margin))?,
                target_margin: margin,
            });
        }

        Ok(Self { products })
    }

    /// Uniform pick with replacement.
    pub fn sample<'a, R: Rng>(&'a self, rng: &mut R) -> Result<&'a Product> {
        self.products
            .choose(rng)
            .ok_or_else(|| DataGenError::Internal("can't sample from an empty catalog".to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn product_name<R: Rng>(category: &str, rng: &mut R) -> String {
    let adj = NAME_ADJECTIVES.choose(rng).unwrap();
    let kind = NAME_KINDS.choose(rng).unwrap();
    let size = NAME_SIZES.choose(rng).unwrap();
    let format = NAME_FORMATS.choose(rng).unwrap();

    if size.is_empty() {
        format!("{adj}{kind} {category} {format}")
    } else {
        format!("{adj}{kind} {category} {size} {format}")
    }
}

/// Converts a float amount into a 2-decimal-place currency value.
pub(crate) fn currency(v: f64) -> Result<Decimal> {
    let mut d = Decimal::from_f64(v)
        .ok_or_else(|| DataGenError::Internal(format!("value {v} is not a currency amount")))?
        .round_dp(2);
    d.rescale(2);
    Ok(d)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    use crate::catalog::currency;
    use crate::catalog::CatalogProvider;
    use crate::config::GeneratorConfig;

    fn cfg(products: usize) -> GeneratorConfig {
        GeneratorConfig {
            product_count: products,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_catalog_size_and_sku_codes() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = CatalogProvider::generate(&cfg(10), &mut rng).unwrap();

        assert_eq!(catalog.len(), 10);
        for (i, p) in catalog.products.iter().enumerate() {
            assert_eq!(p.sku_code, format!("SKU-{}", 1000 + i));
        }
    }

    #[test]
    fn test_price_cost_margin_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = cfg(200);
        let catalog = CatalogProvider::generate(&cfg, &mut rng).unwrap();

        for p in &catalog.products {
            assert!(p.base_cost > Decimal::ZERO, "{p:?}");
            assert!(p.base_cost < p.base_price, "{p:?}");

            let spec = cfg
                .categories
                .iter()
                .find(|c| c.name == p.category)
                .unwrap();
            assert!(p.target_margin >= spec.margin_range.0, "{p:?}");
            assert!(p.target_margin <= spec.margin_range.1, "{p:?}");
            assert!(p.sku_name.contains(&p.category), "{p:?}");
        }
    }

    #[test]
    fn test_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = CatalogProvider::generate(&cfg(0), &mut rng).unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.sample(&mut rng).is_err());
    }

    #[test]
    fn test_margin_pct_rounding() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = CatalogProvider::generate(&cfg(1), &mut rng).unwrap();
        let p = &catalog.products[0];

        let pct = p.target_margin_pct();
        // one decimal place, so at most 0.05pp away from the raw fraction
        assert!((pct - p.target_margin * 100.).abs() <= 0.05 + 1e-9, "{pct}");
    }

    #[test]
    fn test_currency_scale() {
        assert_eq!(currency(16.9).unwrap().to_string(), "16.90");
        assert_eq!(currency(3.004).unwrap().to_string(), "3.00");
        assert!(currency(f64::NAN).is_err());
    }
}

use chrono::DateTime;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::currency;
use crate::catalog::CatalogProvider;
use crate::config::GeneratorConfig;
use crate::error::DataGenError;
use crate::error::Result;

const QTY_MIN: u32 = 20;
const QTY_MAX: u32 = 500;
// some customers get better prices
const PRICE_VARIANCE: (f64, f64) = (0.85, 1.05);
const DISCOUNT_PROBABILITY: f64 = 0.2;
const DISCOUNT: (f64, f64) = (0.10, 2.0);
const RETURN_PROBABILITY: f64 = 0.15;
const RETURN_FRACTION: (f64, f64) = (0.01, 0.15);

/// One sales record. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub invoice_id: String,
    pub customer_name: String,
    pub region: String,
    pub sku_code: String,
    pub sku_name: String,
    pub category: String,
    pub qty_sold: u32,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
    pub unit_discount: Decimal,
    pub returned_units: u32,
}

/// Trailing sales window. The anchor is computed once per run and shared by
/// every transaction.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub from: DateTime<Utc>,
    pub days: i64,
}

impl DateWindow {
    pub fn trailing(to: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            from: to - duration,
            days: duration.num_days(),
        }
    }

    pub fn sample_date<R: Rng>(&self, rng: &mut R) -> NaiveDate {
        (self.from + Duration::days(rng.gen_range(0..=self.days))).date_naive()
    }
}

/// Generates a single transaction against a sampled product.
pub fn generate_one<R: Rng>(
    catalog: &CatalogProvider,
    cfg: &GeneratorConfig,
    window: &DateWindow,
    rng: &mut R,
) -> Result<Transaction> {
    let product = catalog.sample(rng)?;
    let customer = cfg
        .customers
        .choose(rng)
        .ok_or_else(|| DataGenError::Internal("no customers configured".to_string()))?;
    let region = cfg
        .regions
        .choose(rng)
        .ok_or_else(|| DataGenError::Internal("no regions configured".to_string()))?;

    let date = window.sample_date(rng);
    // collisions are fine, invoice ids carry no identity
    let invoice_id = format!("INV-{}", rng.gen_range(10000..=99999));
    let qty_sold = rng.gen_range(QTY_MIN..=QTY_MAX);

    let variance = currency_factor(rng.gen_range(PRICE_VARIANCE.0..=PRICE_VARIANCE.1))?;
    let mut unit_price = (product.base_price * variance).round_dp(2);
    unit_price.rescale(2);

    let unit_discount = if rng.gen::<f64>() < DISCOUNT_PROBABILITY {
        currency(rng.gen_range(DISCOUNT.0..=DISCOUNT.1))?
    } else {
        Decimal::new(0, 2)
    };

    let returned_units = if rng.gen::<f64>() < RETURN_PROBABILITY {
        (qty_sold as f64 * rng.gen_range(RETURN_FRACTION.0..=RETURN_FRACTION.1)) as u32
    } else {
        0
    };

    Ok(Transaction {
        date,
        invoice_id,
        customer_name: customer.clone(),
        region: region.clone(),
        sku_code: product.sku_code.clone(),
        sku_name: product.sku_name.clone(),
        category: product.category.clone(),
        qty_sold,
        // supplier cost is fixed, only the street price varies
        unit_cost: product.base_cost,
        unit_price,
        unit_discount,
        returned_units,
    })
}

/// Generates exactly `cfg.transaction_count` transactions in one pass.
pub fn generate<R: Rng>(
    catalog: &CatalogProvider,
    cfg: &GeneratorConfig,
    window: &DateWindow,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    (0..cfg.transaction_count)
        .map(|_| generate_one(catalog, cfg, window, rng))
        .collect()
}

fn currency_factor(v: f64) -> Result<Decimal> {
    Decimal::from_f64(v)
        .ok_or_else(|| DataGenError::Internal(format!("factor {v} is not representable")))
}

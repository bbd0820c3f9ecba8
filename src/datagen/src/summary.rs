use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::transactions::Transaction;

/// Dataset-level stats for the console report. Never written to the output
/// file.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_revenue: Decimal,
    pub total_cogs: Decimal,
    pub gross_margin_pct: f64,
    pub unique_skus: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl Summary {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut total_revenue = Decimal::ZERO;
        let mut total_cogs = Decimal::ZERO;
        let mut skus = HashSet::new();
        let mut date_range: Option<(NaiveDate, NaiveDate)> = None;

        for t in transactions {
            let qty = Decimal::from(t.qty_sold);
            total_revenue += qty * (t.unit_price - t.unit_discount);
            total_cogs += qty * t.unit_cost;
            skus.insert(t.sku_code.as_str());
            date_range = match date_range {
                None => Some((t.date, t.date)),
                Some((min, max)) => Some((min.min(t.date), max.max(t.date))),
            };
        }

        let gross_margin_pct = if total_revenue.is_zero() {
            0.
        } else {
            ((total_revenue - total_cogs) / total_revenue * Decimal::from(100))
                .to_f64()
                .unwrap_or(0.)
        };

        Self {
            total_revenue,
            total_cogs,
            gross_margin_pct,
            unique_skus: skus.len(),
            date_range,
        }
    }
}

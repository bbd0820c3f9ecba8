use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::transactions::Transaction;

/// Output schema, in column order. Matches the `Transaction` field order.
pub const COLUMNS: [&str; 12] = [
    "date",
    "invoice_id",
    "customer_name",
    "region",
    "sku_code",
    "sku_name",
    "category",
    "qty_sold",
    "unit_cost",
    "unit_price",
    "unit_discount",
    "returned_units",
];

/// Writes the header and one row per transaction, in generation order.
pub fn write<W: io::Write>(wtr: W, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(wtr);
    // explicit header so an empty dataset still produces a valid file
    wtr.write_record(COLUMNS)?;
    for t in transactions {
        wtr.serialize(t)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Writes to `path`, replacing any existing file.
pub fn write_file<P: AsRef<Path>>(path: P, transactions: &[Transaction]) -> Result<()> {
    write(File::create(path)?, transactions)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::catalog::CatalogProvider;
    use crate::config::GeneratorConfig;
    use crate::output;
    use crate::transactions;
    use crate::transactions::DateWindow;
    use crate::transactions::Transaction;

    fn cfg() -> GeneratorConfig {
        GeneratorConfig {
            product_count: 10,
            transaction_count: 50,
            ..GeneratorConfig::default()
        }
    }

    fn window() -> DateWindow {
        let to = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();
        DateWindow::trailing(to, Duration::days(90))
    }

    fn generate(seed: u64) -> Vec<Transaction> {
        let cfg = cfg();
        let mut rng = StdRng::seed_from_u64(seed);
        let catalog = CatalogProvider::generate(&cfg, &mut rng).unwrap();
        transactions::generate(&catalog, &cfg, &window(), &mut rng).unwrap()
    }

    #[test]
    fn test_shape() {
        let transactions = generate(99);
        let mut buf = Vec::new();
        output::write(&mut buf, &transactions).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], output::COLUMNS.join(","));
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 12);
        }
        // every sku comes from the 10-product catalog
        for line in &lines[1..] {
            let sku = line.split(',').nth(4).unwrap();
            assert!(sku.starts_with("SKU-100"), "{sku}");
        }
    }

    #[test]
    fn test_roundtrip() {
        let transactions = generate(99);
        let mut buf = Vec::new();
        output::write(&mut buf, &transactions).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let read = rdr
            .deserialize()
            .collect::<csv::Result<Vec<Transaction>>>()
            .unwrap();

        assert_eq!(read, transactions);
    }

    #[test]
    fn test_empty_dataset_still_has_header() {
        let mut buf = Vec::new();
        output::write(&mut buf, &[]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.lines().next().unwrap(), output::COLUMNS.join(","));
    }

    #[test]
    fn test_write_file_overwrites() {
        let path =
            std::env::temp_dir().join(format!("marginmap_gen_{}.csv", std::process::id()));
        output::write_file(&path, &generate(7)).unwrap();
        output::write_file(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let mut a = Vec::new();
        output::write(&mut a, &generate(42)).unwrap();
        let mut b = Vec::new();
        output::write(&mut b, &generate(42)).unwrap();
        assert_eq!(a, b);

        let mut c = Vec::new();
        output::write(&mut c, &generate(43)).unwrap();
        assert_ne!(a, c);
    }
}

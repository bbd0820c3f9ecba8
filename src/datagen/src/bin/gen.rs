use std::path::PathBuf;

use chrono::Duration;
use chrono::Utc;
use clap::Parser;
use datagen::catalog::CatalogProvider;
use datagen::config::GeneratorConfig;
use datagen::logging::LoggingCliArgs;
use datagen::output;
use datagen::summary::Summary;
use datagen::transactions;
use datagen::transactions::DateWindow;
use dateparser::DateTimeUtc;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(flatten)]
    logging: LoggingCliArgs,
    #[arg(long, default_value = "1000")]
    products: usize,
    #[arg(long, default_value = "5000")]
    transactions: usize,
    #[arg(long, default_value = "sample_transactions_1000_skus.csv")]
    out_path: PathBuf,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    to_date: Option<String>,
    #[arg(long, default_value = "90 days")]
    window: String,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    args.logging.init()?;

    let to_date = match &args.to_date {
        None => Utc::now(),
        Some(dt) => dt.parse::<DateTimeUtc>()?.0.with_timezone(&Utc),
    };
    let window = Duration::from_std(parse_duration::parse(args.window.as_str())?)?;

    let cfg = GeneratorConfig {
        product_count: args.products,
        transaction_count: args.transactions,
        out_path: args.out_path,
        ..GeneratorConfig::default()
    };

    debug!("out path: {:?}", cfg.out_path);
    debug!("to date: {}", to_date);
    debug!("sales window: {}", humantime::format_duration(window.to_std()?));
    info!("generating MarginMap sample data...");
    info!("products: {}", cfg.product_count);
    info!("transactions: {}", cfg.transaction_count);

    let mut rng = match args.seed {
        None => StdRng::from_entropy(),
        Some(seed) => StdRng::seed_from_u64(seed),
    };

    info!("creating product catalog...");
    let catalog = CatalogProvider::generate(&cfg, &mut rng)?;
    info!(
        "generated {} products across {} categories",
        catalog.len(),
        cfg.categories.len()
    );

    info!("creating transaction records...");
    let window = DateWindow::trailing(to_date, window);
    let pb = ProgressBar::new(cfg.transaction_count as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} records",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    let mut records = Vec::with_capacity(cfg.transaction_count);
    for _ in 0..cfg.transaction_count {
        records.push(transactions::generate_one(&catalog, &cfg, &window, &mut rng)?);
        pb.inc(1);
    }
    pb.finish_and_clear();
    info!("generated {} transactions", records.len());

    let summary = Summary::compute(&records);
    info!("dataset summary:");
    info!("  unique SKUs: {}", summary.unique_skus);
    if let Some((min, max)) = summary.date_range {
        info!("  date range: {min} to {max}");
    }
    info!("  total revenue: ${}", summary.total_revenue);
    info!("  total COGS: ${}", summary.total_cogs);
    info!("  gross margin: {:.1}%", summary.gross_margin_pct);

    info!("writing {:?}...", cfg.out_path);
    output::write_file(&cfg.out_path, &records)?;
    info!("file created successfully");
    info!(
        "ready to upload: {:?} at https://marginmap.onrender.com/upload.html",
        cfg.out_path
    );

    Ok(())
}

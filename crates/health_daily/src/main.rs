use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, NaiveDate};

use health_connect_client::config::Config;
use health_connect_client::http_client::ReqwestHealthConnectClient;
use health_connect_client::middleware::LoggingMiddleware;
use health_daily::presenter::{self, Section};
use health_daily::{DailyAggregator, pager};

struct Args {
    date: NaiveDate,
    json: bool,
}

fn parse_args(today: NaiveDate) -> anyhow::Result<Args> {
    let mut date = today;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other => {
                if let Some(page) = other.strip_prefix("page:") {
                    let page: i64 = page.parse().context("page index must be an integer")?;
                    anyhow::ensure!(
                        pager::is_valid_page(page),
                        "page index out of range (0..{})",
                        pager::PAGE_COUNT
                    );
                    date = pager::date_for_page(page, today);
                } else {
                    date = NaiveDate::parse_from_str(other, "%Y-%m-%d")
                        .with_context(|| format!("unrecognized argument: {other}"))?;
                }
            }
        }
    }
    Ok(Args { date, json })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from env var `HEALTH_DAILY_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("HEALTH_DAILY_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let args = parse_args(Local::now().date_naive())?;
    let config = Config::from_env().context("health connect configuration")?;
    let client = ReqwestHealthConnectClient::new(&config.base_url, config.api_token);
    let aggregator = DailyAggregator::new(Arc::new(LoggingMiddleware::new(client)));

    tracing::info!("fetching daily report for {}", args.date);
    let report = aggregator.aggregate(args.date).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.date.format("%A, %b %-d"));
    let mut current: Option<Section> = None;
    for row in presenter::report_rows(&report) {
        if current != Some(row.section) {
            println!("\n{}", row.section.title());
            current = Some(row.section);
        }
        if row.unit.is_empty() {
            println!("  {:<22} {}", row.label, row.value);
        } else {
            println!("  {:<22} {} {}", row.label, row.value, row.unit);
        }
    }

    Ok(())
}

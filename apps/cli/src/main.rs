mod config;

use std::sync::Arc;

use chrono::NaiveDate;
use config::{Config, LogFormat, OutputFormat};
use tooltime_core::{NewCheckout, RentalService, RentalServiceTrait, ToolCatalog};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// The checkouts printed by the demo. The first one is rejected on purpose.
fn scenarios() -> Vec<NewCheckout> {
    [
        ("JAKR", 5, 101, (2015, 9, 3)),
        ("LADW", 3, 10, (2020, 7, 2)),
        ("CHNS", 5, 25, (2015, 7, 2)),
        ("JAKD", 6, 0, (2015, 9, 3)),
        ("JAKR", 9, 0, (2015, 7, 2)),
        ("JAKR", 4, 50, (2020, 7, 2)),
    ]
    .into_iter()
    .map(|(code, rental_days, discount_percent, (y, m, d))| NewCheckout {
        tool_code: Some(code.to_string()),
        rental_days,
        discount_percent,
        checkout_date: NaiveDate::from_ymd_opt(y, m, d),
    })
    .collect()
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_format);

    let service = RentalService::new(Arc::new(ToolCatalog::standard()));
    tracing::info!("Loaded {} tools", service.catalog().len());

    for request in scenarios() {
        let agreement = match service.checkout(request) {
            Ok(agreement) => agreement,
            Err(e) => {
                tracing::info!("Skipping scenario: {}", e);
                continue;
            }
        };

        match config.output {
            OutputFormat::Report => println!("{agreement}"),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&agreement.summary())?)
            }
        }
    }

    Ok(())
}

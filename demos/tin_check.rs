//! Validate a TIN from the command line and print the JSON result.
//!
//! ```text
//! cargo run --example tin_check -- "10 120 000 004" AU
//! ABN_REGISTRY_URL=https://abr.example RUST_LOG=tincheck=debug cargo run --example tin_check -- 123456789 CA
//! ```
//!
//! Exits with status 1 when the TIN is rejected.

use std::process::ExitCode;

use tincheck::registry::{RegistryConfig, TinValidator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let validator = match RegistryConfig::from_env().and_then(|c| TinValidator::from_config(&c)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let mut args = std::env::args().skip(1);
    let (Some(tin), Some(country)) = (args.next(), args.next()) else {
        let countries: Vec<&str> = validator.registry().countries().collect();
        eprintln!("usage: tin_check <tin> <country-code>");
        eprintln!("countries: {}", countries.join(", "));
        return ExitCode::from(2);
    };

    let result = validator.validate(&tin, &country).await;
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    }

    if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

use bike_share::config::RunConfig;
use bike_share::normalize::{normalize, stations_from_rows};
use bike_share::report;
use bike_share::sample::sample_rows;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bike_share=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    let mut rows = sample_rows();
    normalize(&mut rows);
    let mut stations = stations_from_rows(&rows).expect("Sample rows are well-formed");
    info!(stations = stations.len(), "Loaded sample ledger");

    let report = report::run(&config, &mut stations).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&report).expect("Report serializes to JSON");
    println!("{json}");
}

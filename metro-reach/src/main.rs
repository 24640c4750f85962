use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metro_reach::config::RunConfig;
use metro_reach::metro::Metro;
use metro_reach::reach::Explorer;
use metro_reach::schema::Scheme;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::from_env()?;

    let scheme = Scheme::load(&config.scheme_path)?;
    let metro = Metro::new(scheme);
    info!(
        path = %config.scheme_path.display(),
        stations = metro.len(),
        "Loaded metro scheme"
    );

    let availability = &config.availability;
    info!(
        station = %availability.target_station_id,
        max_time = availability.max_travel_time,
        unit = %availability.time_unit,
        max_transfers = ?availability.max_transfers,
        "Searching for reachable stations"
    );

    let result = Explorer::new(&metro, &config.reach).explore(availability)?;
    if result.truncated {
        warn!("Search bounds were hit; listing may be incomplete");
    }

    let mut stations: Vec<_> = result.stations.into_iter().collect();
    stations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    for station in stations {
        println!("{station}");
    }

    Ok(())
}

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::DroneLogBook;
use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result, ResultExt};
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.build_client()?;

        match &self.cli.command {
            Commands::Flight { guid, hydrate } => {
                let flight = client.get_flight(Some(guid.as_str()), *hydrate).await?;
                self.output(&flight)
            }
            Commands::Flights { page, hydrate } => {
                let flights = client.get_flights(*page, *hydrate).await?;
                self.output(&flights)
            }
            Commands::Drone { guid } => {
                let drone = client.get_drone(Some(guid.as_str())).await?;
                self.output(&drone)
            }
            Commands::Drones => {
                let drones = client.get_drones().await?;
                self.output(&drones)
            }
            Commands::Place {
                guid,
                usgs_altitude,
            } => self.place(&client, guid, *usgs_altitude).await,
            Commands::Equipment { guid } => {
                let equipment = client.get_equipment(Some(guid.as_str())).await?;
                self.output(&equipment)
            }
            Commands::Scoops => {
                let scoops = client.get_scoops().await?;
                let rows: Vec<_> = scoops
                    .iter()
                    .map(|s| {
                        json!({
                            "name": s.name,
                            "label": s.scoop_label,
                            "serials": s.sensor_serials(),
                        })
                    })
                    .collect();
                self.output(&rows)
            }
            Commands::Download { guid, output } => {
                let body = client
                    .download_log(Some(guid.as_str()), Some(output.as_path()))
                    .await?;
                self.output(&json!({
                    "flight": guid,
                    "path": output.display().to_string(),
                    "bytes": body.map_or(0, |b| b.len()),
                }))
            }
        }
    }

    /// Build the client from flags, falling back to the credential file
    fn build_client(&self) -> Result<DroneLogBook> {
        let credentials = match (&self.cli.api_key, &self.cli.dlb_url) {
            (Some(api_key), Some(dlb_url)) => Credentials::new(api_key, dlb_url),
            (None, None) => match &self.cli.credentials {
                Some(path) => Credentials::from_file(path)?,
                None => Credentials::from_default_file()?,
            },
            _ => {
                return Err(Error::config(
                    "--api-key and --dlb-url must be given together",
                ))
            }
        };

        let mut builder = ClientConfig::builder()
            .timeout(Duration::from_secs(self.cli.timeout_secs))
            .max_pages(self.cli.max_pages);
        if let Some(api_url) = &self.cli.api_url {
            builder = builder.api_url(api_url);
        }

        let client = DroneLogBook::with_config(credentials, builder.build())?;
        info!("Using DroneLogBook at {}", client.dlb_url());
        Ok(client)
    }

    /// Fetch a place, refreshing its altitude when asked
    async fn place(&self, client: &DroneLogBook, guid: &str, usgs_altitude: bool) -> Result<()> {
        let Some(mut place) = client.get_place(Some(guid)).await? else {
            return self.output(&None::<()>);
        };

        if usgs_altitude {
            let elevation = client.elevation_client()?;
            let update = place.refresh_altitude(&elevation).await?;
            return self.output(&json!({ "place": place, "elevation": update }));
        }

        self.output(&place)
    }

    /// Print a value in the selected format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
        .context("Failed to render output")?;
        println!("{text}");
        Ok(())
    }
}

use anyhow::Result;
use clap::Parser;
use dogdisk_uploader::app::App;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "dogdisk-uploader")]
#[command(about = "Upload random dog images to Yandex Disk by breed")]
struct CliArgs {
    /// Breed to upload; prompted for on stdin when omitted.
    #[arg(value_name = "BREED")]
    breed: Option<String>,
}

/// Breed identifiers in the dog API are lowercase.
fn normalize_breed(input: &str) -> String {
    input.trim().to_lowercase()
}

fn prompt_for_breed() -> Result<String> {
    print!("Enter a dog breed: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dogdisk_uploader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting dogdisk-uploader");

    let args = CliArgs::parse();
    let breed = normalize_breed(&match args.breed {
        Some(breed) => breed,
        None => prompt_for_breed()?,
    });

    if breed.is_empty() {
        error!("No breed given");
        std::process::exit(1);
    }

    match App::new() {
        Ok(app) => match app.run(&breed).await {
            Ok(_) => {
                info!("Upload run completed");
                Ok(())
            }
            Err(e) => {
                error!("Upload run failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use trichofy::{AdvisorySession, SubmissionFields};

#[derive(Parser)]
#[command(name = "trichofy", about = "Hair care advisory engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a hair photo and print care guidance.
    Advise {
        /// Path to the photo to classify.
        image: PathBuf,
        /// City for the weather-aware seasonal tips.
        #[arg(long)]
        city: Option<String>,
        /// Routine intensity: light, balanced or intense.
        #[arg(long, default_value = "balanced")]
        intensity: String,
    },
    /// Submit a provider product and print the catalog.
    Register {
        name: String,
        brand: String,
        /// Category id: shampoo, conditioner, oil, treatment or styler.
        #[arg(long)]
        category: String,
        /// Category fields as key=value pairs, e.g. sulfate_free=yes.
        #[arg(long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
        /// Comma-separated target hair types.
        #[arg(long, default_value = "")]
        hair_types: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("Expected key=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    trichofy::init_tracing();
    let cli = Cli::parse();
    let mut session = AdvisorySession::from_env();

    match cli.command {
        Command::Advise {
            image,
            city,
            intensity,
        } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("Failed to read image {}", image.display()))?;
            let file_name = image
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("photo.jpg")
                .to_string();
            session.select_photo(file_name, bytes);

            let result = session
                .analyze()
                .await
                .map_err(|message| anyhow::anyhow!(message))?;

            println!("Hair type: {}", result.hair_type);
            for (label, probability) in result.ranked_probabilities() {
                println!("  {:<24} {:.1}%", label, probability * 100.0);
            }
            if !result.products.is_empty() {
                println!("\nRecommended products:");
                for product in &result.products {
                    let score = product
                        .match_score
                        .map(|s| format!(" ({:.0}% match)", s))
                        .unwrap_or_default();
                    println!("  {} by {}{}", product.name, product.brand, score);
                }
            }

            if let Some(city) = city {
                session.set_city(city);
                match session.fetch_weather().await {
                    Ok(snapshot) => {
                        println!(
                            "\nWeather in {}: {:.0}°C, {}% humidity, {}",
                            snapshot.city,
                            snapshot.temperature_c,
                            snapshot.humidity_percent,
                            snapshot.description
                        );
                        println!("\nSeasonal tips:");
                        for tip in session.seasonal_tips() {
                            println!("  - {}", tip.text);
                        }
                    }
                    Err(message) => info!("{}", message),
                }
            }

            println!("\nWeekly routine:");
            for block in session.weekly_plan(&intensity) {
                println!("\n{} ({})", block.title, block.schedule);
                for step in &block.steps {
                    println!("  - {}", step);
                }
            }
        }
        Command::Register {
            name,
            brand,
            category,
            fields,
            hair_types,
            image,
            description,
        } => {
            let extras: HashMap<String, String> = fields.into_iter().collect();
            let submission = SubmissionFields {
                name,
                brand,
                hair_types,
                image_ref: image,
                description,
            };
            let entry = session
                .submit_product(&submission, Some(&category), &extras)
                .map_err(|message| anyhow::anyhow!(message))?;
            println!("Registered {} by {}", entry.name, entry.brand);
            for listed in session.provider_products() {
                println!(
                    "  [{}] {} by {} (for {})",
                    listed.category.label(),
                    listed.name,
                    listed.brand,
                    listed.hair_types.join(", ")
                );
            }
        }
    }

    Ok(())
}

mod load;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use recipe_hub_core::{InventoryFilter, PreparationMode, RecipeFilter};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipe-hub")]
#[command(about = "Recipe Hub CLI", long_about = None)]
struct Cli {
    /// JSON file with `recipes` and `inventory` arrays to load
    #[arg(long, env = "RECIPE_HUB_DATA")]
    data: Option<PathBuf>,

    /// Load the sample recipes and pantry (implied when no data file is given)
    #[arg(long)]
    sample: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recipe
    Recipes,
    /// List every inventory item
    Inventory,
    /// Check whether a recipe can be made from current stock
    Check {
        /// Recipe ID, e.g. R-00001
        id: String,
    },
    /// Rank recipes by how many of their ingredients are in stock
    Suggest,
    /// Deduct a recipe's ingredients from stock and report what was used
    Prepare {
        id: String,
        #[arg(long, default_value_t = 1.0)]
        servings: f64,
        /// Deduct nothing unless every ingredient is in stock
        #[arg(long)]
        all_or_nothing: bool,
    },
    /// List what has to be bought to cook the given recipes
    ShoppingList {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Low-stock and expiry alerts
    Alerts {
        /// Date to evaluate expiry against (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Inventory value and counts
    Analytics {
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Show a recipe rewritten for a different number of servings
    Scale { id: String, servings: f64 },
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let today = chrono::Local::now().date_naive();
    let mut store = load::load_store(cli.data.as_deref(), cli.sample, today)?;

    match cli.command {
        Commands::Recipes => print_json(&store.recipes().list(&RecipeFilter::default()))?,
        Commands::Inventory => print_json(&store.inventory().list(&InventoryFilter::default()))?,
        Commands::Check { id } => print_json(&store.check_availability(&id)?)?,
        Commands::Suggest => print_json(&store.suggest())?,
        Commands::Prepare {
            id,
            servings,
            all_or_nothing,
        } => {
            let mode = if all_or_nothing {
                PreparationMode::AllOrNothing
            } else {
                PreparationMode::BestEffort
            };
            print_json(&store.prepare(&id, servings, mode)?)?;
        }
        Commands::ShoppingList { ids } => print_json(&store.shopping_list(&ids)?)?,
        Commands::Alerts { today: date } => print_json(&store.alerts(date.unwrap_or(today)))?,
        Commands::Analytics { today: date } => {
            print_json(&store.analytics(date.unwrap_or(today)))?
        }
        Commands::Scale { id, servings } => print_json(&store.scale(&id, servings)?)?,
    }

    Ok(())
}

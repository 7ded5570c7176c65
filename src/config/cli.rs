use crate::utils::error::Result;
use crate::utils::validation::{parse_time_of_day, validate_non_empty_string, Validate};
use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every restaurant in the directory
    List {
        /// Only show restaurants open right now
        #[arg(long)]
        open: bool,
    },
    /// Look up one restaurant by name (case-insensitive)
    Find { name: String },
    /// Search restaurant names and locations
    Search { query: String },
    /// Show a restaurant's menu
    Menu { restaurant: String },
    /// Tell whether a restaurant is open
    Status {
        restaurant: String,
        /// Check against this time of day instead of the clock (HH:MM[:SS])
        #[arg(long)]
        at: Option<String>,
    },
    /// Price an order; unknown items are ignored
    Total {
        restaurant: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::List { .. } | Command::Search { .. } => Ok(()),
            Command::Find { name } => validate_non_empty_string("name", name),
            Command::Menu { restaurant } | Command::Total { restaurant, .. } => {
                validate_non_empty_string("restaurant", restaurant)
            }
            Command::Status { restaurant, at } => {
                validate_non_empty_string("restaurant", restaurant)?;
                if let Some(at) = at {
                    parse_time_of_day("at", at)?;
                }
                Ok(())
            }
        }
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::clock::{FixedClock, SystemClock};
pub use crate::config::toml_config::DirectoryConfig;
pub use crate::core::{directory::RestaurantDirectory, Clock, MenuItem, Restaurant};
pub use crate::utils::error::{DirectoryError, Result};

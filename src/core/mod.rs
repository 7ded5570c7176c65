pub mod directory;

pub use crate::domain::model::{MenuItem, Restaurant};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;

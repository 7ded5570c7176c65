use crate::domain::ports::Clock;
use crate::utils::error::{DirectoryError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A restaurant with its operating window and menu.
///
/// The window is `[opening_time, closing_time)` on a single day. Hours that
/// cross midnight (closing before opening) never report as open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    pub fn is_open_by(&self, clock: &impl Clock) -> bool {
        self.is_open_at(clock.now())
    }

    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.opening_time <= time && time < self.closing_time
    }

    pub fn get_menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn find_menu_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name == name)
    }

    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        let item = MenuItem::new(name, price);
        tracing::debug!(restaurant = %self.name, item = %item.name, price, "adding menu item");
        self.menu.push(item);
    }

    pub fn remove_from_menu(&mut self, name: &str) -> Result<MenuItem> {
        let index = self
            .menu
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| DirectoryError::ItemNotFound {
                name: name.to_string(),
            })?;

        tracing::debug!(restaurant = %self.name, item = name, "removing menu item");
        Ok(self.menu.remove(index))
    }

    /// Sums the prices of the named items. Names missing from the menu add nothing.
    pub fn get_total_cost<S: AsRef<str>>(&self, item_names: &[S]) -> u64 {
        item_names
            .iter()
            .filter_map(|name| self.find_menu_item(name.as_ref()))
            .map(|item| u64::from(item.price))
            .sum()
    }
}

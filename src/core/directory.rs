use crate::core::{Clock, Restaurant};
use crate::utils::error::{DirectoryError, Result};
use chrono::NaiveTime;

/// In-memory registry of restaurants, kept in insertion order.
///
/// Names are matched case-insensitively. Duplicates are accepted on insert and
/// the first one wins on lookup or removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantDirectory {
    restaurants: Vec<Restaurant>,
}

fn names_match(stored: &str, query: &str) -> bool {
    stored.to_lowercase() == query.to_lowercase()
}

impl RestaurantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_restaurant(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> &mut Restaurant {
        self.insert(Restaurant::new(name, location, opening_time, closing_time))
    }

    pub fn insert(&mut self, restaurant: Restaurant) -> &mut Restaurant {
        tracing::debug!(
            restaurant = restaurant.name(),
            location = restaurant.location(),
            "adding restaurant"
        );
        let index = self.restaurants.len();
        self.restaurants.push(restaurant);
        &mut self.restaurants[index]
    }

    pub fn remove_restaurant(&mut self, name: &str) -> Result<Restaurant> {
        let index = self.position(name)?;
        let removed = self.restaurants.remove(index);
        tracing::debug!(restaurant = removed.name(), "removed restaurant");
        Ok(removed)
    }

    pub fn find_restaurant_by_name(&self, name: &str) -> Result<&Restaurant> {
        let index = self.position(name)?;
        Ok(&self.restaurants[index])
    }

    pub fn find_restaurant_by_name_mut(&mut self, name: &str) -> Result<&mut Restaurant> {
        let index = self.position(name)?;
        Ok(&mut self.restaurants[index])
    }

    /// Restaurants whose name or location contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Restaurant> {
        let needle = query.trim().to_lowercase();
        self.restaurants
            .iter()
            .filter(|restaurant| {
                restaurant.name().to_lowercase().contains(&needle)
                    || restaurant.location().to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn open_restaurants(&self, clock: &impl Clock) -> Vec<&Restaurant> {
        let now = clock.now();
        self.restaurants
            .iter()
            .filter(|restaurant| restaurant.is_open_at(now))
            .collect()
    }

    pub fn get_restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.restaurants
            .iter()
            .position(|restaurant| names_match(restaurant.name(), name))
            .ok_or_else(|| DirectoryError::RestaurantNotFound {
                name: name.to_string(),
            })
    }
}

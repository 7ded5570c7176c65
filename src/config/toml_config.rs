use crate::core::directory::RestaurantDirectory;
use crate::core::Restaurant;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{parse_time_of_day, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 餐廳目錄的種子檔 (TOML)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub restaurants: Vec<RestaurantConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    pub opening_time: String,
    pub closing_time: String,
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub price: u32,
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CITY}); 未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 建立餐廳目錄 (先驗證)
    pub fn build_directory(&self) -> Result<RestaurantDirectory> {
        let mut directory = RestaurantDirectory::new();

        for (index, entry) in self.restaurants.iter().enumerate() {
            directory.insert(entry.to_restaurant(index)?);
        }

        tracing::info!(restaurants = directory.len(), "directory loaded");
        Ok(directory)
    }
}

impl RestaurantConfig {
    fn to_restaurant(&self, index: usize) -> Result<Restaurant> {
        self.check(index)?;

        let field = |name: &str| format!("restaurants[{}].{}", index, name);
        let opening_time = parse_time_of_day(&field("opening_time"), &self.opening_time)?;
        let closing_time = parse_time_of_day(&field("closing_time"), &self.closing_time)?;

        if closing_time <= opening_time {
            tracing::debug!(
                restaurant = %self.name,
                "closing time is not after opening time, restaurant will never report open"
            );
        }

        let mut restaurant = Restaurant::new(&self.name, &self.location, opening_time, closing_time);
        for item in &self.menu {
            restaurant.add_to_menu(&item.name, item.price);
        }
        Ok(restaurant)
    }

    fn check(&self, index: usize) -> Result<()> {
        validate_non_empty_string(&format!("restaurants[{}].name", index), &self.name)?;
        validate_non_empty_string(&format!("restaurants[{}].location", index), &self.location)?;

        for (item_index, item) in self.menu.iter().enumerate() {
            validate_non_empty_string(
                &format!("restaurants[{}].menu[{}].name", index, item_index),
                &item.name,
            )?;
        }

        Ok(())
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        for (index, entry) in self.restaurants.iter().enumerate() {
            entry.to_restaurant(index)?;
        }
        Ok(())
    }
}

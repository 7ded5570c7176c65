use clap::Parser;
use restaurant_finder::config::cli::Command;
use restaurant_finder::utils::validation::{parse_time_of_day, Validate};
use restaurant_finder::utils::logger;
use restaurant_finder::{
    CliConfig, Clock, DirectoryConfig, DirectoryError, FixedClock, Restaurant,
    RestaurantDirectory, SystemClock,
};
use serde_json::json;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let directory = match DirectoryConfig::from_file(&config.config)
        .and_then(|seed| seed.build_directory())
    {
        Ok(directory) => directory,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(&config, &directory) {
        exit_with(&e);
    }
}

fn exit_with(e: &DirectoryError) -> ! {
    tracing::error!("{} (severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn run(config: &CliConfig, directory: &RestaurantDirectory) -> restaurant_finder::Result<()> {
    match &config.command {
        Command::List { open } => {
            let restaurants: Vec<&Restaurant> = if *open {
                directory.open_restaurants(&SystemClock)
            } else {
                directory.get_restaurants().iter().collect()
            };
            print_restaurants(config.json, &restaurants)
        }
        Command::Find { name } => {
            let restaurant = directory.find_restaurant_by_name(name)?;
            print_restaurants(config.json, &[restaurant])
        }
        Command::Search { query } => {
            let restaurants = directory.search(query);
            tracing::info!(query = %query, matches = restaurants.len(), "search finished");
            print_restaurants(config.json, &restaurants)
        }
        Command::Menu { restaurant } => {
            let restaurant = directory.find_restaurant_by_name(restaurant)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(restaurant.get_menu())?);
            } else {
                println!("🍽  {}", restaurant.name());
                for item in restaurant.get_menu() {
                    println!("  {:<30} {:>6}", item.name, item.price);
                }
            }
            Ok(())
        }
        Command::Status { restaurant, at } => {
            let restaurant = directory.find_restaurant_by_name(restaurant)?;
            let checked_at = match at {
                Some(at) => parse_time_of_day("at", at)?,
                None => SystemClock.now(),
            };
            let open = restaurant.is_open_by(&FixedClock::new(checked_at));

            if config.json {
                let status = json!({
                    "restaurant": restaurant.name(),
                    "open": open,
                    "checked_at": checked_at.format("%H:%M:%S").to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!(
                    "{} is {} at {} (hours {} - {})",
                    restaurant.name(),
                    if open { "open" } else { "closed" },
                    checked_at.format("%H:%M"),
                    restaurant.opening_time().format("%H:%M"),
                    restaurant.closing_time().format("%H:%M"),
                );
            }
            Ok(())
        }
        Command::Total { restaurant, items } => {
            let restaurant = directory.find_restaurant_by_name(restaurant)?;
            let total = restaurant.get_total_cost(items.as_slice());

            let skipped: Vec<&String> = items
                .iter()
                .filter(|name| restaurant.find_menu_item(name).is_none())
                .collect();
            if !skipped.is_empty() {
                tracing::info!("Items not on the menu were not charged: {:?}", skipped);
            }

            if config.json {
                let order = json!({
                    "restaurant": restaurant.name(),
                    "items": items,
                    "total": total,
                });
                println!("{}", serde_json::to_string_pretty(&order)?);
            } else {
                println!("Order total at {}: {}", restaurant.name(), total);
            }
            Ok(())
        }
    }
}

fn print_restaurants(as_json: bool, restaurants: &[&Restaurant]) -> restaurant_finder::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(restaurants)?);
        return Ok(());
    }

    if restaurants.is_empty() {
        println!("No restaurants found");
    }
    for restaurant in restaurants {
        println!(
            "{} ({}) {} - {}, {} menu items",
            restaurant.name(),
            restaurant.location(),
            restaurant.opening_time().format("%H:%M"),
            restaurant.closing_time().format("%H:%M"),
            restaurant.get_menu().len(),
        );
    }
    Ok(())
}

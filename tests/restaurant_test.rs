use chrono::NaiveTime;
use restaurant_finder::{Clock, DirectoryError, FixedClock, MenuItem, Restaurant};
use std::cell::Cell;

fn time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M:%S").unwrap()
}

fn setup() -> Restaurant {
    let mut restaurant =
        Restaurant::new("Amelie's cafe", "Chennai", time("10:30:00"), time("22:00:00"));
    restaurant.add_to_menu("Sweet corn soup", 119);
    restaurant.add_to_menu("Vegetable lasagne", 269);
    restaurant
}

/// Counts how often the restaurant asked for the time.
struct RecordingClock {
    time: NaiveTime,
    calls: Cell<usize>,
}

impl Clock for RecordingClock {
    fn now(&self) -> NaiveTime {
        self.calls.set(self.calls.get() + 1);
        self.time
    }
}

// open / closed

#[test]
fn is_restaurant_open_should_return_true_if_time_is_between_opening_and_closing_time() {
    let restaurant = setup();
    let clock = RecordingClock {
        time: time("14:00:00"),
        calls: Cell::new(0),
    };

    assert!(restaurant.is_open_by(&clock));
    assert_eq!(clock.calls.get(), 1);
}

#[test]
fn is_restaurant_open_should_return_false_if_time_is_outside_opening_and_closing_time() {
    let restaurant = setup();
    let clock = RecordingClock {
        time: time("09:00:00"),
        calls: Cell::new(0),
    };

    assert!(!restaurant.is_open_by(&clock));
    assert_eq!(clock.calls.get(), 1);
}

#[test]
fn fixed_clock_and_explicit_time_agree() {
    let restaurant = setup();

    for value in ["09:00:00", "10:30:00", "14:00:00", "22:00:00", "23:59:59"] {
        assert_eq!(
            restaurant.is_open_by(&FixedClock::new(time(value))),
            restaurant.is_open_at(time(value)),
            "disagreement at {value}"
        );
    }
}

#[test]
fn empty_window_is_never_open_by_system_clock() {
    let restaurant = Restaurant::new("Closed for good", "Chennai", time("10:00:00"), time("10:00:00"));

    assert!(!restaurant.is_restaurant_open());
}

// menu

#[test]
fn adding_item_to_menu_should_increase_menu_size_by_1() {
    let mut restaurant = setup();
    let initial_menu_size = restaurant.get_menu().len();

    restaurant.add_to_menu("Sizzling brownie", 319);

    assert_eq!(restaurant.get_menu().len(), initial_menu_size + 1);
    assert_eq!(
        restaurant.get_menu().last(),
        Some(&MenuItem::new("Sizzling brownie", 319))
    );
}

#[test]
fn removing_item_from_menu_should_decrease_menu_size_by_1() {
    let mut restaurant = setup();
    let initial_menu_size = restaurant.get_menu().len();

    restaurant.remove_from_menu("Vegetable lasagne").unwrap();

    assert_eq!(restaurant.get_menu().len(), initial_menu_size - 1);
}

#[test]
fn removing_item_that_does_not_exist_should_throw_exception() {
    let mut restaurant = setup();

    let result = restaurant.remove_from_menu("French fries");

    assert!(matches!(result, Err(DirectoryError::ItemNotFound { ref name }) if name == "French fries"));
    assert_eq!(restaurant.get_menu().len(), 2);
}

#[test]
fn duplicate_menu_items_are_appended() {
    let mut restaurant = setup();

    restaurant.add_to_menu("Sweet corn soup", 119);

    assert_eq!(restaurant.get_menu().len(), 3);
}

#[test]
fn get_menu_is_stable_without_mutation() {
    let restaurant = setup();

    assert_eq!(restaurant.get_menu(), restaurant.get_menu());
    assert_eq!(
        restaurant.get_menu(),
        &[
            MenuItem::new("Sweet corn soup", 119),
            MenuItem::new("Vegetable lasagne", 269)
        ]
    );
}

// order total

#[test]
fn total_cost_of_no_items_is_zero() {
    let restaurant = setup();
    let items: [&str; 0] = [];

    assert_eq!(restaurant.get_total_cost(&items), 0);
}

#[test]
fn total_cost_sums_selected_items() {
    let restaurant = setup();

    assert_eq!(
        restaurant.get_total_cost(&["Sweet corn soup", "Vegetable lasagne"]),
        388
    );
}

#[test]
fn total_cost_ignores_items_not_on_menu() {
    let restaurant = setup();

    assert_eq!(restaurant.get_total_cost(&["NonexistentItem"]), 0);
    assert_eq!(
        restaurant.get_total_cost(&["Sweet corn soup".to_string(), "French fries".to_string()]),
        119
    );
}

use crate::domain::model::Restaurant;
use crate::domain::ports::Clock;
use chrono::{Local, NaiveTime};

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time. `status` pins its check time with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    time: NaiveTime,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time
    }
}

impl Restaurant {
    /// Open right now, according to the local wall clock.
    pub fn is_restaurant_open(&self) -> bool {
        self.is_open_by(&SystemClock)
    }
}

use chrono::NaiveTime;

/// Source of the current time of day.
///
/// Opening-hours checks go through this trait so a fixed time can be supplied
/// without touching the code that asks the question.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

//! `mp_core` — deterministic day-tick simulation core.
//!
//! No IO, no wall-clock time. State advances only on explicit commands,
//! and every day tick is synchronous and replayable.

mod calendar;
mod clock;
mod economy;
mod error;
pub mod metrics;
mod observer;
mod research;
mod simulation;
mod types;

pub use calendar::{days_in_month, is_leap_year, CalendarDate, Weekday, MAX_YEAR, MIN_YEAR};
pub use clock::{ClockSnapshot, DayPassedFn, GameClock, MAX_GAME_DAY, MIN_GAME_DAY};
pub use economy::{Economy, PersonnelPool};
pub use error::{ClockError, DateError, ResearchError};
pub use metrics::{compute_metrics, MetricsFileWriter, MetricsSnapshot};
pub use observer::Listeners;
pub use research::{
    MissingResourcesFn, ResearchCompletedFn, ResearchGraph, TechState, Technology,
};
pub use simulation::Simulation;
pub use types::{
    PersonnelClass, ResourceConstraints, ResourceMissing, TechId, TechnologyDef, TechnologyKind,
};

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

#[cfg(test)]
mod tests;

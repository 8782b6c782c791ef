//! Day clock: calendar date, simulated-day counter, weekday cycle, and the
//! day-passed observer registry.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDate, Weekday};
use crate::error::ClockError;
use crate::observer::Listeners;

pub const MIN_GAME_DAY: u16 = 1;
/// Hard horizon on elapsed simulated days, independent of the calendar range.
pub const MAX_GAME_DAY: u16 = 1826;

/// Immutable view of the clock handed to day observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub date: CalendarDate,
    pub game_day: u16,
    pub weekday: Weekday,
}

pub type DayPassedFn = dyn Fn(&ClockSnapshot);

/// One instance for the whole simulation run; never reset.
pub struct GameClock {
    date: CalendarDate,
    game_day: u16,
    weekday: Weekday,
    day_observers: Listeners<DayPassedFn>,
}

impl GameClock {
    /// Starts at 1 January 1939, game day 1. The opening day falls on a
    /// Thursday.
    pub fn new() -> Self {
        Self {
            date: CalendarDate::default(),
            game_day: MIN_GAME_DAY,
            weekday: Weekday::Thursday,
            day_observers: Listeners::default(),
        }
    }

    pub fn current_date(&self) -> CalendarDate {
        self.date
    }

    pub fn current_game_day(&self) -> u16 {
        self.game_day
    }

    pub fn current_weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            date: self.date,
            game_day: self.game_day,
            weekday: self.weekday,
        }
    }

    /// Advance date, weekday, and day counter by one day, then notify day
    /// observers with a snapshot.
    ///
    /// Fails atomically: the day-limit check and the calendar successor are
    /// both computed before any field is committed, so a failed advance
    /// leaves the clock on its last valid day and notifies nobody.
    pub fn advance_day(&mut self) -> Result<(), ClockError> {
        if self.game_day >= MAX_GAME_DAY {
            return Err(ClockError::DayLimitExceeded);
        }
        let next_date = self.date.next_day()?;

        self.date = next_date;
        self.weekday = self.weekday.next();
        self.game_day += 1;

        let snapshot = self.snapshot();
        self.day_observers.notify(|observer| observer(&snapshot));
        Ok(())
    }

    /// Advance `days` times, short-circuiting on the first failure.
    pub fn advance_days(&mut self, days: u16) -> Result<(), ClockError> {
        for _ in 0..days {
            self.advance_day()?;
        }
        Ok(())
    }

    /// Registers a weakly-held day observer. The caller keeps the `Rc`
    /// token alive for as long as it wants to receive notifications.
    /// Observers must be commutative: registration order is not part of the
    /// contract.
    pub fn add_day_observer(&mut self, observer: &Rc<DayPassedFn>) {
        self.day_observers.add(observer);
    }

    pub fn day_observer_count(&self) -> usize {
        self.day_observers.live_count()
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

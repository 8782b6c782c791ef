//! In-universe calendar over the fixed 1939–1946 range.
//!
//! `CalendarDate` is a validated value type: every constructor and setter
//! checks the day against the month length, and `advance_one_day` computes
//! its successor before committing, so a failed advance leaves the date
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::error::DateError;

pub const MIN_YEAR: u16 = 1939;
pub const MAX_YEAR: u16 = 1946;

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const fn next(self) -> Self {
        match self {
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday => Self::Sunday,
            Self::Sunday => Self::Monday,
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

// ---------------------------------------------------------------------------
// Month lengths
// ---------------------------------------------------------------------------

/// Leap rule used by the simulation: every fourth year, no century
/// correction. Exact for 1939–1946.
pub const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0
}

/// Days in `month` of `year`; `0` for a month outside 1..=12.
pub const fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// CalendarDate
// ---------------------------------------------------------------------------

// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub fn new(day: u8, month: u8, year: u16) -> Result<Self, DateError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(DateError::YearOutOfRange(year));
        }
        if month < 1 || month > 12 {
            return Err(DateError::MonthOutOfRange(month));
        }
        if day < 1 || day > days_in_month(month, year) {
            return Err(DateError::DayOutOfRange { day, month, year });
        }
        Ok(Self { year, month, day })
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn year(self) -> u16 {
        self.year
    }

    pub fn set_day(&mut self, day: u8) -> Result<(), DateError> {
        if day < 1 || day > days_in_month(self.month, self.year) {
            return Err(DateError::DayOutOfRange {
                day,
                month: self.month,
                year: self.year,
            });
        }
        self.day = day;
        Ok(())
    }

    /// The current day must still exist in the new month.
    pub fn set_month(&mut self, month: u8) -> Result<(), DateError> {
        if month < 1 || month > 12 {
            return Err(DateError::MonthOutOfRange(month));
        }
        if self.day > days_in_month(month, self.year) {
            return Err(DateError::DayOutOfRange {
                day: self.day,
                month,
                year: self.year,
            });
        }
        self.month = month;
        Ok(())
    }

    /// The current day must still exist in the new year (29 February).
    pub fn set_year(&mut self, year: u16) -> Result<(), DateError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(DateError::YearOutOfRange(year));
        }
        if self.day > days_in_month(self.month, year) {
            return Err(DateError::DayOutOfRange {
                day: self.day,
                month: self.month,
                year,
            });
        }
        self.year = year;
        Ok(())
    }

    /// Successor date, computed without mutating `self`.
    pub fn next_day(self) -> Result<Self, DateError> {
        let mut day = self.day + 1;
        let mut month = self.month;
        let mut year = self.year;
        if day > days_in_month(month, year) {
            day = 1;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
                if year > MAX_YEAR {
                    return Err(DateError::RangeExceeded);
                }
            }
        }
        Ok(Self { year, month, day })
    }

    /// Advance in place; on `RangeExceeded` the date is left unchanged.
    pub fn advance_one_day(&mut self) -> Result<(), DateError> {
        *self = self.next_day()?;
        Ok(())
    }
}

impl Default for CalendarDate {
    /// 1 January of the first simulated year.
    fn default() -> Self {
        Self {
            year: MIN_YEAR,
            month: 1,
            day: 1,
        }
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

//! Error taxonomy.
//!
//! Validation errors (`DateError` range variants, `ResearchError`) are
//! recoverable and never mutate state. `DateError::RangeExceeded` and
//! `ClockError::DayLimitExceeded` are fatal simulation boundaries: the
//! advance fails atomically and the driver is expected to stop advancing.
//! Command rejections (insufficient funds, stock, or personnel) are plain
//! `bool` returns, not errors.

use crate::calendar::{MAX_YEAR, MIN_YEAR};
use crate::clock::MAX_GAME_DAY;
use crate::types::TechId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("year {0} is outside {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(u16),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u8),
    #[error("day {day} does not exist in month {month} of {year}")]
    DayOutOfRange { day: u8, month: u8, year: u16 },
    #[error("calendar cannot advance past 31 December {max}", max = MAX_YEAR)]
    RangeExceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("simulation exceeded the {max}-day limit", max = MAX_GAME_DAY)]
    DayLimitExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResearchError {
    #[error("unknown technology id `{0}`")]
    UnknownTechnology(TechId),
}

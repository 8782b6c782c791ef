use super::*;
use crate::test_fixtures::{
    base_catalog, base_constraints, base_simulation, simple_tech, staff_scientists,
};

mod economy;
mod simulation;

// --- Test helpers -------------------------------------------------------

fn date(day: u8, month: u8, year: u16) -> CalendarDate {
    CalendarDate::new(day, month, year).expect("test date should be valid")
}

fn tech_id(id: &str) -> TechId {
    TechId(id.to_string())
}

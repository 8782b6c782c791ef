//! Progression regression tests.
//!
//! These run the full day loop with the research director over the shipped
//! content and verify that milestones are reached within expected day
//! windows. They catch pacing regressions from content rescaling.

use mp_control::{Director, ResearchDirector};
use mp_core::{ClockError, TechId};
use mp_world::build_simulation;

fn content_dir() -> String {
    let manifest = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    format!("{manifest}/../../content")
}

fn tech_id(id: &str) -> TechId {
    TechId(id.to_string())
}

#[test]
fn director_completes_the_opening_programs_on_schedule() {
    let sim = build_simulation(&content_dir()).expect("shipped content loads");
    let mut director = ResearchDirector;

    // basic_physics (30 days) must land within the first 35 days.
    for _ in 0..35 {
        director.run_day(&sim);
        sim.advance_day().unwrap();
    }
    assert!(
        sim.research().borrow().is_completed(&tech_id("basic_physics")),
        "root program should finish within 35 days"
    );

    // With the root done, a second program (75 days) fits well within 200.
    for _ in 0..165 {
        director.run_day(&sim);
        sim.advance_day().unwrap();
    }
    let completed = sim
        .research()
        .borrow()
        .technologies()
        .values()
        .filter(|tech| tech.is_completed())
        .count();
    assert!(
        completed >= 2,
        "two programs should complete within 200 days, got {completed}"
    );
}

#[test]
fn directed_run_keeps_the_project_solvent() {
    let sim = build_simulation(&content_dir()).expect("shipped content loads");
    let mut director = ResearchDirector;

    for _ in 0..200 {
        director.run_day(&sim);
        sim.advance_day().unwrap();
    }

    let economy = sim.economy().borrow();
    assert!(
        economy.money() > 0,
        "the opening two programs must not bankrupt the project"
    );
    assert!(economy.morale() >= 60, "solvent runs gain morale");
}

#[test]
fn run_stops_cleanly_at_the_day_limit() {
    let sim = build_simulation(&content_dir()).expect("shipped content loads");

    let outcome = sim.advance_days(mp_core::MAX_GAME_DAY);
    assert_eq!(outcome, Err(ClockError::DayLimitExceeded));
    assert_eq!(sim.clock().borrow().current_game_day(), mp_core::MAX_GAME_DAY);
}

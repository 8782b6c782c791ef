//! Shared test fixtures for `mp_core` and downstream crates.
//!
//! `base_constraints()` keeps every number small so cost arithmetic is easy
//! to assert against; `base_catalog()` is a two-technology chain (a root and
//! one dependent) mirroring the smallest interesting prerequisite graph.

use crate::{
    PersonnelClass, ResourceConstraints, Simulation, TechId, TechnologyDef, TechnologyKind,
};

pub fn base_constraints() -> ResourceConstraints {
    ResourceConstraints {
        maximum_budget: 1_000_000,
        initial_money: 10_000,
        initial_uranium: 0,
        initial_plutonium: 0,
        maximal_uranium: 1_000,
        maximal_plutonium: 500,
        initial_morale: 50,
        initial_security: 50,
        minimal_total_morale: 0,
        maximal_total_morale: 100,
        minimal_total_security: 0,
        maximal_total_security: 100,
        worker_daily_cost: 1,
        worker_hiring_cost: 1,
        scientist_daily_cost: 5,
        scientist_hiring_cost: 5,
        engineer_daily_cost: 2,
        engineer_hiring_cost: 2,
        army_daily_cost: 3,
        army_hiring_cost: 3,
        total_personnel_ceiling: 1_000,
        initial_total_workers: 200,
        maximum_total_workers: 500,
        initial_total_scientists: 100,
        maximum_total_scientists: 500,
        initial_total_engineers: 50,
        maximum_total_engineers: 500,
        initial_total_army: 50,
        maximum_total_army: 500,
    }
}

/// Minimal technology: theory, no prerequisites, no costs or requirements.
pub fn simple_tech(id: &str, research_days: u16) -> TechnologyDef {
    TechnologyDef {
        id: TechId(id.to_string()),
        name: id.to_string(),
        kind: TechnologyKind::Theory,
        research_days,
        prerequisites: vec![],
        description: String::new(),
        money_cost: 0,
        daily_cost: 0,
        uranium_required: 0,
        plutonium_required: 0,
        workers_required: 0,
        engineers_required: 0,
        scientists_required: 0,
        army_required: 0,
        buildings_required: vec![],
        characters_involved: vec![],
    }
}

/// `basic_physics` (3 days, 1000 money, 10 scientists) unlocking
/// `uranium_enrichment` (5 days, 2000 money, 20 scientists).
pub fn base_catalog() -> Vec<TechnologyDef> {
    let mut basic_physics = simple_tech("basic_physics", 3);
    basic_physics.name = "Basics of Nuclear Physics".to_string();
    basic_physics.money_cost = 1_000;
    basic_physics.daily_cost = 100;
    basic_physics.scientists_required = 10;

    let mut uranium_enrichment = simple_tech("uranium_enrichment", 5);
    uranium_enrichment.name = "Uranium Enrichment".to_string();
    uranium_enrichment.prerequisites = vec![TechId("basic_physics".to_string())];
    uranium_enrichment.money_cost = 2_000;
    uranium_enrichment.daily_cost = 200;
    uranium_enrichment.scientists_required = 20;

    vec![basic_physics, uranium_enrichment]
}

/// A wired simulation over `base_constraints` + `base_catalog`.
pub fn base_simulation() -> Simulation {
    Simulation::new(base_constraints(), base_catalog())
}

/// Puts `count` scientists to work, asserting the hire succeeded.
pub fn staff_scientists(simulation: &Simulation, count: u32) {
    assert!(
        simulation
            .economy()
            .borrow_mut()
            .hire(PersonnelClass::Scientists, count),
        "fixture hire of {count} scientists should succeed"
    );
}

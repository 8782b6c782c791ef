//! Content loading shared between the CLI and tests.
//!
//! The core performs no file IO; this crate reads `resources.json` and
//! `technologies.json` from a content directory, maps them onto the core's
//! constraint/catalog types, and validates cross-references. Malformed or
//! missing fields fail the load; authoring errors (dangling prerequisites,
//! duplicate ids) panic with a message.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use mp_core::{ResourceConstraints, Simulation, TechnologyDef};

// ---------------------------------------------------------------------------
// File shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct CatalogFile {
    technologies: Vec<TechnologyDef>,
}

#[derive(Deserialize)]
struct ConstraintsFile {
    money: MoneySection,
    personnel: PersonnelSection,
}

#[derive(Deserialize)]
struct MoneySection {
    maximum_budget: i64,
    initial_money: i64,
    initial_uranium: u32,
    initial_plutonium: u32,
    maximal_uranium: u32,
    maximal_plutonium: u32,
    initial_morale: u32,
    initial_security: u32,
    minimal_total_morale: u32,
    maximal_total_morale: u32,
    minimal_total_security: u32,
    maximal_total_security: u32,
}

#[derive(Deserialize)]
struct PersonnelSection {
    worker_daily_cost: u32,
    worker_hiring_cost: u32,
    scientist_daily_cost: u32,
    scientist_hiring_cost: u32,
    engineer_daily_cost: u32,
    engineer_hiring_cost: u32,
    army_daily_cost: u32,
    army_hiring_cost: u32,
    total_personnel_ceiling: u64,
    initial_total_workers: u32,
    maximum_total_workers: u32,
    initial_total_scientists: u32,
    maximum_total_scientists: u32,
    initial_total_engineers: u32,
    maximum_total_engineers: u32,
    initial_total_army: u32,
    maximum_total_army: u32,
}

impl From<ConstraintsFile> for ResourceConstraints {
    fn from(file: ConstraintsFile) -> Self {
        let ConstraintsFile { money, personnel } = file;
        Self {
            maximum_budget: money.maximum_budget,
            initial_money: money.initial_money,
            initial_uranium: money.initial_uranium,
            initial_plutonium: money.initial_plutonium,
            maximal_uranium: money.maximal_uranium,
            maximal_plutonium: money.maximal_plutonium,
            initial_morale: money.initial_morale,
            initial_security: money.initial_security,
            minimal_total_morale: money.minimal_total_morale,
            maximal_total_morale: money.maximal_total_morale,
            minimal_total_security: money.minimal_total_security,
            maximal_total_security: money.maximal_total_security,
            worker_daily_cost: personnel.worker_daily_cost,
            worker_hiring_cost: personnel.worker_hiring_cost,
            scientist_daily_cost: personnel.scientist_daily_cost,
            scientist_hiring_cost: personnel.scientist_hiring_cost,
            engineer_daily_cost: personnel.engineer_daily_cost,
            engineer_hiring_cost: personnel.engineer_hiring_cost,
            army_daily_cost: personnel.army_daily_cost,
            army_hiring_cost: personnel.army_hiring_cost,
            total_personnel_ceiling: personnel.total_personnel_ceiling,
            initial_total_workers: personnel.initial_total_workers,
            maximum_total_workers: personnel.maximum_total_workers,
            initial_total_scientists: personnel.initial_total_scientists,
            maximum_total_scientists: personnel.maximum_total_scientists,
            initial_total_engineers: personnel.initial_total_engineers,
            maximum_total_engineers: personnel.maximum_total_engineers,
            initial_total_army: personnel.initial_total_army,
            maximum_total_army: personnel.maximum_total_army,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validates cross-references in a loaded catalog, panicking on any
/// authoring error: duplicate ids, a prerequisite that doesn't exist or
/// points at the technology itself, or a zero-day research duration.
pub fn validate_catalog(catalog: &[TechnologyDef]) {
    let mut ids = HashSet::new();
    for tech in catalog {
        assert!(
            ids.insert(&tech.id),
            "technology id '{}' appears more than once",
            tech.id,
        );
        assert!(
            tech.research_days >= 1,
            "technology '{}' has zero research days",
            tech.id,
        );
    }
    for tech in catalog {
        for prereq in &tech.prerequisites {
            assert!(
                prereq != &tech.id,
                "technology '{}' lists itself as a prerequisite",
                tech.id,
            );
            assert!(
                ids.contains(prereq),
                "technology '{}' prerequisite '{}' is not a known technology id",
                tech.id,
                prereq,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

pub fn load_catalog(path: &Path) -> Result<Vec<TechnologyDef>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let file: CatalogFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    validate_catalog(&file.technologies);
    Ok(file.technologies)
}

pub fn load_constraints(path: &Path) -> Result<ResourceConstraints> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let file: ConstraintsFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(file.into())
}

/// Loads `resources.json` and `technologies.json` from `content_dir`.
pub fn load_content(content_dir: &str) -> Result<(ResourceConstraints, Vec<TechnologyDef>)> {
    let dir = Path::new(content_dir);
    let constraints = load_constraints(&dir.join("resources.json"))?;
    let catalog = load_catalog(&dir.join("technologies.json"))?;
    Ok((constraints, catalog))
}

/// Loads content and wires a fresh simulation over it.
pub fn build_simulation(content_dir: &str) -> Result<Simulation> {
    let (constraints, catalog) = load_content(content_dir)?;
    Ok(Simulation::new(constraints, catalog))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

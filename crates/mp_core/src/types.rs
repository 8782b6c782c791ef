//! Type definitions shared across `mp_core`.
//!
//! Content types (loaded by `mp_world`), the resource-constraints bundle,
//! personnel categories, and ID newtypes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(TechId);

// ---------------------------------------------------------------------------
// Personnel categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonnelClass {
    Workers,
    Scientists,
    Engineers,
    Army,
}

impl PersonnelClass {
    pub const ALL: [Self; 4] = [Self::Workers, Self::Scientists, Self::Engineers, Self::Army];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Workers => "workers",
            Self::Scientists => "scientists",
            Self::Engineers => "engineers",
            Self::Army => "army",
        }
    }
}

impl std::fmt::Display for PersonnelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Technology catalog (content)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyKind {
    Theory,
    Engineering,
}

/// One catalog entry as loaded by `mp_world`.
///
/// `daily_cost`, `buildings_required` and `characters_involved` are part of
/// the load contract and the read-only view; the core does not act on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyDef {
    pub id: TechId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TechnologyKind,
    /// Simulated days of work to complete. Must be at least 1.
    pub research_days: u16,
    pub prerequisites: Vec<TechId>,
    pub description: String,
    /// One-time cost charged when research starts.
    pub money_cost: u32,
    pub daily_cost: u32,
    #[serde(default)]
    pub uranium_required: u32,
    #[serde(default)]
    pub plutonium_required: u32,
    #[serde(default)]
    pub workers_required: u32,
    #[serde(default)]
    pub engineers_required: u32,
    #[serde(default)]
    pub scientists_required: u32,
    #[serde(default)]
    pub army_required: u32,
    #[serde(default)]
    pub buildings_required: Vec<String>,
    #[serde(default)]
    pub characters_involved: Vec<String>,
}

impl TechnologyDef {
    pub const fn personnel_required(&self, class: PersonnelClass) -> u32 {
        match class {
            PersonnelClass::Workers => self.workers_required,
            PersonnelClass::Scientists => self.scientists_required,
            PersonnelClass::Engineers => self.engineers_required,
            PersonnelClass::Army => self.army_required,
        }
    }
}

// ---------------------------------------------------------------------------
// Resource constraints (content)
// ---------------------------------------------------------------------------

/// Initial values, maxima, clamps, and personnel cost tables for the economy.
///
/// Loaded once by `mp_world`; the defaults mirror the shipped
/// `content/resources.json` so tests and demos run without content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConstraints {
    // money
    pub maximum_budget: i64,
    pub initial_money: i64,

    // stockpiles
    pub initial_uranium: u32,
    pub initial_plutonium: u32,
    pub maximal_uranium: u32,
    pub maximal_plutonium: u32,

    // facility stats
    pub initial_morale: u32,
    pub initial_security: u32,
    pub minimal_total_morale: u32,
    pub maximal_total_morale: u32,
    pub minimal_total_security: u32,
    pub maximal_total_security: u32,

    // personnel cost tables
    pub worker_daily_cost: u32,
    pub worker_hiring_cost: u32,
    pub scientist_daily_cost: u32,
    pub scientist_hiring_cost: u32,
    pub engineer_daily_cost: u32,
    pub engineer_hiring_cost: u32,
    pub army_daily_cost: u32,
    pub army_hiring_cost: u32,

    /// Combined ceiling across all four personnel categories.
    pub total_personnel_ceiling: u64,

    pub initial_total_workers: u32,
    pub maximum_total_workers: u32,
    pub initial_total_scientists: u32,
    pub maximum_total_scientists: u32,
    pub initial_total_engineers: u32,
    pub maximum_total_engineers: u32,
    pub initial_total_army: u32,
    pub maximum_total_army: u32,
}

impl ResourceConstraints {
    pub const fn daily_cost(&self, class: PersonnelClass) -> u32 {
        match class {
            PersonnelClass::Workers => self.worker_daily_cost,
            PersonnelClass::Scientists => self.scientist_daily_cost,
            PersonnelClass::Engineers => self.engineer_daily_cost,
            PersonnelClass::Army => self.army_daily_cost,
        }
    }

    pub const fn hiring_cost(&self, class: PersonnelClass) -> u32 {
        match class {
            PersonnelClass::Workers => self.worker_hiring_cost,
            PersonnelClass::Scientists => self.scientist_hiring_cost,
            PersonnelClass::Engineers => self.engineer_hiring_cost,
            PersonnelClass::Army => self.army_hiring_cost,
        }
    }

    pub const fn initial_total(&self, class: PersonnelClass) -> u32 {
        match class {
            PersonnelClass::Workers => self.initial_total_workers,
            PersonnelClass::Scientists => self.initial_total_scientists,
            PersonnelClass::Engineers => self.initial_total_engineers,
            PersonnelClass::Army => self.initial_total_army,
        }
    }

    pub const fn maximum_total(&self, class: PersonnelClass) -> u32 {
        match class {
            PersonnelClass::Workers => self.maximum_total_workers,
            PersonnelClass::Scientists => self.maximum_total_scientists,
            PersonnelClass::Engineers => self.maximum_total_engineers,
            PersonnelClass::Army => self.maximum_total_army,
        }
    }
}

impl Default for ResourceConstraints {
    fn default() -> Self {
        Self {
            maximum_budget: 1_000_000_000,
            initial_money: 250_000,
            initial_uranium: 0,
            initial_plutonium: 0,
            maximal_uranium: 1_000_000,
            maximal_plutonium: 500_000,
            initial_morale: 60,
            initial_security: 40,
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
            total_personnel_ceiling: 130_000,
            initial_total_workers: 100_000,
            maximum_total_workers: 1_000_000,
            initial_total_scientists: 3_000,
            maximum_total_scientists: 50_000,
            initial_total_engineers: 7_000,
            maximum_total_engineers: 100_000,
            initial_total_army: 20_000,
            maximum_total_army: 200_000,
        }
    }
}

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

/// Which requirement categories fell short when a research start was rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMissing {
    pub money: bool,
    pub uranium: bool,
    pub plutonium: bool,
    pub workers: bool,
    pub engineers: bool,
    pub scientists: bool,
    pub army: bool,
}

impl ResourceMissing {
    pub const fn any(self) -> bool {
        self.money
            || self.uranium
            || self.plutonium
            || self.workers
            || self.engineers
            || self.scientists
            || self.army
    }
}

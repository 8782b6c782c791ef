//! Prerequisite-gated technology tree with a single active-research slot.
//!
//! Each technology walks `Locked → Available → InProgress → Completed`,
//! one-way. At most one technology is in progress graph-wide; progress
//! advances by one day per clock tick and completion re-evaluates the
//! unlock frontier.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::economy::Economy;
use crate::error::ResearchError;
use crate::observer::Listeners;
use crate::types::{PersonnelClass, ResourceMissing, TechId, TechnologyDef};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechState {
    #[default]
    Locked,
    Available,
    InProgress,
    Completed,
}

/// A catalog entry plus its runtime research state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub def: TechnologyDef,
    pub state: TechState,
    pub progress_days: u16,
}

impl Technology {
    pub fn is_completed(&self) -> bool {
        self.state == TechState::Completed
    }

    pub fn is_available(&self) -> bool {
        self.state == TechState::Available
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == TechState::InProgress
    }
}

pub type ResearchCompletedFn = dyn Fn(&Technology);
pub type MissingResourcesFn = dyn Fn(&ResourceMissing, &Technology);

pub struct ResearchGraph {
    techs: HashMap<TechId, Technology>,
    active: Option<TechId>,
    economy: Rc<RefCell<Economy>>,
    completed_listeners: Listeners<ResearchCompletedFn>,
    missing_listeners: Listeners<MissingResourcesFn>,
}

impl ResearchGraph {
    /// Loads the catalog and computes the initial unlock frontier.
    pub fn new(catalog: Vec<TechnologyDef>, economy: Rc<RefCell<Economy>>) -> Self {
        let techs = catalog
            .into_iter()
            .map(|def| {
                (
                    def.id.clone(),
                    Technology {
                        def,
                        state: TechState::Locked,
                        progress_days: 0,
                    },
                )
            })
            .collect();
        let mut graph = Self {
            techs,
            active: None,
            economy,
            completed_listeners: Listeners::default(),
            missing_listeners: Listeners::default(),
        };
        graph.update_availability();
        graph
    }

    /// Promotes every non-completed, non-running technology whose
    /// prerequisites are all completed. Idempotent; called after load and
    /// after every completion.
    pub fn update_availability(&mut self) {
        let unlocked: Vec<TechId> = self
            .techs
            .values()
            .filter(|tech| !tech.is_completed() && !tech.is_in_progress())
            .filter(|tech| {
                tech.def
                    .prerequisites
                    .iter()
                    .all(|prereq| self.techs.get(prereq).is_some_and(Technology::is_completed))
            })
            .map(|tech| tech.def.id.clone())
            .collect();
        for id in unlocked {
            if let Some(tech) = self.techs.get_mut(&id) {
                tech.state = TechState::Available;
            }
        }
    }

    /// Starts (or re-confirms) research on `id`.
    ///
    /// `Err(UnknownTechnology)` for an absent id. `Ok(false)`, with no
    /// mutation and no charge, when the technology is not startable, when
    /// another technology already holds the active slot, or when any
    /// requirement is unmet (which also fires the missing-resources
    /// listeners with the exact shortfall flags). `Ok(true)` on success;
    /// the one-time money cost is charged only on the first start, so
    /// re-entrant calls on the running technology are no-op successes.
    pub fn start_research(&mut self, id: &TechId) -> Result<bool, ResearchError> {
        let Some(tech) = self.techs.get(id) else {
            return Err(ResearchError::UnknownTechnology(id.clone()));
        };
        if !tech.is_available() && !tech.is_in_progress() {
            return Ok(false);
        }
        // Single active slot: never silently replace a running program.
        if self.active.as_ref().is_some_and(|active| active != id) {
            return Ok(false);
        }

        let missing = missing_resources(&self.economy.borrow(), &tech.def);
        if missing.any() {
            let snapshot = tech.clone();
            self.missing_listeners
                .notify(|listener| listener(&missing, &snapshot));
            return Ok(false);
        }

        if !tech.is_in_progress() {
            let cost = i64::from(tech.def.money_cost);
            self.economy.borrow_mut().spend_money(cost);
            if let Some(tech) = self.techs.get_mut(id) {
                tech.state = TechState::InProgress;
            }
        }
        self.active = Some(id.clone());
        Ok(true)
    }

    /// Clock subscriber: advances the active technology by one day and
    /// completes it once its research time is served.
    pub fn on_day_passed(&mut self) {
        let Some(active_id) = self.active.clone() else {
            return;
        };
        let Some(tech) = self.techs.get_mut(&active_id) else {
            self.active = None;
            return;
        };

        tech.progress_days += 1;
        if tech.progress_days >= tech.def.research_days {
            tech.state = TechState::Completed;
            let snapshot = tech.clone();
            self.completed_listeners.notify(|listener| listener(&snapshot));
            self.active = None;
            self.update_availability();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn is_completed(&self, id: &TechId) -> bool {
        self.techs.get(id).is_some_and(Technology::is_completed)
    }

    pub fn is_available(&self, id: &TechId) -> bool {
        self.techs.get(id).is_some_and(Technology::is_available)
    }

    /// Fraction completed in `[0, 1]` for the in-progress technology, `0`
    /// otherwise (including Completed, where a progress bar is
    /// meaningless; check `is_completed` separately).
    pub fn progress(&self, id: &TechId) -> f32 {
        match self.techs.get(id) {
            Some(tech) if tech.is_in_progress() => {
                f32::from(tech.progress_days) / f32::from(tech.def.research_days)
            }
            _ => 0.0,
        }
    }

    pub fn active_research(&self) -> Option<&Technology> {
        self.active.as_ref().and_then(|id| self.techs.get(id))
    }

    pub fn technologies(&self) -> &HashMap<TechId, Technology> {
        &self.techs
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    /// Registers a weakly-held completion listener; fired once per
    /// completed technology with a clone of its final state.
    pub fn add_completed_listener(&mut self, listener: &Rc<ResearchCompletedFn>) {
        self.completed_listeners.add(listener);
    }

    /// Registers a weakly-held listener for rejected starts, carrying the
    /// exact set of missing requirement categories.
    pub fn add_missing_resources_listener(&mut self, listener: &Rc<MissingResourcesFn>) {
        self.missing_listeners.add(listener);
    }
}

/// Compares every requirement against the economy's stocked amounts and
/// currently *working* personnel counts.
fn missing_resources(economy: &Economy, def: &TechnologyDef) -> ResourceMissing {
    ResourceMissing {
        money: economy.money() < i64::from(def.money_cost),
        uranium: economy.uranium() < def.uranium_required,
        plutonium: economy.plutonium() < def.plutonium_required,
        workers: economy.pool(PersonnelClass::Workers).working < def.workers_required,
        engineers: economy.pool(PersonnelClass::Engineers).working < def.engineers_required,
        scientists: economy.pool(PersonnelClass::Scientists).working < def.scientists_required,
        army: economy.pool(PersonnelClass::Army).working < def.army_required,
    }
}

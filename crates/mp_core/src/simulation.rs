//! Composition root.
//!
//! Owns the clock, economy, and research graph, and wires the two core
//! day-tick subscriptions. The economy upkeep and the research advance are
//! commutative (neither reads the other's daily delta), so their
//! registration order carries no meaning.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::{ClockSnapshot, DayPassedFn, GameClock};
use crate::economy::Economy;
use crate::error::{ClockError, ResearchError};
use crate::research::ResearchGraph;
use crate::types::{ResourceConstraints, TechId, TechnologyDef};

pub struct Simulation {
    clock: Rc<RefCell<GameClock>>,
    economy: Rc<RefCell<Economy>>,
    research: Rc<RefCell<ResearchGraph>>,
    // Strong tokens for the core day subscriptions; dropping the Simulation
    // unsubscribes both.
    _economy_tick: Rc<DayPassedFn>,
    _research_tick: Rc<DayPassedFn>,
}

impl Simulation {
    pub fn new(constraints: ResourceConstraints, catalog: Vec<TechnologyDef>) -> Self {
        let clock = Rc::new(RefCell::new(GameClock::new()));
        let economy = Rc::new(RefCell::new(Economy::new(constraints)));
        let research = Rc::new(RefCell::new(ResearchGraph::new(
            catalog,
            Rc::clone(&economy),
        )));

        let economy_tick: Rc<DayPassedFn> = {
            let economy = Rc::downgrade(&economy);
            Rc::new(move |_snapshot: &ClockSnapshot| {
                if let Some(economy) = economy.upgrade() {
                    economy.borrow_mut().on_day_passed();
                }
            })
        };
        let research_tick: Rc<DayPassedFn> = {
            let research = Rc::downgrade(&research);
            Rc::new(move |_snapshot: &ClockSnapshot| {
                if let Some(research) = research.upgrade() {
                    research.borrow_mut().on_day_passed();
                }
            })
        };
        {
            let mut clock_mut = clock.borrow_mut();
            clock_mut.add_day_observer(&economy_tick);
            clock_mut.add_day_observer(&research_tick);
        }

        Self {
            clock,
            economy,
            research,
            _economy_tick: economy_tick,
            _research_tick: research_tick,
        }
    }

    pub fn advance_day(&self) -> Result<(), ClockError> {
        self.clock.borrow_mut().advance_day()
    }

    pub fn advance_days(&self, days: u16) -> Result<(), ClockError> {
        self.clock.borrow_mut().advance_days(days)
    }

    pub fn start_research(&self, id: &TechId) -> Result<bool, ResearchError> {
        self.research.borrow_mut().start_research(id)
    }

    pub fn clock(&self) -> &Rc<RefCell<GameClock>> {
        &self.clock
    }

    pub fn economy(&self) -> &Rc<RefCell<Economy>> {
        &self.economy
    }

    pub fn research(&self) -> &Rc<RefCell<ResearchGraph>> {
        &self.research
    }
}

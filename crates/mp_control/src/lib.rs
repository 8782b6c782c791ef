//! Automated drivers for the simulation's command surface.
//!
//! A `Director` plans one day of commands against the read-only query
//! surface and applies them through the same entry points a human player
//! would use. `ResearchDirector` keeps the research pipeline busy: staff
//! up for the cheapest available technology, then start it.

use serde::{Deserialize, Serialize};

use mp_core::{PersonnelClass, Simulation, TechId};

pub trait Director {
    /// Plans and applies one day of commands, returning what was done.
    fn run_day(&mut self, simulation: &Simulation) -> Vec<DirectorAction>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorAction {
    Hired { class: PersonnelClass, count: u32 },
    Started { tech: TechId },
    /// Candidate needs materiel the director cannot procure.
    Blocked { tech: TechId },
}

/// Drives research automatically:
/// 1. If a technology is already in progress, do nothing.
/// 2. Walk available technologies in id order (deterministic).
/// 3. Skip candidates gated on materiel the economy does not stock.
/// 4. Hire the missing working personnel for the first viable candidate.
/// 5. Start it.
pub struct ResearchDirector;

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Requirement summary for one candidate, copied out of the graph so no
/// borrow is held while commands run.
struct Candidate {
    id: TechId,
    uranium_required: u32,
    plutonium_required: u32,
    personnel_required: [(PersonnelClass, u32); 4],
}

/// Returns available technologies sorted by id for determinism.
fn collect_candidates(simulation: &Simulation) -> Vec<Candidate> {
    let research = simulation.research().borrow();
    let mut candidates: Vec<Candidate> = research
        .technologies()
        .values()
        .filter(|tech| tech.is_available())
        .map(|tech| Candidate {
            id: tech.def.id.clone(),
            uranium_required: tech.def.uranium_required,
            plutonium_required: tech.def.plutonium_required,
            personnel_required: [
                (PersonnelClass::Workers, tech.def.workers_required),
                (PersonnelClass::Scientists, tech.def.scientists_required),
                (PersonnelClass::Engineers, tech.def.engineers_required),
                (PersonnelClass::Army, tech.def.army_required),
            ],
        })
        .collect();
    candidates.sort_by(|a, b| a.id.0.cmp(&b.id.0));
    candidates
}

/// Hires whatever working headcount the candidate still lacks. Returns
/// false as soon as one hire is rejected (headcount or funds).
fn staff_for(simulation: &Simulation, candidate: &Candidate, actions: &mut Vec<DirectorAction>) -> bool {
    let mut economy = simulation.economy().borrow_mut();
    for (class, required) in candidate.personnel_required {
        let working = economy.pool(class).working;
        if working >= required {
            continue;
        }
        let shortfall = required - working;
        if !economy.hire(class, shortfall) {
            return false;
        }
        actions.push(DirectorAction::Hired {
            class,
            count: shortfall,
        });
    }
    true
}

impl Director for ResearchDirector {
    fn run_day(&mut self, simulation: &Simulation) -> Vec<DirectorAction> {
        let mut actions = Vec::new();

        if simulation.research().borrow().active_research().is_some() {
            return actions;
        }

        for candidate in collect_candidates(simulation) {
            let stocked = {
                let economy = simulation.economy().borrow();
                economy.uranium() >= candidate.uranium_required
                    && economy.plutonium() >= candidate.plutonium_required
            };
            if !stocked {
                actions.push(DirectorAction::Blocked {
                    tech: candidate.id.clone(),
                });
                continue;
            }

            if !staff_for(simulation, &candidate, &mut actions) {
                continue;
            }

            if simulation.start_research(&candidate.id) == Ok(true) {
                actions.push(DirectorAction::Started { tech: candidate.id });
                break;
            }
        }

        actions
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mp_core::test_fixtures::base_simulation;

    fn tech_id(id: &str) -> TechId {
        TechId(id.to_string())
    }

    #[test]
    fn director_staffs_and_starts_the_root_technology() {
        let sim = base_simulation();
        let mut director = ResearchDirector;

        let actions = director.run_day(&sim);

        assert!(actions.contains(&DirectorAction::Hired {
            class: PersonnelClass::Scientists,
            count: 10,
        }));
        assert!(actions.contains(&DirectorAction::Started {
            tech: tech_id("basic_physics"),
        }));
        assert!(sim
            .research()
            .borrow()
            .active_research()
            .is_some_and(|tech| tech.def.id == tech_id("basic_physics")));
    }

    #[test]
    fn director_idles_while_research_runs() {
        let sim = base_simulation();
        let mut director = ResearchDirector;

        director.run_day(&sim);
        let actions = director.run_day(&sim);
        assert!(actions.is_empty(), "no plan while a program is running");
    }

    #[test]
    fn director_does_not_rehire_existing_staff() {
        let sim = base_simulation();
        assert!(sim.economy().borrow_mut().hire(PersonnelClass::Scientists, 6));
        let mut director = ResearchDirector;

        let actions = director.run_day(&sim);

        assert!(
            actions.contains(&DirectorAction::Hired {
                class: PersonnelClass::Scientists,
                count: 4,
            }),
            "only the shortfall is hired: {actions:?}"
        );
    }

    #[test]
    fn director_goes_quiet_once_the_catalog_is_exhausted() {
        let sim = base_simulation();
        let mut director = ResearchDirector;
        for _ in 0..20 {
            director.run_day(&sim);
            sim.advance_day().unwrap();
        }
        assert!(sim
            .research()
            .borrow()
            .is_completed(&tech_id("uranium_enrichment")));
        assert!(director.run_day(&sim).is_empty());
    }

    #[test]
    fn director_reports_materiel_blocked_candidates() {
        use mp_core::test_fixtures::{base_constraints, simple_tech};
        use mp_core::Simulation;

        let mut gated = simple_tech("gun_type_assembly", 10);
        gated.uranium_required = 100;
        let sim = Simulation::new(base_constraints(), vec![gated]);
        let mut director = ResearchDirector;

        let actions = director.run_day(&sim);
        assert_eq!(
            actions,
            vec![DirectorAction::Blocked {
                tech: tech_id("gun_type_assembly"),
            }]
        );
        assert!(sim.research().borrow().active_research().is_none());

        // Once the stock arrives the same candidate goes through.
        sim.economy().borrow_mut().add_uranium(100);
        let actions = director.run_day(&sim);
        assert!(actions.contains(&DirectorAction::Started {
            tech: tech_id("gun_type_assembly"),
        }));
    }
}

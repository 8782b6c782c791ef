use super::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn day_tick_reaches_economy_and_research() {
    let sim = base_simulation();
    staff_scientists(&sim, 10);
    assert_eq!(sim.start_research(&tech_id("basic_physics")), Ok(true));
    let money_after_start = sim.economy().borrow().money();

    sim.advance_day().unwrap();

    // 10 scientists cost 50 a day; research moved one of three days.
    assert_eq!(sim.economy().borrow().money(), money_after_start - 50);
    let progress = sim.research().borrow().progress(&tech_id("basic_physics"));
    assert!((progress - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn hired_workers_cost_exactly_their_daily_rate() {
    let sim = base_simulation();
    assert!(sim.economy().borrow_mut().hire(PersonnelClass::Workers, 10));
    let before = sim.economy().borrow().money();
    let morale_before = sim.economy().borrow().morale();

    sim.advance_day().unwrap();

    let economy = sim.economy().borrow();
    assert_eq!(economy.money(), before - 10);
    assert_eq!(economy.morale(), morale_before + 1, "solvent: morale rises");
}

#[test]
fn broke_simulation_bleeds_morale_and_security() {
    let sim = base_simulation();
    assert!(sim.economy().borrow_mut().hire(PersonnelClass::Workers, 100));
    {
        let mut economy = sim.economy().borrow_mut();
        let remaining = economy.money();
        economy.spend_money(remaining - 50);
    }

    sim.advance_day().unwrap();

    let economy = sim.economy().borrow();
    assert_eq!(economy.money(), -50);
    assert_eq!(economy.morale(), 48);
    assert_eq!(economy.security(), 49);
}

#[test]
fn research_chain_completes_through_the_shared_clock() {
    let sim = base_simulation();
    staff_scientists(&sim, 20);
    sim.start_research(&tech_id("basic_physics")).unwrap();

    sim.advance_days(3).unwrap();
    assert!(sim.research().borrow().is_completed(&tech_id("basic_physics")));
    assert!(sim.research().borrow().is_available(&tech_id("uranium_enrichment")));

    sim.start_research(&tech_id("uranium_enrichment")).unwrap();
    sim.advance_days(5).unwrap();
    assert!(sim
        .research()
        .borrow()
        .is_completed(&tech_id("uranium_enrichment")));
}

#[test]
fn presentation_observer_sees_every_day() {
    let sim = base_simulation();
    let days_seen = Rc::new(Cell::new(0u16));

    let observer: Rc<DayPassedFn> = {
        let days_seen = Rc::clone(&days_seen);
        Rc::new(move |snapshot: &ClockSnapshot| days_seen.set(snapshot.game_day))
    };
    sim.clock().borrow_mut().add_day_observer(&observer);

    sim.advance_days(9).unwrap();
    assert_eq!(days_seen.get(), 10);

    drop(observer);
    sim.advance_day().unwrap();
    assert_eq!(days_seen.get(), 10, "dropped presentation observer is silent");
}

#[test]
fn metrics_snapshot_reflects_current_state() {
    let sim = base_simulation();
    staff_scientists(&sim, 10);
    sim.start_research(&tech_id("basic_physics")).unwrap();
    sim.advance_day().unwrap();

    let snapshot = compute_metrics(&sim);
    assert_eq!(snapshot.game_day, 2);
    assert_eq!(snapshot.date, "1939-01-02");
    assert_eq!(snapshot.working_scientists, 10);
    assert_eq!(snapshot.active_research, "basic_physics");
    assert!((snapshot.active_progress - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(snapshot.techs_completed, 0);
}

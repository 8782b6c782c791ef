use super::*;

fn base_economy() -> Economy {
    Economy::new(base_constraints())
}

#[test]
fn initial_state_comes_from_constraints() {
    let economy = base_economy();
    assert_eq!(economy.money(), 10_000);
    assert_eq!(economy.morale(), 50);
    assert_eq!(economy.security(), 50);
    assert_eq!(economy.pool(PersonnelClass::Workers).total, 200);
    assert_eq!(economy.pool(PersonnelClass::Workers).working, 0);
    assert!(economy.check_personnel_ceiling());
}

// --- spend_money: never below zero --------------------------------------

#[test]
fn spend_money_succeeds_when_covered() {
    let mut economy = base_economy();
    let before = economy.money();
    assert!(economy.spend_money(500));
    assert_eq!(economy.money(), before - 500);
}

#[test]
fn spend_money_fails_without_funds() {
    let mut economy = base_economy();
    let before = economy.money();
    assert!(!economy.spend_money(before + 1));
    assert_eq!(economy.money(), before);
}

#[test]
fn add_money_rejects_negative_and_clamps_to_budget() {
    let mut economy = base_economy();
    assert!(!economy.add_money(-1));
    assert_eq!(economy.money(), 10_000);

    assert!(economy.add_money(i64::MAX / 2));
    assert_eq!(economy.money(), 1_000_000, "clamped to maximum_budget");
}

// --- hiring -------------------------------------------------------------

#[test]
fn hire_charges_fee_and_counts_hires() {
    let mut economy = base_economy();
    assert!(economy.hire(PersonnelClass::Workers, 10));
    let pool = economy.pool(PersonnelClass::Workers);
    assert_eq!(pool.working, 10);
    assert_eq!(pool.hired_today, 10);
    assert_eq!(economy.money(), 10_000 - 10);
    assert_eq!(economy.available_to_hire(PersonnelClass::Workers), 190);
}

#[test]
fn hire_fails_without_headcount() {
    let mut economy = base_economy();
    assert!(!economy.hire(PersonnelClass::Engineers, 51));
    assert_eq!(economy.pool(PersonnelClass::Engineers).working, 0);
    assert_eq!(economy.money(), 10_000);
}

#[test]
fn hire_fails_without_money() {
    let mut economy = base_economy();
    economy.spend_money(9_990);
    // 10 scientists would cost 50.
    assert!(!economy.hire(PersonnelClass::Scientists, 10));
    assert_eq!(economy.pool(PersonnelClass::Scientists).working, 0);
    assert_eq!(economy.money(), 10);
}

#[test]
fn fire_releases_working_personnel_only() {
    let mut economy = base_economy();
    economy.hire(PersonnelClass::Army, 20);
    assert!(economy.fire(PersonnelClass::Army, 5));
    assert_eq!(economy.pool(PersonnelClass::Army).working, 15);
    assert_eq!(economy.pool(PersonnelClass::Army).total, 50);

    assert!(!economy.fire(PersonnelClass::Army, 16));
    assert_eq!(economy.pool(PersonnelClass::Army).working, 15);
}

// --- totals and the ceiling ----------------------------------------------

#[test]
fn set_total_respects_category_maximum() {
    let mut economy = base_economy();
    assert!(economy.set_total(PersonnelClass::Workers, 500));
    assert!(!economy.set_total(PersonnelClass::Workers, 501));
    assert_eq!(economy.pool(PersonnelClass::Workers).total, 500);
}

#[test]
fn set_total_respects_combined_ceiling() {
    let mut economy = base_economy();
    assert!(economy.set_total(PersonnelClass::Scientists, 500));
    // 450 workers + 500 scientists + 50 engineers + 50 army = 1050 > 1000.
    assert!(!economy.set_total(PersonnelClass::Workers, 450));
    assert_eq!(economy.pool(PersonnelClass::Workers).total, 200);
}

#[test]
fn set_total_cannot_strand_working_personnel() {
    let mut economy = base_economy();
    economy.hire(PersonnelClass::Workers, 10);
    assert!(!economy.set_total(PersonnelClass::Workers, 5));
    assert!(economy.set_total(PersonnelClass::Workers, 10));
}

#[test]
fn ceiling_is_checked_not_enforced() {
    let mut constraints = base_constraints();
    constraints.initial_total_workers = 400;
    constraints.initial_total_scientists = 400;
    constraints.initial_total_engineers = 400;
    constraints.initial_total_army = 400;
    let economy = Economy::new(constraints);
    assert!(!economy.check_personnel_ceiling());
}

// --- stockpiles ----------------------------------------------------------

#[test]
fn stockpiles_clamp_on_add_and_guard_on_spend() {
    let mut economy = base_economy();
    assert!(economy.add_uranium(5_000));
    assert_eq!(economy.uranium(), 1_000, "clamped to maximal_uranium");
    assert!(economy.spend_uranium(400));
    assert_eq!(economy.uranium(), 600);
    assert!(!economy.spend_uranium(601));
    assert_eq!(economy.uranium(), 600);

    assert!(economy.add_plutonium(100));
    assert!(economy.spend_plutonium(100));
    assert!(!economy.spend_plutonium(1));
}

// --- morale / security clamps -------------------------------------------

#[test]
fn morale_clamps_and_reports_change() {
    let mut economy = base_economy();
    assert!(economy.add_morale(1_000));
    assert_eq!(economy.morale(), 100);
    assert!(!economy.add_morale(1), "already at the cap: no change");

    assert!(economy.reduce_morale(1_000));
    assert_eq!(economy.morale(), 0);
    assert!(!economy.reduce_morale(1));
}

#[test]
fn security_clamps_and_reports_change() {
    let mut economy = base_economy();
    assert!(economy.add_security(1_000));
    assert_eq!(economy.security(), 100);
    assert!(economy.reduce_security(1_000));
    assert_eq!(economy.security(), 0);
    assert!(!economy.reduce_security(1));
}

// --- daily upkeep --------------------------------------------------------

#[test]
fn upkeep_subtracts_cost_of_working_personnel() {
    let mut economy = base_economy();
    economy.hire(PersonnelClass::Workers, 10);
    let before = economy.money();

    economy.on_day_passed();
    assert_eq!(economy.money(), before - 10);
}

#[test]
fn upkeep_can_drive_money_negative() {
    let mut economy = base_economy();
    economy.hire(PersonnelClass::Scientists, 100);
    let remaining = economy.money();
    economy.spend_money(remaining - 10);

    economy.on_day_passed();
    // 100 scientists cost 500 a day.
    assert_eq!(economy.money(), 10 - 500);
}

#[test]
fn broke_project_loses_morale_and_security() {
    let mut economy = base_economy();
    economy.hire(PersonnelClass::Scientists, 100);
    let remaining = economy.money();
    economy.spend_money(remaining - 1);

    let morale = economy.morale();
    let security = economy.security();
    economy.on_day_passed();
    assert_eq!(economy.morale(), morale - 2);
    assert_eq!(economy.security(), security - 1);
}

#[test]
fn solvent_project_gains_morale() {
    let mut economy = base_economy();
    let morale = economy.morale();
    economy.on_day_passed();
    assert_eq!(economy.morale(), morale + 1);
    assert_eq!(economy.security(), 50, "security only drifts when broke");
}

#[test]
fn upkeep_resets_daily_hire_counters() {
    let mut economy = base_economy();
    economy.hire(PersonnelClass::Workers, 5);
    economy.hire(PersonnelClass::Scientists, 3);
    assert_eq!(economy.hired_today(PersonnelClass::Workers), 5);

    economy.on_day_passed();
    assert_eq!(economy.hired_today(PersonnelClass::Workers), 0);
    assert_eq!(economy.hired_today(PersonnelClass::Scientists), 0);
}

// --- cost projections ----------------------------------------------------

#[test]
fn cost_projections_scale_from_daily_cost() {
    let mut economy = base_economy();
    economy.hire(PersonnelClass::Workers, 10);
    economy.hire(PersonnelClass::Engineers, 5);

    assert_eq!(economy.daily_cost(PersonnelClass::Workers), 10);
    assert_eq!(economy.daily_cost(PersonnelClass::Engineers), 10);
    assert_eq!(economy.daily_personnel_cost(), 20);
    assert_eq!(economy.projected_personnel_cost(10), 200);
    assert_eq!(economy.projected_personnel_cost(30), 600);
}

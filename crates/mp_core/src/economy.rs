//! Personnel-and-materiel economy.
//!
//! Four personnel pools, a signed money balance, two clamped stockpiles,
//! and the morale/security facility stats. Commands validate and mutate
//! all-or-nothing; the daily upkeep applied by the clock subscription is
//! the single code path allowed to drive money negative.

use serde::{Deserialize, Serialize};

use crate::types::{PersonnelClass, ResourceConstraints};

/// One personnel category: headcount ceiling, currently working, and the
/// hires made since the last day tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelPool {
    pub total: u32,
    pub working: u32,
    pub hired_today: u32,
}

impl PersonnelPool {
    const fn fresh(total: u32) -> Self {
        Self {
            total,
            working: 0,
            hired_today: 0,
        }
    }

    /// Headcount that can still be put to work. `working <= total` holds.
    pub const fn available(&self) -> u32 {
        self.total - self.working
    }
}

pub struct Economy {
    constraints: ResourceConstraints,
    workers: PersonnelPool,
    scientists: PersonnelPool,
    engineers: PersonnelPool,
    army: PersonnelPool,
    money: i64,
    uranium: u32,
    plutonium: u32,
    morale: u32,
    security: u32,
}

impl Economy {
    pub fn new(constraints: ResourceConstraints) -> Self {
        Self {
            workers: PersonnelPool::fresh(constraints.initial_total_workers),
            scientists: PersonnelPool::fresh(constraints.initial_total_scientists),
            engineers: PersonnelPool::fresh(constraints.initial_total_engineers),
            army: PersonnelPool::fresh(constraints.initial_total_army),
            money: constraints.initial_money,
            uranium: constraints.initial_uranium,
            plutonium: constraints.initial_plutonium,
            morale: constraints.initial_morale,
            security: constraints.initial_security,
            constraints,
        }
    }

    pub fn constraints(&self) -> &ResourceConstraints {
        &self.constraints
    }

    pub fn pool(&self, class: PersonnelClass) -> &PersonnelPool {
        match class {
            PersonnelClass::Workers => &self.workers,
            PersonnelClass::Scientists => &self.scientists,
            PersonnelClass::Engineers => &self.engineers,
            PersonnelClass::Army => &self.army,
        }
    }

    fn pool_mut(&mut self, class: PersonnelClass) -> &mut PersonnelPool {
        match class {
            PersonnelClass::Workers => &mut self.workers,
            PersonnelClass::Scientists => &mut self.scientists,
            PersonnelClass::Engineers => &mut self.engineers,
            PersonnelClass::Army => &mut self.army,
        }
    }

    // -----------------------------------------------------------------------
    // Personnel commands
    // -----------------------------------------------------------------------

    /// Puts `count` people to work. All-or-nothing: requires both free
    /// headcount and the full hiring fee.
    pub fn hire(&mut self, class: PersonnelClass, count: u32) -> bool {
        let fee = i64::from(count) * i64::from(self.constraints.hiring_cost(class));
        if self.pool(class).available() < count || self.money < fee {
            return false;
        }
        let pool = self.pool_mut(class);
        pool.working += count;
        pool.hired_today += count;
        self.money -= fee;
        true
    }

    /// Releases `count` working people back to the pool. No refund, no
    /// effect on `total`.
    pub fn fire(&mut self, class: PersonnelClass, count: u32) -> bool {
        let pool = self.pool_mut(class);
        if pool.working < count {
            return false;
        }
        pool.working -= count;
        true
    }

    /// Re-sizes a category's headcount ceiling. Validates the per-category
    /// maximum, the combined ceiling, and that nobody currently working
    /// would be stranded above the new total.
    pub fn set_total(&mut self, class: PersonnelClass, count: u32) -> bool {
        if count > self.constraints.maximum_total(class) {
            return false;
        }
        if count < self.pool(class).working {
            return false;
        }
        let other_totals: u64 = PersonnelClass::ALL
            .iter()
            .filter(|other| **other != class)
            .map(|other| u64::from(self.pool(*other).total))
            .sum();
        if u64::from(count) + other_totals > self.constraints.total_personnel_ceiling {
            return false;
        }
        self.pool_mut(class).total = count;
        true
    }

    pub fn available_to_hire(&self, class: PersonnelClass) -> u32 {
        self.pool(class).available()
    }

    pub fn hired_today(&self, class: PersonnelClass) -> u32 {
        self.pool(class).hired_today
    }

    // -----------------------------------------------------------------------
    // Cost queries
    // -----------------------------------------------------------------------

    pub fn daily_cost(&self, class: PersonnelClass) -> u64 {
        u64::from(self.pool(class).working) * u64::from(self.constraints.daily_cost(class))
    }

    /// Upkeep across all four categories for one day.
    pub fn daily_personnel_cost(&self) -> u64 {
        PersonnelClass::ALL
            .iter()
            .map(|class| self.daily_cost(*class))
            .sum()
    }

    /// Cost projection over a horizon (the presentation's 10- and 30-day
    /// readouts).
    pub fn projected_personnel_cost(&self, days: u64) -> u64 {
        self.daily_personnel_cost() * days
    }

    /// Whether the combined headcount respects the configured ceiling.
    /// Checked only: `set_total` validates on mutation, but initial totals
    /// may overshoot, and callers decide what to do about it.
    pub fn check_personnel_ceiling(&self) -> bool {
        let combined: u64 = PersonnelClass::ALL
            .iter()
            .map(|class| u64::from(self.pool(*class).total))
            .sum();
        combined <= self.constraints.total_personnel_ceiling
    }

    pub fn reset_daily_hired_counts(&mut self) {
        for class in PersonnelClass::ALL {
            self.pool_mut(class).hired_today = 0;
        }
    }

    // -----------------------------------------------------------------------
    // Money
    // -----------------------------------------------------------------------

    pub fn money(&self) -> i64 {
        self.money
    }

    /// Rejects negative amounts; clamps to the configured maximum budget.
    pub fn add_money(&mut self, amount: i64) -> bool {
        if amount < 0 {
            return false;
        }
        self.money = self
            .money
            .saturating_add(amount)
            .min(self.constraints.maximum_budget);
        true
    }

    /// Guarded spend: unlike daily upkeep, this never drives money negative.
    pub fn spend_money(&mut self, amount: i64) -> bool {
        if self.money < amount {
            return false;
        }
        self.money -= amount;
        true
    }

    // -----------------------------------------------------------------------
    // Stockpiles
    // -----------------------------------------------------------------------

    pub fn uranium(&self) -> u32 {
        self.uranium
    }

    pub fn add_uranium(&mut self, amount: u32) -> bool {
        self.uranium = self
            .uranium
            .saturating_add(amount)
            .min(self.constraints.maximal_uranium);
        true
    }

    pub fn spend_uranium(&mut self, amount: u32) -> bool {
        if self.uranium < amount {
            return false;
        }
        self.uranium -= amount;
        true
    }

    pub fn plutonium(&self) -> u32 {
        self.plutonium
    }

    pub fn add_plutonium(&mut self, amount: u32) -> bool {
        self.plutonium = self
            .plutonium
            .saturating_add(amount)
            .min(self.constraints.maximal_plutonium);
        true
    }

    pub fn spend_plutonium(&mut self, amount: u32) -> bool {
        if self.plutonium < amount {
            return false;
        }
        self.plutonium -= amount;
        true
    }

    // -----------------------------------------------------------------------
    // Facility stats
    // -----------------------------------------------------------------------

    pub fn morale(&self) -> u32 {
        self.morale
    }

    /// Returns whether the clamped value actually changed.
    pub fn add_morale(&mut self, amount: u32) -> bool {
        let old = self.morale;
        self.morale = self
            .morale
            .saturating_add(amount)
            .clamp(
                self.constraints.minimal_total_morale,
                self.constraints.maximal_total_morale,
            );
        self.morale != old
    }

    pub fn reduce_morale(&mut self, amount: u32) -> bool {
        let old = self.morale;
        self.morale = self
            .morale
            .saturating_sub(amount)
            .clamp(
                self.constraints.minimal_total_morale,
                self.constraints.maximal_total_morale,
            );
        self.morale != old
    }

    pub fn security(&self) -> u32 {
        self.security
    }

    pub fn add_security(&mut self, amount: u32) -> bool {
        let old = self.security;
        self.security = self
            .security
            .saturating_add(amount)
            .clamp(
                self.constraints.minimal_total_security,
                self.constraints.maximal_total_security,
            );
        self.security != old
    }

    pub fn reduce_security(&mut self, amount: u32) -> bool {
        let old = self.security;
        self.security = self
            .security
            .saturating_sub(amount)
            .clamp(
                self.constraints.minimal_total_security,
                self.constraints.maximal_total_security,
            );
        self.security != old
    }

    // -----------------------------------------------------------------------
    // Day tick
    // -----------------------------------------------------------------------

    /// Clock subscriber: subtracts the personnel upkeep unconditionally
    /// (money may go negative), drifts morale/security, and resets the
    /// daily hire counters.
    pub fn on_day_passed(&mut self) {
        let upkeep = self.daily_personnel_cost();
        self.money -= i64::try_from(upkeep).unwrap_or(i64::MAX);

        if self.money <= 0 {
            self.reduce_morale(2);
            self.reduce_security(1);
        } else {
            self.add_morale(1);
        }

        self.reset_daily_hired_counts();
    }
}

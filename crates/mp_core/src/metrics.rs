//! Snapshot metrics computed from a `Simulation`.
//!
//! A single `compute_metrics(&Simulation) -> MetricsSnapshot` samples the
//! current state for time-series analysis. No state mutation; IO only in
//! the CSV helpers.

use std::io::Write;

use serde::Serialize;

use crate::simulation::Simulation;
use crate::types::PersonnelClass;

/// Current schema version — bump when fields are added/removed/reordered.
const METRICS_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub metrics_version: u32,
    pub game_day: u16,
    pub date: String,

    // Economy
    pub money: i64,
    pub uranium: u32,
    pub plutonium: u32,
    pub morale: u32,
    pub security: u32,
    pub daily_personnel_cost: u64,

    // Personnel at work
    pub working_workers: u32,
    pub working_scientists: u32,
    pub working_engineers: u32,
    pub working_army: u32,

    // Research
    pub techs_completed: u32,
    pub techs_available: u32,
    pub active_research: String,
    pub active_progress: f32,
}

#[allow(clippy::cast_possible_truncation)]
pub fn compute_metrics(simulation: &Simulation) -> MetricsSnapshot {
    let clock = simulation.clock().borrow();
    let economy = simulation.economy().borrow();
    let research = simulation.research().borrow();

    let techs_completed = research
        .technologies()
        .values()
        .filter(|tech| tech.is_completed())
        .count() as u32;
    let techs_available = research
        .technologies()
        .values()
        .filter(|tech| tech.is_available())
        .count() as u32;

    let (active_research, active_progress) = match research.active_research() {
        Some(tech) => {
            let fraction = research.progress(&tech.def.id);
            (tech.def.id.0.clone(), fraction)
        }
        None => (String::new(), 0.0),
    };

    MetricsSnapshot {
        metrics_version: METRICS_VERSION,
        game_day: clock.current_game_day(),
        date: clock.current_date().to_string(),
        money: economy.money(),
        uranium: economy.uranium(),
        plutonium: economy.plutonium(),
        morale: economy.morale(),
        security: economy.security(),
        daily_personnel_cost: economy.daily_personnel_cost(),
        working_workers: economy.pool(PersonnelClass::Workers).working,
        working_scientists: economy.pool(PersonnelClass::Scientists).working,
        working_engineers: economy.pool(PersonnelClass::Engineers).working,
        working_army: economy.pool(PersonnelClass::Army).working,
        techs_completed,
        techs_available,
        active_research,
        active_progress,
    }
}

// ---------------------------------------------------------------------------
// CSV output
// ---------------------------------------------------------------------------

pub fn write_metrics_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        writer,
        "metrics_version,game_day,date,money,uranium,plutonium,morale,security,\
         daily_personnel_cost,working_workers,working_scientists,working_engineers,\
         working_army,techs_completed,techs_available,active_research,active_progress"
    )
}

pub fn append_metrics_row(
    writer: &mut impl Write,
    snapshot: &MetricsSnapshot,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{:.4}",
        snapshot.metrics_version,
        snapshot.game_day,
        snapshot.date,
        snapshot.money,
        snapshot.uranium,
        snapshot.plutonium,
        snapshot.morale,
        snapshot.security,
        snapshot.daily_personnel_cost,
        snapshot.working_workers,
        snapshot.working_scientists,
        snapshot.working_engineers,
        snapshot.working_army,
        snapshot.techs_completed,
        snapshot.techs_available,
        snapshot.active_research,
        snapshot.active_progress,
    )
}

/// Appends one CSV (header + rows) to `path`.
pub fn write_metrics_csv(path: &str, snapshots: &[MetricsSnapshot]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_metrics_header(&mut file)?;
    for snapshot in snapshots {
        append_metrics_row(&mut file, snapshot)?;
    }
    Ok(())
}

/// Incremental metrics CSV writer for a run directory.
pub struct MetricsFileWriter {
    writer: std::io::BufWriter<std::fs::File>,
}

impl MetricsFileWriter {
    /// Opens `metrics.csv` in `run_dir` and writes the header row.
    pub fn new(run_dir: &std::path::Path) -> std::io::Result<Self> {
        let file = std::fs::File::create(run_dir.join("metrics.csv"))?;
        let mut writer = std::io::BufWriter::new(file);
        write_metrics_header(&mut writer)?;
        Ok(Self { writer })
    }

    pub fn write_row(&mut self, snapshot: &MetricsSnapshot) -> std::io::Result<()> {
        append_metrics_row(&mut self.writer, snapshot)?;
        self.writer.flush()
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

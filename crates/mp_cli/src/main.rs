use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mp_control::{Director, DirectorAction, ResearchDirector};
use mp_core::{
    compute_metrics, MetricsFileWriter, MissingResourcesFn, PersonnelClass, ResearchCompletedFn,
    ResourceMissing, Simulation, Technology,
};
use mp_world::build_simulation;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "mp_cli", about = "Atomic-program management sim CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation for a fixed number of days.
    Run {
        #[arg(long)]
        days: u16,
        #[arg(long, default_value = "./content")]
        content_dir: String,
        #[arg(long, default_value_t = 10)]
        print_every: u16,
        /// Advance the clock without the automated research director.
        #[arg(long)]
        no_director: bool,
        /// Sample metrics every N days.
        #[arg(long, default_value_t = 10)]
        metrics_every: u16,
        /// Disable the metrics CSV in the runs/ directory.
        #[arg(long)]
        no_metrics: bool,
    },
}

// ---------------------------------------------------------------------------
// Run loop
// ---------------------------------------------------------------------------

fn describe_missing(missing: ResourceMissing) -> String {
    let mut short = Vec::new();
    if missing.money {
        short.push("money");
    }
    if missing.uranium {
        short.push("uranium");
    }
    if missing.plutonium {
        short.push("plutonium");
    }
    if missing.workers {
        short.push("workers");
    }
    if missing.engineers {
        short.push("engineers");
    }
    if missing.scientists {
        short.push("scientists");
    }
    if missing.army {
        short.push("army");
    }
    short.join(", ")
}

fn print_status(simulation: &Simulation) {
    let clock = simulation.clock().borrow();
    let economy = simulation.economy().borrow();
    let research = simulation.research().borrow();

    let active = match research.active_research() {
        Some(tech) => format!(
            "{} {:3.0}%",
            tech.def.id,
            research.progress(&tech.def.id) * 100.0
        ),
        None => "idle".to_string(),
    };

    println!(
        "[day={day:04} {date} {weekday}]  money={money:>9}  U={uranium:>4} Pu={plutonium:>4}  \
         morale={morale:>3} security={security:>3}  \
         staff(w/s/e/a)={workers}/{scientists}/{engineers}/{army}  research={active}",
        day = clock.current_game_day(),
        date = clock.current_date(),
        weekday = clock.current_weekday(),
        money = economy.money(),
        uranium = economy.uranium(),
        plutonium = economy.plutonium(),
        morale = economy.morale(),
        security = economy.security(),
        workers = economy.pool(PersonnelClass::Workers).working,
        scientists = economy.pool(PersonnelClass::Scientists).working,
        engineers = economy.pool(PersonnelClass::Engineers).working,
        army = economy.pool(PersonnelClass::Army).working,
    );
}

fn print_actions(actions: &[DirectorAction]) {
    for action in actions {
        match action {
            DirectorAction::Hired { class, count } => {
                println!("    director: hired {count} {class}");
            }
            DirectorAction::Started { tech } => {
                println!("    director: started research on {tech}");
            }
            DirectorAction::Blocked { tech } => {
                println!("    director: {tech} blocked on materiel");
            }
        }
    }
}

#[allow(clippy::fn_params_excessive_bools)]
fn run(
    days: u16,
    content_dir: &str,
    print_every: u16,
    no_director: bool,
    metrics_every: u16,
    no_metrics: bool,
) -> Result<()> {
    let sim = build_simulation(content_dir)
        .with_context(|| format!("loading content from {content_dir}"))?;

    // Event subscriptions: the tokens must stay alive for the whole run.
    let completed_listener: Rc<ResearchCompletedFn> = Rc::new(|tech: &Technology| {
        println!("*** RESEARCH COMPLETED: {} ({}) ***", tech.def.id, tech.def.name);
    });
    sim.research()
        .borrow_mut()
        .add_completed_listener(&completed_listener);

    let missing_listener: Rc<MissingResourcesFn> =
        Rc::new(|missing: &ResourceMissing, tech: &Technology| {
            println!(
                "!!! cannot start {}: missing {}",
                tech.def.id,
                describe_missing(*missing)
            );
        });
    sim.research()
        .borrow_mut()
        .add_missing_resources_listener(&missing_listener);

    let mut metrics_writer = if no_metrics {
        None
    } else {
        let run_dir = std::path::PathBuf::from("runs");
        std::fs::create_dir_all(&run_dir)
            .with_context(|| format!("creating run directory: {}", run_dir.display()))?;
        let writer = MetricsFileWriter::new(&run_dir).context("opening metrics CSV")?;
        println!("Metrics: {}", run_dir.join("metrics.csv").display());
        Some(writer)
    };

    let mut director = ResearchDirector;

    println!("Starting simulation: days={days} content_dir={content_dir}");
    println!("{}", "-".repeat(80));
    print_status(&sim);

    for _ in 0..days {
        if !no_director {
            let actions = director.run_day(&sim);
            print_actions(&actions);
        }

        if let Err(boundary) = sim.advance_day() {
            // Fatal simulation boundary: stop advancing time.
            println!("{}", "-".repeat(80));
            println!("Simulation boundary reached: {boundary}");
            break;
        }

        let day = sim.clock().borrow().current_game_day();
        if print_every > 0 && day % print_every == 0 {
            print_status(&sim);
        }
        if let Some(ref mut writer) = metrics_writer {
            if metrics_every > 0 && day % metrics_every == 0 {
                let snapshot = compute_metrics(&sim);
                writer.write_row(&snapshot).context("writing metrics row")?;
            }
        }
    }

    println!("{}", "-".repeat(80));
    println!("Done. Final state:");
    print_status(&sim);

    if let Some(ref mut writer) = metrics_writer {
        writer.flush().context("final metrics flush")?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            days,
            content_dir,
            print_every,
            no_director,
            metrics_every,
            no_metrics,
        } => {
            run(
                days,
                &content_dir,
                print_every,
                no_director,
                metrics_every,
                no_metrics,
            )?;
        }
    }
    Ok(())
}

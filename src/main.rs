use chrono::{DateTime, TimeZone, Utc};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use project_scheduler::config::{
    AssigneeTieBreak, EmptyAssigneePolicy, SchedulerConfig, UndatedPolicy,
};
use project_scheduler::input::ScheduleRequest;
use project_scheduler::scheduler::{Assignee, Project, Schedule, Scheduler};

#[derive(Parser, Debug)]
#[command(name = "project-scheduler")]
#[command(version)]
#[command(about = "Assign prioritized projects to the least loaded assignees")]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Schedule the built-in sample projects and assignees
    Demo(RunArgs),

    /// Schedule projects and assignees read from a JSON file
    Schedule {
        /// Path to a request: {"projects": [...], "assignees": [...]}
        file: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },
}

// =============================================================================
// Shared Arguments
// =============================================================================

#[derive(Parser, Debug)]
struct RunArgs {
    /// Where projects without a deadline sort among equal priorities
    #[arg(long, value_enum, default_value_t = UndatedPolicy::Last)]
    undated: UndatedPolicy,

    /// How to choose between assignees with the same workload
    #[arg(long, value_enum, default_value_t = AssigneeTieBreak::InputOrder)]
    tie_break: AssigneeTieBreak,

    /// Report projects as unassigned instead of failing when there are no assignees
    #[arg(long)]
    allow_unassigned: bool,

    /// Output format
    #[arg(long, short = 'o', default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl RunArgs {
    fn config(&self) -> SchedulerConfig {
        let empty_assignees = if self.allow_unassigned {
            EmptyAssigneePolicy::LeaveUnassigned
        } else {
            EmptyAssigneePolicy::Reject
        };

        SchedulerConfig::new()
            .with_undated(self.undated)
            .with_tie_break(self.tie_break)
            .with_empty_assignees(empty_assignees)
    }
}

// =============================================================================
// Sample Data
// =============================================================================

fn deadline(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 23, 59, 0).single()
}

fn sample_projects() -> Vec<Project> {
    [
        (1, "Project Alpha", 5, deadline(2022, 12, 31)),
        (2, "Project Beta", 2, deadline(2022, 11, 30)),
        (3, "Project Gamma", 3, deadline(2022, 12, 15)),
        (4, "Project Delta", 1, deadline(2022, 12, 10)),
        (5, "Project Epsilon", 4, deadline(2022, 12, 20)),
    ]
    .into_iter()
    .map(|(id, name, priority, deadline)| Project {
        id,
        name: name.to_string(),
        priority,
        deadline,
    })
    .collect()
}

fn sample_assignees() -> Vec<Assignee> {
    vec![
        Assignee::new(1, "Alice"),
        Assignee::new(2, "Bob"),
        Assignee::new(3, "Charlie"),
    ]
}

// =============================================================================
// Output
// =============================================================================

fn print_schedule(
    schedule: &Schedule,
    output_format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(schedule)?);
        }
        OutputFormat::Table => {
            if schedule.assignments.is_empty() && schedule.unassigned.is_empty() {
                println!("No projects to schedule.");
                return Ok(());
            }

            for assignment in &schedule.assignments {
                println!("{}", assignment);
            }

            if !schedule.unassigned.is_empty() {
                println!();
                println!("Unassigned:");
                for project in &schedule.unassigned {
                    println!("  {} (Priority: {})", project.name, project.priority);
                }
            }

            if !schedule.workloads.is_empty() {
                println!();
                println!("{:<8} {:<24} PROJECTS", "ID", "ASSIGNEE");
                println!("{}", "-".repeat(42));
                for workload in &schedule.workloads {
                    println!(
                        "{:<8} {:<24} {}",
                        workload.assignee.id, workload.assignee.name, workload.projects
                    );
                }
            }
        }
    }
    Ok(())
}

fn run(
    projects: &[Project],
    assignees: &[Assignee],
    args: &RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let scheduler = Scheduler::new(args.config());
    tracing::debug!(config = ?scheduler.config(), "Scheduler configured");

    match scheduler.plan(projects, assignees) {
        Ok(schedule) => print_schedule(&schedule, &args.output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Demo(run_args) => {
            run(&sample_projects(), &sample_assignees(), &run_args)?;
        }
        Commands::Schedule { file, run: run_args } => {
            let request = match ScheduleRequest::from_path(&file) {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("Error: failed to read {}: {}", file.display(), e);
                    std::process::exit(1);
                }
            };
            let (projects, assignees) = match request.into_parts() {
                Ok(parts) => parts,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            run(&projects, &assignees, &run_args)?;
        }
    }

    Ok(())
}

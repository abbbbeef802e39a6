use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wy_app::{
    AppResult, RunOptions, RunRequest, project_service, query, report, run_service,
};

#[derive(Parser)]
#[command(name = "wy-cli")]
#[command(about = "WindYield CLI - Wind turbine yield and tower sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project file
    Validate {
        /// Path to the project JSON or YAML file
        project_path: PathBuf,
    },
    /// Run the yield assessment for a project
    Assess {
        /// Path to the project JSON or YAML file
        project_path: PathBuf,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
        /// Write the design report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List cached runs for a project
    Runs {
        /// Path to the project JSON or YAML file
        project_path: PathBuf,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the project JSON or YAML file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export one per-bin column of a run as CSV
    ExportBins {
        /// Path to the project JSON or YAML file
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Column name (e.g., power_curve, energy, hours)
        column: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Assess {
            project_path,
            no_cache,
            report,
        } => cmd_assess(&project_path, !no_cache, report.as_deref()),
        Commands::Runs { project_path } => cmd_runs(&project_path),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::ExportBins {
            project_path,
            run_id,
            column,
            output,
        } => cmd_export_bins(&project_path, &run_id, &column, output.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_assess(project_path: &Path, use_cache: bool, report_path: Option<&Path>) -> AppResult<()> {
    let request = RunRequest {
        project_path,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    };
    let response = run_service::ensure_run(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!(
            "✓ Assessment completed in {:.3} s: {}",
            response.elapsed_s, response.run_id
        );
    }

    let summary = &response.manifest.summary;
    println!("Rated power: {:.2} kW", summary.rated_power_w / 1000.0);
    println!(
        "Cut-in / rated / cut-out: {:.1} / {} / {} m/s",
        summary.speed_cutin_mps, summary.speed_rated_mps, summary.speed_cutout_mps
    );
    println!(
        "Annual energy: {:.2} MWh ({:.0} full-load hours)",
        summary.energy_production_wh / 1.0e6,
        summary.full_load_hours
    );

    if let Some(path) = report_path {
        let text = report::render_report(&response.manifest.project_name, summary);
        std::fs::write(path, text)?;
        println!("✓ Report written to {}", path.display());
    }
    Ok(())
}

fn cmd_runs(project_path: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(project_path)?;

    if runs.is_empty() {
        println!("No cached runs found");
    } else {
        println!("Cached runs:");
        for run in runs {
            println!(
                "  {} - {} ({:.2} MWh, {})",
                run.run_id,
                run.timestamp,
                run.summary.energy_production_wh / 1.0e6,
                run.project_name
            );
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    let (manifest, bins) = run_service::load_run(project_path, run_id)?;

    println!("Run ID: {}", manifest.run_id);
    println!("Timestamp: {}", manifest.timestamp);
    println!("Model version: {}", manifest.model_version);
    println!("Speed bins: {}", bins.len());
    println!();
    print!(
        "{}",
        report::render_report(&manifest.project_name, &manifest.summary)
    );
    Ok(())
}

fn cmd_export_bins(
    project_path: &Path,
    run_id: &str,
    column: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_, bins) = run_service::load_run(project_path, run_id)?;
    let series = query::extract_bin_series(&bins, column)?;
    let csv = query::export_csv(&series);

    match output {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("✓ Exported {} bins to {}", series.len(), path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}

//! proteins: Folding@Home project table tool
//!
//! Usage: proteins <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use fah_proteins::tab::{self, TabDecoder};
use fah_proteins::{ChangeAction, Protein, ProteinCollection, ProteinError, SerializerKind};

#[derive(Parser)]
#[command(name = "proteins")]
#[command(version)]
#[command(about = "Convert, diff and inspect Folding@Home project (protein) tables", long_about = None)]
struct Cli {
    /// Reject tab-delimited lines with fewer than twelve columns
    #[arg(long, global = true)]
    strict: bool,

    /// Log skipped lines and summaries to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a project table or summary and write a sorted tab-delimited table
    Convert {
        /// Input file (tab-delimited or summary JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input format: tab|json (default: from file extension)
        #[arg(long)]
        from: Option<String>,

        /// Print decode statistics to stderr (tab-delimited input only)
        #[arg(long)]
        stats: bool,
    },

    /// Apply a new snapshot to a project table and report the changes
    Update {
        /// Project table to update (missing file = empty table)
        #[arg(short, long)]
        table: PathBuf,

        /// Snapshot file (tab-delimited or summary JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Snapshot format: tab|json (default: from file extension)
        #[arg(long)]
        from: Option<String>,

        /// Write the merged table back to --table
        #[arg(short, long)]
        write: bool,

        /// Only report added and changed projects
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the fields of one project
    Show {
        /// Input file (tab-delimited or summary JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Project number
        project: i32,
    },

    /// Estimate production for one project
    Production {
        /// Input file (tab-delimited or summary JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Project number
        project: i32,

        /// Time per frame in seconds
        #[arg(short, long)]
        frame_time: f64,

        /// Overall unit completion time in seconds (default: frames x frame time)
        #[arg(short, long)]
        unit_time: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Must be set before any parsing occurs
    if cli.strict {
        fah_proteins::config::set_strict_fields(true);
    }

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            from,
            stats,
        } => run_convert(input, output, from, stats),

        Commands::Update {
            table,
            snapshot,
            from,
            write,
            quiet,
        } => run_update(table, snapshot, from, write, quiet),

        Commands::Show { input, project } => run_show(input, project),

        Commands::Production {
            input,
            project,
            frame_time,
            unit_time,
        } => run_production(input, project, frame_time, unit_time),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn resolve_kind(path: &Path, from: Option<&str>) -> Result<SerializerKind, ProteinError> {
    match from {
        Some(name) => SerializerKind::from_name(name),
        None => Ok(SerializerKind::from_path(path)),
    }
}

fn read_any(path: &Path, from: Option<&str>) -> Result<Vec<Protein>, ProteinError> {
    resolve_kind(path, from)?.read_file(path)
}

fn seconds(value: f64, name: &str) -> Result<Duration, ProteinError> {
    Duration::try_from_secs_f64(value)
        .map_err(|_| ProteinError::InvalidFormat(format!("invalid {}: {}", name, value)))
}

fn run_convert(
    input: PathBuf,
    output: Option<PathBuf>,
    from: Option<String>,
    stats: bool,
) -> Result<(), ProteinError> {
    let proteins = match resolve_kind(&input, from.as_deref())? {
        SerializerKind::Tab => {
            let file = std::fs::File::open(&input)?;
            let (proteins, decode_stats) = TabDecoder::new().decode_with_stats(file)?;
            if stats {
                eprintln!("Decode stats: {}", decode_stats);
            }
            proteins
        }
        kind => kind.read_file(&input)?,
    };

    // The summary JSON is not filtered on read.
    let proteins: Vec<&Protein> = proteins.iter().filter(|p| p.is_valid()).collect();

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tab::write_proteins(file, proteins)
        }
        None => {
            let stdout = io::stdout();
            tab::write_proteins(stdout.lock(), proteins)
        }
    }
}

fn run_update(
    table: PathBuf,
    snapshot: PathBuf,
    from: Option<String>,
    write: bool,
    quiet: bool,
) -> Result<(), ProteinError> {
    let mut collection: ProteinCollection = if table.exists() {
        tab::read_proteins(&table)?.into_iter().collect()
    } else {
        ProteinCollection::new()
    };

    let incoming = read_any(&snapshot, from.as_deref())?;
    let changes = collection.update(incoming);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for change in &changes {
        if quiet && change.action() == ChangeAction::Unchanged {
            continue;
        }
        writeln!(handle, "{}", change)?;
    }

    if write {
        let file = std::fs::File::create(&table)?;
        tab::write_proteins(file, collection.iter())?;
    }

    Ok(())
}

fn find_project(input: &Path, project: i32) -> Result<Protein, ProteinError> {
    read_any(input, None)?
        .into_iter()
        .find(|p| p.project_number == project)
        .ok_or(ProteinError::NotFound(project))
}

fn run_show(input: PathBuf, project: i32) -> Result<(), ProteinError> {
    let protein = find_project(&input, project)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for (name, value) in protein.fields() {
        writeln!(handle, "{:<16}{}", name, value)?;
    }
    Ok(())
}

fn run_production(
    input: PathBuf,
    project: i32,
    frame_time: f64,
    unit_time: Option<f64>,
) -> Result<(), ProteinError> {
    let protein = find_project(&input, project)?;

    let frame_time = seconds(frame_time, "frame time")?;
    let unit_time = match unit_time {
        Some(secs) => seconds(secs, "unit time")?,
        None => frame_time
            .checked_mul(protein.frames.max(0) as u32)
            .ok_or_else(|| ProteinError::InvalidFormat("unit time overflows".to_string()))?,
    };

    let values = protein.production(frame_time, unit_time);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "units_per_day\t{}", values.units_per_day)?;
    writeln!(handle, "bonus_multiplier\t{}", values.bonus_multiplier)?;
    writeln!(handle, "credit\t{}", values.credit)?;
    writeln!(handle, "points_per_day\t{}", values.points_per_day)?;
    Ok(())
}

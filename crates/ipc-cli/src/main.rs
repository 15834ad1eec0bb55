use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use ipc_code::{curve_from_pairs_json, Curve, GaussCode};
use ipc_core::Move;
use ipc_explore::{export_census_csv, write_census_csv, ExploreConfig, Explorer};
use rusqlite::Connection;
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Largest `|w|` accepted by `canonical`; the code holds `2(|w| - 1)` edges.
const MAX_CANONICAL_WHITNEY: i64 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "ipc", about = "Immersed plane curve explorer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand the move graph into a SQLite store.
    Explore(ExploreArgs),
    /// Print the minimal curve with a given Whitney index.
    Canonical {
        /// Target Whitney index.
        #[arg(
            long,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i64).range(-MAX_CANONICAL_WHITNEY..=MAX_CANONICAL_WHITNEY)
        )]
        whitney: i64,
    },
    /// Print the Whitney index of a curve code.
    Whitney {
        /// Curve code as a JSON list of `[left, right]` pairs.
        #[arg(long)]
        code: String,
    },
    /// Print every neighbour of a curve code as JSON lines.
    Neighbors {
        /// Curve code as a JSON list of `[left, right]` pairs.
        #[arg(long)]
        code: String,
    },
    /// Decide whether a signed Gauss code is realizable in the plane.
    Planar {
        /// Gauss code as a JSON list of signed integers.
        #[arg(long)]
        gauss: String,
    },
    /// Print the per-crossing-number census of a store.
    Census {
        /// SQLite store written by `ipc explore`.
        #[arg(long)]
        db: PathBuf,
        /// Write CSV to this file instead of stdout.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct ExploreArgs {
    /// SQLite store to create or resume.
    #[arg(long)]
    db: PathBuf,
    /// YAML exploration configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides `max_vertices` from the configuration.
    #[arg(long)]
    max_vertices: Option<usize>,
    /// Overrides `max_curves` from the configuration.
    #[arg(long)]
    max_curves: Option<usize>,
}

#[derive(Debug, Serialize)]
struct NeighborLine {
    #[serde(rename = "move")]
    mv: Move,
    code: u16,
    whitney: i64,
    vertices: usize,
    curve: Vec<(i64, i64)>,
}

impl NeighborLine {
    fn new(mv: Move, curve: &Curve) -> Self {
        Self {
            mv,
            code: mv.code(),
            whitney: curve.whitney(),
            vertices: curve.num_vertices(),
            curve: curve.to_pairs(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Explore(args) => run_explore(args),
        Command::Canonical { whitney } => print_json(&Curve::canonical(whitney).to_pairs()),
        Command::Whitney { code } => {
            let curve = curve_from_pairs_json(&code)?;
            println!("{}", curve.whitney());
            Ok(())
        }
        Command::Neighbors { code } => run_neighbors(&code),
        Command::Planar { gauss } => {
            let labels: Vec<i64> = serde_json::from_str(&gauss)?;
            let code = GaussCode::new(labels)?;
            println!("{}", code.is_planar());
            Ok(())
        }
        Command::Census { db, csv } => run_census(db, csv),
    }
}

fn run_explore(args: ExploreArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ExploreConfig::load(path)?,
        None => ExploreConfig::default(),
    };
    if args.max_vertices.is_some() {
        config.max_vertices = args.max_vertices;
    }
    if args.max_curves.is_some() {
        config.max_curves = args.max_curves;
    }
    tracing::info!(db = %args.db.display(), ?config, "explore");
    let mut explorer = Explorer::open(&args.db, config)?;
    let report = explorer.run()?;
    print_json(&report)
}

fn run_neighbors(code: &str) -> Result<(), Box<dyn Error>> {
    let curve = curve_from_pairs_json(code)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (mv, next) in curve.neighbors() {
        serde_json::to_writer(&mut out, &NeighborLine::new(mv, &next))?;
        writeln!(out)?;
    }
    Ok(())
}

fn run_census(db: PathBuf, csv: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let conn = Connection::open(&db)?;
    match csv {
        Some(path) => {
            export_census_csv(&conn, &path)?;
            tracing::info!(path = %path.display(), "census written");
        }
        None => write_census_csv(&conn, io::stdout().lock())?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_lines_name_the_move() {
        let line = NeighborLine::new(Move::R1CcwAdd, &Curve::canonical(2));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["move"], "R1_CCW_ADD");
        assert_eq!(json["code"], 101);
        assert_eq!(json["whitney"], 2);
        assert_eq!(json["curve"], serde_json::json!([[0, -1], [1, 0]]));
    }

    #[test]
    fn oversized_indices_are_rejected() {
        let err = Cli::try_parse_from(["ipc", "canonical", "--whitney", "10000000000"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(Cli::try_parse_from(["ipc", "canonical", "--whitney", "-10001"]).is_err());
        assert!(Cli::try_parse_from(["ipc", "canonical", "--whitney", "10000"]).is_ok());
    }

    #[test]
    fn negative_indices_parse() {
        let cli = Cli::try_parse_from(["ipc", "canonical", "--whitney", "-3"]).unwrap();
        assert!(matches!(cli.command, Command::Canonical { whitney: -3 }));
    }
}

use std::path::Path;

use ipc_code::invariants::verify;
use ipc_code::Curve;
use ipc_core::errors::{ErrorInfo, IpcError};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ExploreConfig;
use crate::schema::{
    add_move, census, count_curves, fetch_curve, find_or_insert, init_schema, insert_curve,
    load_curve_record, mark_explored, next_unexplored, store_error, Lookup,
};

/// Counters accumulated over one [`Explorer::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreReport {
    /// Curves whose neighbours were enumerated.
    pub processed: usize,
    /// Curves newly stored, the seed included.
    pub inserted: usize,
    /// Neighbour lookups that found an equal stored curve.
    pub hits: usize,
    /// Neighbour lookups that stored a new curve.
    pub misses: usize,
    /// Stored curves failing the invariant diagnostics.
    pub violations: usize,
}

/// Breadth-first walk over the move graph, persisted in SQLite.
///
/// Every expansion runs in its own transaction, so an interrupted run
/// resumes from the last fully expanded curve.
pub struct Explorer {
    conn: Connection,
    config: ExploreConfig,
}

impl Explorer {
    /// Wraps an open connection, creating the schema when needed.
    pub fn new(conn: Connection, config: ExploreConfig) -> Result<Self, IpcError> {
        config.validate()?;
        init_schema(&conn)?;
        Ok(Self { conn, config })
    }

    /// Opens or creates the store at `path`.
    pub fn open(path: &Path, config: ExploreConfig) -> Result<Self, IpcError> {
        let conn = Connection::open(path).map_err(|err| {
            IpcError::Store(
                ErrorInfo::new("ipc_explore.open", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::new(conn, config)
    }

    /// Underlying connection, for queries after a run.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Active configuration.
    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// Expands unexplored curves until none remains within the caps.
    pub fn run(&mut self) -> Result<ExploreReport, IpcError> {
        let mut report = ExploreReport::default();
        if count_curves(&self.conn)? == 0 {
            let seed = Curve::canonical(self.config.seed_whitney);
            let id = insert_curve(&self.conn, &seed, 0)?;
            report.inserted += 1;
            info!(id, whitney = self.config.seed_whitney, "seeded empty store");
        }

        loop {
            if self
                .config
                .max_curves
                .is_some_and(|cap| report.processed >= cap)
            {
                info!(processed = report.processed, "curve cap reached");
                break;
            }
            let Some(curve_id) =
                next_unexplored(&self.conn, self.config.order, self.config.max_vertices)?
            else {
                info!(processed = report.processed, "no unexplored curve within caps");
                break;
            };
            self.expand(curve_id, &mut report)?;
        }

        self.log_census(&report)?;
        Ok(report)
    }

    fn expand(&mut self, curve_id: i64, report: &mut ExploreReport) -> Result<(), IpcError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|err| store_error("ipc_explore.transaction", err))?;
        let curve = fetch_curve(&tx, curve_id)?;
        let distance = load_curve_record(&tx, curve_id)?.distance;
        debug!(
            curve_id,
            distance,
            vertices = curve.num_vertices(),
            "expanding curve"
        );

        let mut fresh = Vec::new();
        for (mv, next) in curve.neighbors() {
            let lookup = find_or_insert(&tx, &next, distance + 1)?;
            match lookup {
                Lookup::Hit(_) => report.hits += 1,
                Lookup::Miss(id) => {
                    report.misses += 1;
                    fresh.push((id, next));
                }
            }
            add_move(&tx, curve_id, lookup.id(), mv)?;
        }
        mark_explored(&tx, curve_id)?;
        tx.commit()
            .map_err(|err| store_error("ipc_explore.commit", err))?;
        report.processed += 1;

        for (id, next) in fresh {
            report.inserted += 1;
            if self.config.verify_invariants {
                if let Err(err) = verify(&next) {
                    report.violations += 1;
                    warn!(curve_id = id, code = ?next, %err, "stored curve fails invariants");
                }
            }
            if report.inserted % self.config.progress_every == 0 {
                self.log_census(report)?;
            }
        }
        Ok(())
    }

    fn log_census(&self, report: &ExploreReport) -> Result<(), IpcError> {
        let total = report.hits + report.misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            report.hits as f64 / total as f64
        };
        info!(
            processed = report.processed,
            inserted = report.inserted,
            hits = report.hits,
            misses = report.misses,
            hit_rate,
            "progress"
        );
        for row in census(&self.conn)? {
            info!(
                vertices = row.num_vertices,
                distance = row.distance,
                count = row.count,
                "census"
            );
        }
        Ok(())
    }
}

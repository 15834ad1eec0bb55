use chrono::Utc;
use ipc_code::{curve_from_rows, curve_to_rows, Curve, CurveRow};
use ipc_core::errors::{ErrorInfo, IpcError};
use ipc_core::Move;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::config::ExploreOrder;

/// Version recorded in the `meta` table.
pub const SCHEMA_VERSION: i64 = 1;

/// One row of the `curve` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveRecord {
    /// Row identifier.
    pub id: i64,
    /// Stored fingerprint, reinterpreted as a signed integer.
    pub hash: i64,
    /// Crossing count.
    pub num_vertices: i64,
    /// Whitney index.
    pub whitney: i64,
    /// Whether the neighbours have been enumerated.
    pub explored: bool,
    /// Moves from the seed when first discovered.
    pub distance: i64,
}

/// One row of the `move` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Curve the move starts from.
    pub start_curve_id: i64,
    /// Curve the move leads to.
    pub end_curve_id: i64,
    /// Move tag.
    pub mv: Move,
    /// How many distinct ways the move reaches the end curve.
    pub multiplicity: i64,
}

/// Curve count for one crossing number and distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusRow {
    /// Crossing count.
    pub num_vertices: i64,
    /// Distance from the seed.
    pub distance: i64,
    /// Number of stored curves.
    pub count: i64,
}

pub(crate) fn store_error(code: &str, err: impl ToString) -> IpcError {
    IpcError::Store(ErrorInfo::new(code, err.to_string()))
}

/// Stored form of a curve fingerprint.
pub fn stored_hash(curve: &Curve) -> i64 {
    i64::from_ne_bytes(curve.fingerprint().to_ne_bytes())
}

/// Creates the tables if needed and checks the recorded version.
pub fn init_schema(conn: &Connection) -> Result<(), IpcError> {
    conn.execute_batch(
        "BEGIN;
        CREATE TABLE IF NOT EXISTS meta(
            version INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS curve(
            id INTEGER PRIMARY KEY NOT NULL,
            hash INTEGER NOT NULL,
            num_vertices INTEGER NOT NULL,
            whitney INTEGER NOT NULL,
            explored INTEGER NOT NULL,
            distance INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_hash ON curve(hash);
        CREATE INDEX IF NOT EXISTS idx_num_vertices ON curve(num_vertices);
        CREATE INDEX IF NOT EXISTS idx_distance ON curve(explored, distance, num_vertices);
        CREATE TABLE IF NOT EXISTS curve_edge(
            curve_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            left_face INTEGER NOT NULL,
            right_face INTEGER NOT NULL,
            PRIMARY KEY (curve_id, position),
            FOREIGN KEY (curve_id) REFERENCES curve(id)
        );
        CREATE TABLE IF NOT EXISTS move_type(
            id INTEGER PRIMARY KEY NOT NULL,
            description TEXT
        );
        CREATE TABLE IF NOT EXISTS move(
            start_curve_id INTEGER NOT NULL,
            end_curve_id INTEGER NOT NULL,
            type_id INTEGER NOT NULL,
            multiplicity INTEGER NOT NULL,
            PRIMARY KEY (start_curve_id, end_curve_id, type_id),
            FOREIGN KEY (start_curve_id) REFERENCES curve(id),
            FOREIGN KEY (end_curve_id) REFERENCES curve(id),
            FOREIGN KEY (type_id) REFERENCES move_type(id)
        );
        COMMIT;",
    )
    .map_err(|err| store_error("ipc_explore.schema", err))?;
    for mv in Move::ALL {
        conn.execute(
            "INSERT OR IGNORE INTO move_type(id, description) VALUES (?, ?)",
            params![mv.code(), mv.name()],
        )
        .map_err(|err| store_error("ipc_explore.schema", err))?;
    }
    set_version(conn, SCHEMA_VERSION)
}

fn set_version(conn: &Connection, version: i64) -> Result<(), IpcError> {
    let existing: Option<i64> = conn
        .query_row("SELECT version FROM meta LIMIT 1", [], |row| row.get(0))
        .optional()
        .map_err(|err| store_error("ipc_explore.schema", err))?;
    match existing {
        Some(current) if current == version => Ok(()),
        Some(current) => Err(IpcError::Store(ErrorInfo::new(
            "ipc_explore.schema_version",
            format!("store schema {current} incompatible with expected {version}"),
        ))),
        None => {
            conn.execute(
                "INSERT INTO meta(version, created_at) VALUES (?, ?)",
                params![version, Utc::now().to_rfc3339()],
            )
            .map_err(|err| store_error("ipc_explore.schema", err))?;
            Ok(())
        }
    }
}

/// Stores a new unexplored curve with one row per edge.
pub fn insert_curve(conn: &Connection, curve: &Curve, distance: i64) -> Result<i64, IpcError> {
    conn.execute(
        "INSERT INTO curve(hash, num_vertices, whitney, explored, distance) VALUES (?, ?, ?, 0, ?)",
        params![
            stored_hash(curve),
            curve.num_vertices() as i64,
            curve.whitney(),
            distance
        ],
    )
    .map_err(|err| store_error("ipc_explore.insert_curve", err))?;
    let id = conn.last_insert_rowid();

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO curve_edge(curve_id, position, left_face, right_face) VALUES (?, ?, ?, ?)",
        )
        .map_err(|err| store_error("ipc_explore.insert_curve", err))?;
    for row in curve_to_rows(curve) {
        stmt.execute(params![id, row.position as i64, row.left_face, row.right_face])
            .map_err(|err| store_error("ipc_explore.insert_curve", err))?;
    }
    Ok(id)
}

/// Rebuilds a stored curve from its edge rows.
pub fn fetch_curve(conn: &Connection, curve_id: i64) -> Result<Curve, IpcError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT position, left_face, right_face FROM curve_edge WHERE curve_id = ? ORDER BY position",
        )
        .map_err(|err| store_error("ipc_explore.fetch_curve", err))?;
    let rows = stmt
        .query_map([curve_id], |row| {
            let position: i64 = row.get(0)?;
            Ok(CurveRow {
                position: usize::try_from(position).unwrap_or(usize::MAX),
                left_face: row.get(1)?,
                right_face: row.get(2)?,
            })
        })
        .map_err(|err| store_error("ipc_explore.fetch_curve", err))?;
    let rows = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| store_error("ipc_explore.fetch_curve", err))?;
    if rows.is_empty() {
        return Err(IpcError::Store(
            ErrorInfo::new("ipc_explore.unknown_curve", "no edges stored for curve")
                .with_context("curve_id", curve_id),
        ));
    }
    curve_from_rows(&rows)
}

/// Loads the `curve` row of one curve.
pub fn load_curve_record(conn: &Connection, curve_id: i64) -> Result<CurveRecord, IpcError> {
    conn.query_row(
        "SELECT id, hash, num_vertices, whitney, explored, distance FROM curve WHERE id = ?",
        [curve_id],
        |row| {
            Ok(CurveRecord {
                id: row.get(0)?,
                hash: row.get(1)?,
                num_vertices: row.get(2)?,
                whitney: row.get(3)?,
                explored: row.get::<_, i64>(4)? != 0,
                distance: row.get(5)?,
            })
        },
    )
    .optional()
    .map_err(|err| store_error("ipc_explore.query", err))?
    .ok_or_else(|| {
        IpcError::Store(
            ErrorInfo::new("ipc_explore.unknown_curve", "no such curve")
                .with_context("curve_id", curve_id),
        )
    })
}

/// Number of stored curves.
pub fn count_curves(conn: &Connection) -> Result<i64, IpcError> {
    conn.query_row("SELECT count(*) FROM curve", [], |row| row.get(0))
        .map_err(|err| store_error("ipc_explore.query", err))
}

/// Outcome of looking a curve up in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// An equal curve was already stored under this id.
    Hit(i64),
    /// The curve was new and has been stored under this id.
    Miss(i64),
}

impl Lookup {
    /// Identifier of the stored curve.
    pub fn id(self) -> i64 {
        match self {
            Lookup::Hit(id) | Lookup::Miss(id) => id,
        }
    }
}

/// Finds a stored curve equal to `curve`, inserting it at `distance` when
/// none exists. Candidates share the fingerprint and are confirmed with full
/// equality.
pub fn find_or_insert(conn: &Connection, curve: &Curve, distance: i64) -> Result<Lookup, IpcError> {
    let candidates: Vec<i64> = {
        let mut stmt = conn
            .prepare_cached("SELECT id FROM curve WHERE hash = ? ORDER BY id")
            .map_err(|err| store_error("ipc_explore.lookup", err))?;
        let rows = stmt
            .query_map([stored_hash(curve)], |row| row.get(0))
            .map_err(|err| store_error("ipc_explore.lookup", err))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|err| store_error("ipc_explore.lookup", err))?
    };
    for id in candidates {
        if fetch_curve(conn, id)? == *curve {
            return Ok(Lookup::Hit(id));
        }
    }
    insert_curve(conn, curve, distance).map(Lookup::Miss)
}

/// Records one move, raising the multiplicity when it was already known.
pub fn add_move(conn: &Connection, start_id: i64, end_id: i64, mv: Move) -> Result<(), IpcError> {
    conn.execute(
        "INSERT INTO move(start_curve_id, end_curve_id, type_id, multiplicity) VALUES (?, ?, ?, 1)
         ON CONFLICT(start_curve_id, end_curve_id, type_id)
         DO UPDATE SET multiplicity = multiplicity + 1",
        params![start_id, end_id, mv.code()],
    )
    .map_err(|err| store_error("ipc_explore.add_move", err))?;
    Ok(())
}

/// Flags a curve as expanded.
pub fn mark_explored(conn: &Connection, curve_id: i64) -> Result<(), IpcError> {
    conn.execute("UPDATE curve SET explored = 1 WHERE id = ?", [curve_id])
        .map_err(|err| store_error("ipc_explore.mark_explored", err))?;
    Ok(())
}

/// Next curve to expand, if any remains within the crossing cap.
pub fn next_unexplored(
    conn: &Connection,
    order: ExploreOrder,
    max_vertices: Option<usize>,
) -> Result<Option<i64>, IpcError> {
    let sql = match order {
        ExploreOrder::Bfs => {
            "SELECT id FROM curve WHERE explored = 0 AND (?1 IS NULL OR num_vertices <= ?1)
             ORDER BY distance ASC, num_vertices ASC, id ASC LIMIT 1"
        }
        ExploreOrder::VerticesFirst => {
            "SELECT id FROM curve WHERE explored = 0 AND (?1 IS NULL OR num_vertices <= ?1)
             ORDER BY num_vertices ASC, distance ASC, id ASC LIMIT 1"
        }
    };
    let cap = max_vertices.map(|cap| cap as i64);
    conn.query_row(sql, params![cap], |row| row.get(0))
        .optional()
        .map_err(|err| store_error("ipc_explore.next_unexplored", err))
}

/// Curve counts grouped by crossing number and distance.
pub fn census(conn: &Connection) -> Result<Vec<CensusRow>, IpcError> {
    let mut stmt = conn
        .prepare(
            "SELECT num_vertices, distance, count(*) FROM curve
             GROUP BY num_vertices, distance ORDER BY num_vertices, distance",
        )
        .map_err(|err| store_error("ipc_explore.census", err))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(CensusRow {
                num_vertices: row.get(0)?,
                distance: row.get(1)?,
                count: row.get(2)?,
            })
        })
        .map_err(|err| store_error("ipc_explore.census", err))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|err| store_error("ipc_explore.census", err))
}

/// Every stored move, ordered by start, end and tag code.
pub fn load_moves(conn: &Connection) -> Result<Vec<MoveRecord>, IpcError> {
    let mut stmt = conn
        .prepare(
            "SELECT start_curve_id, end_curve_id, type_id, multiplicity FROM move
             ORDER BY start_curve_id, end_curve_id, type_id",
        )
        .map_err(|err| store_error("ipc_explore.query", err))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, u16>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .map_err(|err| store_error("ipc_explore.query", err))?;
    let raw = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| store_error("ipc_explore.query", err))?;
    raw.into_iter()
        .map(|(start_curve_id, end_curve_id, code, multiplicity)| {
            Ok(MoveRecord {
                start_curve_id,
                end_curve_id,
                mv: Move::from_code(code)?,
                multiplicity,
            })
        })
        .collect()
}

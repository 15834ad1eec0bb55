use std::io::Write;
use std::path::Path;

use ipc_core::errors::{ErrorInfo, IpcError};
use rusqlite::Connection;

use crate::schema::census;

fn export_error(err: impl ToString) -> IpcError {
    IpcError::Store(ErrorInfo::new("ipc_explore.export", err.to_string()))
}

/// Writes the census as `num_vertices,distance,count` rows to any writer.
pub fn write_census_csv<W: Write>(conn: &Connection, out: W) -> Result<(), IpcError> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["num_vertices", "distance", "count"])
        .map_err(export_error)?;
    for row in census(conn)? {
        wtr.write_record([
            row.num_vertices.to_string(),
            row.distance.to_string(),
            row.count.to_string(),
        ])
        .map_err(export_error)?;
    }
    wtr.flush().map_err(export_error)
}

/// Writes the census to a CSV file.
pub fn export_census_csv(conn: &Connection, out_path: &Path) -> Result<(), IpcError> {
    let file = std::fs::File::create(out_path).map_err(|err| {
        IpcError::Store(
            ErrorInfo::new("ipc_explore.export", err.to_string())
                .with_context("path", out_path.display()),
        )
    })?;
    write_census_csv(conn, file)
}

//! SQLite-backed exploration of the move graph of immersed plane curves.

pub mod config;
pub mod explore;
pub mod export;
pub mod schema;

pub use config::{ExploreConfig, ExploreOrder};
pub use explore::{ExploreReport, Explorer};
pub use export::{export_census_csv, write_census_csv};
pub use schema::{
    add_move, census, count_curves, fetch_curve, find_or_insert, init_schema, insert_curve,
    load_curve_record, load_moves, mark_explored, next_unexplored, stored_hash, CensusRow,
    CurveRecord, Lookup, MoveRecord,
};

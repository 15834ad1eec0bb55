use ipc_code::Curve;
use ipc_core::{IpcError, Move};
use ipc_explore::{
    add_move, fetch_curve, find_or_insert, init_schema, insert_curve, load_curve_record,
    load_moves, mark_explored, next_unexplored, ExploreOrder, Lookup,
};
use rusqlite::Connection;
use tempfile::NamedTempFile;

fn open_store() -> (NamedTempFile, Connection) {
    let db = NamedTempFile::new().expect("db temp");
    let conn = Connection::open(db.path()).expect("open db");
    init_schema(&conn).expect("schema");
    (db, conn)
}

#[test]
fn schema_is_idempotent_and_lists_move_types() {
    let (_db, conn) = open_store();
    init_schema(&conn).expect("second init");
    let count: i64 = conn
        .query_row("SELECT count(*) FROM move_type", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 16);
    let name: String = conn
        .query_row("SELECT description FROM move_type WHERE id = 304", [], |row| {
            row.get(0)
        })
        .expect("name");
    assert_eq!(name, "S_2_to_1_CCW");
}

#[test]
fn stored_curves_round_trip() {
    let (_db, conn) = open_store();
    let curve = Curve::canonical(-4);
    let id = insert_curve(&conn, &curve, 3).expect("insert");
    assert_eq!(fetch_curve(&conn, id).expect("fetch").to_pairs(), curve.to_pairs());
    let record = load_curve_record(&conn, id).expect("record");
    assert_eq!(record.num_vertices, 3);
    assert_eq!(record.whitney, -4);
    assert_eq!(record.distance, 3);
    assert!(!record.explored);
}

#[test]
fn lookup_matches_rotated_relabeled_curves() {
    let (_db, conn) = open_store();
    let curve = Curve::canonical(3);
    let first = find_or_insert(&conn, &curve, 0).expect("insert");
    assert!(matches!(first, Lookup::Miss(_)));
    let relabeled = Curve::from_pairs([(5, 7), (7, -1), (3, 7), (7, -1)]);
    let second = find_or_insert(&conn, &relabeled, 9).expect("lookup");
    assert_eq!(second, Lookup::Hit(first.id()));
    let mirror = find_or_insert(&conn, &curve.reversed(), 1).expect("mirror");
    assert!(matches!(mirror, Lookup::Miss(id) if id != first.id()));
}

#[test]
fn repeated_moves_raise_multiplicity() {
    let (_db, conn) = open_store();
    let a = insert_curve(&conn, &Curve::canonical(1), 0).expect("a");
    let b = insert_curve(&conn, &Curve::canonical(2), 1).expect("b");
    add_move(&conn, a, b, Move::R1CcwAdd).expect("first");
    add_move(&conn, a, b, Move::R1CcwAdd).expect("second");
    add_move(&conn, b, a, Move::R1CcwRemove).expect("back");
    let moves = load_moves(&conn).expect("moves");
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].mv, Move::R1CcwAdd);
    assert_eq!(moves[0].multiplicity, 2);
    assert_eq!(moves[1].mv, Move::R1CcwRemove);
    assert_eq!(moves[1].multiplicity, 1);
}

#[test]
fn unexplored_order_and_caps() {
    let (_db, conn) = open_store();
    let far_small = insert_curve(&conn, &Curve::canonical(2), 4).expect("far");
    let near_large = insert_curve(&conn, &Curve::canonical(5), 1).expect("near");
    assert_eq!(
        next_unexplored(&conn, ExploreOrder::Bfs, None).expect("bfs"),
        Some(near_large)
    );
    assert_eq!(
        next_unexplored(&conn, ExploreOrder::VerticesFirst, None).expect("vertices"),
        Some(far_small)
    );
    assert_eq!(
        next_unexplored(&conn, ExploreOrder::Bfs, Some(2)).expect("capped"),
        Some(far_small)
    );
    mark_explored(&conn, far_small).expect("mark");
    assert_eq!(
        next_unexplored(&conn, ExploreOrder::Bfs, Some(2)).expect("capped"),
        None
    );
}

#[test]
fn missing_curves_are_reported() {
    let (_db, conn) = open_store();
    let err = fetch_curve(&conn, 42).unwrap_err();
    assert_eq!(err.info().code, "ipc_explore.unknown_curve");
    let err = load_curve_record(&conn, 42).unwrap_err();
    assert_eq!(err.info().code, "ipc_explore.unknown_curve");
}

#[test]
fn corrupted_edges_fail_on_fetch() {
    let (_db, conn) = open_store();
    let id = insert_curve(&conn, &Curve::canonical(2), 0).expect("insert");
    conn.execute(
        "UPDATE curve_edge SET left_face = 1, right_face = 2 WHERE curve_id = ? AND position = 1",
        [id],
    )
    .expect("corrupt");
    let err = fetch_curve(&conn, id).unwrap_err();
    assert!(matches!(err, IpcError::Code(_)));
    assert_eq!(err.info().code, "malformed-curve-code");
}

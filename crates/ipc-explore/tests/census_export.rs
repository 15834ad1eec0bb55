use std::fs;

use ipc_explore::{export_census_csv, write_census_csv, ExploreConfig, Explorer};
use tempfile::{tempdir, NamedTempFile};

#[test]
fn census_csv_is_deterministic() {
    let db = NamedTempFile::new().expect("db");
    let mut explorer = Explorer::open(
        db.path(),
        ExploreConfig {
            max_vertices: Some(1),
            ..ExploreConfig::default()
        },
    )
    .expect("open");
    explorer.run().expect("run");

    let dir = tempdir().expect("dir");
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    export_census_csv(explorer.connection(), &a).expect("export a");
    export_census_csv(explorer.connection(), &b).expect("export b");
    let bytes_a = fs::read(&a).expect("read a");
    assert_eq!(bytes_a, fs::read(&b).expect("read b"));

    let text = String::from_utf8(bytes_a).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("num_vertices,distance,count"));
    assert_eq!(lines.next(), Some("0,0,1"));
}

#[test]
fn census_writes_to_memory() {
    let db = NamedTempFile::new().expect("db");
    let mut explorer = Explorer::open(
        db.path(),
        ExploreConfig {
            max_curves: Some(1),
            ..ExploreConfig::default()
        },
    )
    .expect("open");
    explorer.run().expect("run");
    let mut buffer = Vec::new();
    write_census_csv(explorer.connection(), &mut buffer).expect("write");
    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(
        text,
        "num_vertices,distance,count\n0,0,1\n1,1,2\n2,1,2\n"
    );
}

use ipc_core::errors::{ErrorInfo, IpcError};
use ipc_core::{FaceId, Move, SchemaVersion};

#[test]
fn moves_serialize_by_stable_name() {
    for mv in Move::ALL {
        let json = serde_json::to_string(&mv).expect("serialize");
        assert_eq!(json, format!("\"{}\"", mv.name()));
        let decoded: Move = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, mv);
        assert_eq!(Move::from_code(mv.code()).unwrap(), mv);
        assert_eq!(Move::from_name(mv.name()).unwrap(), mv);
    }
}

#[test]
fn unknown_move_codes_are_rejected() {
    let err = Move::from_code(309).unwrap_err();
    assert!(matches!(&err, IpcError::Move(info) if info.code == "unknown-move"));
    assert!(Move::from_name("R2_ADD").is_err());
}

#[test]
fn face_ids_serialize_as_plain_integers() {
    let faces = vec![FaceId::OUT, FaceId::from_raw(4)];
    let json = serde_json::to_string(&faces).expect("serialize");
    assert_eq!(json, "[-1,4]");
    let decoded: Vec<FaceId> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, faces);
    assert!(decoded[0].is_out());
    assert_eq!(decoded[1].succ(), FaceId::from_raw(5));
}

#[test]
fn errors_round_trip_json() {
    let err = IpcError::Code(
        ErrorInfo::new("duplicate-position", "position stored twice").with_context("position", 2),
    );
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: IpcError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn schema_versions_read_older_minor_versions() {
    let current = SchemaVersion::new(1, 2, 0);
    assert!(current.reads(&SchemaVersion::new(1, 0, 3)));
    assert!(!current.reads(&SchemaVersion::new(2, 0, 0)));
    assert!(!current.reads(&SchemaVersion::new(1, 3, 0)));
}

use dtc_domain::type_url::TypeUrl;
use dtc_identity::{MsgCreateDidDocument, msg_types};
use std::collections::HashSet;

const ADDR: &str = "dtc1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5z5tpwxq";

#[test]
fn table_matches_generated_registry() {
    let urls: Vec<&str> = msg_types().iter().map(|d| d.type_url()).collect();
    assert_eq!(
        urls,
        vec![
            "/dtc.identity.v1.MsgUpdateParams",
            "/dtc.identity.v1.MsgCreateDidDocument",
            "/dtc.identity.v1.MsgUpdateDidDocument",
            "/dtc.identity.v1.MsgDeleteDidDocument",
        ],
    );
}

#[test]
fn table_entries_are_distinct_and_well_formed() {
    let table = msg_types();
    assert_eq!(table.len(), 4);

    let mut seen = HashSet::new();
    for descriptor in &table {
        assert!(seen.insert(descriptor.type_url()));
        let url = TypeUrl::parse(descriptor.type_url()).unwrap();
        assert_eq!(url.module(), Some(dtc_identity::MODULE_NAME));
        assert!(url.name().starts_with("Msg"));
    }
}

fn create_msg() -> MsgCreateDidDocument {
    MsgCreateDidDocument {
        creator: ADDR.to_owned(),
        did: "did:dtc:alice".to_owned(),
        controller: String::new(),
        face_hash: "abc123".to_owned(),
        pubkeys: vec![],
        signature: vec![0u8; 64],
    }
}

#[test]
fn create_validation_and_controller_default() {
    let msg = create_msg();
    assert!(msg.validate_basic().is_ok());
    assert_eq!(msg.effective_controller(), ADDR);

    let mut explicit = create_msg();
    explicit.controller = "dtc1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq".to_owned();
    assert_eq!(explicit.effective_controller(), explicit.controller);

    let mut empty_did = create_msg();
    empty_did.did.clear();
    assert!(empty_did.validate_basic().is_err());

    let mut short_sig = create_msg();
    short_sig.signature = vec![0u8; 32];
    assert!(short_sig.validate_basic().is_err());

    // The node's integration-test marker passes the shape check.
    let mut marker = create_msg();
    marker.signature = b"7369676e6174757265".to_vec();
    assert!(marker.validate_basic().is_ok());
}

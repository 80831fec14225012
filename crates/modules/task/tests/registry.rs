use dtc_domain::type_url::TypeUrl;
use dtc_task::{MsgClaimReward, MsgCreateClaimRecord, claim_hash, msg_types};
use std::collections::HashSet;

const ADDR: &str = "dtc1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5z5tpwxq";

#[test]
fn table_matches_generated_registry() {
    let urls: Vec<&str> = msg_types().iter().map(|d| d.type_url()).collect();
    assert_eq!(
        urls,
        vec![
            "/dtc.task.v1.MsgUpdateParams",
            "/dtc.task.v1.MsgCreateClaimRecord",
            "/dtc.task.v1.MsgUpdateClaimRecord",
            "/dtc.task.v1.MsgDeleteClaimRecord",
            "/dtc.task.v1.MsgClaimReward",
        ],
    );
}

#[test]
fn table_entries_are_distinct_and_well_formed() {
    let table = msg_types();
    assert_eq!(table.len(), 5);

    let mut seen = HashSet::new();
    for descriptor in &table {
        assert!(seen.insert(descriptor.type_url()));
        let url = TypeUrl::parse(descriptor.type_url()).unwrap();
        assert_eq!(url.module(), Some(dtc_task::MODULE_NAME));
        assert_eq!(url.version(), Some("v1"));
    }
}

#[test]
fn claim_record_validation() {
    let msg = MsgCreateClaimRecord {
        creator: ADDR.to_owned(),
        claim_hash: claim_hash("task-7", ADDR),
        task_id: "task-7".to_owned(),
        user_id: ADDR.to_owned(),
        signature: "00".repeat(64),
    };
    assert!(msg.validate_basic().is_ok());

    let mut bad_hash = msg.clone();
    bad_hash.claim_hash = "not-a-hash".to_owned();
    assert!(bad_hash.validate_basic().is_err());

    let mut no_task = msg;
    no_task.task_id.clear();
    assert!(no_task.validate_basic().is_err());
}

fn reward() -> MsgClaimReward {
    MsgClaimReward {
        creator: ADDR.to_owned(),
        recipient: String::new(),
        task_id: "task-7".to_owned(),
        amount: "500000udtc".to_owned(),
        signature: "00".repeat(64),
    }
}

#[test]
fn claim_reward_validation() {
    let msg = reward();
    assert!(msg.validate_basic().is_ok());
    assert_eq!(msg.effective_recipient(), ADDR);

    let mut bad_amount = reward();
    bad_amount.amount = "udtc".to_owned();
    assert!(bad_amount.validate_basic().is_err());

    let mut bad_sig = reward();
    bad_sig.signature = "00".repeat(10);
    assert!(bad_sig.validate_basic().is_err());

    let mut not_hex = reward();
    not_hex.signature = "zz".repeat(32);
    assert!(not_hex.validate_basic().is_err());

    // The node's integration-test marker passes the shape check.
    let mut marker = reward();
    marker.signature = "7369676e6174757265".to_owned();
    assert!(marker.validate_basic().is_ok());
}

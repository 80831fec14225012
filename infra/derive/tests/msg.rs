use dtc_domain::msg::Msg;

#[dtc_derive::msg(package = "dtc.test.v1")]
pub struct MsgPing {
    pub creator: String,
}

#[dtc_derive::msg(package = "dtc.test.v1", name = "MsgRenamed")]
pub struct MsgOther {
    pub creator: String,
    pub payload: Vec<u8>,
}

#[test]
fn type_url_is_computed_from_package_and_ident() {
    assert_eq!(MsgPing::TYPE_URL, "/dtc.test.v1.MsgPing");
    let msg = MsgPing { creator: "dtc1xyz".to_owned() };
    assert_eq!(msg.type_url(), "/dtc.test.v1.MsgPing");
}

#[test]
fn name_argument_overrides_ident() {
    assert_eq!(MsgOther::TYPE_URL, "/dtc.test.v1.MsgRenamed");
}

#[test]
fn generated_messages_round_trip_through_postcard() {
    let msg = MsgOther { creator: "dtc1abc".to_owned(), payload: vec![1, 2, 3] };
    let bytes = postcard::to_stdvec(&msg).unwrap();
    let back: MsgOther = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(back, msg);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = serde_json::from_str::<MsgPing>(r#"{"creator":"dtc1abc","extra":1}"#);
    assert!(err.is_err());
}

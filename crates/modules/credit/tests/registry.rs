use dtc_credit::{MsgMintCredit, MsgUpdateParams, Params, msg_types};
use dtc_domain::type_url::TypeUrl;
use std::collections::HashSet;

const ADDR: &str = "dtc1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5z5tpwxq";

#[test]
fn table_contains_exactly_the_credit_messages() {
    let urls: HashSet<&str> = msg_types().iter().map(|d| d.type_url()).collect();
    let expected: HashSet<&str> = [
        "/dtc.credit.v1.MsgUpdateParams",
        "/dtc.credit.v1.MsgMintCredit",
        "/dtc.credit.v1.MsgSubmitDeathCertificate",
    ]
    .into();
    assert_eq!(urls, expected);
}

#[test]
fn table_entries_are_distinct_and_well_formed() {
    let table = msg_types();
    assert_eq!(table.len(), 3);

    let mut seen = HashSet::new();
    for descriptor in &table {
        assert!(seen.insert(descriptor.type_url()), "duplicate {}", descriptor.type_url());
        let url = TypeUrl::parse(descriptor.type_url()).unwrap();
        assert_eq!(url.module(), Some(dtc_credit::MODULE_NAME));
        assert_eq!(url.package(), dtc_credit::PACKAGE);
    }
}

#[test]
fn validate_basic_checks_addresses() {
    assert!(MsgMintCredit { creator: ADDR.to_owned() }.validate_basic().is_ok());
    assert!(MsgMintCredit { creator: "bogus".to_owned() }.validate_basic().is_err());

    let update = MsgUpdateParams { authority: ADDR.to_owned(), params: Params { gbdp_rate: 100 } };
    assert!(update.validate_basic().is_ok());

    let too_high =
        MsgUpdateParams { authority: ADDR.to_owned(), params: Params { gbdp_rate: 20_000 } };
    assert!(too_high.validate_basic().is_err());
}

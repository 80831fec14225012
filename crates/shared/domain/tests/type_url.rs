use dtc_domain::type_url::{TypeUrl, compose};
use proptest::prelude::*;

proptest! {
    #[test]
    fn composed_urls_always_parse(
        module in "[a-z][a-z0-9_]{0,15}",
        version in "v[0-9]{1,2}",
        name in "[A-Z][A-Za-z0-9]{0,31}",
    ) {
        let package = format!("dtc.{module}.{version}");
        let raw = compose(&package, &name);
        let url = TypeUrl::parse(&raw).unwrap();
        prop_assert_eq!(url.package(), package.as_str());
        prop_assert_eq!(url.name(), name.as_str());
        prop_assert_eq!(url.module(), Some(module.as_str()));
        prop_assert_eq!(url.version(), Some(version.as_str()));
    }
}

#[test]
fn display_matches_input() {
    let url = TypeUrl::parse("/dtc.identity.v1.MsgCreateDidDocument").unwrap();
    assert_eq!(url.to_string(), "/dtc.identity.v1.MsgCreateDidDocument");
}

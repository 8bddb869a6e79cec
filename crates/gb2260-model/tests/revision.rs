use gb2260_model::{CodeError, DivisionTable, Revision};

fn test_revision() -> Revision {
    let mut table = DivisionTable::new();
    table.insert("990000".to_string(), "测试省".to_string());
    table.insert("999900".to_string(), "测试市".to_string());
    table.insert("999999".to_string(), "测试区".to_string());
    Revision::new("测试", table)
}

#[test]
fn get_resolves_known_codes() {
    let revision = test_revision();
    let division = revision.get("999999").expect("known code");
    assert_eq!(division.code(), "999999");
    assert_eq!(division.name(), "测试区");
    assert_eq!(division.revision(), "测试");

    assert!(revision.get("320203").is_none());
}

#[test]
fn provinces_lists_province_level_entries() {
    let revision = test_revision();
    let provinces = revision.provinces();
    assert_eq!(provinces.len(), 1);
    assert_eq!(provinces[0].code(), "990000");
}

#[test]
fn prefectures_lists_direct_children() {
    let revision = test_revision();
    let prefectures = revision.prefectures("990000").unwrap();
    assert_eq!(prefectures.len(), 1);
    assert_eq!(prefectures[0].code(), "999900");
}

#[test]
fn prefectures_rejects_non_province_input() {
    let revision = test_revision();
    assert!(matches!(
        revision.prefectures("999900"),
        Err(CodeError::Invalid { .. })
    ));
}

#[test]
fn counties_lists_direct_children() {
    let revision = test_revision();
    let counties = revision.counties("999900").unwrap();
    assert_eq!(counties.len(), 1);
    assert_eq!(counties[0].code(), "999999");
}

#[test]
fn get_province_resolves_for_every_level() {
    let revision = test_revision();
    for code in ["999999", "999900", "990000"] {
        let province = revision.get_province(code).unwrap().expect("province");
        assert_eq!(province.code(), "990000");
    }
}

#[test]
fn get_prefecture_resolves_below_province_level() {
    let revision = test_revision();
    for code in ["999999", "999900"] {
        let prefecture = revision.get_prefecture(code).unwrap().expect("prefecture");
        assert_eq!(prefecture.code(), "999900");
    }
}

#[test]
fn get_prefecture_is_none_for_province_level() {
    let revision = test_revision();
    assert_eq!(revision.get_prefecture("990000").unwrap(), None);
}

#[test]
fn get_prefecture_propagates_grammar_errors() {
    let revision = test_revision();
    assert!(matches!(
        revision.get_prefecture("99"),
        Err(CodeError::Invalid { .. })
    ));
}

#[test]
fn describe_joins_resolved_ancestor_names() {
    let revision = test_revision();
    for (code, expected) in [
        ("999999", "测试省 测试市 测试区"),
        ("999900", "测试省 测试市"),
        ("990000", "测试省"),
    ] {
        assert_eq!(revision.describe(code).unwrap(), expected);
    }
}

#[test]
fn describe_skips_unresolved_ancestors() {
    let revision = test_revision();
    // No ancestor of 320203 exists in this revision.
    assert_eq!(revision.describe("320203").unwrap(), "");
    assert!(matches!(
        revision.describe("32"),
        Err(CodeError::Invalid { .. })
    ));
}

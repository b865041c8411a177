use super::*;

#[test]
fn copyright_line_includes_year_and_rights() {
    assert_eq!(
        copyright(2026, "All rights reserved."),
        "© 2026 PT Cipta Metalindo Persada. All rights reserved."
    );
}

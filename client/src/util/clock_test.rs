use super::*;

#[test]
fn current_year_matches_utc_calendar() {
    let before = OffsetDateTime::now_utc().year();
    let year = current_year();
    let after = OffsetDateTime::now_utc().year();
    assert!(year == before || year == after);
    assert!(year >= 2024);
}

use super::*;

#[test]
fn short_date_takes_the_date_part() {
    assert_eq!(short_date("2025-09-01T10:30:00"), "2025-09-01");
    assert_eq!(short_date("2025-09-01"), "2025-09-01");
}

#[test]
fn short_date_passes_short_values_through() {
    assert_eq!(short_date(""), "");
    assert_eq!(short_date("today"), "today");
}

#[test]
fn non_empty_trims_and_drops_blanks() {
    assert_eq!(non_empty("  hello ".to_owned()), Some("hello".to_owned()));
    assert_eq!(non_empty(String::new()), None);
    assert_eq!(non_empty("   ".to_owned()), None);
}

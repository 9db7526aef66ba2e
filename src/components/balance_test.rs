use super::*;

#[test]
fn format_inr_leaves_small_amounts_ungrouped() {
    assert_eq!(format_inr(0.0), "0");
    assert_eq!(format_inr(500.0), "500");
}

#[test]
fn format_inr_groups_thousands_western_style_first() {
    assert_eq!(format_inr(1234.0), "1,234");
}

#[test]
fn format_inr_groups_lakhs_and_crores_in_pairs() {
    assert_eq!(format_inr(123_456.0), "1,23,456");
    assert_eq!(format_inr(12_345_678.0), "1,23,45,678");
}

#[test]
fn format_inr_keeps_paise_only_when_present() {
    assert_eq!(format_inr(1234.5), "1,234.50");
    assert_eq!(format_inr(99.99), "99.99");
    assert_eq!(format_inr(100.004), "100");
}

#[test]
fn format_inr_handles_negative_amounts() {
    assert_eq!(format_inr(-123_456.75), "-1,23,456.75");
}

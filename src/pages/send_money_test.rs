use super::*;

#[test]
fn parse_amount_accepts_positive_numbers() {
    assert_eq!(parse_amount("250"), Ok(250.0));
    assert_eq!(parse_amount(" 99.5 "), Ok(99.5));
}

#[test]
fn parse_amount_requires_a_value() {
    assert_eq!(parse_amount(""), Err("Enter an amount."));
    assert_eq!(parse_amount("   "), Err("Enter an amount."));
}

#[test]
fn parse_amount_rejects_garbage_and_non_positive_values() {
    assert_eq!(parse_amount("abc"), Err("Please enter a valid amount."));
    assert_eq!(parse_amount("0"), Err("Please enter a valid amount."));
    assert_eq!(parse_amount("-5"), Err("Please enter a valid amount."));
    assert_eq!(parse_amount("inf"), Err("Please enter a valid amount."));
    assert_eq!(parse_amount("NaN"), Err("Please enter a valid amount."));
}

#[test]
fn recipient_initial_uppercases_the_first_letter() {
    assert_eq!(recipient_initial("alice iyer"), 'A');
    assert_eq!(recipient_initial(""), 'U');
}

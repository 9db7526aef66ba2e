use super::*;

fn record(from: &str, to: &str, amount: f64) -> TransactionRecord {
    TransactionRecord {
        id: "t1".to_owned(),
        from_user: TransactionParty {
            id: from.to_owned(),
            firstname: "From".to_owned(),
            lastname: "User".to_owned(),
        },
        to_user: TransactionParty {
            id: to.to_owned(),
            firstname: "To".to_owned(),
            lastname: "User".to_owned(),
        },
        amount,
        status: "success".to_owned(),
        timestamp: None,
    }
}

// =============================================================
// HistoryFilter
// =============================================================

#[test]
fn filter_values_round_trip() {
    for filter in [HistoryFilter::All, HistoryFilter::Sent, HistoryFilter::Received] {
        assert_eq!(HistoryFilter::from_value(filter.value()), filter);
    }
}

#[test]
fn unknown_filter_value_reads_as_all() {
    assert_eq!(HistoryFilter::from_value("garbage"), HistoryFilter::All);
}

#[test]
fn sent_filter_keeps_only_outgoing_rows() {
    let outgoing = record("me", "u2", 100.0);
    let incoming = record("u2", "me", 100.0);
    assert!(matches_filter(&outgoing, "me", HistoryFilter::Sent));
    assert!(!matches_filter(&incoming, "me", HistoryFilter::Sent));
}

#[test]
fn received_filter_keeps_only_incoming_rows() {
    let outgoing = record("me", "u2", 100.0);
    let incoming = record("u2", "me", 100.0);
    assert!(!matches_filter(&outgoing, "me", HistoryFilter::Received));
    assert!(matches_filter(&incoming, "me", HistoryFilter::Received));
}

#[test]
fn all_filter_keeps_everything() {
    let incoming = record("u2", "me", 100.0);
    assert!(matches_filter(&incoming, "me", HistoryFilter::All));
}

// =============================================================
// Row derivation
// =============================================================

#[test]
fn counterparty_is_the_other_side_of_the_transfer() {
    let outgoing = record("me", "u2", 100.0);
    assert_eq!(counterparty(&outgoing, "me").id, "u2");
    let incoming = record("u2", "me", 100.0);
    assert_eq!(counterparty(&incoming, "me").id, "u2");
}

#[test]
fn signed_amount_debits_outgoing_transfers() {
    let outgoing = record("me", "u2", 250.0);
    assert!((signed_amount(&outgoing, "me") + 250.0).abs() < f64::EPSILON);
    let incoming = record("u2", "me", 250.0);
    assert!((signed_amount(&incoming, "me") - 250.0).abs() < f64::EPSILON);
}

#[test]
fn amount_label_formats_sign_and_grouping() {
    assert_eq!(amount_label(-1500.0), "-₹1,500");
    assert_eq!(amount_label(250.5), "+₹250.50");
}

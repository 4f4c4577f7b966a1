use uuid::Uuid;
use villagestay::services::payout_service::already_paid_ids;

#[test]
fn test_no_prior_payouts_means_nothing_paid() {
    let requested = vec![Uuid::new_v4(), Uuid::new_v4()];
    assert!(already_paid_ids(&requested, &[]).is_empty());
}

#[test]
fn test_detects_ids_claimed_by_prior_payout() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let c = Uuid::new_v4();

    let prior = vec![vec![a], vec![c, Uuid::new_v4()]];
    let clashes = already_paid_ids(&[a, b, c], &prior);

    assert_eq!(clashes.len(), 2);
    assert!(clashes.contains(&a));
    assert!(clashes.contains(&c));
    assert!(!clashes.contains(&b));
}

#[test]
fn test_disjoint_requests_pass() {
    let prior = vec![vec![Uuid::new_v4(), Uuid::new_v4()]];
    let requested = vec![Uuid::new_v4(), Uuid::new_v4()];
    assert!(already_paid_ids(&requested, &prior).is_empty());
}

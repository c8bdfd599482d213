//! End-to-end order scenarios against the public bono-core API.

use bono_core::checkout::Checkout;
use bono_core::timestamp::FixedClock;
use bono_core::{CheckoutPhase, CoreError, Money, RedemptionCode, CATALOG};
use rand::{rngs::StdRng, SeedableRng};

fn clock() -> FixedClock {
    FixedClock::from_ymd_hms(2024, 2, 29, 10, 15, 30).unwrap()
}

#[test]
fn single_product_order_produces_one_line() {
    let mut checkout = Checkout::new();

    checkout.set_quantity(1, "2").unwrap();
    assert_eq!(checkout.total(), Money::from_major(28_000));
    assert_eq!(checkout.total().to_fixed(), "28000.00");

    checkout.pay().unwrap();
    assert_eq!(checkout.phase(), CheckoutPhase::Confirming);

    let mut rng = StdRng::seed_from_u64(11);
    let receipt = checkout.confirm_with(&mut rng, &clock()).unwrap();

    assert_eq!(receipt.total(), Money::from_major(28_000));
    assert_eq!(receipt.lines().len(), 1);

    let line = &receipt.lines()[0];
    assert_eq!(line.product_name, "BONO COD SOCIO");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.unit_price, Money::from_major(14_000));
    assert_eq!(line.subtotal, Money::from_major(28_000));
    assert_eq!(line.generated_at, "2024-02-29 10:15:30");
    assert!(RedemptionCode::is_well_formed(line.redemption_code.as_str()));

    assert_eq!(checkout.phase(), CheckoutPhase::Completed);
}

#[test]
fn empty_order_never_leaves_selecting() {
    let mut checkout = Checkout::new();
    for item in CATALOG.iter() {
        checkout.set_quantity(item.id, "0").unwrap();
    }

    assert_eq!(checkout.pay(), Err(CoreError::EmptyOrder));
    assert_eq!(checkout.phase(), CheckoutPhase::Selecting);
    assert!(checkout.receipt().is_none());

    // Retrying after fixing the quantities works.
    checkout.set_quantity(3, "1").unwrap();
    checkout.pay().unwrap();
    assert_eq!(checkout.phase(), CheckoutPhase::Confirming);
}

#[test]
fn receipt_lines_match_selected_items_in_catalog_order() {
    let mut checkout = Checkout::new();
    checkout.set_quantity(4, "1").unwrap();
    checkout.set_quantity(2, "250").unwrap(); // clamped to 100
    checkout.set_quantity(3, "junk").unwrap(); // coerced to 0

    checkout.pay().unwrap();
    let receipt = checkout
        .confirm_with(&mut StdRng::seed_from_u64(3), &clock())
        .unwrap();

    let summary: Vec<(&str, u32)> = receipt
        .lines()
        .iter()
        .map(|line| (line.product_name.as_str(), line.quantity))
        .collect();
    assert_eq!(
        summary,
        vec![("BONO COD NO SOCIO", 100), ("BONO CNP NO SOCIO", 1)]
    );

    let line_sum: Money = receipt.lines().iter().map(|line| line.subtotal).sum();
    assert_eq!(line_sum, receipt.total());
}

#[test]
fn seeded_runs_generate_identical_codes() {
    let run = |seed| {
        let mut checkout = Checkout::new();
        checkout.set_quantity(1, "1").unwrap();
        checkout.set_quantity(2, "1").unwrap();
        checkout.pay().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let codes: Vec<_> = checkout
            .confirm_with(&mut rng, &clock())
            .unwrap()
            .lines()
            .iter()
            .map(|line| line.redemption_code.clone())
            .collect();
        codes
    };

    assert_eq!(run(77), run(77));
}

#[test]
fn completed_receipt_survives_until_reset() {
    let mut checkout = Checkout::new();
    checkout.set_quantity(1, "1").unwrap();
    checkout.pay().unwrap();
    checkout.confirm().unwrap();

    let snapshot = checkout.receipt().cloned().unwrap();

    // Nothing can change the completed order.
    assert!(checkout.set_quantity(1, "9").is_err());
    assert_eq!(checkout.receipt(), Some(&snapshot));

    checkout.reset();
    assert!(checkout.receipt().is_none());
    assert!(checkout.cart().is_empty());
    assert_eq!(checkout.phase(), CheckoutPhase::Selecting);
}

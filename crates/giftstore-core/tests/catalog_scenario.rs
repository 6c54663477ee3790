//! Integration tests for the gift catalog.

use giftstore_core::{Catalog, Error, Gift, GiftKind, GiftUpdate, QuantityPolicy};

fn sample_catalog(policy: QuantityPolicy) -> Catalog {
    let mut catalog = Catalog::with_policy(policy);
    catalog.add(Gift::toy("Мишка", 10, 500.0, "Мягкая игрушка"));
    catalog.add(Gift::toy("Конструктор", 15, 1200.0, "Развивающая игрушка"));
    catalog.add(Gift::toy("Кукла", 8, 800.0, "Кукла"));
    catalog.add(Gift::gift_set(
        "Детский набор",
        5,
        1500.0,
        "Шоколад, игрушка, книга",
    ));
    catalog.add(Gift::gift_set(
        "Сладкий набор",
        7,
        1000.0,
        "Конфеты, мягкая игрушка",
    ));
    catalog
}

#[test]
fn test_scripted_totals() {
    let mut catalog = sample_catalog(QuantityPolicy::Wrap);
    assert_eq!(catalog.total_units(), 45);

    catalog
        .update_at(2, GiftUpdate::new("Робот", 12, 1500.0, "Электронная игрушка"))
        .unwrap();
    assert_eq!(catalog.total_units(), 45);

    catalog.adjust_quantity_at(0, 5).unwrap();
    catalog.adjust_quantity_at(2, 3).unwrap();
    assert_eq!(catalog.total_units(), 53);

    catalog.adjust_quantity_at(4, 2).unwrap();
    assert_eq!(catalog.total_units(), 55);

    // Робот went from 8 to 12 through update, which the total never saw.
    assert_eq!(catalog.actual_units(), 59);
    assert_eq!(catalog.drift(), -4);

    assert!(catalog.find_by_name("Чика").is_none());
    let (position, robot) = catalog.find_by_name("Робот").unwrap();
    assert_eq!(position, 2);
    assert_eq!(robot.kind(), GiftKind::Toy);
    assert_eq!(robot.quantity(), 15);
    assert_eq!(robot.extra(), "Электронная игрушка");
}

#[test]
fn test_sorted_order() {
    let mut catalog = sample_catalog(QuantityPolicy::Wrap);
    catalog
        .update_at(2, GiftUpdate::new("Робот", 12, 1500.0, "Электронная игрушка"))
        .unwrap();
    catalog.sort_by_name();

    let names: Vec<&str> = catalog.iter().map(Gift::name).collect();
    assert_eq!(
        names,
        vec![
            "Детский набор",
            "Конструктор",
            "Мишка",
            "Робот",
            "Сладкий набор"
        ]
    );
    assert!(catalog
        .gifts()
        .windows(2)
        .all(|pair| pair[0].name() <= pair[1].name()));
}

#[test]
fn test_bad_positions_never_change_state() {
    let mut catalog = sample_catalog(QuantityPolicy::Wrap);
    let before = catalog.gifts().to_vec();

    for position in [5, 6, usize::MAX] {
        assert_eq!(
            catalog.adjust_quantity_at(position, 1),
            Err(Error::InvalidPosition { position, len: 5 })
        );
        assert!(catalog
            .update_at(position, GiftUpdate::new("", 0, 0.0, ""))
            .is_err());
    }

    assert_eq!(catalog.gifts(), before.as_slice());
    assert_eq!(catalog.total_units(), 45);
}

#[test]
fn test_total_sums_adds_and_deltas() {
    let deltas = [3i64, -2, 7, -1, 0];
    let mut catalog = sample_catalog(QuantityPolicy::Reject);

    for (position, delta) in deltas.iter().enumerate() {
        catalog.adjust_quantity_at(position, *delta).unwrap();
    }
    catalog
        .update_at(1, GiftUpdate::new("Конструктор", 100, 1.0, "x"))
        .unwrap();

    assert_eq!(catalog.total_units(), 45 + deltas.iter().sum::<i64>());
}

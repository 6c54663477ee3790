//! Base gift record.

use super::QuantityPolicy;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields shared by every catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftItem {
    /// Display name. Not unique.
    pub name: String,
    /// Units in stock.
    pub quantity: u64,
    /// Unit price.
    pub price: f64,
}

impl GiftItem {
    /// Create a new record.
    pub fn new(name: impl Into<String>, quantity: u64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Overwrite every field.
    ///
    /// The running total is not adjusted.
    pub fn update(&mut self, name: impl Into<String>, quantity: u64, price: f64) {
        self.name = name.into();
        self.quantity = quantity;
        self.price = price;
    }

    /// Apply a quantity delta.
    ///
    /// Returns the delta the running total should take.
    pub fn adjust_quantity(&mut self, delta: i64, policy: QuantityPolicy) -> Result<i64, Error> {
        let (quantity, applied) = policy.apply(self.quantity, delta).ok_or_else(|| {
            Error::QuantityUnderflow {
                name: self.name.clone(),
                quantity: self.quantity,
                delta,
            }
        })?;

        self.quantity = quantity;
        Ok(applied)
    }
}

impl fmt::Display for GiftItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Название: {}", self.name)?;
        writeln!(f, "Количество: {}", self.quantity)?;
        writeln!(f, "Цена: {:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let item = GiftItem::new("Мишка", 10, 500.0);
        assert_eq!(
            item.to_string(),
            "Название: Мишка\nКоличество: 10\nЦена: 500.00\n"
        );
    }

    #[test]
    fn test_price_rounds_to_two_places() {
        let item = GiftItem::new("x", 1, 12.345_6);
        assert!(item.to_string().ends_with("Цена: 12.35\n"));
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let mut item = GiftItem::new("Кукла", 8, 800.0);
        item.update("", 0, 0.0);
        assert_eq!(item, GiftItem::new("", 0, 0.0));
    }

    #[test]
    fn test_adjust_quantity() {
        let mut item = GiftItem::new("Кукла", 8, 800.0);
        assert_eq!(item.adjust_quantity(3, QuantityPolicy::Wrap), Ok(3));
        assert_eq!(item.quantity, 11);

        let err = item
            .adjust_quantity(-20, QuantityPolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            Error::QuantityUnderflow {
                name: "Кукла".to_string(),
                quantity: 11,
                delta: -20,
            }
        );
        assert_eq!(item.quantity, 11);
    }
}

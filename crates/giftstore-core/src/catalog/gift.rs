//! Toy and gift-set variants.

use super::{GiftItem, QuantityPolicy};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A toy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toy {
    /// Base record.
    #[serde(flatten)]
    pub item: GiftItem,
    /// Toy type, e.g. "Мягкая игрушка".
    pub toy_type: String,
}

/// A gift set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftSet {
    /// Base record.
    #[serde(flatten)]
    pub item: GiftItem,
    /// What the set contains.
    pub contents: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gift {
    /// A toy.
    Toy(Toy),
    /// A gift set.
    GiftSet(GiftSet),
}

/// The kind of a gift, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftKind {
    /// A toy.
    Toy,
    /// A gift set.
    GiftSet,
}

/// Replacement values for [`Gift::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftUpdate {
    /// New name.
    pub name: String,
    /// New quantity.
    pub quantity: u64,
    /// New unit price.
    pub price: f64,
    /// New toy type or set contents, depending on the gift's kind.
    pub extra: String,
}

impl Gift {
    /// Create a toy.
    pub fn toy(
        name: impl Into<String>,
        quantity: u64,
        price: f64,
        toy_type: impl Into<String>,
    ) -> Self {
        Gift::Toy(Toy {
            item: GiftItem::new(name, quantity, price),
            toy_type: toy_type.into(),
        })
    }

    /// Create a gift set.
    pub fn gift_set(
        name: impl Into<String>,
        quantity: u64,
        price: f64,
        contents: impl Into<String>,
    ) -> Self {
        Gift::GiftSet(GiftSet {
            item: GiftItem::new(name, quantity, price),
            contents: contents.into(),
        })
    }

    /// Get the base record.
    pub fn item(&self) -> &GiftItem {
        match self {
            Gift::Toy(toy) => &toy.item,
            Gift::GiftSet(set) => &set.item,
        }
    }

    /// Get the base record mutably.
    pub fn item_mut(&mut self) -> &mut GiftItem {
        match self {
            Gift::Toy(toy) => &mut toy.item,
            Gift::GiftSet(set) => &mut set.item,
        }
    }

    /// Get the gift's name.
    pub fn name(&self) -> &str {
        &self.item().name
    }

    /// Get the gift's quantity.
    pub fn quantity(&self) -> u64 {
        self.item().quantity
    }

    /// Get the kind-specific field.
    pub fn extra(&self) -> &str {
        match self {
            Gift::Toy(toy) => &toy.toy_type,
            Gift::GiftSet(set) => &set.contents,
        }
    }

    /// Get the gift's kind.
    pub fn kind(&self) -> GiftKind {
        match self {
            Gift::Toy(_) => GiftKind::Toy,
            Gift::GiftSet(_) => GiftKind::GiftSet,
        }
    }

    /// Overwrite the base record and the kind-specific field.
    pub fn update(&mut self, update: GiftUpdate) {
        let GiftUpdate {
            name,
            quantity,
            price,
            extra,
        } = update;

        match self {
            Gift::Toy(toy) => {
                toy.item.update(name, quantity, price);
                toy.toy_type = extra;
            }
            Gift::GiftSet(set) => {
                set.item.update(name, quantity, price);
                set.contents = extra;
            }
        }
    }

    /// Apply a quantity delta to the base record.
    pub fn adjust_quantity(&mut self, delta: i64, policy: QuantityPolicy) -> Result<i64, Error> {
        self.item_mut().adjust_quantity(delta, policy)
    }
}

impl GiftKind {
    /// Label of the kind-specific field.
    pub fn extra_label(self) -> &'static str {
        match self {
            GiftKind::Toy => "Тип игрушки",
            GiftKind::GiftSet => "Содержимое набора",
        }
    }

    /// Human-readable kind name.
    pub fn label(self) -> &'static str {
        match self {
            GiftKind::Toy => "Игрушка",
            GiftKind::GiftSet => "Подарочный набор",
        }
    }
}

impl fmt::Display for Gift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item())?;
        writeln!(f, "{}: {}", self.kind().extra_label(), self.extra())
    }
}

impl GiftUpdate {
    /// Create an update.
    pub fn new(
        name: impl Into<String>,
        quantity: u64,
        price: f64,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            extra: extra.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toy_display() {
        let toy = Gift::toy("Мишка", 10, 500.0, "Мягкая игрушка");
        assert_eq!(
            toy.to_string(),
            "Название: Мишка\nКоличество: 10\nЦена: 500.00\nТип игрушки: Мягкая игрушка\n"
        );
    }

    #[test]
    fn test_gift_set_display() {
        let set = Gift::gift_set("Сладкий набор", 7, 1000.0, "Конфеты, мягкая игрушка");
        assert_eq!(
            set.to_string(),
            "Название: Сладкий набор\nКоличество: 7\nЦена: 1000.00\n\
             Содержимое набора: Конфеты, мягкая игрушка\n"
        );
    }

    #[test]
    fn test_update_replaces_extra_per_kind() {
        let mut toy = Gift::toy("Кукла", 8, 800.0, "Кукла");
        toy.update(GiftUpdate::new("Робот", 12, 1500.0, "Электронная игрушка"));
        assert_eq!(toy, Gift::toy("Робот", 12, 1500.0, "Электронная игрушка"));

        let mut set = Gift::gift_set("Детский набор", 5, 1500.0, "Шоколад");
        set.update(GiftUpdate::new("Набор", 1, 10.0, "Книга"));
        assert_eq!(set.kind(), GiftKind::GiftSet);
        assert_eq!(set.extra(), "Книга");
    }

    #[test]
    fn test_adjust_quantity_delegates() {
        let mut set = Gift::gift_set("Сладкий набор", 7, 1000.0, "Конфеты");
        assert_eq!(set.adjust_quantity(2, QuantityPolicy::Wrap), Ok(2));
        assert_eq!(set.quantity(), 9);
    }

    #[test]
    fn test_serde_tagging() {
        let toy = Gift::toy("Мишка", 10, 500.0, "Мягкая игрушка");
        let json = serde_json::to_value(&toy).unwrap();
        assert_eq!(json["kind"], "toy");
        assert_eq!(json["name"], "Мишка");
        assert_eq!(json["toy_type"], "Мягкая игрушка");

        let back: Gift = serde_json::from_value(json).unwrap();
        assert_eq!(back, toy);
    }
}

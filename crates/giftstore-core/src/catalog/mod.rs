//! Gift catalog.
//!
//! The catalog stores toys and gift sets in insertion order, together with a
//! running total of units.

mod catalog;
mod gift;
mod item;
mod policy;

pub use catalog::{Catalog, RunningTotal};
pub use gift::{Gift, GiftKind, GiftSet, GiftUpdate, Toy};
pub use item::GiftItem;
pub use policy::QuantityPolicy;

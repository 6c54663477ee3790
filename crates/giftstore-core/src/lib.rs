//! giftstore core - in-memory gift catalog.
//!
//! This crate provides the catalog of toys and gift sets, the records they
//! wrap, and the running unit total kept alongside them.

pub mod catalog;
pub mod error;

pub use catalog::{
    Catalog, Gift, GiftItem, GiftKind, GiftSet, GiftUpdate, QuantityPolicy, RunningTotal, Toy,
};
pub use error::Error;

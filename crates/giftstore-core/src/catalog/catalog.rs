//! Catalog of gifts with a running unit total.

use super::{Gift, GiftUpdate, QuantityPolicy};
use crate::error::Error;
use tracing::{debug, warn};

/// Running tally of units.
///
/// Increased by every added gift and every quantity delta. It is never
/// recomputed from the catalog, so [`Gift::update`] calls that change a
/// quantity make it drift from the actual sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunningTotal(i64);

impl RunningTotal {
    /// Get the tally.
    pub fn get(self) -> i64 {
        self.0
    }

    fn add(&mut self, units: i64) {
        self.0 = self.0.wrapping_add(units);
    }
}

/// Ordered collection of gifts.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Gifts in current order.
    gifts: Vec<Gift>,
    /// Units added or adjusted so far.
    total: RunningTotal,
    /// Quantity delta handling.
    policy: QuantityPolicy,
}

impl Catalog {
    /// Create an empty catalog with the default quantity policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given quantity policy.
    pub fn with_policy(policy: QuantityPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Get the quantity policy.
    pub fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    /// Append a gift, adding its quantity to the running total.
    pub fn add(&mut self, gift: Gift) {
        debug!(name = gift.name(), quantity = gift.quantity(), "adding gift");
        self.total.add(gift.quantity() as i64);
        self.gifts.push(gift);
    }

    /// Gifts in current order.
    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    /// Iterate over gifts in current order.
    pub fn iter(&self) -> impl Iterator<Item = &Gift> {
        self.gifts.iter()
    }

    /// Get a gift by position.
    pub fn get(&self, position: usize) -> Option<&Gift> {
        self.gifts.get(position)
    }

    /// Number of gifts.
    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    /// Check if the catalog holds no gifts.
    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    /// Overwrite the gift at `position`.
    ///
    /// The running total is not adjusted.
    pub fn update_at(&mut self, position: usize, update: GiftUpdate) -> Result<(), Error> {
        let gift = self.gift_mut(position)?;
        debug!(position, from = gift.name(), to = %update.name, "updating gift");
        gift.update(update);
        Ok(())
    }

    /// Apply a quantity delta to the gift at `position`.
    pub fn adjust_quantity_at(&mut self, position: usize, delta: i64) -> Result<(), Error> {
        let policy = self.policy;
        let gift = self.gift_mut(position)?;

        let applied = gift.adjust_quantity(delta, policy).inspect_err(|e| {
            warn!(position, error = %e, "quantity delta rejected");
        })?;
        debug!(position, delta, applied, "adjusted quantity");

        self.total.add(applied);
        Ok(())
    }

    /// Find the first gift with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &Gift)> {
        self.gifts
            .iter()
            .enumerate()
            .find(|(_, gift)| gift.name() == name)
    }

    /// Sort gifts by name, ascending. Equal names keep their relative order.
    pub fn sort_by_name(&mut self) {
        self.gifts.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Get the running total.
    pub fn total(&self) -> RunningTotal {
        self.total
    }

    /// Get the running total as a number.
    pub fn total_units(&self) -> i64 {
        self.total.get()
    }

    /// Sum of the quantities currently in the catalog.
    pub fn actual_units(&self) -> i64 {
        self.gifts
            .iter()
            .fold(0i64, |sum, gift| sum.wrapping_add(gift.quantity() as i64))
    }

    /// Running total minus the actual sum of quantities.
    pub fn drift(&self) -> i64 {
        self.total_units().wrapping_sub(self.actual_units())
    }

    fn gift_mut(&mut self, position: usize) -> Result<&mut Gift, Error> {
        let len = self.gifts.len();
        self.gifts.get_mut(position).ok_or_else(|| {
            warn!(position, len, "invalid catalog position");
            Error::InvalidPosition { position, len }
        })
    }
}

impl FromIterator<Gift> for Catalog {
    fn from_iter<I: IntoIterator<Item = Gift>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Gift> for Catalog {
    fn extend<I: IntoIterator<Item = Gift>>(&mut self, iter: I) {
        for gift in iter {
            self.add(gift);
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Gift;
    type IntoIter = std::slice::Iter<'a, Gift>;

    fn into_iter(self) -> Self::IntoIter {
        self.gifts.iter()
    }
}

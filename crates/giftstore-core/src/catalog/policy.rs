//! Quantity delta policies.

use std::fmt;
use std::str::FromStr;

/// How a quantity delta is applied when the result leaves the `u64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityPolicy {
    /// Two's-complement wraparound; the running total takes the raw delta.
    #[default]
    Wrap,
    /// Clamp to the `u64` range; the running total takes the applied delta.
    Floor,
    /// Refuse the delta.
    Reject,
}

impl QuantityPolicy {
    /// Apply `delta` to `quantity`.
    ///
    /// Returns the new quantity and the delta the running total should take,
    /// or `None` if the policy refuses the change.
    pub fn apply(self, quantity: u64, delta: i64) -> Option<(u64, i64)> {
        let target = i128::from(quantity) + i128::from(delta);

        match self {
            QuantityPolicy::Wrap => Some(((quantity as i64).wrapping_add(delta) as u64, delta)),
            QuantityPolicy::Floor => {
                let clamped = target.clamp(0, i128::from(u64::MAX)) as u64;
                let applied = (i128::from(clamped) - i128::from(quantity)) as i64;
                Some((clamped, applied))
            }
            QuantityPolicy::Reject => u64::try_from(target).ok().map(|q| (q, delta)),
        }
    }
}

impl fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityPolicy::Wrap => write!(f, "wrap"),
            QuantityPolicy::Floor => write!(f, "floor"),
            QuantityPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for QuantityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrap" => Ok(QuantityPolicy::Wrap),
            "floor" => Ok(QuantityPolicy::Floor),
            "reject" => Ok(QuantityPolicy::Reject),
            other => Err(format!(
                "unknown quantity policy '{}'. Use: wrap, floor, reject",
                other
            )),
        }
    }
}

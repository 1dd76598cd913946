//! Remaining-use counts with an explicit unlimited variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw value the wire format and the inventory cells use for "unlimited".
pub const UNLIMITED_SENTINEL: i64 = -1;

/// How many more times a coupon may be redeemed.
///
/// Serialized as a plain integer where `-1` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum RemainingUses {
    /// A fixed number of uses left.
    Finite(u32),
    /// The coupon never runs out.
    Unlimited,
}

impl RemainingUses {
    /// Whether this count is bounded.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Whether no uses are left.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Finite(0))
    }

    /// Encode into the raw atomic cell representation.
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Finite(n) => i64::from(n),
            Self::Unlimited => UNLIMITED_SENTINEL,
        }
    }

    /// Decode a raw cell value. Anything negative reads as unlimited.
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            Self::Unlimited
        } else {
            Self::Finite(u32::try_from(raw).unwrap_or(u32::MAX))
        }
    }
}

impl From<RemainingUses> for i64 {
    fn from(value: RemainingUses) -> Self {
        value.to_raw()
    }
}

impl TryFrom<i64> for RemainingUses {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            UNLIMITED_SENTINEL => Ok(Self::Unlimited),
            n if n >= 0 => u32::try_from(n)
                .map(Self::Finite)
                .map_err(|_| format!("remaining uses {n} is out of range")),
            n => Err(format!(
                "remaining uses must be >= 0 or {UNLIMITED_SENTINEL} for unlimited, got {n}"
            )),
        }
    }
}

impl fmt::Display for RemainingUses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

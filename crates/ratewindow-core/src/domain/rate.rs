use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A rate as the source sent it.
///
/// Integer and fractional JSON numbers stay distinct so `27` prints as `27`
/// and `27.0` as `27.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rate {
    Integer(i64),
    Decimal(f64),
}

impl Rate {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Decimal(value) => value,
        }
    }
}

impl From<i64> for Rate {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Rate {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

/// Shortest round-trip form; decimals keep at least one fractional digit.
impl Display for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Decimal(value) => write!(f, "{value}"),
        }
    }
}

//! Domain types for the IPCA history.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{IpcaError, IpcaResult};

/// A calendar month, ordered by year then month.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct YearMonth {
    /// Year
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
}

impl YearMonth {
    /// Create a new year-month, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> IpcaResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(IpcaError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// One published monthly IPCA variation.
///
/// Field names on the wire follow the legacy API (`ano`, `mes`, `ipca`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Stable identifier, starting at 1.
    pub id: u32,
    /// Reference year.
    #[serde(rename = "ano")]
    pub year: i32,
    /// Reference month (1-12).
    #[serde(rename = "mes")]
    pub month: u32,
    /// Monthly variation in percent (0.5 means 0.5%).
    #[serde(rename = "ipca")]
    pub rate: Decimal,
}

impl IndexRecord {
    /// Create a new record.
    pub fn new(id: u32, year: i32, month: u32, rate: Decimal) -> Self {
        Self {
            id,
            year,
            month,
            rate,
        }
    }

    /// The month this record refers to.
    pub fn period(&self) -> IpcaResult<YearMonth> {
        YearMonth::new(self.year, self.month)
    }

    /// Growth factor for the month, `1 + rate / 100`.
    pub fn factor(&self) -> Decimal {
        Decimal::ONE + self.rate / Decimal::ONE_HUNDRED
    }
}

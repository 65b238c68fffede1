//! # IPCA Core
//!
//! Monthly IPCA (Brazilian consumer price index) history and inflation
//! adjustment.
//!
//! - **Types**: [`IndexRecord`] and [`YearMonth`]
//! - **Repository**: [`IpcaRepository`], an immutable ordered record store with
//!   lookups by year, id and calculation window
//! - **Calculator**: [`AdjustmentCalculator`], compounding a value across a
//!   window of monthly rates
//!
//! ## Example
//!
//! ```rust
//! use ipca_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let repository = IpcaRepository::new(vec![IndexRecord::new(1, 2020, 1, dec!(0.5))]).unwrap();
//! let calculator = AdjustmentCalculator::new(&repository);
//!
//! let start = YearMonth::new(2020, 1).unwrap();
//! let adjusted = calculator.adjust(dec!(100), start, start).unwrap();
//! assert_eq!(adjusted, dec!(100.50));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod calculator;
pub mod error;
pub mod repository;
pub mod types;

pub use calculator::AdjustmentCalculator;
pub use error::{IpcaError, IpcaResult};
pub use repository::IpcaRepository;
pub use types::{IndexRecord, YearMonth};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::AdjustmentCalculator;
    pub use crate::error::{IpcaError, IpcaResult};
    pub use crate::repository::IpcaRepository;
    pub use crate::types::{IndexRecord, YearMonth};
    pub use rust_decimal::Decimal;
}

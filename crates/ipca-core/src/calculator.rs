//! Inflation adjustment by monthly compounding of IPCA rates.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{IpcaError, IpcaResult};
use crate::repository::IpcaRepository;
use crate::types::{IndexRecord, YearMonth};

/// Decimal places of an adjusted monetary value.
pub const RESULT_DECIMALS: u32 = 2;

/// Compounds values over windows of the IPCA history.
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentCalculator<'a> {
    repository: &'a IpcaRepository,
}

impl<'a> AdjustmentCalculator<'a> {
    /// Create a calculator over a repository.
    pub fn new(repository: &'a IpcaRepository) -> Self {
        Self { repository }
    }

    /// Adjust `value` by every monthly rate in `[start, end]`.
    ///
    /// Rates are applied in chronological order and the result is rounded to
    /// two places, half away from zero. An empty window returns the rounded
    /// input.
    pub fn adjust(&self, value: Decimal, start: YearMonth, end: YearMonth) -> IpcaResult<Decimal> {
        let records = self.window(start, end)?;
        let adjusted = compound(value, &records)?;

        debug!(
            "Adjusted {} over {}..{} ({} periods) -> {}",
            value,
            start,
            end,
            records.len(),
            adjusted
        );

        Ok(adjusted.round_dp_with_strategy(RESULT_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Same as [`adjust`](Self::adjust), taking raw month/year pairs.
    pub fn adjust_between(
        &self,
        value: Decimal,
        start_month: u32,
        start_year: i32,
        end_month: u32,
        end_year: i32,
    ) -> IpcaResult<Decimal> {
        let start = YearMonth::new(start_year, start_month)?;
        let end = YearMonth::new(end_year, end_month)?;
        self.adjust(value, start, end)
    }

    /// Accumulated, unrounded growth factor over `[start, end]`.
    pub fn factor(&self, start: YearMonth, end: YearMonth) -> IpcaResult<Decimal> {
        let records = self.window(start, end)?;
        compound(Decimal::ONE, &records)
    }

    fn window(&self, start: YearMonth, end: YearMonth) -> IpcaResult<Vec<&'a IndexRecord>> {
        if start > end {
            return Err(IpcaError::InvalidWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(self.repository.in_window(start, end))
    }
}

fn compound(initial: Decimal, records: &[&IndexRecord]) -> IpcaResult<Decimal> {
    records
        .iter()
        .enumerate()
        .try_fold(initial, |acc, (periods, record)| {
            acc.checked_mul(record.factor())
                .ok_or(IpcaError::Overflow { periods })
        })
}

//! Request and response types.
//!
//! Query fields arrive as raw strings so that non-numeric input is reported
//! with the API's own error body instead of the extractor's rejection.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query for `GET /histIPCA`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Optional year filter.
    pub ano: Option<String>,
}

/// Query for `GET /histIPCA/calculo`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationQuery {
    /// Amount to adjust.
    pub valor: Option<String>,
    /// Start month (1-12).
    pub mes_inicial: Option<String>,
    /// Start year.
    pub ano_inicial: Option<String>,
    /// End month (1-12).
    pub mes_final: Option<String>,
    /// End year.
    pub ano_final: Option<String>,
}

/// Numeric form of a [`CalculationQuery`]. Months are not range-checked yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationParams {
    /// Amount to adjust.
    pub value: Decimal,
    /// Start month as given.
    pub start_month: i32,
    /// Start year.
    pub start_year: i32,
    /// End month as given.
    pub end_month: i32,
    /// End year.
    pub end_year: i32,
}

impl CalculationQuery {
    /// Parse every field, returning `None` if any is missing or not numeric.
    pub fn parse(&self) -> Option<CalculationParams> {
        Some(CalculationParams {
            value: parse_decimal(self.valor.as_deref()?)?,
            start_month: parse_integer(self.mes_inicial.as_deref()?)?,
            start_year: parse_integer(self.ano_inicial.as_deref()?)?,
            end_month: parse_integer(self.mes_final.as_deref()?)?,
            end_year: parse_integer(self.ano_final.as_deref()?)?,
        })
    }
}

impl CalculationParams {
    /// Whether the start (year, month) falls after the end.
    pub fn is_inverted(&self) -> bool {
        (self.start_year, self.start_month) > (self.end_year, self.end_month)
    }
}

/// Response for `GET /histIPCA/calculo`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Adjusted amount, rounded to cents.
    pub resultado: Decimal,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub first_period: Option<String>,
    pub last_period: Option<String>,
}

/// Parse a base-10 integer, ignoring surrounding whitespace.
pub fn parse_integer<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

/// Parse a decimal amount in plain or scientific notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

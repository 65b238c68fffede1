//! Immutable, chronologically ordered store of IPCA records.

use std::collections::HashSet;
use std::path::Path;

use log::debug;

use crate::error::{IpcaError, IpcaResult};
use crate::types::{IndexRecord, YearMonth};

/// Bundled monthly series, January 2015 through December 2024.
const BUNDLED_DATASET: &str = include_str!("../data/ipca.json");

/// Read-only accessor over the IPCA history.
///
/// Built once from a validated record list and shared by reference; nothing
/// here mutates after construction.
#[derive(Debug, Clone)]
pub struct IpcaRepository {
    records: Vec<IndexRecord>,
}

impl IpcaRepository {
    /// Create a repository, checking ids and chronological order.
    ///
    /// Records must carry positive, unique ids, valid months, and be strictly
    /// ascending by (year, month).
    pub fn new(records: Vec<IndexRecord>) -> IpcaResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut previous: Option<YearMonth> = None;

        for record in &records {
            if record.id == 0 {
                return Err(IpcaError::InvalidId { id: record.id });
            }
            if !seen.insert(record.id) {
                return Err(IpcaError::DuplicateId { id: record.id });
            }

            let period = record.period()?;
            if let Some(prev) = previous {
                if period <= prev {
                    return Err(IpcaError::UnorderedRecords {
                        previous: prev.to_string(),
                        current: period.to_string(),
                    });
                }
            }
            previous = Some(period);
        }

        Ok(Self { records })
    }

    /// Parse and validate a JSON array of records.
    pub fn from_json_str(json: &str) -> IpcaResult<Self> {
        let records: Vec<IndexRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load and validate a JSON dataset from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> IpcaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let repository = Self::from_json_str(&content)?;
        debug!(
            "Loaded {} IPCA records from {}",
            repository.len(),
            path.display()
        );
        Ok(repository)
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> IpcaResult<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// All records, oldest first.
    pub fn list_all(&self) -> &[IndexRecord] {
        &self.records
    }

    /// Records for a single year, in stored order. Empty when the year is absent.
    pub fn list_by_year(&self, year: i32) -> Vec<&IndexRecord> {
        self.records.iter().filter(|r| r.year == year).collect()
    }

    /// Look up a record by id.
    pub fn find_by_id(&self, id: u32) -> Option<&IndexRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records inside a calculation window, in stored order.
    ///
    /// A record is selected when any of these holds:
    /// - it is in the start year, at or after the start month;
    /// - its year lies strictly between the start and end years;
    /// - it is in the end year, at or before the end month.
    ///
    /// When start and end share a year the first and last conditions are
    /// OR'ed over the same year, so a single-year window selects every month
    /// that satisfies either bound.
    pub fn in_window(&self, start: YearMonth, end: YearMonth) -> Vec<&IndexRecord> {
        self.records
            .iter()
            .filter(|r| {
                (r.year == start.year && r.month >= start.month)
                    || (r.year > start.year && r.year < end.year)
                    || (r.year == end.year && r.month <= end.month)
            })
            .collect()
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    /// Period of the oldest record.
    pub fn first_period(&self) -> Option<YearMonth> {
        self.records.first().and_then(|r| r.period().ok())
    }

    /// Period of the newest record.
    pub fn last_period(&self) -> Option<YearMonth> {
        self.records.last().and_then(|r| r.period().ok())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn fixture() -> IpcaRepository {
        IpcaRepository::new(vec![
            IndexRecord::new(1, 2019, 11, dec!(0.51)),
            IndexRecord::new(2, 2019, 12, dec!(1.15)),
            IndexRecord::new(3, 2020, 1, dec!(0.21)),
            IndexRecord::new(4, 2020, 2, dec!(0.25)),
            IndexRecord::new(5, 2020, 3, dec!(0.07)),
            IndexRecord::new(6, 2021, 1, dec!(0.25)),
            IndexRecord::new(7, 2021, 2, dec!(0.86)),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_all_preserves_order() {
        let repo = fixture();
        let ids: Vec<u32> = repo.list_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_list_by_year() {
        let repo = fixture();
        let records = repo.list_by_year(2020);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.year == 2020));
        assert_eq!(
            records.iter().map(|r| r.month).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_list_by_year_missing_is_empty() {
        let repo = fixture();
        assert!(repo.list_by_year(1900).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let repo = fixture();
        let record = repo.find_by_id(4).unwrap();
        assert_eq!((record.year, record.month), (2020, 2));
        assert!(repo.find_by_id(99).is_none());
    }

    #[test]
    fn test_rejects_zero_id() {
        let result = IpcaRepository::new(vec![IndexRecord::new(0, 2020, 1, dec!(0.1))]);
        assert_eq!(result.unwrap_err(), IpcaError::InvalidId { id: 0 });
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = IpcaRepository::new(vec![
            IndexRecord::new(1, 2020, 1, dec!(0.1)),
            IndexRecord::new(1, 2020, 2, dec!(0.2)),
        ]);
        assert_eq!(result.unwrap_err(), IpcaError::DuplicateId { id: 1 });
    }

    #[test]
    fn test_rejects_duplicate_period() {
        let result = IpcaRepository::new(vec![
            IndexRecord::new(1, 2020, 1, dec!(0.1)),
            IndexRecord::new(2, 2020, 1, dec!(0.2)),
        ]);
        assert!(matches!(
            result.unwrap_err(),
            IpcaError::UnorderedRecords { .. }
        ));
    }

    #[test]
    fn test_rejects_unsorted_records() {
        let result = IpcaRepository::new(vec![
            IndexRecord::new(1, 2020, 2, dec!(0.1)),
            IndexRecord::new(2, 2020, 1, dec!(0.2)),
        ]);
        assert_eq!(
            result.unwrap_err(),
            IpcaError::UnorderedRecords {
                previous: "02/2020".to_string(),
                current: "01/2020".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_invalid_month() {
        let result = IpcaRepository::new(vec![IndexRecord::new(1, 2020, 13, dec!(0.1))]);
        assert_eq!(result.unwrap_err(), IpcaError::InvalidMonth { month: 13 });
    }

    #[test]
    fn test_window_across_years() {
        let repo = fixture();
        let ids: Vec<u32> = repo
            .in_window(ym(2019, 12), ym(2021, 1))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_same_year_ors_both_bounds() {
        let repo = fixture();
        // Feb..Feb 2020: month >= 2 OR month <= 2 covers the whole year.
        let ids: Vec<u32> = repo
            .in_window(ym(2020, 2), ym(2020, 2))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_window_outside_data_is_empty() {
        let repo = fixture();
        assert!(repo.in_window(ym(2010, 1), ym(2010, 12)).is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let repo = IpcaRepository::from_json_str(
            r#"[
                { "id": 1, "ano": 2020, "mes": 1, "ipca": 0.5 },
                { "id": 2, "ano": 2020, "mes": 2, "ipca": -0.1 }
            ]"#,
        )
        .unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_id(2).unwrap().rate, dec!(-0.1));
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        let err = IpcaRepository::from_json_str("[{ \"id\": 1 }]").unwrap_err();
        assert!(matches!(err, IpcaError::Dataset { .. }));
    }

    #[test]
    fn test_from_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": 1, "ano": 2023, "mes": 6, "ipca": -0.08 }}]"#).unwrap();

        let repo = IpcaRepository::from_json_file(file.path()).unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.first_period(), Some(ym(2023, 6)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = IpcaRepository::from_json_file("/nonexistent/ipca.json").unwrap_err();
        assert!(matches!(err, IpcaError::Dataset { .. }));
    }

    #[test]
    fn test_bundled_dataset() {
        let repo = IpcaRepository::bundled().unwrap();
        assert_eq!(repo.len(), 120);
        assert_eq!(repo.first_period(), Some(ym(2015, 1)));
        assert_eq!(repo.last_period(), Some(ym(2024, 12)));
        assert_eq!(repo.years(), (2015..=2024).collect::<Vec<_>>());
        assert!(repo.years().iter().all(|&y| repo.list_by_year(y).len() == 12));

        let first = repo.find_by_id(1).unwrap();
        assert_eq!((first.year, first.month, first.rate), (2015, 1, dec!(1.24)));
    }

    #[test]
    fn test_empty_repository() {
        let repo = IpcaRepository::new(Vec::new()).unwrap();
        assert!(repo.is_empty());
        assert!(repo.first_period().is_none());
        assert!(repo.years().is_empty());
    }
}

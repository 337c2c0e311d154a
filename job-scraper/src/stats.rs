use serde::{Deserialize, Serialize, Serializer};
use tokio::time::sleep;

use crate::api::Result;
use crate::source::{fetch_all, Delays, VacancySource};

/// Salary statistics for one search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Matching vacancies as reported by the provider.
    pub found: u32,
    /// Vacancies with a usable salary estimate.
    pub processed: usize,
    /// Truncated mean of the estimates, 0 only when nothing was processed.
    pub average: u64,
}

impl LanguageStats {
    pub fn from_estimates(found: u32, estimates: &[f64]) -> Self {
        // A mean below 1 is reported as 1 so that a zero average always means no estimates.
        let average = if estimates.is_empty() {
            0
        } else {
            ((estimates.iter().sum::<f64>() / estimates.len() as f64) as u64).max(1)
        };
        Self {
            found,
            processed: estimates.len(),
            average,
        }
    }
}

/// Per-language statistics, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTable {
    rows: Vec<(String, LanguageStats)>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the stats of `language`, keeping its original position.
    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStats) {
        let language = language.into();
        match self.rows.iter_mut().find(|(l, _)| *l == language) {
            Some((_, existing)) => *existing = stats,
            None => self.rows.push((language, stats)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.rows
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.rows.iter().map(|(l, stats)| (l.as_str(), stats))
    }

}

impl Serialize for StatsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Gather salary statistics for every term, one term at a time.
///
/// The first failed request aborts the whole run.
pub async fn collect_stats<S, T>(source: &S, terms: &[T], delays: &Delays) -> Result<StatsTable>
where
    S: VacancySource + ?Sized,
    T: AsRef<str>,
{
    let mut table = StatsTable::new();
    for term in terms {
        let term = term.as_ref();
        let (vacancies, found) = fetch_all(source, term, delays.page).await?;
        let estimates: Vec<f64> = vacancies
            .iter()
            .filter_map(|vacancy| source.predict_salary(vacancy))
            .collect();
        let stats = LanguageStats::from_estimates(found, &estimates);
        log::info!(
            "{}: '{}' found {}, processed {}, average salary {}",
            source.name(),
            term,
            stats.found,
            stats.processed,
            stats.average,
        );
        table.insert(term, stats);
        sleep(delays.term).await;
    }
    Ok(table)
}

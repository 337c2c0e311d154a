use std::time::Duration;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::{pin_mut, Stream, TryStreamExt};
use tokio::time::sleep;

use crate::api::Result;

/// Number of vacancies requested per page from every provider.
pub const PAGE_SIZE: u32 = 100;

const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Courtesy pauses between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    /// Pause after every page fetch, the last one included.
    pub page: Duration,
    /// Pause after every processed search term.
    pub term: Duration,
}

impl Delays {
    pub fn uniform(delay: Duration) -> Self {
        Self {
            page: delay,
            term: delay,
        }
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self::uniform(DEFAULT_DELAY)
    }
}

/// When to stop requesting further pages for a search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Stop on the last page index the provider reports.
    LastPage,
    /// Stop once the collected vacancies reach the reported total.
    ReportedTotal,
}

impl Pagination {
    fn is_last<V>(&self, index: u32, page: &Page<V>, fetched: usize) -> bool {
        match self {
            Pagination::LastPage => index + 1 >= page.pages.unwrap_or(0),
            Pagination::ReportedTotal => fetched >= page.found as usize,
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone)]
pub struct Page<V> {
    pub items: Vec<V>,
    /// Total number of matching vacancies according to the provider.
    pub found: u32,
    /// Total number of pages, for providers that report it.
    pub pages: Option<u32>,
}

/// A job board that can be searched page by page.
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: Send;

    fn name(&self) -> &str;

    fn pagination(&self) -> Pagination;

    /// Request a single page of vacancies matching `term`, starting at page 0.
    async fn fetch_page(&self, term: &str, page: u32) -> Result<Page<Self::Vacancy>>;

    /// Salary estimate for one vacancy, `None` if it can't be used.
    fn predict_salary(&self, vacancy: &Self::Vacancy) -> Option<f64>;
}

/// Stream the pages of a search in order, pausing `delay` after each fetch.
pub fn pages<'a, S>(
    source: &'a S,
    term: &'a str,
    delay: Duration,
) -> impl Stream<Item = Result<Page<S::Vacancy>>> + 'a
where
    S: VacancySource + ?Sized,
    S::Vacancy: 'a,
{
    try_stream! {
        let pagination = source.pagination();
        let mut index = 0;
        let mut fetched = 0;
        loop {
            let page = source.fetch_page(term, index).await?;
            fetched += page.items.len();
            let is_empty = page.items.is_empty();
            let is_last = pagination.is_last(index, &page, fetched);
            log::debug!(
                "{}: page {} for '{}' returned {} vacancies, {}/{} collected",
                source.name(),
                index,
                term,
                page.items.len(),
                fetched,
                page.found,
            );
            yield page;
            sleep(delay).await;
            if is_last {
                break;
            }
            if is_empty {
                log::warn!(
                    "{}: empty page {} for '{}' before the reported end, stopping",
                    source.name(),
                    index,
                    term,
                );
                break;
            }
            index += 1;
        }
    }
}

/// Collect every vacancy for `term` together with the provider's reported total.
///
/// A failed page aborts the whole search, nothing collected so far is returned.
pub async fn fetch_all<S>(source: &S, term: &str, delay: Duration) -> Result<(Vec<S::Vacancy>, u32)>
where
    S: VacancySource + ?Sized,
{
    let pages = pages(source, term, delay);
    pin_mut!(pages);
    let mut vacancies = Vec::new();
    let mut found = 0;
    while let Some(page) = pages.try_next().await? {
        found = page.found;
        vacancies.extend(page.items);
    }
    Ok((vacancies, found))
}

//! In-memory vacancy source with canned pages, used instead of live APIs in tests.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::{Error, Result};
use crate::salary::predict_salary;
use crate::source::{Page, Pagination, VacancySource, PAGE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FakeVacancy {
    from: Option<u32>,
    to: Option<u32>,
}

impl FakeVacancy {
    pub(crate) fn new(from: Option<u32>, to: Option<u32>) -> Self {
        Self { from, to }
    }
}

type CannedPage = std::result::Result<Page<FakeVacancy>, StatusCode>;

pub(crate) struct FakeSource {
    pagination: Pagination,
    pages: HashMap<String, Vec<CannedPage>>,
    requests: Mutex<Vec<(String, u32)>>,
}

impl FakeSource {
    pub(crate) fn new(pagination: Pagination) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            pagination,
            pages: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_pages(mut self, term: &str, pages: Vec<CannedPage>) -> Self {
        self.pages.insert(term.to_owned(), pages);
        self
    }

    /// `found` vacancies with a lower salary bound of 100, split into full pages.
    pub(crate) fn with_even_pages(self, term: &str, found: u32, pages: u32) -> Self {
        let canned = (0..pages.max(1))
            .map(|index| {
                let remaining = found.saturating_sub(index * PAGE_SIZE).min(PAGE_SIZE);
                Ok(Page {
                    items: vec![FakeVacancy::new(Some(100), None); remaining as usize],
                    found,
                    pages: Some(pages),
                })
            })
            .collect();
        self.with_pages(term, canned)
    }

    pub(crate) fn requested_pages(&self, term: &str) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == term)
            .map(|(_, page)| *page)
            .collect()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl VacancySource for FakeSource {
    type Vacancy = FakeVacancy;

    fn name(&self) -> &str {
        "fake"
    }

    fn pagination(&self) -> Pagination {
        self.pagination
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<Page<FakeVacancy>> {
        self.requests.lock().unwrap().push((term.to_owned(), page));
        let url = format!("fake://vacancies?text={}&page={}", term, page);
        match self.pages.get(term).and_then(|pages| pages.get(page as usize)) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => Err(Error::RequestNotOk { url, status: *status }),
            None => Err(Error::RequestNotOk {
                url,
                status: StatusCode::NOT_FOUND,
            }),
        }
    }

    fn predict_salary(&self, vacancy: &FakeVacancy) -> Option<f64> {
        predict_salary(vacancy.from, vacancy.to)
    }
}

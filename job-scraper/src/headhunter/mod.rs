pub mod types;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Request};

use crate::api::{ensure_success, Result};
use crate::salary::predict_salary;
use crate::source::{Page, Pagination, VacancySource, PAGE_SIZE};
use types::{Salary, SearchResponse, Vacancy};

pub const SEARCH_URL: &str = "https://api.hh.ru/vacancies";
/// HeadHunter area id of Moscow.
pub const MOSCOW_AREA_ID: u32 = 1;
/// Salaries in any other currency are ignored.
const LOCAL_CURRENCY: &str = "RUR";

/// Estimate a salary in roubles, `None` for a missing or foreign-currency salary.
pub fn predict_rub_salary(salary: Option<&Salary>) -> Option<f64> {
    let salary = salary.filter(|s| s.currency.as_deref() == Some(LOCAL_CURRENCY))?;
    predict_salary(salary.from, salary.to)
}

/// Client for the public HeadHunter vacancy search API.
pub struct HeadHunter {
    client: Client,
    search_url: String,
    area: u32,
}

impl HeadHunter {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            search_url: SEARCH_URL.to_owned(),
            area: MOSCOW_AREA_ID,
        }
    }

    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    fn search_request(&self, term: &str, page: u32) -> reqwest::Result<Request> {
        self.client
            .get(&self.search_url)
            .header(ACCEPT, "application/json")
            .query(&[("text", term)])
            .query(&[("area", self.area), ("per_page", PAGE_SIZE), ("page", page)])
            .build()
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    type Vacancy = Vacancy;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn pagination(&self) -> Pagination {
        Pagination::LastPage
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<Page<Vacancy>> {
        let request = self.search_request(term, page)?;
        log::debug!("requesting vacancies from hh, page: {}, search: {}", page, term);
        let resp = ensure_success(self.client.execute(request).await?).await?;
        let search: SearchResponse = resp.json().await?;
        Ok(Page {
            items: search.items,
            found: search.found,
            pages: Some(search.pages),
        })
    }

    fn predict_salary(&self, vacancy: &Vacancy) -> Option<f64> {
        predict_rub_salary(vacancy.salary.as_ref())
    }
}

pub mod types;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Request};

use crate::api::{ensure_success, Result};
use crate::salary::predict_salary;
use crate::source::{Page, Pagination, VacancySource, PAGE_SIZE};
use types::{SearchResponse, Vacancy};

pub const SEARCH_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const MOSCOW: &str = "Москва";
const API_KEY_HEADER: &str = "X-Api-App-Id";

/// Client for the SuperJob vacancy search API, authenticated with an app secret key.
pub struct SuperJob {
    client: Client,
    api_key: String,
    search_url: String,
    town: String,
}

impl SuperJob {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            search_url: SEARCH_URL.to_owned(),
            town: MOSCOW.to_owned(),
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
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("page", page), ("count", PAGE_SIZE)])
            .query(&[("town", self.town.as_str()), ("keyword", term)])
            .build()
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    type Vacancy = Vacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    fn pagination(&self) -> Pagination {
        Pagination::ReportedTotal
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<Page<Vacancy>> {
        let request = self.search_request(term, page)?;
        log::debug!("requesting vacancies from superjob, page: {}, search: {}", page, term);
        let resp = ensure_success(self.client.execute(request).await?).await?;
        let search: SearchResponse = resp.json().await?;
        Ok(Page {
            items: search.objects,
            found: search.total,
            pages: None,
        })
    }

    fn predict_salary(&self, vacancy: &Vacancy) -> Option<f64> {
        predict_salary(vacancy.payment_from, vacancy.payment_to)
    }
}

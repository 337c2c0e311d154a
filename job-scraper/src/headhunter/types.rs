use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<u32>,
    pub to: Option<u32>,
    pub currency: Option<String>,
}

/// Only the salary is read, the rest of the vacancy is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub salary: Option<Salary>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u32,
    pub(crate) pages: u32,
}

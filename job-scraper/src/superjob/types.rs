use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Vacancy {
    /// `0` or missing when the employer didn't state it.
    pub payment_from: Option<u32>,
    pub payment_to: Option<u32>,
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u32,
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Scrape(#[from] job_scraper::Error),
    #[error("Environment variable not set: '{0}'")]
    MissingEnv(&'static str),
    #[error("Failed to serialize report: '{0}'")]
    Json(#[from] serde_json::Error),
}

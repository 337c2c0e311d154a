pub mod api;
pub mod headhunter;
pub mod salary;
pub mod source;
pub mod stats;
pub mod superjob;

#[cfg(test)]
mod fake;
#[cfg(test)]
mod stub;

pub use api::{Error, Result};
pub use source::{Delays, VacancySource};
pub use stats::{collect_stats, LanguageStats, StatsTable};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by the providers, HeadHunter rejects requests without a User-Agent.
pub fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

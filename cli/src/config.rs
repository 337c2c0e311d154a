use std::time::Duration;

use clap::{Parser, ValueEnum};
use job_scraper::Delays;

use crate::error::{Error, Result};

/// Environment variable holding the SuperJob app secret key.
pub const SUPER_JOB_KEY: &str = "SUPER_JOB_KEY";

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "C++",
    "JavaScript",
    "C#",
    "Swift",
    "Kotlin",
    "Ruby",
    "PHP",
    "Go",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Average programmer salaries in Moscow", long_about = None)]
pub struct Cli {
    /// Job boards to query, in the given order (default: all)
    #[clap(long, value_enum)]
    pub site: Vec<Site>,

    /// Programming languages to search for (default: a built-in list of ten)
    #[clap(long)]
    pub language: Vec<String>,

    /// Pause after every request and every language, in milliseconds
    #[clap(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Print every report as a line of JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Site {
    Hh,
    Superjob,
}

impl Site {
    pub fn title(&self) -> &'static str {
        match self {
            Site::Hh => "HeadHunter Moscow",
            Site::Superjob => "SuperJob Moscow",
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub sites: Vec<Site>,
    pub languages: Vec<String>,
    pub delays: Delays,
    pub superjob_key: Option<String>,
    pub json: bool,
}

impl Config {
    /// Resolve the command line against the environment.
    ///
    /// The SuperJob key is only required when SuperJob is queried.
    pub fn new(cli: Cli, superjob_key: Option<String>) -> Result<Self> {
        let sites = if cli.site.is_empty() {
            vec![Site::Hh, Site::Superjob]
        } else {
            cli.site
        };
        let languages = if cli.language.is_empty() {
            DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
        } else {
            cli.language
        };
        let superjob_key = superjob_key.filter(|key| !key.trim().is_empty());
        if sites.contains(&Site::Superjob) && superjob_key.is_none() {
            return Err(Error::MissingEnv(SUPER_JOB_KEY));
        }
        Ok(Self {
            sites,
            languages,
            delays: Delays::uniform(Duration::from_millis(cli.delay_ms)),
            superjob_key,
            json: cli.json,
        })
    }

    pub fn from_env(cli: Cli) -> Result<Self> {
        Self::new(cli, std::env::var(SUPER_JOB_KEY).ok())
    }
}

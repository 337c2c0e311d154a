mod config;
mod error;
mod table;

use clap::Parser;
use dotenv::dotenv;
use job_scraper::{
    collect_stats, headhunter::HeadHunter, http_client, superjob::SuperJob, StatsTable,
};
use serde::Serialize;

use crate::config::{Cli, Config, Site, SUPER_JOB_KEY};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct Report<'a> {
    title: &'a str,
    languages: &'a StatsTable,
}

async fn collect(site: Site, config: &Config, client: &reqwest::Client) -> Result<StatsTable> {
    let table = match site {
        Site::Hh => {
            let source = HeadHunter::new(client.clone());
            collect_stats(&source, config.languages.as_slice(), &config.delays).await?
        }
        Site::Superjob => {
            let api_key = config
                .superjob_key
                .clone()
                .ok_or(Error::MissingEnv(SUPER_JOB_KEY))?;
            let source = SuperJob::new(client.clone(), api_key);
            collect_stats(&source, config.languages.as_slice(), &config.delays).await?
        }
    };
    Ok(table)
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env(cli)?;
    let client = http_client()?;
    for site in &config.sites {
        log::info!("Collecting salaries from {}", site.title());
        let table = collect(*site, &config, &client).await?;
        if config.json {
            let report = Report {
                title: site.title(),
                languages: &table,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            table::print_table(&table, site.title());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

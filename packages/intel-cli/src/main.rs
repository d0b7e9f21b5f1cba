use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing_subscriber::EnvFilter;

use company_intel::{
    Aggregator, CompanyRecord, IntelConfig, IntelError, OpenAiKnowledge, SerpSnippetSearch,
    WikipediaSummary,
};

type ProductionAggregator = Aggregator<SerpSnippetSearch, OpenAiKnowledge, WikipediaSummary>;

/// Aggregate company information from search, language-model, and
/// encyclopedia sources.
#[derive(Parser)]
#[command(name = "company-intel", version, about = "Company information extractor")]
struct Cli {
    /// Company name to look up; omit for interactive mode
    company: Option<String>,

    /// Completion model override (also honors OPENAI_MODEL)
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Fail fast on missing keys, before any prompt is shown.
    let mut config = IntelConfig::from_env()?;
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    let aggregator = Aggregator::from_config(&config);

    if let Some(company) = cli.company {
        lookup(&aggregator, &company).await;
        return Ok(());
    }

    interactive_loop(&aggregator).await
}

async fn interactive_loop(aggregator: &ProductionAggregator) -> Result<()> {
    let term = Term::stdout();
    println!("{}", "Company Information Extractor".bright_blue().bold());
    println!("Type a company name, or \"quit\" to leave.");

    loop {
        println!();
        let company: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter company name")
            .allow_empty(true)
            .interact_text_on(&term)?;

        let company = company.trim().to_string();
        match company.as_str() {
            "quit" | "exit" => break,
            "" => {
                println!("{}", "Please enter a company name.".red());
                continue;
            }
            _ => lookup(aggregator, &company).await,
        }
    }

    Ok(())
}

async fn lookup(aggregator: &ProductionAggregator, company: &str) {
    match aggregator.aggregate(company).await {
        Ok(record) => render(company, &record),
        Err(IntelError::EmptyCompanyName) => {
            println!("{}", "Please enter a company name.".red());
        }
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
        }
    }
}

fn render(company: &str, record: &CompanyRecord) {
    println!();
    println!("{}", "Extracted Information".bold().underline());
    println!("{} {}", "Company Name:".bold(), company);
    println!("{} {}", "Description:".bold(), record.description);
    println!("{} {}", "Website:".bold(), record.website);
    println!("{} {}", "CEO:".bold(), record.ceo);
    println!("{} {}", "Industry:".bold(), record.industry);
    println!("{} {}", "Career Opportunities:".bold(), record.career);
    println!("{} {}", "Products:".bold(), record.products);
    println!("{} {}", "Location:".bold(), record.location);
    println!("{} {}", "Competitors:".bold(), record.competitors);
    println!("{} {}", "Email:".bold(), record.email);
}

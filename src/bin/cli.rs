//! bscout CLI
//!
//! Local entry point for the business-school discovery toolkit.

use std::path::PathBuf;
use std::sync::Arc;

use bscout::{
    catalog::Catalog,
    error::Result,
    forms::{LeadForm, LeadSink},
    models::{Config, FormState},
    preflight,
    search::{Navigator, Route, SearchDispatcher, SuggestionMatcher},
    services::{self, AdminClient, HttpAiSearch, HttpLeadSink, NewSchool},
    storage::{LeadStore, LocalStorage, SessionStore},
};
use clap::{Parser, Subcommand};

/// bscout - Business School Scout
#[derive(Parser, Debug)]
#[command(
    name = "bscout",
    version,
    about = "Business-school discovery and admissions search"
)]
struct Cli {
    /// Path to data directory containing config and catalog files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch a search query (AI backend with local fallback)
    Search {
        /// Free-text query
        query: String,
    },

    /// Show local suggestions for partial input
    Suggest {
        /// Partial input text
        input: String,
    },

    /// Show the top N schools by global rank
    Top {
        /// Number of schools
        #[arg(default_value_t = 10)]
        count: usize,
    },

    /// Filter the catalog by region or country
    Filter {
        #[arg(long, conflicts_with = "country")]
        region: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },

    /// Substring search over the local catalog
    Lookup {
        /// Search text (empty matches everything)
        query: String,
    },

    /// Capture a lead
    Lead {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Create a college record via the admin endpoint
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        country: String,
        #[arg(long, default_value = "")]
        state: String,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        ranking: Option<u32>,
        #[arg(long)]
        acceptance_rate: Option<f64>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Bulk-import college records from a JSON file
    Import {
        /// JSON file with an array of records
        file: PathBuf,
    },

    /// Validate configuration and catalog data
    Validate,

    /// Check the local environment, then optionally run a command
    Preflight {
        /// Command to run when all checks pass
        #[arg(trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// Show data directory status
    Info,
}

/// Navigator that prints the route the UI would open.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, route: &Route) {
        println!("-> {route}");
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_school(school: &bscout::models::School) {
    println!(
        "#{:<3} {} ({}, {})",
        school.ranking.global,
        school.name,
        school.location,
        school.country
    );
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.data_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    let storage = Arc::new(LocalStorage::with_files(
        &cli.data_dir,
        &config.paths.session_file,
        &config.paths.leads_file,
    ));

    match cli.command {
        Command::Search { query } => {
            let client = services::create_client(&config.client)?;
            let ai = Arc::new(HttpAiSearch::new(
                client,
                &config.endpoints.ai_search_url,
            ));
            let dispatcher = SearchDispatcher::new(
                &config,
                ai,
                Arc::clone(&storage) as Arc<dyn SessionStore>,
                Arc::new(PrintNavigator),
            );

            let outcome = dispatcher.dispatch(&query).await?;
            log::info!("Dispatch outcome: {outcome:?}");
        }

        Command::Suggest { input } => {
            let matcher = SuggestionMatcher::with_cap(
                config.suggestions.clone(),
                config.search.max_suggestions,
            );
            let suggestions = matcher.suggest(&input);
            if suggestions.is_empty() {
                println!("No suggestions.");
            }
            for entry in suggestions {
                println!("{:<12?} {}", entry.kind, entry.name);
            }
        }

        Command::Top { count } => {
            let catalog = Catalog::load(config.paths.catalog_path(&cli.data_dir))?;
            for school in catalog.top_n(count) {
                print_school(school);
            }
        }

        Command::Filter { region, country } => {
            let catalog = Catalog::load(config.paths.catalog_path(&cli.data_dir))?;
            let hits = match (&region, &country) {
                (Some(region), _) => catalog.by_region(region),
                (None, Some(country)) => catalog.by_country(country),
                (None, None) => {
                    return Err(bscout::error::AppError::config(
                        "Pass --region or --country",
                    ));
                }
            };
            log::info!("{} schools matched", hits.len());
            for school in hits {
                print_school(school);
            }
        }

        Command::Lookup { query } => {
            let catalog = Catalog::load(config.paths.catalog_path(&cli.data_dir))?;
            for school in catalog.search(&query) {
                print_school(school);
            }
        }

        Command::Lead {
            name,
            email,
            phone,
            message,
        } => {
            let client = services::create_client(&config.client)?;
            let sink = Arc::new(HttpLeadSink::new(
                client,
                &config.endpoints.leads_url,
                Arc::clone(&storage) as Arc<dyn LeadStore>,
            ));
            let mut form = LeadForm::new(&config, sink as Arc<dyn LeadSink>);
            form.set_state(FormState {
                name,
                email,
                phone,
                message,
            });

            let report = form.submit().await?;
            println!("Thanks! We'll be in touch.");
            if !report.remote_ok {
                log::warn!("Lead saved locally; remote submission failed");
            }
        }

        Command::Add {
            name,
            city,
            country,
            state,
            website,
            ranking,
            acceptance_rate,
            description,
        } => {
            let client = services::create_client(&config.client)?;
            let admin = AdminClient::new(
                client,
                &config.endpoints.admin_url,
                config.client.max_concurrent,
            );
            admin
                .create_school(&NewSchool {
                    name,
                    city,
                    country,
                    state,
                    website,
                    ranking,
                    acceptance_rate,
                    description,
                })
                .await?;
            log::info!("College created");
        }

        Command::Import { file } => {
            let content = std::fs::read_to_string(&file)?;
            let schools: Vec<NewSchool> = serde_json::from_str(&content)?;

            let client = services::create_client(&config.client)?;
            let admin = AdminClient::new(
                client,
                &config.endpoints.admin_url,
                config.client.max_concurrent,
            );
            let outcome = admin.import(&schools).await;
            log::info!(
                "Imported {} of {} records",
                outcome.total - outcome.failures,
                outcome.total
            );
            if outcome.failures > 0 {
                log::warn!("{} records failed", outcome.failures);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("✓ Config OK ({} suggestions)", config.suggestions.len());

            let catalog = Catalog::load(config.paths.catalog_path(&cli.data_dir))?;
            log::info!("✓ Catalog OK ({} schools)", catalog.len());

            let duplicates = catalog.duplicate_ids();
            if duplicates.is_empty() {
                log::info!("✓ All catalog ids unique");
            } else {
                log::warn!("Reused catalog ids: {duplicates:?}");
            }

            log::info!("All validations passed!");
        }

        Command::Preflight { command } => {
            let report = preflight::run(&cli.data_dir, &config);
            if !report.passed() {
                for hint in report.hints() {
                    eprintln!("✗ {hint}");
                }
                std::process::exit(1);
            }

            log::info!("All preflight checks passed");
            if !command.is_empty() {
                let code = preflight::exec_passthrough(&command).await?;
                std::process::exit(code);
            }
        }

        Command::Info => {
            log::info!("Data directory: {}", cli.data_dir.display());
            log::info!(
                "Catalog: {}",
                if config.paths.catalog_path(&cli.data_dir).exists() {
                    "exists"
                } else {
                    "not found"
                }
            );

            let slot = SessionStore::get(storage.as_ref(), &config.search.session_key).await?;
            match slot {
                Some(value) => log::info!("Session slot: {} bytes", value.len()),
                None => log::info!("Session slot: empty"),
            }

            let leads = LeadStore::load_all(storage.as_ref()).await?;
            log::info!("Queued leads: {}", leads.len());
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use school_autocomplete::{loader, Autocomplete, AutocompleteConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "school-autocomplete")]
#[command(about = "School search autocomplete CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset URL or local CSV path (defaults to SCHOOLS_DATASET_URL or the published dataset)
    #[arg(short, long, global = true)]
    source: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank schools for a query
    Suggest {
        /// Search query
        query: String,

        /// Maximum rows to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Commit a selection as the Enter key would
    Pick {
        /// Search query
        query: String,

        /// Highlighted row index
        #[arg(long)]
        highlight: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "school_autocomplete=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AutocompleteConfig::from_env();
    if let Some(source) = cli.source {
        config.dataset_url = source;
    }

    let source = loader::source_for(&config.dataset_url, config.request_timeout_secs)?;
    let engine = Autocomplete::new(config);
    engine.load(source.as_ref()).await?;

    match cli.command {
        Commands::Suggest { query, limit, json } => {
            let suggestions = engine.suggest(&query);
            let limit = limit.unwrap_or(engine.config().display_limit);

            if json {
                println!("{}", serde_json::to_string_pretty(suggestions.visible(limit))?);
                return Ok(());
            }

            if suggestions.is_empty() {
                println!("No matches");
                return Ok(());
            }

            for (i, m) in suggestions.visible(limit).iter().enumerate() {
                let enrollment = m
                    .school
                    .enrollment
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>2}. {:<50} {:<30} {:>8} {:>4}",
                    i + 1,
                    m.school.name,
                    m.school.domain,
                    enrollment,
                    m.score
                );
            }
            println!(
                "\n{} of {} matches in {:.2}ms",
                suggestions.visible(limit).len(),
                suggestions.len(),
                suggestions.latency_ms
            );
        }

        Commands::Pick { query, highlight } => match engine.commit(&query, highlight) {
            Some(school) => {
                println!("Selected school: {}", school.name);
                if let Some(url) = &school.url {
                    println!("   URL: {}", url);
                }
                if let Some(enrollment) = school.enrollment {
                    println!("   Undergraduate Enrollment: {}", enrollment);
                }
            }
            None => {
                println!("No matches");
            }
        },
    }

    Ok(())
}

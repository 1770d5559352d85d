use clap::{Parser, Subcommand};
use measure::config::Config;
use measure::convert;
use measure::records::{IssueFilter, IssueService, IssueUpdate, JsonFileStore, NewIssue};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "measure")]
#[command(about = "Metric/imperial unit converter and issue tracker", long_about = None)]
struct Cli {
    /// Config file (default: measure.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Issue store file, overrides the configured path
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quantity expression (e.g. "3.1mi", "1/2km", "kg")
    Convert {
        /// Quantity expression
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Print the full conversion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage issues tracked per project
    #[command(subcommand)]
    Issues(IssueCommands),
}

#[derive(Subcommand)]
enum IssueCommands {
    /// List issues of a project
    List {
        project: String,

        /// Filters as a query string (e.g. "open=true&assigned_to=Joe")
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Create an issue
    Create {
        project: String,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        text: String,

        #[arg(long, default_value = "")]
        created_by: String,

        #[arg(long)]
        assigned_to: Option<String>,

        #[arg(long)]
        status_text: Option<String>,
    },

    /// Update fields of an issue
    Update {
        project: String,

        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        text: Option<String>,

        #[arg(long)]
        created_by: Option<String>,

        #[arg(long)]
        assigned_to: Option<String>,

        #[arg(long)]
        status_text: Option<String>,

        /// Open (true) or closed (false)
        #[arg(long)]
        open: Option<bool>,
    },

    /// Delete an issue
    Delete {
        project: String,

        #[arg(long, default_value = "")]
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Commands::Convert { input, json } => convert_input(&input, json),
        Commands::Issues(command) => {
            let store_path = cli.store.unwrap_or_else(|| config.store.path.clone());
            run_issue_command(store_path, command)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &Config) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn convert_input(input: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = convert::convert_expression(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{}", conversion.string);
    }

    Ok(())
}

fn run_issue_command(
    store_path: PathBuf,
    command: IssueCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(&store_path)
        .map_err(|e| format!("Failed to open store {}: {}", store_path.display(), e))?;
    let mut service = IssueService::new(store);

    let payload = match command {
        IssueCommands::List { project, query } => {
            service.list(&project, &IssueFilter::from_query(&query))
        }
        IssueCommands::Create {
            project,
            title,
            text,
            created_by,
            assigned_to,
            status_text,
        } => service.create(
            &project,
            NewIssue {
                issue_title: title,
                issue_text: text,
                created_by,
                assigned_to,
                status_text,
            },
        ),
        IssueCommands::Update {
            project,
            id,
            title,
            text,
            created_by,
            assigned_to,
            status_text,
            open,
        } => service.update(
            &project,
            &IssueUpdate {
                id,
                issue_title: title,
                issue_text: text,
                created_by,
                assigned_to,
                status_text,
                open,
            },
        ),
        IssueCommands::Delete { project, id } => service.delete(&project, &id),
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

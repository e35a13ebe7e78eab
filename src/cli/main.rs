use clap::{Parser, Subcommand};
use manuscript_catalog::{
    project, Catalog, Config, DateRange, Field, FilterCriteria, FsFetcher, SortOrder,
};
use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ms-catalog")]
#[command(about = "Manuscript catalog browser", long_about = None)]
struct Cli {
    /// Data directory holding the metadata table and shard files
    #[arg(short, long, env = "MS_CATALOG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and list manuscripts
    List {
        /// Free-text search term
        #[arg(short, long, default_value = "")]
        query: String,

        /// Restrict the free-text search to these fields
        #[arg(short, long)]
        field: Vec<String>,

        /// Exact category filter
        #[arg(long)]
        category: Option<String>,

        /// Exact century filter
        #[arg(long)]
        century: Option<String>,

        /// Author substring filter
        #[arg(long)]
        author: Option<String>,

        /// Title substring filter
        #[arg(long)]
        title: Option<String>,

        /// Shuhra substring filter
        #[arg(long)]
        shuhra: Option<String>,

        /// Earliest death date (inclusive)
        #[arg(long)]
        min_date: Option<String>,

        /// Latest death date (inclusive)
        #[arg(long)]
        max_date: Option<String>,

        /// Sort results by this field
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        descending: bool,

        #[arg(short, long, default_value = "0")]
        page: usize,

        #[arg(short = 's', long, default_value = "25")]
        page_size: usize,
    },

    /// Show one manuscript with its known locations
    Show {
        #[arg(value_name = "MANUSCRIPT_ID")]
        id: String,
    },

    /// List the distinct values of a field
    Facets {
        #[arg(value_name = "FIELD")]
        field: String,
    },
}

fn parse_field(name: &str) -> anyhow::Result<Field> {
    Field::from_str(name).map_err(|_| anyhow::anyhow!("unknown field '{}'", name))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config {
            data: Default::default(),
            observability: Default::default(),
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.observability.log_filter)
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut data = config.data;
    if let Some(dir) = cli.data_dir {
        data.data_dir = dir;
    }

    let fetcher = Arc::new(FsFetcher::new(data.data_dir.clone()));
    let catalog = Catalog::new(fetcher, data);

    match cli.command {
        Commands::List {
            query,
            field,
            category,
            century,
            author,
            title,
            shuhra,
            min_date,
            max_date,
            sort_by,
            descending,
            page,
            page_size,
        } => {
            let fields = field
                .iter()
                .map(|f| parse_field(f))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let mut criteria = FilterCriteria::new();
            criteria.categories = category;
            criteria.century = century;
            criteria.author = author;
            criteria.titles = title;
            criteria.shuhras = shuhra;
            if min_date.is_some() || max_date.is_some() {
                criteria.death_date_range = Some(DateRange {
                    min: min_date,
                    max: max_date,
                });
            }

            let results = catalog.search(&query, &fields, &criteria).await?;

            let order = if descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let sort = sort_by.as_deref().map(parse_field).transpose()?.map(|f| (f, order));

            let page = project(&results, sort, page, page_size);
            println!("{}", serde_json::to_string_pretty(&page)?);
        }

        Commands::Show { id } => {
            let manuscript = catalog.find_manuscript(&id).await?;
            match manuscript {
                Some(manuscript) => {
                    let locations = catalog.resolve_locations(&id).await;
                    let body = json!({
                        "manuscript": manuscript,
                        "locations": locations,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                None => {
                    eprintln!("Manuscript '{}' not found", id);
                    std::process::exit(1);
                }
            }
        }

        Commands::Facets { field } => {
            let field = parse_field(&field)?;
            let values = catalog.unique_values(field).await?;
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }

    Ok(())
}

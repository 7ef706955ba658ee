use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use datum_graph::{
    config::Config,
    expansion::Expansion,
    search::score_with,
    session_server, DatumEngine,
};

#[derive(Parser)]
#[command(
    name = "datum",
    version,
    about = "Relevance ranking and graph layout for the knowledge-graph search view"
)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Serve a JSON-RPC 2.0 session over stdin/stdout
    #[arg(long)]
    stdio: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog for a query and print the laid-out graph
    Search {
        query: String,
        /// Force a category open (repeatable)
        #[arg(long = "expand", value_name = "CATEGORY")]
        expand: Vec<String>,
        /// Force a category closed (repeatable)
        #[arg(long = "collapse", value_name = "CATEGORY")]
        collapse: Vec<String>,
        /// Print edge endpoints instead of the graph
        #[arg(long)]
        connectors: bool,
    },
    /// Score a single name against a query
    Score { name: String, query: String },
    /// Print the idle platform hub
    Hub,
    /// Print the sample catalog
    Catalog,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut engine = DatumEngine::with_sample_data(Config::from_env());

    if cli.stdio {
        return session_server::run(&mut engine);
    }

    match cli.command {
        Some(Commands::Search {
            query,
            expand,
            collapse,
            connectors,
        }) => cmd_search(&mut engine, &query, &expand, &collapse, connectors),
        Some(Commands::Score { name, query }) => {
            let score = score_with(&name, &query, engine.config().fuzzy);
            println!("{}", serde_json::json!({ "name": name, "query": query, "score": score }));
            Ok(())
        }
        Some(Commands::Hub) => print_json(&engine.hub()),
        Some(Commands::Catalog) => print_json(engine.catalog()),
        Some(Commands::Config) => print_json(engine.config()),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn cmd_search(
    engine: &mut DatumEngine,
    query: &str,
    expand: &[String],
    collapse: &[String],
    connectors: bool,
) -> Result<()> {
    ensure!(
        !expand.iter().any(|id| collapse.contains(id)),
        "a category cannot be both expanded and collapsed"
    );

    engine.set_query(query);
    for id in expand {
        engine.set_expansion(id, Expansion::ExplicitExpanded)?;
    }
    for id in collapse {
        engine.set_expansion(id, Expansion::ExplicitCollapsed)?;
    }

    let graph = engine.graph();
    if connectors {
        print_json(&graph.connectors())
    } else {
        print_json(&graph)
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use dapdocs::config::{load_config, resolve_docs_root, DOCS_ROOT_ENV};
use dapdocs::docs::{
    format_architecture, format_module_doc, format_module_list, format_search_results,
    DocumentRepository,
};
use dapdocs::mcp::McpServer;
use dapdocs::types::{Category, Component};

/// Search and serve the DAP SDK documentation.
#[derive(Parser)]
#[command(name = "dapdocs", about = "DAP SDK documentation server", version)]
struct Cli {
    /// Documentation root (default: $PROJECT_ROOT, then the current directory)
    #[arg(long, global = true, env = DOCS_ROOT_ENV)]
    docs_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdin/stdout
    Serve,
    /// Search the documentation
    Search {
        /// Text to look for
        query: String,
        /// Category (core, crypto, net, cellframe, all)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// List documented modules
    List {
        /// Category (core, crypto, net, cellframe, all)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Print the documentation of one module
    Module {
        /// Module name, e.g. dap_cbuf
        name: String,
        /// Category (core, crypto, net)
        #[arg(short, long, default_value = "core")]
        category: String,
    },
    /// Print architecture information
    Arch {
        /// Component (dap-sdk, cellframe-sdk, overview)
        #[arg(default_value = "overview")]
        component: String,
    },
}

fn main() {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> dapdocs::errors::Result<()> {
    let docs_root = resolve_docs_root(cli.docs_root);
    let config = load_config(&docs_root)?;
    tracing::debug!(root = %config.docs_root.display(), "using documentation root");
    let repo = DocumentRepository::new(config);

    match cli.command {
        Commands::Serve => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let server = McpServer::new(repo);
            runtime.block_on(server.run())?;
        }
        Commands::Search { query, category } => {
            let results = repo.search(&query, Category::parse_lenient(&category))?;
            println!("{}", format_search_results(&query, &results));
        }
        Commands::List { category } => {
            let modules = repo.list_modules(Category::parse_lenient(&category))?;
            println!("{}", format_module_list(&category, &modules));
        }
        Commands::Module { name, category } => {
            let doc = repo.get_module_doc(&name, &category)?;
            println!("{}", format_module_doc(&doc));
        }
        Commands::Arch { component } => {
            let doc = repo.get_architecture_info(Component::parse_lenient(&component))?;
            println!("{}", format_architecture(&doc));
        }
    }
    Ok(())
}

/// Folio web server
///
/// Axum server that renders the portfolio with Leptos SSR, answers server
/// function calls, and serves the hydration bundle.

#[cfg(feature = "ssr")]
use std::path::{Path, PathBuf};

#[cfg(feature = "ssr")]
use clap::{Parser, Subcommand};
#[cfg(feature = "ssr")]
use folio_common::{FolioError, Portfolio};
#[cfg(feature = "ssr")]
use tracing::{error, info, warn};

/// Portfolio site server
#[cfg(feature = "ssr")]
#[derive(Parser)]
#[command(name = "folio-web")]
#[command(about = "Server-rendered portfolio of project cards")]
#[command(version)]
struct Cli {
    /// Portfolio configuration file
    #[arg(short, long, default_value = "portfolio.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[cfg(feature = "ssr")]
#[derive(Subcommand)]
enum Commands {
    /// Serve the portfolio site
    Serve {
        /// Override the listen address from the Leptos configuration
        #[arg(long)]
        listen: Option<String>,
    },

    /// Configuration validation and generation
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

#[cfg(feature = "ssr")]
#[derive(Subcommand)]
enum ConfigCommands {
    /// Parse the configuration file and report lint warnings
    Validate,
    /// Generate example configuration
    Example {
        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.json_logs)?;

    info!("Folio web starting");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Serve { listen }) => run_server(&cli.config, listen).await,
        Some(Commands::Config { config_command }) => {
            run_config_command(&cli.config, config_command).await
        }
        None => run_server(&cli.config, None).await,
    }
}

#[cfg(feature = "ssr")]
fn init_logging(level: &str, json_logs: bool) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level_filter = level
        .parse::<tracing::Level>()
        .map_err(|_| FolioError::config(format!("Invalid log level: {}", level)))?;

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from_level(level_filter));

    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }

    Ok(())
}

#[cfg(feature = "ssr")]
async fn read_portfolio(config_path: &Path) -> folio_common::Result<Portfolio> {
    let content = tokio::fs::read_to_string(config_path).await.map_err(|e| {
        FolioError::config(format!("Failed to read config file {}: {}", config_path.display(), e))
    })?;

    Portfolio::from_yaml_str(&content)
}

#[cfg(feature = "ssr")]
async fn load_portfolio(config_path: &Path) -> folio_common::Result<Portfolio> {
    if !config_path.exists() {
        warn!("Configuration file not found: {}, serving an empty portfolio", config_path.display());
        return Ok(Portfolio::default());
    }

    let portfolio = read_portfolio(config_path).await?;
    info!("Loaded {} projects from {}", portfolio.projects.len(), config_path.display());

    for issue in portfolio.lint() {
        warn!("{}", issue);
    }

    Ok(portfolio)
}

#[cfg(feature = "ssr")]
async fn run_server(config_path: &Path, listen_override: Option<String>) -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::{body::Body, extract::Request, routing::post, Router};
    use folio_web::app::App;
    use leptos::*;
    use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
    use tower_http::services::ServeDir;

    let portfolio = load_portfolio(config_path).await?;

    // Site address and root come from cargo-leptos's environment
    let conf = get_configuration(None).await?;
    let mut leptos_options = conf.leptos_options;
    if let Some(listen) = listen_override {
        leptos_options.site_addr = listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", listen))?;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let context = move || provide_context(portfolio.clone());

    let app = Router::new()
        .route(
            "/api/*fn_name",
            post({
                let context = context.clone();
                move |req: Request<Body>| handle_server_fns_with_context(context.clone(), req)
            }),
        )
        .leptos_routes_with_context(&leptos_options, routes, context, App)
        .fallback_service(ServeDir::new(&*leptos_options.site_root))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Folio listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    info!("Folio stopped");
    Ok(())
}

#[cfg(feature = "ssr")]
async fn wait_for_shutdown() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}

#[cfg(feature = "ssr")]
async fn run_config_command(config_path: &Path, command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Validate => {
            let portfolio = read_portfolio(config_path).await?;
            let issues = portfolio.lint();

            for issue in &issues {
                warn!("{}", issue);
            }

            info!(
                "Configuration {} is valid: {} projects, {} warnings",
                config_path.display(),
                portfolio.projects.len(),
                issues.len()
            );
        }
        ConfigCommands::Example { output } => {
            let yaml = Portfolio::example().to_yaml()?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, yaml).await?;
                    info!("Wrote example configuration to {}", path.display());
                }
                None => print!("{}", yaml),
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

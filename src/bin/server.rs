use std::{fs::OpenOptions, net::SocketAddr, path::PathBuf, process::ExitCode, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use finance_dashboard::{
    AppState, Credentials, DEMO_EMAIL, DEMO_PASSWORD, PaginationConfig, build_router,
    get_local_timezone, graceful_shutdown, load_transactions, logging_middleware,
    normalize_transactions,
};

/// The web server for the finance dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the JSON list of transactions.
    #[arg(long, default_value = "data/transactions.json")]
    data_path: PathBuf,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the local timezone, e.g. "America/Sao_Paulo".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// The number of transactions shown per page.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    page_size: u64,

    /// The secret used to encrypt the auth cookie.
    #[arg(long, env = "SECRET", hide_env_values = true)]
    secret: String,

    /// The email that may log in.
    #[arg(long, env = "DASHBOARD_EMAIL")]
    email: Option<String>,

    /// The password that may log in.
    #[arg(long, env = "DASHBOARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(error) = setup_logging() {
        eprintln!("Could not set up logging: {error}");
        return ExitCode::FAILURE;
    }

    let args = Args::parse();

    if get_local_timezone(&args.timezone).is_none() {
        tracing::error!(
            "\"{}\" is not a canonical timezone name, e.g. \"America/Sao_Paulo\"",
            args.timezone
        );
        return ExitCode::FAILURE;
    }

    let transactions = match load_transactions(&args.data_path)
        .and_then(|records| normalize_transactions(&records))
    {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Could not load transactions: {error}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "Loaded {} transactions from {}",
        transactions.len(),
        args.data_path.display()
    );

    if args.email.is_none() || args.password.is_none() {
        tracing::warn!(
            "DASHBOARD_EMAIL or DASHBOARD_PASSWORD is not set, falling back to the demo \
            credentials for any missing value"
        );
    }
    let credentials = match Credentials::new(
        args.email.unwrap_or_else(|| DEMO_EMAIL.to_owned()),
        args.password.as_deref().unwrap_or(DEMO_PASSWORD),
        Credentials::DEFAULT_COST,
    ) {
        Ok(credentials) => credentials,
        Err(error) => {
            tracing::error!("Could not set up the log-in credentials: {error}");
            return ExitCode::FAILURE;
        }
    };

    let pagination_config = PaginationConfig {
        page_size: args.page_size,
        ..Default::default()
    };
    let app_state = AppState::new(
        &args.secret,
        &args.timezone,
        pagination_config,
        credentials,
        transactions,
    );

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(
        build_router(app_state).layer(middleware::from_fn(logging_middleware)),
    );

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // The app logs its own errors, so 5xx responses are not logged here.
        .on_failure(());

    router.layer(tracing_layer)
}

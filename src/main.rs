use std::process;

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use aerodir::error::AirportError;
use aerodir::gateway::{GatewayConfig, HttpGateway, DEFAULT_BASE_URL};
use aerodir::model::Airport;
use aerodir::state::{DirectoryState, Status};
use aerodir::store::DirectoryStore;
use aerodir::table;

#[derive(Parser)]
#[command(
    name = "aerodir",
    about = "Browse the aviationstack airport directory from the terminal",
    version,
    after_help = "\
Examples:
  aerodir list --page 2
  aerodir search LAX --json --pretty
  aerodir search \"San Francisco\" --compact
  aerodir show LAX --map

The access key can also be set via AVIATIONSTACK_ACCESS_KEY."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(about = "List airports, one page at a time")]
    List(ListArgs),
    #[command(about = "Search airports by name or code (always starts at page 1)")]
    Search(SearchArgs),
    #[command(about = "Show one airport by IATA code, with a map link")]
    Show(ShowArgs),
}

#[derive(clap::Args)]
struct ConnectionArgs {
    #[arg(
        long,
        env = "AVIATIONSTACK_ACCESS_KEY",
        value_name = "KEY",
        help = "aviationstack access key",
        hide_env_values = true
    )]
    access_key: Option<String>,

    #[arg(
        long,
        default_value = DEFAULT_BASE_URL,
        value_name = "URL",
        help = "API base URL"
    )]
    base_url: String,

    #[arg(long, value_name = "URL", help = "HTTP or SOCKS5 proxy")]
    proxy: Option<String>,

    #[arg(long, default_value = "30", value_name = "SECS", help = "Request timeout")]
    timeout: u64,

    #[arg(short, long, help = "Log requests and dropped error causes to stderr")]
    verbose: bool,
}

#[derive(clap::Args)]
struct OutputArgs {
    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[arg(long, help = "One-line-per-airport output (for scripts and AI agents)")]
    compact: bool,

    #[arg(long, help = "Dark table styling")]
    dark: bool,
}

#[derive(clap::Args)]
struct ListArgs {
    #[arg(
        long,
        default_value = "1",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Page number (1-based)"
    )]
    page: u32,

    #[arg(
        long,
        default_value = "10",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Airports per page"
    )]
    page_size: u32,

    #[arg(long, value_name = "TERM", help = "Filter by name or code")]
    search: Option<String>,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    connection: ConnectionArgs,
}

#[derive(clap::Args)]
struct SearchArgs {
    #[arg(value_name = "TERM", help = "Name or code to search for")]
    term: String,

    #[arg(
        long,
        default_value = "10",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Airports per page"
    )]
    page_size: u32,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    connection: ConnectionArgs,
}

#[derive(clap::Args)]
struct ShowArgs {
    #[arg(value_name = "IATA", help = "Airport IATA code (e.g. LAX, HEL, NRT)")]
    code: String,

    #[arg(long, help = "Open the airport's location on OpenStreetMap")]
    map: bool,

    #[arg(long, help = "Print the map URL only")]
    url: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[arg(long, help = "Dark table styling")]
    dark: bool,

    #[command(flatten)]
    connection: ConnectionArgs,
}

fn error_code(err: &AirportError) -> i32 {
    match err {
        AirportError::Validation(_) | AirportError::MissingAccessKey => 2,
        AirportError::Timeout
        | AirportError::ConnectionFailed(_)
        | AirportError::DnsResolution(_)
        | AirportError::TlsError(_)
        | AirportError::ProxyError(_) => 3,
        AirportError::RateLimited | AirportError::Unauthorized => 4,
        AirportError::HttpStatus(_) => 5,
        AirportError::Decode(_) => 6,
        AirportError::NotFound(_) => 1,
    }
}

fn error_kind(err: &AirportError) -> &'static str {
    match err {
        AirportError::Validation(_) => "validation_error",
        AirportError::MissingAccessKey => "missing_access_key",
        AirportError::Timeout => "timeout",
        AirportError::ConnectionFailed(_) => "connection_failed",
        AirportError::DnsResolution(_) => "dns_error",
        AirportError::TlsError(_) => "tls_error",
        AirportError::ProxyError(_) => "proxy_error",
        AirportError::RateLimited => "rate_limited",
        AirportError::Unauthorized => "unauthorized",
        AirportError::HttpStatus(_) => "http_error",
        AirportError::Decode(_) => "decode_error",
        AirportError::NotFound(_) => "not_found",
    }
}

fn die(err: &AirportError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{}", serde_json::to_string(&json).unwrap());
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn gateway_config(args: &ConnectionArgs, json_mode: bool) -> GatewayConfig {
    let access_key = match args.access_key.as_ref() {
        Some(k) if !k.is_empty() => k.clone(),
        _ => die(&AirportError::MissingAccessKey, json_mode),
    };
    GatewayConfig {
        access_key,
        base_url: args.base_url.clone(),
        proxy: args.proxy.clone(),
        timeout: args.timeout,
    }
}

fn print_compact(airports: &[&Airport]) {
    for a in airports {
        println!(
            "{} | {} | {} | {}, {} | {:.4},{:.4}",
            a.iata_code, a.icao_code, a.airport_name, a.city_name, a.country_name, a.latitude,
            a.longitude
        );
    }
}

fn print_directory(state: &DirectoryState, output: &OutputArgs) {
    let airports = state.filtered();

    if output.json || output.pretty {
        let json = serde_json::json!({
            "airports": airports,
            "pagination": {
                "page": state.pagination.page,
                "page_size": state.pagination.page_size,
                "total": state.pagination.total,
                "total_pages": state.pagination.total_pages(),
            },
        });
        let rendered = if output.pretty {
            serde_json::to_string_pretty(&json).unwrap()
        } else {
            serde_json::to_string(&json).unwrap()
        };
        println!("{rendered}");
        return;
    }

    if airports.is_empty() {
        println!("No airports found.");
        return;
    }

    if output.compact {
        print_compact(&airports);
    } else {
        println!("{}", table::render(&airports, state.dark_mode));
        println!(
            "{}",
            table::page_footer(
                state.pagination.page,
                state.pagination.total_pages(),
                state.pagination.total,
            )
        );
    }
}

/// The store folds load failures into its status; surface them here with the
/// same fixed message the status carries. The cause is already on the log.
fn check_status(state: &DirectoryState, json_mode: bool) {
    if let Status::Error(msg) = &state.status {
        if json_mode {
            let json = serde_json::json!({
                "error": { "kind": "load_error", "message": msg }
            });
            println!("{}", serde_json::to_string(&json).unwrap());
        } else {
            eprintln!("error: {msg}");
        }
        process::exit(1);
    }
}

async fn run_list(args: ListArgs) {
    let json_mode = args.output.json || args.output.pretty;
    init_logging(args.connection.verbose);

    let config = gateway_config(&args.connection, json_mode);
    let mut store = DirectoryStore::with_page_size(HttpGateway::new(config), args.page_size);

    if args.output.dark {
        store.toggle_dark_mode();
    }

    match args.search.as_deref() {
        // A search always lands on page 1; a later page of the same filter
        // is a second load, like the page component refetching on input.
        Some(term) => {
            store.search(term).await;
            check_status(store.state(), json_mode);
            if args.page > 1 {
                store.load_airports(args.page).await;
            }
        }
        None => store.load_airports(args.page).await,
    }

    check_status(store.state(), json_mode);
    print_directory(store.state(), &args.output);
}

async fn run_search(args: SearchArgs) {
    let json_mode = args.output.json || args.output.pretty;
    init_logging(args.connection.verbose);

    let config = gateway_config(&args.connection, json_mode);
    let mut store = DirectoryStore::with_page_size(HttpGateway::new(config), args.page_size);

    if args.output.dark {
        store.toggle_dark_mode();
    }

    store.search(&args.term).await;
    check_status(store.state(), json_mode);
    print_directory(store.state(), &args.output);
}

async fn run_show(args: ShowArgs) {
    let json_mode = args.json || args.pretty;
    init_logging(args.connection.verbose);

    let config = gateway_config(&args.connection, json_mode);
    let code = args.code.to_uppercase();

    let airport = match aerodir::find_airport(&code, config).await {
        Ok(Some(a)) => a,
        Ok(None) => die(&AirportError::NotFound(code), json_mode),
        Err(e) => die(&e, json_mode),
    };

    if args.url {
        println!("{}", airport.map_url());
        return;
    }

    if args.map {
        let url = airport.map_url();
        println!("Opening: {url}");
        if let Err(e) = open::that(&url) {
            die(
                &AirportError::Validation(format!("failed to open browser: {e}")),
                json_mode,
            );
        }
        return;
    }

    if json_mode {
        let rendered = if args.pretty {
            serde_json::to_string_pretty(&airport).unwrap()
        } else {
            serde_json::to_string(&airport).unwrap()
        };
        println!("{rendered}");
    } else {
        println!("{}", table::render_detail(&airport, args.dark));
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => run_list(args).await,
        Commands::Search(args) => run_search(args).await,
        Commands::Show(args) => run_show(args).await,
    }
}

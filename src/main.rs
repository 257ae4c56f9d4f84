use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use podbrowse::render::{render_controls, render_options};
use podbrowse::{
    BrowseConfig, BrowseSession, CardLayout, CatalogStatus, Confirm, DEFAULT_CATALOG_URL,
    DefaultOrder, GenreFilter, HttpClient, LayoutKind, NavigationOutcome, Navigator,
    NoopReporter, ProgressEvent, ProgressReporter, ReqwestClient, Route, SharedProgressReporter,
    ShowId, SortMode, parse_genre_filter, render_view,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static ARROW: Emoji<'_, '_> = Emoji("➡️  ", "-> ");
static PLAYING: Emoji<'_, '_> = Emoji("🎧 ", "[>] ");

/// Browse a podcast show catalog
#[derive(Parser, Debug)]
#[command(name = "podbrowse")]
#[command(about = "Search, filter and sort a podcast show catalog")]
#[command(version)]
struct Args {
    /// Catalog endpoint returning a JSON array of show previews
    #[arg(short, long, default_value = DEFAULT_CATALOG_URL)]
    endpoint: String,

    /// Case-insensitive title search
    #[arg(short, long)]
    search: Option<String>,

    /// Genre code or name to filter by ("all" for no filter)
    #[arg(short, long, value_parser = parse_genre_filter, default_value = "all")]
    genre: GenreFilter,

    /// Sort mode: default, title-asc, title-desc, date-asc, date-desc
    #[arg(long, default_value = "default")]
    sort: SortMode,

    /// What the "default" sort mode means: fetch (API order) or title
    #[arg(long, default_value = "fetch")]
    default_order: DefaultOrder,

    /// Card layout: list or carousel
    #[arg(short, long, default_value = "list")]
    layout: LayoutKind,

    /// Shows per slide in the carousel layout
    #[arg(long, default_value = "5")]
    per_page: usize,

    /// Catalog request timeout in seconds (0 disables the timeout)
    #[arg(short, long, default_value = "30")]
    timeout: u64,

    /// Keep the session open and read commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Print the available sort modes and genres, then exit
    #[arg(long)]
    list_options: bool,

    /// Quiet mode - suppress the loading indicator
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

/// Progress reporter driving an indicatif spinner while the catalog loads
struct SpinnerReporter {
    bar: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        if let ProgressEvent::FetchingCatalog { url } = &event {
            self.bar.enable_steady_tick(Duration::from_millis(100));
            self.bar
                .set_message(format!("{SEARCH}Loading catalog: {}", url.cyan()));
            return;
        }

        self.bar.finish_and_clear();
        if let Some(line) = completion_line(&event) {
            println!("{line}");
        }
    }
}

/// Line printed once loading finishes.
///
/// Failures print nothing here: the reason is rendered once by the error view.
fn completion_line(event: &ProgressEvent) -> Option<String> {
    match event {
        ProgressEvent::CatalogLoaded { count } => Some(format!(
            "{SUCCESS}{} shows loaded",
            count.to_string().green().bold()
        )),
        ProgressEvent::FetchingCatalog { .. } | ProgressEvent::CatalogFailed { .. } => None,
    }
}

/// Hands navigation requests to the terminal; there is no router to own history
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, route: Route) {
        println!("{ARROW}Opening {}", route.path().cyan());
    }
}

/// Yes/no prompt on stdin; anything but "y"/"yes" declines
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message.yellow());
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "podbrowse=debug" } else { "podbrowse=error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_view<C: HttpClient, N: Navigator>(
    session: &BrowseSession<C, N>,
    layout: &dyn CardLayout,
) -> Result<()> {
    let mut out = io::stdout().lock();
    if matches!(session.status(), CatalogStatus::Ready(shows) if !shows.is_empty()) {
        render_controls(session.filter(), &mut out)?;
        writeln!(out)?;
    }
    render_view(&session.view(), layout, &mut out)?;
    out.flush()?;
    Ok(())
}

fn print_help() {
    println!("{}", "Commands:".bold());
    for (command, description) in [
        ("search <text>", "search titles (empty clears the search)"),
        ("genre <code|name|all>", "filter by genre"),
        ("sort <mode>", "change the sort mode"),
        ("layout <list|carousel>", "change the card layout"),
        ("show", "print the current list"),
        ("info <id>", "open the details view for a show"),
        ("favorites", "open the favorites view"),
        ("play / pause", "report audio playback state"),
        ("options", "list sort modes and genres"),
        ("help", "show this help"),
        ("quit", "leave the browser"),
    ] {
        println!("  {:<24} {}", command.cyan(), description.dimmed());
    }
}

fn run_interactive<C: HttpClient>(
    session: &mut BrowseSession<C, TerminalNavigator>,
    mut layout_kind: LayoutKind,
    per_page: usize,
) -> Result<()> {
    let confirm = StdinConfirm;
    print_help();

    loop {
        print!("\n{} ", ">".magenta().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // EOF behaves like quit without a prompt
            return Ok(());
        }

        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "search" => {
                session.set_search_term(rest);
                print_view(session, layout_kind.build(per_page).as_ref())?;
            }
            "genre" => match parse_genre_filter(rest) {
                Ok(genre) => {
                    session.select_genre(genre);
                    print_view(session, layout_kind.build(per_page).as_ref())?;
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            "sort" => match rest.parse::<SortMode>() {
                Ok(sort) => {
                    session.set_sort_mode(sort);
                    print_view(session, layout_kind.build(per_page).as_ref())?;
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            "layout" => match rest.parse::<LayoutKind>() {
                Ok(kind) => {
                    layout_kind = kind;
                    print_view(session, layout_kind.build(per_page).as_ref())?;
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            "show" => print_view(session, layout_kind.build(per_page).as_ref())?,
            "info" if !rest.is_empty() => {
                if session.go_to_details(ShowId::from(rest), &confirm) == NavigationOutcome::Cancelled {
                    println!("{}", "Staying on the catalog".dimmed());
                }
            }
            "favorites" | "favourites" => {
                if session.go_to_favorites(&confirm) == NavigationOutcome::Cancelled {
                    println!("{}", "Staying on the catalog".dimmed());
                }
            }
            "play" => {
                session.on_playback_started();
                println!("{PLAYING}{}", "Audio is playing".green());
            }
            "pause" => {
                session.on_playback_stopped();
                println!("{PLAYING}{}", "Audio paused".yellow());
            }
            "options" => render_options(&mut io::stdout().lock())?,
            "help" => print_help(),
            "quit" | "exit" => {
                if session.request_exit(&confirm) {
                    return Ok(());
                }
            }
            other => println!("{} {}", "Unknown command:".red(), other),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.list_options {
        render_options(&mut io::stdout().lock())?;
        return Ok(());
    }

    let config = BrowseConfig {
        endpoint: args.endpoint.clone(),
        timeout: (args.timeout > 0).then(|| Duration::from_secs(args.timeout)),
        default_order: args.default_order,
        initial_sort: args.sort,
    };
    config
        .endpoint_url()
        .context("Invalid catalog endpoint")?;

    let client = match config.timeout {
        Some(timeout) => {
            ReqwestClient::with_timeout(timeout).context("Failed to create HTTP client")?
        }
        None => ReqwestClient::new(),
    };

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podbrowse".bold().magenta(),
            "- Podcast Catalog Browser".dimmed()
        );
    }

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new())
    };

    let mut session = BrowseSession::new(client, TerminalNavigator, &config, reporter);
    if let Some(search) = args.search {
        session.set_search_term(search);
    }
    session.select_genre(args.genre);

    session.load().await;

    print_view(&session, args.layout.build(args.per_page).as_ref())?;

    if args.interactive && session.status().shows().is_some() {
        run_interactive(&mut session, args.layout, args.per_page)?;
    }

    if matches!(session.status(), CatalogStatus::Error(_)) {
        std::process::exit(1);
    }

    Ok(())
}

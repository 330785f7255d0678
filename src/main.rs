use std::io::{self, BufRead, IsTerminal, Write};
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::config::{HookBuilder, Theme};
use color_eyre::eyre::eyre;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio_util::sync::CancellationToken;

use airbook::api::ApiClient;
use airbook::app::App;
use airbook::autocomplete::AutocompleteOptions;
use airbook::booking::{self, CancelOutcome};
use airbook::cli::{Cli, Command};
use airbook::config::{self, Config, ConfigResult};
use airbook::error::AirbookError;
use airbook::logging::{self, LogTarget};
use airbook::notification::AlertKind;

/// Upper bound on one event wait, so lookup results are picked up promptly
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    install_error_hooks()?;

    let cli = Cli::parse();
    logging::init(match cli.command {
        None => LogTarget::File(logging::default_log_path()),
        Some(_) => LogTarget::Stderr,
    });

    let ConfigResult { mut config, warning } = match &cli.config {
        Some(path) => ConfigResult {
            config: config::read_config(path).map_err(AirbookError::from)?,
            warning: None,
        },
        None => config::load_config(),
    };
    cli.apply_overrides(&mut config);

    let client = ApiClient::new(
        &config.api.base_url,
        Duration::from_millis(config.api.timeout_ms),
    )
    .map_err(AirbookError::from)?;

    match &cli.command {
        Some(Command::Cities { query }) => run_cities(&client, query),
        Some(Command::Cancel { reference, yes }) => run_cancel(&client, reference, *yes),
        None => run_search(&cli, &config, client, warning),
    }
}

/// color-eyre report and panic hooks; plain text when stderr is redirected
fn install_error_hooks() -> Result<()> {
    let mut hooks = HookBuilder::default();
    if !io::stderr().is_terminal() {
        hooks = hooks.theme(Theme::new());
    }
    hooks.install()
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

fn run_cities(client: &ApiClient, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AirbookError::Validation("query is empty".to_string()).into());
    }

    let cities = runtime()?
        .block_on(client.cities(query, &CancellationToken::new()))
        .map_err(AirbookError::from)?;

    let mut stdout = io::stdout().lock();
    for city in cities {
        writeln!(stdout, "{city}")?;
    }
    Ok(())
}

fn run_cancel(client: &ApiClient, reference: &str, yes: bool) -> Result<()> {
    let reference = booking::validate_reference(reference)?;

    let confirm = |prompt: &str| {
        if yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
    };

    let outcome = runtime()?.block_on(booking::cancel_booking(client, reference, confirm));
    match (&outcome, outcome.alert()) {
        (CancelOutcome::Declined, _) | (_, None) => {
            println!("Booking {reference} kept");
            Ok(())
        }
        (_, Some((message, AlertKind::Danger))) => Err(eyre!(message)),
        (_, Some((message, _))) => {
            println!("{message}");
            Ok(())
        }
    }
}

fn run_search(
    cli: &Cli,
    config: &Config,
    client: ApiClient,
    warning: Option<String>,
) -> Result<()> {
    let mut app = App::new(
        AutocompleteOptions::from(&config.autocomplete),
        cli.fares(),
        chrono::Local::now().naive_local(),
    );
    app.connect(&client);
    if let Some(warning) = warning {
        app.show_alert(warning, AlertKind::Warning, Instant::now());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(&mut terminal, &mut app);

    app.shutdown();
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;

    if let Some(request) = app.submitted() {
        let url = request.search_url(&client).map_err(AirbookError::from)?;
        println!("{url}");
    }
    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            return Ok(());
        }

        let timeout = app
            .next_deadline(now)
            .map_or(MAX_POLL_INTERVAL, |deadline| deadline.min(MAX_POLL_INTERVAL));
        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }
    }
}

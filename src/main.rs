use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use ask_client::config::default_config::config_with_override;
use ask_client::telemetry::{self, TARGET_PREFIX};
use ask_client::{AskClient, HealthService, HealthStatus};
use clap::{Parser, Subcommand};
use colored::Colorize;
use interaction::{ChatState, InteractionState, InteractionStore, Phase, Reducer};
use presentation::components::alert::Alert;
use presentation::components::layout::{Container, Footer, Header};
use presentation::components::spinner::{DEFAULT_LOADING_MESSAGE, TerminalSpinner};
use presentation::{QueryForm, render_chat, render_page};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{CommandError, HELP, SlashCommand, decode_line};

/// Terminal client for the Micro-RAG question-answering service.
#[derive(Debug, Parser)]
#[command(name = "micro-rag-client", version, about)]
struct Cli {
    /// Backend base URL. Overrides RAG_API_URL.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Keep the conversation on screen instead of a single answer card.
    #[arg(long, env = "RAG_CLIENT_CHAT")]
    chat: bool,

    /// Debug logs from the HTTP client on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ask one question and exit.
    Ask {
        question: String,
        /// Print the raw answer payload as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Probe the backend and exit.
    Health {
        /// Print the probe result as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // A missing .env is fine; a broken one is not.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = config_with_override(cli.url.as_deref())?;
    let client = AskClient::new(cfg)?;
    info!(endpoint = %client.base_url(), chat = cli.chat, "client ready");

    match cli.command {
        Some(Command::Ask { question, json }) => ask_once(client, &question, json).await,
        Some(Command::Health { json }) => health(&client, json).await,
        None if cli.chat => interactive::<ChatState>(client).await,
        None => interactive::<InteractionState>(client).await,
    }
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn Error>> {
    let filter = if verbose {
        telemetry::env_filter_with_level("warn", Level::DEBUG)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    // Library events get their own layer; keep them out of this one.
    let everything_else = filter::filter_fn(|meta| !meta.target().starts_with(TARGET_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(everything_else),
        )
        .with(telemetry::layer())
        .try_init()?;
    Ok(())
}

async fn ask_once(client: AskClient, question: &str, json: bool) -> Result<ExitCode, Box<dyn Error>> {
    let mut store: InteractionStore<AskClient> = InteractionStore::new(client);

    let spinner = TerminalSpinner::start(DEFAULT_LOADING_MESSAGE);
    let state = store.ask(question).await;
    spinner.finish();

    match (&state.response, &state.error) {
        (Some(payload), _) if json => println!("{}", serde_json::to_string_pretty(payload)?),
        (None, Some(message)) if json => eprintln!("{}", Alert::error(message)),
        _ => println!("{}", render_page(state, &QueryForm { examples: &[] })),
    }

    Ok(exit_code(store.phase() == Phase::Answered))
}

async fn health(client: &AskClient, json: bool) -> Result<ExitCode, Box<dyn Error>> {
    let status = HealthService::new(client).probe().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", health_alert(&status));
    }
    Ok(exit_code(status.ok))
}

fn health_alert(status: &HealthStatus) -> String {
    let line = format!(
        "{} ({}, {}ms)",
        status.message, status.endpoint, status.latency_ms
    );
    if status.ok {
        Alert::success(&line).to_string()
    } else {
        Alert::warning(&line).to_string()
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// A state shape the interactive session knows how to draw.
trait Screen: Reducer {
    fn render(&self, form: &QueryForm<'_>) -> String;
}

impl Screen for InteractionState {
    fn render(&self, form: &QueryForm<'_>) -> String {
        render_page(self, form)
    }
}

impl Screen for ChatState {
    fn render(&self, form: &QueryForm<'_>) -> String {
        render_chat(self, form)
    }
}

enum Event {
    Settled,
    Interrupt,
    Line(Option<Vec<u8>>),
}

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented session. Input is read while a request is pending, so a new
/// question replaces the one in flight and `/reset` cancels it.
async fn interactive<S: Screen>(client: AskClient) -> Result<ExitCode, Box<dyn Error>> {
    let endpoint = client.base_url().to_string();
    let form = QueryForm::default();
    let mut store: InteractionStore<AskClient, S> = InteractionStore::new(client);
    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');
    let mut spinner: Option<TerminalSpinner> = None;

    if !store.check_health().await {
        let message = format!("RAG service at {endpoint} is not answering yet");
        println!("{}", Container { body: &Alert::warning(&message).to_string() });
    }
    redraw(store.state(), &form)?;
    prompt()?;

    loop {
        let loading = store.is_loading();
        let event = tokio::select! {
            _ = store.settle(), if loading => Event::Settled,
            _ = tokio::signal::ctrl_c() => Event::Interrupt,
            segment = lines.next_segment() => Event::Line(segment?),
        };

        match event {
            Event::Settled => {
                stop(&mut spinner);
                redraw(store.state(), &form)?;
            }
            Event::Interrupt if loading => {
                stop(&mut spinner);
                warn!("request cancelled by user");
                store.reset();
                redraw(store.state(), &form)?;
                println!("{}", Container { body: &Alert::info("Request cancelled").to_string() });
            }
            Event::Interrupt | Event::Line(None) => break,
            Event::Line(Some(raw)) => match decode_line(raw) {
                Ok(line) => {
                    if let Flow::Quit = handle_line(&mut store, &form, &line).await? {
                        break;
                    }
                }
                Err(e) => show_error(&e),
            },
        }

        if store.is_loading() {
            if spinner.is_none() {
                spinner = Some(TerminalSpinner::start(DEFAULT_LOADING_MESSAGE));
            }
        } else {
            stop(&mut spinner);
            prompt()?;
        }
    }

    stop(&mut spinner);
    println!("\n{}", Footer { endpoint: &endpoint });
    Ok(ExitCode::SUCCESS)
}

async fn handle_line<S: Screen>(
    store: &mut InteractionStore<AskClient, S>,
    form: &QueryForm<'_>,
    line: &str,
) -> Result<Flow, Box<dyn Error>> {
    if line.trim().is_empty() {
        return Ok(Flow::Continue);
    }

    if !SlashCommand::is_command(line) {
        ask_question(store, form, line)?;
        return Ok(Flow::Continue);
    }

    match SlashCommand::parse(line) {
        Ok(SlashCommand::Quit) => return Ok(Flow::Quit),
        Ok(SlashCommand::Help) => println!("{}", Container { body: HELP }),
        Ok(SlashCommand::Examples) => println!("{}", Container { body: &form.to_string() }),
        Ok(SlashCommand::Reset) => {
            store.reset();
            redraw(store.state(), form)?;
        }
        Ok(SlashCommand::Health) => {
            let status = HealthService::new(store.backend()).probe().await;
            println!("{}", Container { body: &health_alert(&status) });
        }
        Ok(SlashCommand::Example(n)) => match form.example(n) {
            Some(question) => ask_question(store, form, question)?,
            None => show_error(&CommandError::NoSuchExample(n)),
        },
        Err(e) => show_error(&e),
    }
    Ok(Flow::Continue)
}

/// Starts a request without waiting for it. A rejected question is drawn
/// right away since nothing will settle it.
fn ask_question<S: Screen>(
    store: &mut InteractionStore<AskClient, S>,
    form: &QueryForm<'_>,
    question: &str,
) -> io::Result<()> {
    match store.submit(question) {
        Some(ticket) => {
            info!(ticket = ticket.get(), "question sent");
            Ok(())
        }
        None => redraw(store.state(), form),
    }
}

fn stop(spinner: &mut Option<TerminalSpinner>) {
    if let Some(s) = spinner.take() {
        s.finish();
    }
}

fn redraw<S: Screen>(state: &S, form: &QueryForm<'_>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if out.is_terminal() {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    writeln!(out, "{}\n", Header)?;
    writeln!(out, "{}\n", state.render(form))?;
    out.flush()
}

fn show_error(err: &CommandError) {
    let message = err.to_string();
    println!("{}", Container { body: &Alert::error(&message).to_string() });
}

fn prompt() -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{} ", "›".cyan().bold())?;
    out.flush()
}

mod plot_file;
mod render;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use plotchat::config::{
    ConfigError, DEFAULT_API_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, Timeouts,
};
use plotchat::http::HttpChatService;
use plotchat::{ChatConfig, ChatService, ChatSession, Message, ServiceError, SettleOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::plot_file::PlotExporter;
use crate::render::{clock, render_message};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Service(#[from] ServiceError),
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("chat request failed")]
    ChatFailed,
}

#[derive(Parser, Debug)]
#[command(name = "plotchat", about = "Ask questions about your data from the terminal")]
struct Cli {
    #[arg(long, env = "PLOTCHAT_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    #[arg(
        long,
        env = "PLOTCHAT_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[arg(
        long,
        env = "PLOTCHAT_CONNECT_TIMEOUT_SECS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    connect_timeout_secs: u64,

    #[arg(long, env = "PLOTCHAT_PLOT_DIR", help = "Write received plots as HTML pages into this directory")]
    plot_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Check that the chat service answers on its root URL.
    Ping,
    /// Send a single message and print the reply.
    Send { message: String },
    /// Interactive chat (default).
    Chat,
}

impl Cli {
    fn config(&self) -> Result<ChatConfig, ConfigError> {
        let timeouts = Timeouts { request_secs: self.timeout_secs, connect_secs: self.connect_timeout_secs };
        Ok(ChatConfig::new(&self.base_url)?.with_timeouts(timeouts))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let service = HttpChatService::new(cli.config()?)?;
    tracing::debug!(base_url = service.config().base_url(), "chat service configured");
    let exporter = cli.plot_dir.clone().map(PlotExporter::new);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Ping => run_ping(&service).await,
        Command::Send { message } => run_send(service, exporter.as_ref(), message).await,
        Command::Chat => run_chat(service, exporter.as_ref()).await,
    }
}

async fn run_ping(service: &HttpChatService) -> Result<(), CliError> {
    let status = service.probe().await?;
    println!("ok {status}");
    Ok(())
}

async fn run_send(service: HttpChatService, exporter: Option<&PlotExporter>, message: String) -> Result<(), CliError> {
    let mut session = ChatSession::new(service);
    session.mount().await;
    log_diagnostics(&session);

    session.set_input(message);
    let before = session.state().messages().len();
    let Some(outcome) = session.submit(clock).await else {
        tracing::warn!("nothing to send: message is blank");
        return Ok(());
    };

    // The user's own message is not echoed back.
    print_messages(&session.state().messages()[before + 1..], exporter);
    if matches!(outcome, SettleOutcome::Failed) {
        return Err(CliError::ChatFailed);
    }
    Ok(())
}

async fn run_chat(service: HttpChatService, exporter: Option<&PlotExporter>) -> Result<(), CliError> {
    let mut session = ChatSession::new(service);
    session.mount().await;
    log_diagnostics(&session);
    println!("Data Mystery Solver. Type a question, /debug for diagnostics, /quit to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "/quit" | "/exit" => break,
            "/debug" => {
                println!("{}", session.state().diagnostics.as_text());
                continue;
            }
            _ => {}
        }

        session.set_input(line);
        if !session.state().can_submit() {
            continue;
        }

        let before = session.state().messages().len();
        eprint!("...");
        let outcome = session.submit(clock).await;
        eprint!("\r   \r");

        if outcome.is_some() {
            print_messages(&session.state().messages()[before + 1..], exporter);
        }
    }
    Ok(())
}

fn print_messages(messages: &[Message], exporter: Option<&PlotExporter>) {
    for message in messages {
        println!("{}", render_message(message));
        let (Some(plot), Some(exporter)) = (&message.plot, exporter) else {
            continue;
        };
        match exporter.write(plot) {
            Ok(path) => println!("    saved {}", path.display()),
            Err(error) => tracing::warn!(%error, dir = %exporter.dir().display(), "plot export failed"),
        }
    }
}

fn log_diagnostics<S: ChatService>(session: &ChatSession<S>) {
    for line in session.state().diagnostics.lines() {
        tracing::info!("{line}");
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

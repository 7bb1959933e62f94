use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use nowgrab::{
    cli, config,
    config::DispatchMode,
    error,
    error::Error,
    info, success,
    types::Outcome,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Subcommand; `grab` when omitted
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Send the album of the current track to the downloader
    Grab(GrabOptions),

    /// Print the album link without dispatching it
    Resolve(ResolveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GrabOptions {
    /// Override the configured handoff strategy
    #[clap(long, value_enum)]
    pub via: Option<DispatchMode>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Track name to search for instead of the current track
    #[clap(long, requires = "artist")]
    pub track: Option<String>,

    /// Artist name belonging to --track
    #[clap(long, requires = "track")]
    pub artist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Grab(GrabOptions { via: None }));

    if let Command::Completions(opt) = &command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config = match config::Config::load().await {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let result = match command {
        Command::Grab(opt) => cli::grab(&config, opt.via).await,
        Command::Resolve(opt) => cli::resolve(&config, opt.track, opt.artist).await,
        Command::Completions(_) => unreachable!("handled before config load"),
    };

    match result {
        Ok(Outcome::Idle) => info!("No song is currently playing."),
        Ok(Outcome::Dispatched(album)) => success!("Album link for {} handed off.", album.name),
        Ok(Outcome::Resolved(_)) => {}
        Err(e) => fail(e),
    }
}

/// Single process-terminating error path.
///
/// Prints setup guidance for configuration errors, then the diagnostic, and
/// exits with status 1 via the `error!` macro.
fn fail(e: Error) -> ! {
    if let Some(help) = e.remediation() {
        eprintln!("{help}\n");
    }
    error!("{}", e)
}

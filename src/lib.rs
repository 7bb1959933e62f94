//! Now-Playing to Downloader Bridge Library
//!
//! This library resolves the album of the track currently playing in the
//! Spotify desktop app and hands the album link off to a download
//! application. It includes modules for credential and dispatch
//! configuration, the Spotify Web API calls, the now-playing query, and the
//! two handoff strategies.
//!
//! # Modules
//!
//! - `cli` - Command-line command implementations
//! - `config` - Credential file and dispatch configuration
//! - `dispatch` - Handoff strategies (GUI automation, downloader CLI)
//! - `error` - Error taxonomy shared by all components
//! - `player` - Now-playing query against the media player
//! - `spotify` - Spotify Web API client (token grant, track search)
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use nowgrab::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> nowgrab::Res<()> {
//!     let config = config::Config::load().await?;
//!     let outcome = cli::grab(&config, None).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod player;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate returns this alias over the shared
/// [`error::Error`] taxonomy. Components propagate errors upward; only the
/// top-level handler in `main` turns them into process termination.
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Now playing: {} - {}", track, artist);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Album link sent to {}", app);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1.
///
/// # Behavior
///
/// This macro is the single process-terminating error path of the
/// application. Library components never call it; they return [`Res`] and
/// leave termination to the handler in `main.rs`.
///
/// # Example
///
/// ```
/// error!("Could not find album info: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Clipboard handoff is best-effort; paste was not verified");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

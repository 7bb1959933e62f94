//! # CLI Module
//!
//! This module implements the user-facing commands and coordinates the
//! pipeline between the player query, the Spotify integration and the
//! handoff dispatcher.
//!
//! ## Commands
//!
//! - [`grab`] - Resolve the album of the current track and hand the link to
//!   the configured downloader (the default command)
//! - [`resolve`] - Resolve and print the album link without dispatching it
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (grab / resolve)
//!     ↓
//! Player Query (osascript)      → quiescent exit when nothing plays
//!     ↓
//! Spotify Layer (token grant, track search)
//!     ↓
//! Dispatch Layer (GUI automation or downloader CLI)
//! ```
//!
//! Control flow is strictly linear and every step completes before the next
//! begins. Commands return a [`crate::types::Outcome`] and propagate every
//! error upward; process termination and exit codes are owned by `main`.

mod grab;
mod resolve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use grab::grab;
pub use resolve::resolve;

/// Spinner shown while the network search runs.
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

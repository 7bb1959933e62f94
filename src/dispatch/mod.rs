//! Handoff strategies for delivering a resolved album link.
//!
//! The dispatcher is modeled as a capability the pipeline depends on rather
//! than inlined OS automation, so the resolution logic can be exercised with
//! a fake strategy that records the link it received. Two real strategies
//! exist, selected by configuration:
//!
//! - [`GuiDispatch`] places the link on the system clipboard and simulates a
//!   paste-and-confirm keystroke sequence into the download application.
//!   Entirely best-effort; nothing verifies that the paste landed.
//! - [`CliDispatch`] invokes a downloader program as a subprocess with the
//!   link as its sole argument and treats a non-zero exit as a download
//!   failure.
//!
//! Both strategies are fire-and-forget: no confirmation loop, no polling for
//! download completion beyond the synchronous subprocess wait.

mod downloader;
mod gui;

use async_trait::async_trait;

pub use downloader::CliDispatch;
pub use gui::GuiDispatch;

use crate::{
    Res,
    config::{self, DispatchConfig, DispatchMode},
    error::Error,
    types::AlbumMatch,
};

/// A strategy for transferring an album link into the download application.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Human-readable name of the handoff target, for status output.
    fn target(&self) -> String;

    /// Delivers the album link. Terminal on failure; nothing is retried.
    async fn deliver(&self, album: &AlbumMatch) -> Res<()>;
}

/// Picks the configured strategy.
///
/// The CLI mode requires a downloader program in the configuration; its
/// absence is a configuration error, reported against the credentials file
/// the setting lives in.
pub fn select(config: &DispatchConfig) -> Res<Box<dyn Dispatch>> {
    match config.mode {
        DispatchMode::Gui => Ok(Box::new(GuiDispatch::new(config.app.clone()))),
        DispatchMode::Cli => {
            let program = config.downloader.clone().ok_or(Error::ConfigIncomplete {
                path: config::credentials_path(),
                field: "dispatch.downloader",
            })?;
            Ok(Box::new(CliDispatch::new(program)))
        }
    }
}

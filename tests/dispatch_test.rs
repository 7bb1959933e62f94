use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use nowgrab::Res;
use nowgrab::config::{DispatchConfig, DispatchMode};
use nowgrab::dispatch::{CliDispatch, Dispatch, select};
use nowgrab::error::Error;
use nowgrab::types::AlbumMatch;

// Helper function to create an album match
fn album(url: &str) -> AlbumMatch {
    AlbumMatch {
        name: "Foo".to_string(),
        artist: "Bar".to_string(),
        url: url.to_string(),
    }
}

/// Recording strategy: keeps every link it was asked to deliver, so the
/// pipeline seam can be exercised without any GUI or subprocess.
struct RecordingDispatch {
    delivered: Mutex<Vec<String>>,
}

impl RecordingDispatch {
    fn new() -> Self {
        RecordingDispatch {
            delivered: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Dispatch for RecordingDispatch {
    fn target(&self) -> String {
        "recorder".to_string()
    }

    async fn deliver(&self, album: &AlbumMatch) -> Res<()> {
        self.delivered.lock().unwrap().push(album.url.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_fake_strategy_records_link() {
    let recorder = RecordingDispatch::new();
    let strategy: &dyn Dispatch = &recorder;

    strategy
        .deliver(&album("https://example/album/1"))
        .await
        .unwrap();

    assert_eq!(
        *recorder.delivered.lock().unwrap(),
        vec!["https://example/album/1".to_string()]
    );
}

#[tokio::test]
async fn test_cli_dispatch_success_on_zero_exit() {
    let strategy = CliDispatch::new(PathBuf::from("true"));
    strategy.deliver(&album("https://example/album/1")).await.unwrap();
}

#[tokio::test]
async fn test_cli_dispatch_nonzero_exit_is_download_failed() {
    let strategy = CliDispatch::new(PathBuf::from("false"));
    let err = strategy
        .deliver(&album("https://example/album/1"))
        .await
        .unwrap_err();

    match err {
        Error::DownloadFailed { status } => assert!(!status.success()),
        other => panic!("expected DownloadFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cli_dispatch_missing_program_is_io_error() {
    let strategy = CliDispatch::new(PathBuf::from("/definitely/not/a/program"));
    let err = strategy.deliver(&album("url")).await.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_select_gui_targets_configured_app() {
    let config = DispatchConfig {
        mode: DispatchMode::Gui,
        app: "Deemix".to_string(),
        downloader: None,
    };

    let strategy = select(&config).unwrap();
    assert_eq!(strategy.target(), "Deemix");
}

#[test]
fn test_select_cli_without_downloader_is_incomplete_config() {
    let config = DispatchConfig {
        mode: DispatchMode::Cli,
        app: "Deemix".to_string(),
        downloader: None,
    };

    let err = select(&config).err().unwrap();
    assert!(matches!(
        err,
        Error::ConfigIncomplete {
            field: "dispatch.downloader",
            ..
        }
    ));
}

#[test]
fn test_select_cli_targets_downloader_program() {
    let config = DispatchConfig {
        mode: DispatchMode::Cli,
        app: "Deemix".to_string(),
        downloader: Some(PathBuf::from("/usr/local/bin/dl.sh")),
    };

    let strategy = select(&config).unwrap();
    assert_eq!(strategy.target(), "/usr/local/bin/dl.sh");
}

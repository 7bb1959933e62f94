//! Build script for the now-playing bridge.
//!
//! Copies the credentials template from the crate root into the user's
//! configuration directory so a ready-to-edit example sits next to where the
//! application expects the real file. Missing templates produce a cargo
//! warning instead of failing the build.

use std::{env, fs, path::PathBuf};

/// Copies `credentials.example.json` to the user configuration directory.
///
/// # File Operations
///
/// The template is read from the crate root (where Cargo.toml resides) and
/// written to the platform-specific configuration directory:
/// - Linux: `~/.config/nowgrab/credentials.example.json`
/// - macOS: `~/Library/Application Support/nowgrab/credentials.example.json`
/// - Windows: `%APPDATA%/nowgrab/credentials.example.json`
///
/// # Cargo Integration
///
/// Uses `cargo:rerun-if-changed` so template edits trigger a rebuild and
/// `cargo:warning` for the non-fatal missing-template case. Directory
/// creation and copy failures are critical and fail the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=credentials.example.json");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("credentials.example.json");

    // Compute target dir (the user config dir) and ensure it exists
    let mut out_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("nowgrab");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("credentials.example.json"), contents)?;
    } else {
        println!(
            "cargo:warning=credentials.example.json not found at {}",
            template_path.display()
        );
    }

    Ok(())
}

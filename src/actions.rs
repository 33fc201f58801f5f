use crate::error::ExplorerError;
use crate::host::{english_text, Host, IndexingService, Shell};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// Launches paths through the platform's default handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn open_path(&self, path: &Path) -> Result<()> {
        open_with_default(path)
    }

    fn open_elevated(&self, path: &Path, working_dir: Option<&Path>) -> Result<()> {
        open_elevated(path, working_dir)
    }
}

pub fn open_with_default(path: &Path) -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .with_context(|| format!("failed to open {}", path.display()))?;
        return Ok(());
    }
    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(path)
            .spawn()
            .with_context(|| format!("failed to open {}", path.display()))?;
        return Ok(());
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        Command::new("xdg-open")
            .arg(path)
            .spawn()
            .with_context(|| format!("failed to open {}", path.display()))?;
        return Ok(());
    }
}

/// Single-quoted PowerShell literal; embedded quotes are doubled.
fn powershell_literal(value: &Path) -> String {
    format!("'{}'", value.to_string_lossy().replace('\'', "''"))
}

/// The `Start-Process -Verb RunAs` script passed to `powershell -Command` as
/// one argument, so spaces and script metacharacters in paths stay literal.
pub fn elevation_script(path: &Path, working_dir: Option<&Path>) -> String {
    let mut script = format!(
        "Start-Process -FilePath {} -Verb RunAs",
        powershell_literal(path)
    );
    if let Some(dir) = working_dir {
        script.push_str(" -WorkingDirectory ");
        script.push_str(&powershell_literal(dir));
    }
    script
}

/// Explorer's `/select,` switch with the path in double quotes. Passed raw,
/// since explorer does not understand std's whole-argument quoting.
pub fn explorer_select_arg(file: &Path) -> String {
    format!("/select,\"{}\"", file.display())
}

pub fn open_elevated(path: &Path, working_dir: Option<&Path>) -> Result<()> {
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("powershell");
        command
            .args(["-NoProfile", "-Command"])
            .arg(elevation_script(path, working_dir));
        command
    };
    #[cfg(not(target_os = "windows"))]
    let mut command = {
        let mut command = Command::new("pkexec");
        command.arg(path);
        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }
        command
    };

    command
        .spawn()
        .with_context(|| format!("failed to start {} elevated", path.display()))?;
    Ok(())
}

pub fn open_directory(dir: &Path, select: Option<&Path>) -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;

        let mut command = Command::new("explorer");
        match select {
            Some(file) => command.raw_arg(explorer_select_arg(file)),
            None => command.arg(dir),
        };
        command
            .spawn()
            .with_context(|| format!("failed to open {}", dir.display()))?;
        return Ok(());
    }
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        match select {
            Some(file) => command.arg("-R").arg(file),
            None => command.arg(dir),
        };
        command
            .spawn()
            .with_context(|| format!("failed to open {}", dir.display()))?;
        return Ok(());
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        // xdg-open cannot select an entry; the folder itself is shown.
        let _ = select;
        open_with_default(dir)
    }
}

/// Host used by the command-line front end: English strings, native dialogs
/// for errors and re-queries printed to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopHost;

impl Host for DesktopHost {
    fn translate(&self, key: &str) -> String {
        english_text(key).unwrap_or(key).to_string()
    }

    fn change_query(&self, text: &str) {
        info!(query = %text, "query changed");
        println!("{text}");
    }

    fn open_directory(&self, dir: &Path, select: Option<&Path>) -> Result<()> {
        open_directory(dir, select)
    }

    fn show_error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
        let shown = native_dialog::MessageDialog::new()
            .set_type(native_dialog::MessageType::Error)
            .set_title(title)
            .set_text(message)
            .show_alert();
        if let Err(err) = shown {
            warn!(error = %err, "failed to show error dialog");
        }
    }
}

/// Stand-in for hosts without an indexing service; every call fails and is
/// swallowed by the notifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableIndexingService;

impl IndexingService for UnavailableIndexingService {
    fn increment_usage_counter(&self, _path: &str) -> Result<()> {
        Err(ExplorerError::IndexingUnavailable.into())
    }
}

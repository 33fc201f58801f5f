//! Recording collaborators shared by the unit tests.

use crate::host::{english_text, Host, IndexingService, Shell};
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ChangeQuery(String),
    OpenDirectory(PathBuf, Option<PathBuf>),
    ShowError { title: String, message: String },
}

#[derive(Default)]
pub struct RecordingHost {
    pub calls: Mutex<Vec<HostCall>>,
    pub fail_open: bool,
}

impl RecordingHost {
    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().expect("host calls").clone()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().expect("host calls").push(call);
    }
}

impl Host for RecordingHost {
    fn translate(&self, key: &str) -> String {
        english_text(key).unwrap_or(key).to_string()
    }

    fn change_query(&self, text: &str) {
        self.record(HostCall::ChangeQuery(text.to_string()));
    }

    fn open_directory(&self, dir: &Path, select: Option<&Path>) -> Result<()> {
        self.record(HostCall::OpenDirectory(
            dir.to_path_buf(),
            select.map(Path::to_path_buf),
        ));
        if self.fail_open {
            bail!("no file manager");
        }
        Ok(())
    }

    fn show_error(&self, title: &str, message: &str) {
        self.record(HostCall::ShowError {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCall {
    Open(PathBuf),
    Elevated(PathBuf, Option<PathBuf>),
}

/// Shell fake that also reports every call on a channel, so tests can wait
/// for launches made from background threads.
pub struct RecordingShell {
    pub fail: bool,
    tx: Mutex<Sender<ShellCall>>,
}

impl RecordingShell {
    pub fn new(fail: bool) -> (Self, Receiver<ShellCall>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                fail,
                tx: Mutex::new(tx),
            },
            rx,
        )
    }

    fn record(&self, call: ShellCall) -> Result<()> {
        let _ = self.tx.lock().expect("shell sender").send(call);
        if self.fail {
            bail!("access denied");
        }
        Ok(())
    }
}

impl Shell for RecordingShell {
    fn open_path(&self, path: &Path) -> Result<()> {
        self.record(ShellCall::Open(path.to_path_buf()))
    }

    fn open_elevated(&self, path: &Path, working_dir: Option<&Path>) -> Result<()> {
        self.record(ShellCall::Elevated(
            path.to_path_buf(),
            working_dir.map(Path::to_path_buf),
        ))
    }
}

pub struct RecordingIndex {
    pub fail: bool,
    tx: Mutex<Sender<String>>,
}

impl RecordingIndex {
    pub fn new(fail: bool) -> (Self, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                fail,
                tx: Mutex::new(tx),
            },
            rx,
        )
    }
}

impl IndexingService for RecordingIndex {
    fn increment_usage_counter(&self, path: &str) -> Result<()> {
        let _ = self.tx.lock().expect("index sender").send(path.to_string());
        if self.fail {
            bail!("service not running");
        }
        Ok(())
    }
}

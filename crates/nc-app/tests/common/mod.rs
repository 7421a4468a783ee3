//! Hand-written fake ports shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use nc_app::{App, AppDeps};
use nc_core::config::CodecConfig;
use nc_core::ports::{DialogPort, RecordFilePort, SystemClipboardPort};
use nc_core::{FormatName, LineEnding};

pub const TEXT_FORMAT: &str = "text/plain";

/// One advertised format. `None` data means "advertised but not readable as bytes".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeEntry {
    pub format: FormatName,
    pub data: Option<Vec<u8>>,
}

/// In-memory clipboard that behaves like a single-owner OS clipboard: every
/// write replaces all advertised formats.
#[derive(Default)]
pub struct FakeClipboard {
    entries: Mutex<Vec<FakeEntry>>,
    writes: Mutex<usize>,
}

impl FakeClipboard {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_entries(entries: Vec<FakeEntry>) -> Arc<Self> {
        Arc::new(Self {
            entries: Mutex::new(entries),
            writes: Mutex::new(0),
        })
    }

    pub fn with_bytes(format: &str, bytes: &[u8]) -> Arc<Self> {
        Self::with_entries(vec![FakeEntry {
            format: FormatName::from(format),
            data: Some(bytes.to_vec()),
        }])
    }

    pub fn with_text(text: &str) -> Arc<Self> {
        Self::with_bytes(TEXT_FORMAT, text.as_bytes())
    }

    pub fn entries(&self) -> Vec<FakeEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn text(&self) -> Option<String> {
        self.read_text().unwrap()
    }

    fn replace(&self, format: FormatName, bytes: Vec<u8>) {
        *self.entries.lock().unwrap() = vec![FakeEntry {
            format,
            data: Some(bytes),
        }];
        *self.writes.lock().unwrap() += 1;
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn list_formats(&self) -> anyhow::Result<Vec<FormatName>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.format.clone())
            .collect())
    }

    fn read_bytes(&self, format: &FormatName) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.format == format)
            .and_then(|e| e.data.clone()))
    }

    fn write_bytes(&self, format: &FormatName, bytes: &[u8]) -> anyhow::Result<()> {
        self.replace(format.clone(), bytes.to_vec());
        Ok(())
    }

    fn read_text(&self) -> anyhow::Result<Option<String>> {
        let text_format = FormatName::from(TEXT_FORMAT);
        Ok(self
            .read_bytes(&text_format)?
            .and_then(|bytes| String::from_utf8(bytes).ok()))
    }

    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.replace(FormatName::from(TEXT_FORMAT), text.as_bytes().to_vec());
        Ok(())
    }
}

/// Files kept in a map, keyed by path.
#[derive(Default)]
pub struct MemoryFiles {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFiles {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.to_string());
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().unwrap().is_empty()
    }
}

impl RecordFilePort for MemoryFiles {
    fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
        self.get(path)
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", path.display()))
    }

    fn write_string(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        self.insert(path, contents);
        Ok(())
    }
}

/// Real files, for tests that go through the filesystem.
pub struct StdFiles;

impl RecordFilePort for StdFiles {
    fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write_string(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        Ok(std::fs::write(path, contents)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Info(String),
    Error(String),
}

/// Dialog that answers path prompts from a script and records every message.
#[derive(Default)]
pub struct ScriptedDialog {
    paths: Mutex<VecDeque<Option<PathBuf>>>,
    prompts: Mutex<usize>,
    shown: Mutex<Vec<Shown>>,
}

impl ScriptedDialog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn answering(paths: Vec<Option<PathBuf>>) -> Arc<Self> {
        Arc::new(Self {
            paths: Mutex::new(paths.into()),
            ..Self::default()
        })
    }

    pub fn prompts(&self) -> usize {
        *self.prompts.lock().unwrap()
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    fn next_path(&self) -> Option<PathBuf> {
        *self.prompts.lock().unwrap() += 1;
        self.paths.lock().unwrap().pop_front().flatten()
    }
}

impl DialogPort for ScriptedDialog {
    fn pick_save_path(&self) -> Option<PathBuf> {
        self.next_path()
    }

    fn pick_open_path(&self) -> Option<PathBuf> {
        self.next_path()
    }

    fn show_info(&self, message: &str) {
        self.shown.lock().unwrap().push(Shown::Info(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Error(message.to_string()));
    }
}

pub fn lf_codec() -> CodecConfig {
    CodecConfig {
        line_ending: LineEnding::Lf,
        ..CodecConfig::default()
    }
}

/// Route `tracing` output to the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn build_app(
    clipboard: Arc<dyn SystemClipboardPort>,
    record_files: Arc<dyn RecordFilePort>,
    dialog: Arc<dyn DialogPort>,
) -> App {
    init_tracing();
    App::new(AppDeps {
        clipboard,
        record_files,
        dialog,
        codec: lf_codec(),
    })
}

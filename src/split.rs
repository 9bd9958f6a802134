// ============================================================================
// VIEW SPLITTER: carve fixed line ranges of one source file into new files
// ============================================================================
//
// Every range is half-open `[start, end)` over zero-based line indices and is
// taken verbatim from the plan. Nothing checks for overlaps, gaps or full
// coverage, and the source is rewritten in place with no backup. Running the
// same plan twice therefore produces truncated views the second time.
//
// Line endings are read the way a text-mode reader sees them: `\r\n` and a
// lone `\r` both end a line and come out as `\n`, so every file written
// uses LF.

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{log_info, log_warn};

pub const DEFAULT_SOURCE: &str = "/Users/tenyi/Projects/VoiceInput/VoiceInput/SettingsView.swift";
pub const DEFAULT_VIEWS_DIR: &str = "Settings/Views";
pub const DEFAULT_HEADER_IMPORT: &str = "SwiftUI";
pub const DEFAULT_KEEP_HEAD: usize = 54;
pub const DEFAULT_KEEP_TAIL_FROM: usize = 1081;

/// One extracted file: `lines[start..end]` behind the import header.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ViewSlice {
    pub file_name: String,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub extra_imports: Vec<String>,
}

impl ViewSlice {
    fn new(file_name: &str, start: usize, end: usize, extra_imports: &[&str]) -> Self {
        Self {
            file_name: file_name.to_string(),
            start,
            end,
            extra_imports: extra_imports.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SplitPlan {
    pub source: PathBuf,
    /// Output directory, relative to the source file's parent.
    pub views_dir: PathBuf,
    pub header_import: String,
    pub views: Vec<ViewSlice>,
    /// Lines `[0, keep_head)` stay in the rewritten source.
    pub keep_head: usize,
    /// Lines `[keep_tail_from, ..)` stay in the rewritten source.
    pub keep_tail_from: usize,
}

impl Default for SplitPlan {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            views_dir: PathBuf::from(DEFAULT_VIEWS_DIR),
            header_import: DEFAULT_HEADER_IMPORT.to_string(),
            views: vec![
                ViewSlice::new("GeneralSettingsView.swift", 54, 200, &[]),
                ViewSlice::new("TranscriptionSettingsView.swift", 200, 220, &[]),
                ViewSlice::new("ModelSettingsView.swift", 220, 451, &[]),
                ViewSlice::new("LLMSettingsView.swift", 451, 830, &["os"]),
                ViewSlice::new("HistorySettingsView.swift", 830, 886, &[]),
                ViewSlice::new("CustomProviderSheets.swift", 886, 1081, &[]),
            ],
            keep_head: DEFAULT_KEEP_HEAD,
            keep_tail_from: DEFAULT_KEEP_TAIL_FROM,
        }
    }
}

impl SplitPlan {
    /// Load a plan from a JSON file. Missing `extra_imports` default to none.
    pub fn from_json_file(path: &Path) -> Result<Self, SplitError> {
        let raw = fs::read_to_string(path).map_err(|source| SplitError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SplitError::Plan {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Absolute directory the views are written into.
    pub fn views_path(&self) -> PathBuf {
        let parent = self.source.parent().unwrap_or(Path::new("."));
        parent.join(&self.views_dir)
    }
}

#[derive(Debug)]
pub enum SplitError {
    Read { path: PathBuf, source: std::io::Error },
    Write { path: PathBuf, source: std::io::Error },
    Plan { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Read { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            SplitError::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
            SplitError::Plan { path, source } => {
                write!(f, "invalid split plan {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Read { source, .. } | SplitError::Write { source, .. } => Some(source),
            SplitError::Plan { source, .. } => Some(source),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    Write,
    /// Compute everything, touch nothing.
    DryRun,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOutput {
    pub path: PathBuf,
    /// Lines copied from the source (header lines excluded).
    pub body_lines: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitReport {
    pub source_lines: usize,
    pub views: Vec<ViewOutput>,
    /// Line count of the rewritten source, blank separator included.
    pub remaining_lines: usize,
}

/// Rewrite `\r\n` and lone `\r` terminators as `\n`.
pub fn normalise_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Split `text` after every `\n`, keeping the terminators.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// `lines[start..end]`, clamped to the buffer. Out-of-range or inverted
/// bounds give an empty slice rather than an error.
pub fn slice_lines<'a, 'b>(lines: &'a [&'b str], start: usize, end: usize) -> &'a [&'b str] {
    let end = end.min(lines.len());
    let start = start.min(end);
    &lines[start..end]
}

/// Full text of one extracted view.
pub fn render_view(lines: &[&str], view: &ViewSlice, header_import: &str) -> String {
    let mut content = format!("import {}\n", header_import);
    for imp in &view.extra_imports {
        content.push_str(&format!("import {}\n", imp));
    }
    content.push('\n');
    content.push_str(&slice_lines(lines, view.start, view.end).concat());
    content
}

/// Text the source is rewritten to: head, a blank separator, tail.
pub fn render_remaining(lines: &[&str], keep_head: usize, keep_tail_from: usize) -> String {
    let mut content = slice_lines(lines, 0, keep_head).concat();
    content.push('\n');
    content.push_str(&slice_lines(lines, keep_tail_from, usize::MAX).concat());
    content
}

/// Run the plan. All reads happen before the first write, and the source is
/// only overwritten after every view has been written.
pub fn run(plan: &SplitPlan, mode: SplitMode) -> Result<SplitReport, SplitError> {
    let raw = fs::read_to_string(&plan.source).map_err(|source| SplitError::Read {
        path: plan.source.clone(),
        source,
    })?;
    let text = normalise_newlines(&raw);
    let lines = split_lines(&text);
    log_info!("read {} lines from {}", lines.len(), plan.source.display());

    let views_dir = plan.views_path();
    if mode == SplitMode::Write {
        fs::create_dir_all(&views_dir).map_err(|source| SplitError::Write {
            path: views_dir.clone(),
            source,
        })?;
    }

    let mut views = Vec::with_capacity(plan.views.len());
    for view in &plan.views {
        let body_lines = slice_lines(&lines, view.start, view.end).len();
        if body_lines < view.end.saturating_sub(view.start) {
            log_warn!(
                "{}: range [{}, {}) truncated to {} lines",
                view.file_name,
                view.start,
                view.end,
                body_lines
            );
        }

        let path = views_dir.join(&view.file_name);
        if mode == SplitMode::Write {
            let content = render_view(&lines, view, &plan.header_import);
            fs::write(&path, content).map_err(|source| SplitError::Write {
                path: path.clone(),
                source,
            })?;
        }
        log_info!("{} <- lines [{}, {}) ({} lines)", path.display(), view.start, view.end, body_lines);
        views.push(ViewOutput { path, body_lines });
    }

    let remaining = render_remaining(&lines, plan.keep_head, plan.keep_tail_from);
    let remaining_lines = split_lines(&remaining).len();
    if mode == SplitMode::Write {
        fs::write(&plan.source, &remaining).map_err(|source| SplitError::Write {
            path: plan.source.clone(),
            source,
        })?;
    }
    log_info!("{} rewritten to {} lines", plan.source.display(), remaining_lines);

    Ok(SplitReport {
        source_lines: lines.len(),
        views,
        remaining_lines,
    })
}

//! Build watcher interface
//!
//! The file-watch/rebuild loop lives outside this crate. What this crate
//! defines is the boundary only: a build tool is invoked once per directory,
//! results are collected, and a summary report is rendered. Filesystem
//! watching, debouncing, and process management are the caller's problem.

use std::fmt;
use std::path::{Path, PathBuf};

/// Invokes an external build tool for one directory
///
/// Implementations run whatever build the directory needs and report
/// pass/fail. They should not panic on build failure.
pub trait BuildTool {
    /// Build the given directory, returning true on success
    fn build(&self, dir: &Path) -> bool;
}

/// Per-directory pass/fail results, collected into a renderable report
#[derive(Debug, Default, Clone)]
pub struct WatchReport {
    results: Vec<(PathBuf, bool)>,
}

impl WatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the build tool over each directory, recording its result
    pub fn run<T: BuildTool>(tool: &T, dirs: &[PathBuf]) -> Self {
        let mut report = Self::new();
        for dir in dirs {
            let passed = tool.build(dir);
            tracing::info!(dir = %dir.display(), passed, "build finished");
            report.record(dir.clone(), passed);
        }
        report
    }

    /// Record one directory's result
    pub fn record(&mut self, dir: PathBuf, passed: bool) {
        self.results.push((dir, passed));
    }

    /// True when every recorded directory passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|(_, passed)| *passed)
    }

    /// Number of directories that failed
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|(_, passed)| !passed).count()
    }

    /// All recorded results, in run order
    pub fn results(&self) -> &[(PathBuf, bool)] {
        &self.results
    }
}

impl fmt::Display for WatchReport {
    /// One line per directory plus a final PASS/FAIL banner line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dir, passed) in &self.results {
            let status = if *passed { "ok" } else { "FAILED" };
            writeln!(f, "{:6} {}", status, dir.display())?;
        }
        if self.all_passed() {
            write!(f, "PASS ({} directories)", self.results.len())
        } else {
            write!(
                f,
                "FAIL ({} of {} directories)",
                self.failed_count(),
                self.results.len()
            )
        }
    }
}

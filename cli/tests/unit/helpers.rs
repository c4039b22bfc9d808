//! Shared test helpers: a throwaway nginx/hosts layout and output constructors.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use site_manager::domain::{Settings, SiteConfig};
use tempfile::TempDir;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

pub fn ok_output() -> Output {
    Output {
        status: exit_status(0),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Sandbox ──────────────────────────────────────────────────────────────────

/// Temp directory laid out like a host with nginx installed:
///
/// ```text
/// <root>/projects/<folder>/
/// <root>/sites-available/
/// <root>/sites-enabled/
/// <root>/hosts
/// ```
pub struct Sandbox {
    pub root: TempDir,
    pub project: PathBuf,
}

impl Sandbox {
    pub fn new(folder: &str, hosts: impl AsRef<[u8]>) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let project = root.path().join("projects").join(folder);
        std::fs::create_dir_all(&project).expect("project dir");
        std::fs::create_dir_all(root.path().join("sites-available")).expect("available");
        std::fs::create_dir_all(root.path().join("sites-enabled")).expect("enabled");
        std::fs::write(root.path().join("hosts"), hosts).expect("hosts");
        Self { root, project }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn settings(&self) -> Settings {
        Settings {
            sites_available: self.path().join("sites-available"),
            sites_enabled: self.path().join("sites-enabled"),
            hosts_file: self.path().join("hosts"),
            restart_command: vec!["true".to_string()],
            ..Settings::default()
        }
    }

    pub fn site(&self) -> SiteConfig {
        SiteConfig::from_dir(&self.project, &self.settings()).expect("site config")
    }

    pub fn hosts(&self) -> String {
        std::fs::read_to_string(self.path().join("hosts")).expect("read hosts")
    }

    pub fn hosts_bytes(&self) -> Vec<u8> {
        std::fs::read(self.path().join("hosts")).expect("read hosts")
    }
}

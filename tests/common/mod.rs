//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Arc;

use container_logger::logger::ProcessExit;

/// Working directory with an empty `log/` subdirectory and a fixed hostname file.
pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("log")).unwrap();
        std::fs::write(dir.path().join("hostname"), "test-host\n").unwrap();
        Self { dir }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.dir.path().join("log")
    }

    pub fn hostname_file(&self) -> PathBuf {
        self.dir.path().join("hostname")
    }

    /// Lines of `log/<container>.log`, empty if the file does not exist.
    pub fn lines(&self, container: &str) -> Vec<String> {
        read_lines(&self.log_dir().join(format!("{}.log", container)))
    }

    /// Run the binary inside this workspace with a clean logging environment.
    #[allow(dead_code)]
    pub fn run_binary(&self, envs: &[(&str, &str)], args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_container-logger"))
            .current_dir(self.dir.path())
            .env_remove("LOG_LEVEL")
            .env_remove("CONTAINER_NAME")
            .env_remove("RUST_LOG")
            .envs(envs.iter().copied())
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// Unwinds instead of exiting the test process.
#[allow(dead_code)]
pub struct PanickingExit;

impl ProcessExit for PanickingExit {
    fn exit(&self, code: i32) -> ! {
        panic!("process exit {}", code)
    }
}

#[allow(dead_code)]
pub fn panicking_exit() -> Arc<dyn ProcessExit> {
    Arc::new(PanickingExit)
}

//! Test environment with a scripted `gcloud` stand-in.
//!
//! The fake CLI appends every invocation to `gcloud.log` and answers the
//! read-only queries Runcast makes. Behaviour is controlled through
//! environment variables:
//!
//! - `FAKE_GCLOUD_ACCOUNT`: active account (empty means no session)
//! - `FAKE_GCLOUD_FAIL`: fail any invocation containing this text
//! - `FAKE_GCLOUD_FAIL_CODE`: exit code for the failure (default 1)

#![allow(dead_code)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub const SERVICE_URL: &str = "https://sw-music-api-abc123-uc.a.run.app";

const FAKE_GCLOUD: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_GCLOUD_LOG"
if [ -n "$FAKE_GCLOUD_FAIL" ]; then
  case "$*" in
    *"$FAKE_GCLOUD_FAIL"*)
      echo "ERROR: (gcloud) simulated failure for: $*" >&2
      exit "${FAKE_GCLOUD_FAIL_CODE:-1}"
      ;;
  esac
fi
case "$*" in
  "--version")
    echo "Google Cloud SDK 450.0.0"
    echo "core 2023.10.20"
    ;;
  "auth list"*)
    if [ -n "$FAKE_GCLOUD_ACCOUNT" ]; then
      echo "$FAKE_GCLOUD_ACCOUNT"
    fi
    ;;
  "projects describe"*)
    echo "$3"
    ;;
  "run services describe"*)
    echo "https://sw-music-api-abc123-uc.a.run.app/"
    ;;
  "beta run domain-mappings describe"*)
    echo '{"status":{"resourceRecords":[{"name":"api","type":"CNAME","rrdata":"ghs.googlehosted.com."}]}}'
    ;;
  *)
    echo "ok: $1 $2" >&2
    ;;
esac
"#;

/// Result of running the runcast binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON ({e}): {l}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated project and home directories with a fake `gcloud` on hand
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    gcloud: PathBuf,
    log: PathBuf,
    account: String,
    fail: Option<(String, i32)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().unwrap();
        let home_dir = tempfile::tempdir().unwrap();

        let gcloud = home_dir.path().join("gcloud");
        std::fs::write(&gcloud, FAKE_GCLOUD).unwrap();
        std::fs::set_permissions(&gcloud, std::fs::Permissions::from_mode(0o755)).unwrap();

        let log = home_dir.path().join("gcloud.log");

        Self {
            project_root,
            home_dir,
            gcloud,
            log,
            account: "dev@example.com".to_string(),
            fail: None,
        }
    }

    /// No active gcloud session
    pub fn logged_out(mut self) -> Self {
        self.account.clear();
        self
    }

    /// Fail any gcloud invocation containing `pattern`
    pub fn failing_on(mut self, pattern: &str, code: i32) -> Self {
        self.fail = Some((pattern.to_string(), code));
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.project_path("runcast.toml"), content).unwrap();
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_runcast"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("RUNCAST_GCLOUD", &self.gcloud)
            .env("FAKE_GCLOUD_LOG", &self.log)
            .env("FAKE_GCLOUD_ACCOUNT", &self.account)
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("RUNCAST_PROJECT")
            .env_remove("RUNCAST_REGION")
            .env_remove("RUNCAST_SERVICE")
            .env_remove("RUNCAST_COLOR");
        match &self.fail {
            Some((pattern, code)) => {
                cmd.env("FAKE_GCLOUD_FAIL", pattern)
                    .env("FAKE_GCLOUD_FAIL_CODE", code.to_string());
            }
            None => {
                cmd.env_remove("FAKE_GCLOUD_FAIL");
            }
        }
        cmd
    }

    /// Run runcast with stdin closed
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .expect("failed to execute runcast");
        TestResult::from_output(output)
    }

    /// Run runcast feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn runcast");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        TestResult::from_output(child.wait_with_output().unwrap())
    }

    /// gcloud invocations in order, without the program name
    pub fn gcloud_calls(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn called(&self, prefix: &str) -> bool {
        self.gcloud_calls().iter().any(|c| c.starts_with(prefix))
    }

    pub fn gcloud_path(&self) -> &Path {
        &self.gcloud
    }
}

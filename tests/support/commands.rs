//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envsafe command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - No inherited ENVSAFE_* settings
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envsafe").expect("failed to find envsafe binary");
        cmd.current_dir(self.dir.path());
        for var in [
            "ENVSAFE_KEY",
            "ENVSAFE_FILE",
            "ENVSAFE_PREFIX",
            "ENVSAFE_LOG",
            "ENVSAFE_LOG_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Command with `--key` already applied.
    pub fn keyed(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--key", &self.key]);
        cmd
    }

    /// Shortcut for `envsafe set` command.
    pub fn set(&self, key: &str, val: &str) -> Output {
        self.keyed()
            .args(["set", key, val])
            .output()
            .expect("failed to run envsafe set")
    }

    /// Shortcut for `envsafe get` command.
    pub fn get(&self, key: &str) -> Output {
        self.keyed()
            .args(["get", key])
            .output()
            .expect("failed to run envsafe get")
    }

    /// Shortcut for `envsafe rm` command.
    pub fn rm(&self, key: &str) -> Output {
        self.cmd()
            .args(["rm", key])
            .output()
            .expect("failed to run envsafe rm")
    }

    /// Shortcut for `envsafe list` command.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run envsafe list")
    }

    /// Shortcut for `envsafe list --json` command.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run envsafe list --json")
    }

    /// Shortcut for `envsafe load-env` with extra environment variables.
    pub fn load_env(&self, prefix: &str, vars: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["load-env", prefix]);
        for (k, v) in vars {
            cmd.env(k, v);
        }
        cmd.output().expect("failed to run envsafe load-env")
    }

    /// Shortcut for `envsafe export-env` command.
    pub fn export_env(&self, prefix: &str) -> Output {
        self.cmd()
            .args(["export-env", prefix])
            .output()
            .expect("failed to run envsafe export-env")
    }

    /// Shortcut for `envsafe version` command.
    pub fn version(&self) -> Output {
        self.cmd()
            .arg("version")
            .output()
            .expect("failed to run envsafe version")
    }

    /// Shortcut for `envsafe bump` command.
    pub fn bump(&self, kind: &str) -> Output {
        self.cmd()
            .args(["bump", kind])
            .output()
            .expect("failed to run envsafe bump")
    }

    /// Shortcut for `envsafe export-file` command.
    pub fn export_file(&self, path: &str) -> Output {
        self.keyed()
            .args(["export-file", path])
            .output()
            .expect("failed to run envsafe export-file")
    }

    /// Shortcut for `envsafe import-file` command.
    pub fn import_file(&self, path: &str) -> Output {
        self.keyed()
            .args(["import-file", path])
            .output()
            .expect("failed to run envsafe import-file")
    }

    /// Shortcut for `envsafe run` command.
    pub fn run(&self, args: &[&str]) -> Output {
        self.keyed()
            .arg("run")
            .args(args)
            .output()
            .expect("failed to run envsafe run")
    }
}

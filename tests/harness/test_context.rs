//! Shared testing harness for `tfverify` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tools::{FakeAws, FakeTerraform};

/// Isolated work directory with a module directory and fake tools.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    module_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let module_dir = work_dir.join("aws-iam-role-ec2-poweruser");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&module_dir).expect("Failed to create module directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        fs::write(module_dir.join("main.tf"), "# module under test\n")
            .expect("Failed to write main.tf");

        Self { root, work_dir, module_dir, bin_dir }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn module_dir(&self) -> &Path {
        &self.module_dir
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn terraform(&self) -> FakeTerraform {
        FakeTerraform::install(&self.bin_dir)
    }

    pub(crate) fn terraform_failing_on(&self, subcommand: &str) -> FakeTerraform {
        FakeTerraform::install_failing_on(&self.bin_dir, subcommand)
    }

    pub(crate) fn aws(&self, account: &str) -> FakeAws {
        FakeAws::install(&self.bin_dir, account)
    }

    pub(crate) fn aws_without_credentials(&self) -> FakeAws {
        FakeAws::install_without_credentials(&self.bin_dir)
    }

    /// Build a command for invoking the compiled `tfverify` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tfverify").expect("Failed to locate tfverify binary");
        cmd.current_dir(&self.work_dir).env_remove("GITHUB_OUTPUT");
        cmd
    }

    /// `tfverify run` wired to the fake tools and the module directory.
    pub(crate) fn run_cmd(&self, terraform: &FakeTerraform, aws: &FakeAws) -> Command {
        let mut cmd = self.cli();
        cmd.arg("run")
            .arg("--module-dir")
            .arg(&self.module_dir)
            .arg("--terraform-bin")
            .arg(&terraform.bin)
            .arg("--aws-bin")
            .arg(&aws.bin);
        cmd
    }

    pub(crate) fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join("tfverify.toml"), content).expect("Failed to write settings");
    }
}

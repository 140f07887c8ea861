use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const TERRAFORM_SCRIPT: &str = r#"#!/bin/sh
echo "$@" >> "@LOG@"
echo "cwd=$(pwd) region=$AWS_DEFAULT_REGION" >> "@ENV_LOG@"

if [ "$1" = "@FAIL_ON@" ]; then
    echo "Error: simulated $1 failure" >&2
    exit 1
fi

case "$1" in
    apply)
        for arg in "$@"; do
            case "$arg" in
                role_name=*) echo "${arg#role_name=}" > "@STATE@" ;;
            esac
        done
        ;;
    output)
        if [ -f "@OUTPUTS@" ]; then
            cat "@OUTPUTS@"
        else
            name=$(cat "@STATE@")
            printf '{"arn":{"sensitive":false,"type":"string","value":"arn:aws:iam::123456789012:role/%s"},"role_name":{"sensitive":false,"type":"string","value":"%s"}}\n' "$name" "$name"
        fi
        ;;
    destroy)
        rm -f "@STATE@"
        ;;
esac

exit 0
"#;

/// Shell stand-in for `terraform` that mimics the IAM role module.
///
/// `apply` records the `role_name` input, `output` echoes it back as
/// `role_name` and `arn`, and `destroy` removes it.
pub struct FakeTerraform {
    pub bin: PathBuf,
    pub log_file: PathBuf,
    pub env_log_file: PathBuf,
    pub state_file: PathBuf,
    outputs_file: PathBuf,
}

impl FakeTerraform {
    pub fn install(dir: &Path) -> Self {
        Self::install_failing_on(dir, "")
    }

    /// Install a fake that exits 1 when invoked with `subcommand`.
    pub fn install_failing_on(dir: &Path, subcommand: &str) -> Self {
        let bin = dir.join("terraform");
        let log_file = dir.join("terraform.log");
        let env_log_file = dir.join("terraform.env.log");
        let state_file = dir.join("terraform.state");
        let outputs_file = dir.join("terraform.outputs.json");

        let fail_on = if subcommand.is_empty() { "__never__" } else { subcommand };
        let script = TERRAFORM_SCRIPT
            .replace("@LOG@", &log_file.to_string_lossy())
            .replace("@ENV_LOG@", &env_log_file.to_string_lossy())
            .replace("@STATE@", &state_file.to_string_lossy())
            .replace("@OUTPUTS@", &outputs_file.to_string_lossy())
            .replace("@FAIL_ON@", fail_on);
        write_executable(&bin, &script);

        Self { bin, log_file, env_log_file, state_file, outputs_file }
    }

    /// Replace the generated outputs with a fixed `terraform output -json` document.
    pub fn set_outputs(&self, json: &str) {
        fs::write(&self.outputs_file, json).expect("Failed to write fake outputs");
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn subcommands(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }

    pub fn env_log(&self) -> String {
        fs::read_to_string(&self.env_log_file).unwrap_or_default()
    }

    pub fn has_live_resources(&self) -> bool {
        self.state_file.exists()
    }
}

/// Shell stand-in for `aws sts get-caller-identity`.
pub struct FakeAws {
    pub bin: PathBuf,
}

impl FakeAws {
    pub fn install(dir: &Path, account: &str) -> Self {
        let bin = dir.join("aws");
        let script = format!(
            r#"#!/bin/sh
echo '{{"UserId":"AIDAEXAMPLE","Account":"{}","Arn":"arn:aws:iam::{}:user/ci"}}'
"#,
            account, account
        );
        write_executable(&bin, &script);
        Self { bin }
    }

    pub fn install_without_credentials(dir: &Path) -> Self {
        let bin = dir.join("aws");
        write_executable(
            &bin,
            "#!/bin/sh\necho 'Unable to locate credentials. You can configure credentials by running \"aws configure\".' >&2\nexit 255\n",
        );
        Self { bin }
    }
}

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake tool script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tfverify::domain::parse_var_assignment;
use tfverify::{AppError, IAM_REGION, SettingsOverrides};

#[derive(Parser)]
#[command(name = "tfverify")]
#[command(version)]
#[command(
    about = "Provision a Terraform module, validate its outputs, and tear it down",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the module, validate its outputs, then destroy it
    #[clap(visible_alias = "r")]
    Run {
        /// Settings file (defaults to ./tfverify.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Directory containing the Terraform module
        #[arg(short, long)]
        module_dir: Option<PathBuf>,
        /// Region exported as AWS_DEFAULT_REGION
        #[arg(short, long)]
        region: Option<String>,
        /// Prefix for the generated role name
        #[arg(long)]
        name_prefix: Option<String>,
        /// Extra module input as name=value (repeatable)
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
        /// terraform binary to invoke
        #[arg(long)]
        terraform_bin: Option<String>,
        /// aws binary to invoke
        #[arg(long)]
        aws_bin: Option<String>,
        /// Print the run report as single-line JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a saved `terraform output -json` document
    #[clap(visible_alias = "v")]
    Validate {
        /// Path to the saved outputs document
        #[arg(short, long)]
        outputs: PathBuf,
        /// Region the outputs were produced in
        #[arg(short, long, default_value = IAM_REGION)]
        region: String,
        /// Output that must be a non-empty string (repeatable; defaults to role_name and arn)
        #[arg(long = "require", value_name = "NAME")]
        required: Vec<String>,
    },
    /// Print a fresh unique identifier
    UniqueId {
        /// Prefix prepended to the identifier
        #[arg(short, long)]
        prefix: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Run {
            config,
            module_dir,
            region,
            name_prefix,
            vars,
            terraform_bin,
            aws_bin,
            json,
        } => vars
            .iter()
            .map(|raw| parse_var_assignment(raw))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|vars| {
                let overrides = SettingsOverrides {
                    module_dir,
                    region,
                    name_prefix,
                    vars,
                    terraform_bin,
                    aws_bin,
                };
                tfverify::load_settings(config.as_deref(), overrides)
            })
            .and_then(|settings| tfverify::run(&settings, json))
            .map(|_| ()),
        Commands::Validate { outputs, region, required } => {
            tfverify::validate_outputs(&outputs, &region, required).map(|validated| {
                for (name, value) in &validated.values {
                    println!("{} = {}", name, value);
                }
                println!("✅ Outputs valid");
            })
        }
        Commands::UniqueId { prefix } => {
            println!("{}", tfverify::unique_id(prefix.as_deref()));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

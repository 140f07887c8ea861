mod aws_cli;
mod terraform_command;

pub use aws_cli::AwsCliIdentityAdapter;
pub use terraform_command::TerraformCommandAdapter;

use super::RunnableCommand;
use crate::{
    cli::error::CliError,
    config::{globalconfig::default_endpoint, GlobalConfig},
};
use async_trait::async_trait;
use clap::Subcommand;
use colored::Colorize;

/// Subcommand for endpoint configuration
#[derive(Subcommand, Clone, Debug)]
pub enum ApiCommand {
    /// Display the current registrar endpoint
    Display,
    /// Set the endpoint to a new value
    Set {
        /// Server address
        #[arg(short, long)]
        address: String,
        /// Path prefix of the API, e.g. when behind a proxy
        #[arg(short, long)]
        base_path: Option<String>,
    },
    /// Return the endpoint to the original values
    Reset,
}

#[async_trait(?Send)]
impl RunnableCommand<CliError> for ApiCommand {
    async fn run_internal(self) -> Result<String, CliError> {
        let mut global = GlobalConfig::from_disk()?;
        match self {
            ApiCommand::Display => Ok(format!(
                "{}\n{}{}\n{}: {}s",
                "| ADDRESS INFO |".yellow(),
                global.endpoint.as_str().trim_end_matches('/'),
                global.base_path,
                "timeout".bold(),
                global.timeout_secs
            )),
            ApiCommand::Set { address, base_path } => {
                global.set_endpoint(&address, base_path)?;
                global.to_disk()?;
                Ok(format!("{}", "<< ENDPOINT UPDATED SUCCESSFULLY >>".green()))
            }
            ApiCommand::Reset => {
                global.endpoint = default_endpoint();
                global.base_path = String::new();
                global.to_disk()?;
                Ok(format!("{}", "<< ENDPOINTS HAVE BEEN RESET >>".green()))
            }
        }
    }
}

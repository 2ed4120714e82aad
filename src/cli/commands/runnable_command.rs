use async_trait::async_trait;
use clap::Subcommand;
use colored::Colorize;
use std::error::Error;
use tracing::error;

/// Async function for running a command
#[async_trait(?Send)]
pub trait RunnableCommand<ErrorType>: Subcommand
where
    ErrorType: Error,
{
    /// The internal running operation
    async fn run_internal(self) -> Result<String, ErrorType>;

    /// Run the internal command, printing its output or its error
    async fn run(self) -> Result<(), ErrorType> {
        match self.run_internal().await {
            Ok(message) => {
                println!("{message}");
                Ok(())
            }
            Err(error) => {
                error!("{}", format!("{}", error).red());
                Err(error)
            }
        }
    }
}

mod api;
mod auth;
mod bucket;
mod pool;
mod runnable_command;
mod secret;

use super::{error::CliError, specifiers::PoolSpecifier};
use crate::{
    config::GlobalConfig,
    console::{
        render::{render_response, render_user},
        Action, Console, ConsoleHandle, ViewSnapshot,
    },
};
pub use api::ApiCommand;
use async_trait::async_trait;
pub use auth::AuthCommand;
pub use bucket::BucketCommand;
use clap::Subcommand;
pub use pool::PoolCommand;
pub use runnable_command::RunnableCommand;
pub use secret::SecretCommand;

/// Defines the types of commands that can be executed from the CLI.
#[derive(Debug, Subcommand, Clone)]
pub enum ConsoleCommand {
    /// Manually configure the registrar endpoint
    Api {
        /// Subcommand
        #[clap(subcommand)]
        command: ApiCommand,
    },
    /// Choose how to authenticate
    Auth {
        /// Subcommand
        #[clap(subcommand)]
        command: AuthCommand,
    },
    /// Show the user as the registrar sees them
    Whoami,
    /// Pool management
    Pool {
        /// Subcommand
        #[clap(subcommand)]
        command: PoolCommand,
    },
    /// Bucket management
    Bucket {
        /// Subcommand
        #[clap(subcommand)]
        command: BucketCommand,
    },
    /// Access key management
    Secret {
        /// Subcommand
        #[clap(subcommand)]
        command: SecretCommand,
    },
}

#[async_trait(?Send)]
impl RunnableCommand<CliError> for ConsoleCommand {
    async fn run_internal(self) -> Result<String, CliError> {
        match self {
            ConsoleCommand::Api { command } => command.run_internal().await,
            ConsoleCommand::Auth { command } => command.run_internal().await,
            ConsoleCommand::Whoami => {
                let console = connect(&GlobalConfig::from_disk()?).await?;
                let snapshot = console.snapshot();
                Ok(report(render_user(&snapshot), &snapshot))
            }
            ConsoleCommand::Pool { command } => command.run_internal().await,
            ConsoleCommand::Bucket { command } => command.run_internal().await,
            ConsoleCommand::Secret { command } => command.run_internal().await,
        }
    }
}

/// Start a console and run the startup sequence, which also fetches the
/// first CSRF token
pub(crate) async fn connect(global: &GlobalConfig) -> Result<ConsoleHandle, CliError> {
    let console = Console::new(global.get_client()?).spawn();
    console.run(Action::FetchUserInfo).await?;
    Ok(console)
}

/// Select the specified pool for editing
pub(crate) async fn edit(
    console: &ConsoleHandle,
    specifier: &PoolSpecifier,
) -> Result<ViewSnapshot, CliError> {
    let index = pool_index(console, specifier)?;
    Ok(console.run(Action::EditPool(index)).await?)
}

/// Position of the specified pool in the current list
pub(crate) fn pool_index(
    console: &ConsoleHandle,
    specifier: &PoolSpecifier,
) -> Result<usize, CliError> {
    specifier
        .find(&console.snapshot().pool_list)
        .ok_or_else(|| CliError::unknown_pool(specifier))
}

/// A rendered view followed by the status of the last action
pub(crate) fn report(view: String, snapshot: &ViewSnapshot) -> String {
    format!("{view}\n{}", render_response(&snapshot.response))
}

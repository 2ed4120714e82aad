use super::RunnableCommand;
use crate::{api::client::Credentials, cli::error::CliError, config::GlobalConfig};
use async_trait::async_trait;
use clap::Subcommand;
use colored::Colorize;

/// Subcommand for choosing how to authenticate
#[derive(Subcommand, Clone, Debug)]
pub enum AuthCommand {
    /// Send no credentials
    None,
    /// HTTP basic authentication
    Basic {
        /// User name
        #[arg(short, long)]
        user: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Name the user in a header, for direct access on localhost
    RemoteUser {
        /// User name
        #[arg(short, long)]
        user: String,
    },
    /// Reuse an OpenID Connect session cookie from a browser
    Oidc {
        /// Value of the session cookie
        #[arg(short, long)]
        cookie: String,
    },
}

impl From<AuthCommand> for Credentials {
    fn from(command: AuthCommand) -> Self {
        match command {
            AuthCommand::None => Credentials::None,
            AuthCommand::Basic { user, password } => Credentials::Basic { user, password },
            AuthCommand::RemoteUser { user } => Credentials::RemoteUser { user },
            AuthCommand::Oidc { cookie } => Credentials::OidcSession { cookie },
        }
    }
}

#[async_trait(?Send)]
impl RunnableCommand<CliError> for AuthCommand {
    async fn run_internal(self) -> Result<String, CliError> {
        let mut global = GlobalConfig::from_disk()?;
        global.credential = self.into();
        global.to_disk()?;
        Ok(format!(
            "{}\n{:?}",
            "<< CREDENTIALS UPDATED SUCCESSFULLY >>".green(),
            global.credential
        ))
    }
}

use super::{connect, edit, pool_index, report, RunnableCommand};
use crate::{
    api::models::{EpochTime, KeyPolicy},
    cli::{error::CliError, specifiers::PoolSpecifier},
    config::GlobalConfig,
    console::{
        render::{aws_credential, default_key_expiration, parse_time_z, render_selected_pool},
        Action,
    },
};
use async_trait::async_trait;
use clap::Subcommand;

/// Subcommand for access keys
#[derive(Subcommand, Clone, Debug)]
pub enum SecretCommand {
    /// Issue an access key on a Pool
    Create {
        /// Pool the key opens
        #[clap(flatten)]
        pool: PoolSpecifier,
        /// Scope: readwrite, readonly or writeonly
        #[arg(long, default_value_t = KeyPolicy::ReadWrite)]
        policy: KeyPolicy,
        /// When the key stops working, a week from now by default
        #[arg(long, value_parser = parse_time_z)]
        expires: Option<EpochTime>,
    },
    /// Print an AWS credentials file section for a key of a Pool
    Show {
        /// Pool the key opens
        #[clap(flatten)]
        pool: PoolSpecifier,
        /// Scope of the key to print
        #[arg(long, default_value_t = KeyPolicy::ReadWrite)]
        policy: KeyPolicy,
        /// Section title in the credentials file
        #[arg(long, default_value = "default")]
        profile: String,
    },
    /// Revoke an access key
    Delete {
        /// Pool the key opens
        #[clap(flatten)]
        pool: PoolSpecifier,
        /// Access key id
        access_key: String,
    },
}

#[async_trait(?Send)]
impl RunnableCommand<CliError> for SecretCommand {
    async fn run_internal(self) -> Result<String, CliError> {
        let console = connect(&GlobalConfig::from_disk()?).await?;
        let action = match self {
            SecretCommand::Create {
                pool,
                policy,
                expires,
            } => {
                edit(&console, &pool).await?;
                Action::CreateSecret {
                    policy,
                    expiration_time: expires.unwrap_or_else(default_key_expiration),
                }
            }
            SecretCommand::Show {
                pool,
                policy,
                profile,
            } => {
                let index = pool_index(&console, &pool)?;
                let snapshot = console.run(Action::GetPool(index)).await?;
                let desc = snapshot.selected.ok_or_else(|| CliError::unknown_pool(&pool))?;
                return Ok(aws_credential(&desc, policy, &profile)?);
            }
            SecretCommand::Delete { pool, access_key } => {
                edit(&console, &pool).await?;
                Action::DeleteSecret { access_key }
            }
        };
        let snapshot = console.run(action).await?;
        Ok(report(render_selected_pool(&snapshot), &snapshot))
    }
}

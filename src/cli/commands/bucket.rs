use super::{connect, edit, report, RunnableCommand};
use crate::{
    api::models::BucketPolicy,
    cli::{error::CliError, specifiers::PoolSpecifier},
    config::GlobalConfig,
    console::{render::render_selected_pool, Action},
};
use async_trait::async_trait;
use clap::Subcommand;

/// Subcommand for Buckets
#[derive(Subcommand, Clone, Debug)]
pub enum BucketCommand {
    /// Add a Bucket to a Pool
    Create {
        /// Pool holding the Bucket
        #[clap(flatten)]
        pool: PoolSpecifier,
        /// Bucket name
        name: String,
        /// Anonymous access: none, public, upload or download
        #[arg(long, default_value_t = BucketPolicy::None)]
        policy: BucketPolicy,
    },
    /// Remove a Bucket from a Pool
    Delete {
        /// Pool holding the Bucket
        #[clap(flatten)]
        pool: PoolSpecifier,
        /// Bucket name
        name: String,
    },
}

#[async_trait(?Send)]
impl RunnableCommand<CliError> for BucketCommand {
    async fn run_internal(self) -> Result<String, CliError> {
        let console = connect(&GlobalConfig::from_disk()?).await?;
        let action = match self {
            BucketCommand::Create { pool, name, policy } => {
                edit(&console, &pool).await?;
                Action::CreateBucket { name, policy }
            }
            BucketCommand::Delete { pool, name } => {
                edit(&console, &pool).await?;
                Action::DeleteBucket { name }
            }
        };
        let snapshot = console.run(action).await?;
        Ok(report(render_selected_pool(&snapshot), &snapshot))
    }
}

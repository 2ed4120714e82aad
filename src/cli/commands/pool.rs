use super::{connect, pool_index, report, RunnableCommand};
use crate::{
    cli::{error::CliError, specifiers::PoolSpecifier},
    config::GlobalConfig,
    console::{
        render::{render_pool_list, render_selected_pool},
        Action,
    },
};
use async_trait::async_trait;
use clap::Subcommand;
use tracing::info;

/// Subcommand for Pools
#[derive(Subcommand, Clone, Debug)]
pub enum PoolCommand {
    /// List all of your Pools
    Ls,
    /// Show a Pool with its Buckets and access keys
    Show(PoolSpecifier),
    /// Make a Pool
    Create {
        /// Directory the buckets live in
        #[arg(short, long)]
        directory: String,
        /// Owning unix group, the first of yours by default
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Delete a Pool
    Delete(PoolSpecifier),
}

#[async_trait(?Send)]
impl RunnableCommand<CliError> for PoolCommand {
    async fn run_internal(self) -> Result<String, CliError> {
        let global = GlobalConfig::from_disk()?;
        let console = connect(&global).await?;
        match self {
            PoolCommand::Ls => {
                let snapshot = console.snapshot();
                Ok(report(render_pool_list(&snapshot), &snapshot))
            }
            PoolCommand::Show(specifier) => {
                let index = pool_index(&console, &specifier)?;
                let snapshot = console.run(Action::GetPool(index)).await?;
                Ok(report(render_selected_pool(&snapshot), &snapshot))
            }
            PoolCommand::Create { directory, group } => {
                let owner_gid = group
                    .or_else(|| console.snapshot().group_choices.first().cloned())
                    .unwrap_or_default();
                info!(directory = %directory, group = %owner_gid, "making pool");
                let snapshot = console
                    .run(Action::CreatePool {
                        buckets_directory: directory,
                        owner_gid,
                    })
                    .await?;
                Ok(report(render_pool_list(&snapshot), &snapshot))
            }
            PoolCommand::Delete(specifier) => {
                let index = pool_index(&console, &specifier)?;
                let snapshot = console.run(Action::DeletePool(index)).await?;
                Ok(report(render_pool_list(&snapshot), &snapshot))
            }
        }
    }
}

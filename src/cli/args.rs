use super::commands::ConsoleCommand;
use clap::{ArgAction, Parser};
use tracing::Level;

/// Console for the pools, buckets and access keys of a Lens3 registrar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command passed
    #[command(subcommand)]
    pub command: ConsoleCommand,
    /// More logging, repeat for even more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Args {
    /// Log level unless `RUST_LOG` says otherwise
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Args;
    use crate::{
        api::models::{BucketPolicy, EpochTime, KeyPolicy},
        cli::commands::{BucketCommand, ConsoleCommand, SecretCommand},
    };
    use clap::{CommandFactory, Parser};
    use tracing::Level;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn bucket_policy_defaults_to_none() {
        let args = Args::parse_from(["pool-console", "bucket", "create", "--pool", "p1", "b1"]);
        match args.command {
            ConsoleCommand::Bucket {
                command: BucketCommand::Create { pool, name, policy },
            } => {
                assert_eq!(pool.pool_name.as_deref(), Some("p1"));
                assert_eq!(name, "b1");
                assert_eq!(policy, BucketPolicy::None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn secret_options() {
        let args = Args::parse_from([
            "pool-console",
            "-vv",
            "secret",
            "create",
            "--directory",
            "/home/alice/p1",
            "--policy",
            "ro",
            "--expires",
            "2023-06-14T15:15:15Z",
        ]);
        assert_eq!(args.log_level(), Level::DEBUG);
        match args.command {
            ConsoleCommand::Secret {
                command: SecretCommand::Create { pool, policy, expires },
            } => {
                assert_eq!(pool.directory.as_deref(), Some("/home/alice/p1"));
                assert_eq!(policy, KeyPolicy::ReadOnly);
                assert_eq!(expires, Some(EpochTime(1686755715)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn secret_show_defaults() {
        let args = Args::parse_from(["pool-console", "secret", "show", "--pool", "p1"]);
        match args.command {
            ConsoleCommand::Secret {
                command: SecretCommand::Show { pool, policy, profile },
            } => {
                assert_eq!(pool.pool_name.as_deref(), Some("p1"));
                assert_eq!(policy, KeyPolicy::ReadWrite);
                assert_eq!(profile, "default");
            }
            other => panic!("unexpected command {other:?}"),
        }
        let args = Args::parse_from([
            "pool-console", "secret", "show", "-p", "p1", "--policy", "wo", "--profile", "lens3",
        ]);
        assert!(matches!(
            args.command,
            ConsoleCommand::Secret {
                command: SecretCommand::Show {
                    policy: KeyPolicy::WriteOnly,
                    ..
                },
            }
        ));
    }

    #[test]
    fn pool_and_directory_are_exclusive() {
        let parsed = Args::try_parse_from([
            "pool-console",
            "pool",
            "show",
            "--pool",
            "p1",
            "--directory",
            "/home/alice/p1",
        ]);
        assert!(parsed.is_err());
        assert!(Args::try_parse_from(["pool-console", "pool", "show"]).is_err());
    }

    #[test]
    fn unknown_policies_are_rejected() {
        let parsed = Args::try_parse_from([
            "pool-console",
            "bucket",
            "create",
            "--pool",
            "p1",
            "b1",
            "--policy",
            "everyone",
        ]);
        assert!(parsed.is_err());
    }
}

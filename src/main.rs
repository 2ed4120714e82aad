use clap::Parser;
use pool_console::cli::{args::Args, commands::RunnableCommand};
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments. see args.rs
    let cli = Args::parse();

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    if cli.command.run().await.is_err() {
        // Flush the log before leaving
        drop(guard);
        std::process::exit(1);
    }
}

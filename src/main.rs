use anyhow::Result;
use clap::Parser;
use log::error;
use netfan::cli::Cli;
use netfan::device::{resolve_devices, Credentials};
use netfan::executor::{run_device, PoolError, WorkerPool};
use netfan::report::RunReport;
use netfan::ssh::SshConnector;
use netfan::ui;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let cli = Cli::parse();

    let credentials = Arc::new(Credentials::resolve(cli.username, cli.password)?);
    let devices = resolve_devices(cli.switches, cli.filename)?;
    let commands = Arc::new(cli.commands);
    let connector = Arc::new(SshConnector::new(cli.device_type));
    let port = cli.port;

    ui::info("Running commands on switches");
    println!();

    // Interrupts are observed here only; worker tasks never see the signal,
    // so one ctrl-c tears the whole pool down instead of killing workers
    // piecemeal mid-session.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let pool = WorkerPool::new(cancel);
    let run = pool
        .run(&devices, |device| {
            let connector = Arc::clone(&connector);
            let credentials = Arc::clone(&credentials);
            let commands = Arc::clone(&commands);
            async move {
                run_device(connector.as_ref(), &device, &credentials, &commands, port).await
            }
        })
        .await;

    let outcomes = match run {
        Ok(outcomes) => outcomes,
        Err(PoolError::Interrupted) => std::process::exit(1),
        Err(e) => {
            error!("Unable to run pool: {e}");
            Vec::new()
        }
    };

    RunReport::classify(&devices, &outcomes).render(&outcomes);
    Ok(())
}

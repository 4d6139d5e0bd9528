use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use pve_inventory::cli::{
    InventoryArgs, is_cancellation, prompt::resolve_password, run_report,
    signal::{cancel_on_ctrl_c, run_until_cancelled},
};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    let args = InventoryArgs::parse();

    let cancel = cancel_on_ctrl_c();
    let Some(password) = resolve_password(&args.connection.password, &cancel)? else {
        return Ok(());
    };

    let client = args
        .connection
        .client(password)
        .await
        .context("invalid connection settings")?;

    let report = args.report();
    let result = run_until_cancelled(&cancel, async {
        let mut stdout = io::stdout().lock();
        run_report(&client, report, &mut stdout, &cancel).await
    })
    .await;

    match result {
        Err(e) if is_cancellation(&e) => {
            debug!("cancelled by user");
            Ok(())
        }
        other => other,
    }
}

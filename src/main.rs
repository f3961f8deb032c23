use eyre::bail;
use eyre::Result;
use log::info;

use crate::client::AuthClient;
use crate::config::SmokeConfig;

mod client;
mod config;
mod payloads;
mod probe;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = SmokeConfig::from_env();
    info!("smoke testing auth service at {}", config.base_url);

    let client = AuthClient::new(config.base_url);
    let reports = probe::run(&client).await;

    for report in &reports {
        for line in report.lines() {
            println!("{}", line);
        }
    }

    let failed = reports.iter().filter(|report| !report.completed()).count();
    if failed > 0 {
        bail!("{} of {} probes did not complete", failed, reports.len());
    }
    Ok(())
}

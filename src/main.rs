use std::process::ExitCode;

use tokio::io::BufReader;
use tracing::{error, info};
use warung_order::config::Config;
use warung_order::lifecycle::tracing::setup_tracing;
use warung_order::lifecycle::{OrderSystem, SessionOutcome};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    info!("Starting order session");
    let system = OrderSystem::new(Config::default());

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    let outcome = system.run_session(&mut input, &mut output).await;

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }

    match outcome {
        Ok(SessionOutcome::Completed { report, .. }) => {
            info!(appended = report.appended, "Session completed");
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::TimedOut) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Session failed");
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}

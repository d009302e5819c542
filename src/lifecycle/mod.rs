//! # Session Lifecycle
//!
//! [`OrderSystem`] starts the order list actor, runs one interactive session
//! against it, and shuts it down again.
//!
//! A session is three phases:
//! 1. **Collect**: the [`OrderCollector`] prompts for lines and dispatches each
//!    accepted one to the [`OrderWorkerPool`].
//! 2. **Join**: the pool drains worker confirmations under the join timeout.
//! 3. **Aggregate**: a snapshot of the list goes to the [`ReceiptAggregator`].
//!
//! If the join times out, phase 3 is skipped entirely.

pub mod tracing;

use std::sync::Arc;

use ::tracing::{error, info, info_span, warn, Instrument};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::task::JoinHandle;

use crate::clients::OrderClient;
use crate::config::Config;
use crate::error::AppError;
use crate::input::OrderCollector;
use crate::model::{MenuCatalog, OrderList};
use crate::receipt::{Receipt, ReceiptAggregator};
use crate::terminal::write_line;
use crate::workers::{JoinReport, OrderWorkerPool, PoolError};

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// All workers joined and the receipt was printed.
    Completed { report: JoinReport, receipt: Receipt },
    /// The join bound elapsed; no totals were printed.
    TimedOut,
}

/// Runs one session against an already running order list actor.
pub async fn run_session<R, W>(
    catalog: &MenuCatalog,
    config: &Config,
    client: &OrderClient,
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut pool = OrderWorkerPool::new(client.clone(), config.message_buffer);

    OrderCollector::new(catalog)
        .run(input, output, |line| pool.dispatch(line))
        .instrument(info_span!("order_entry"))
        .await?;

    let outcome = match pool
        .finish(config.join_timeout, output)
        .instrument(info_span!("join"))
        .await
    {
        Ok(report) => {
            let list = client.snapshot().await?;
            let receipt = ReceiptAggregator::render(&list, output).await?;
            SessionOutcome::Completed { report, receipt }
        }
        Err(e @ PoolError::Timeout(_)) => {
            warn!(error = %e, "Aggregation skipped");
            write_line(output, &e.to_string()).await?;
            SessionOutcome::TimedOut
        }
        Err(e) => return Err(e.into()),
    };

    write_line(output, "Program selesai.").await?;
    Ok(outcome)
}

/// Owns the order list actor for the lifetime of the program.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(Config::default());
/// let outcome = system.run_session(&mut input, &mut output).await?;
/// let final_list = system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the order list actor
    pub order_client: OrderClient,

    catalog: Arc<MenuCatalog>,
    config: Config,
    handle: JoinHandle<OrderList>,
}

impl OrderSystem {
    /// Starts the actor with the default menu.
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, MenuCatalog::default())
    }

    pub fn with_catalog(config: Config, catalog: MenuCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let (actor, order_client) = crate::order_actor::new(config.actor_buffer, catalog.clone());
        let handle = tokio::spawn(actor.run());
        Self {
            order_client,
            catalog,
            config,
            handle,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub async fn run_session<R, W>(&self, input: &mut R, output: &mut W) -> Result<SessionOutcome, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        run_session(self.catalog(), &self.config, &self.order_client, input, output).await
    }

    /// Drops the client and waits for the actor to drain.
    ///
    /// Returns the final order list.
    pub async fn shutdown(self) -> Result<OrderList, AppError> {
        info!("Shutting down system...");
        drop(self.order_client);

        match self.handle.await {
            Ok(list) => {
                info!(size = list.len(), "System shutdown complete.");
                Ok(list)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(AppError::ActorTask(e.to_string()))
            }
        }
    }
}

use std::sync::{mpsc, Arc};
use std::thread;

use deals_core::{Generation, PageRequest};
use deals_logging::{deals_debug, deals_warn};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::source::{DealSource, EventSink, FetchSettings, ReqwestDealSource};
use crate::{DealsConfig, EngineEvent, FetchError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Start {
        generation: Generation,
        request: PageRequest,
    },
    Cancel,
}

/// Runs deal retrievals on a background tokio runtime.
///
/// At most one retrieval is current. Starting another cancels the previous
/// one, and a cancelled retrieval never reaches the sink. Dropping the handle
/// cancels whatever is outstanding and stops the runtime thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Engine reading from the configured HTTP backend.
    pub fn connect(
        config: DealsConfig,
        settings: FetchSettings,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let source = ReqwestDealSource::new(config, settings)?;
        Self::new(Arc::new(source), sink)
    }

    pub fn new(source: Arc<dyn DealSource>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("deals-fetch")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("deals-engine".to_string())
            .spawn(move || run_commands(runtime, source, sink, cmd_rx))?;

        Ok(Self { cmd_tx })
    }

    /// Begin retrieving `request`, superseding any outstanding retrieval.
    pub fn start(&self, generation: Generation, request: PageRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Start {
                generation,
                request,
            })
            .is_err()
        {
            deals_warn!("engine stopped; fetch {} not started", generation);
        }
    }

    /// Stop delivering the outstanding retrieval, if any.
    pub fn cancel(&self) {
        if self.cmd_tx.send(EngineCommand::Cancel).is_err() {
            deals_warn!("engine stopped; nothing to cancel");
        }
    }
}

fn run_commands(
    runtime: Runtime,
    source: Arc<dyn DealSource>,
    sink: Arc<dyn EventSink>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
) {
    let mut current: Option<CancellationToken> = None;
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Start {
                generation,
                request,
            } => {
                if let Some(previous) = current.take() {
                    previous.cancel();
                }
                let token = CancellationToken::new();
                current = Some(token.clone());
                let source = source.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    run_fetch(source.as_ref(), sink.as_ref(), generation, request, token).await;
                });
            }
            EngineCommand::Cancel => {
                if let Some(token) = current.take() {
                    token.cancel();
                }
            }
        }
    }
    if let Some(token) = current.take() {
        token.cancel();
    }
}

async fn run_fetch(
    source: &dyn DealSource,
    sink: &dyn EventSink,
    generation: Generation,
    request: PageRequest,
    token: CancellationToken,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            deals_debug!("fetch {} cancelled", generation);
        }
        result = source.fetch_page(request) => {
            if token.is_cancelled() {
                deals_debug!("fetch {} finished after cancel; dropped", generation);
                return;
            }
            sink.emit(EngineEvent::FetchCompleted { generation, result });
        }
    }
}

use std::sync::{mpsc, Arc};

use deals_core::{Effect, Msg};
use deals_engine::{
    DealsConfig, EngineError, EngineEvent, EngineHandle, EventSink, FetchSettings,
};
use deals_logging::{deals_info, deals_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: DealsConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { msg_tx });
        let engine = EngineHandle::connect(config, FetchSettings::default(), sink)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartFetch {
                    generation,
                    request,
                } => {
                    deals_info!(
                        "StartFetch generation={} page={} size={}",
                        generation,
                        request.page(),
                        request.size()
                    );
                    self.engine.start(generation, request);
                }
                Effect::CancelFetch { generation } => {
                    deals_info!("CancelFetch generation={}", generation);
                    self.engine.cancel();
                }
            }
        }
    }
}

/// Feeds engine events back into the update loop.
struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.msg_tx.send(event_to_msg(event));
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            generation,
            result: Ok(items),
        } => Msg::FetchSucceeded { generation, items },
        EngineEvent::FetchCompleted {
            generation,
            result: Err(err),
        } => {
            deals_warn!("Fetch {} failed: {}", generation, err);
            Msg::FetchFailed {
                generation,
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::event_to_msg;
    use deals_core::{Generation, Msg};
    use deals_engine::{EngineEvent, FailureKind, FetchError};

    #[test]
    fn completions_map_to_fetch_messages() {
        let generation = Generation::new(3);
        let ok = event_to_msg(EngineEvent::FetchCompleted {
            generation,
            result: Ok(Vec::new()),
        });
        assert_eq!(
            ok,
            Msg::FetchSucceeded {
                generation,
                items: Vec::new()
            }
        );

        let failed = event_to_msg(EngineEvent::FetchCompleted {
            generation,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "500 Internal Server Error".to_string(),
            }),
        });
        assert_eq!(
            failed,
            Msg::FetchFailed {
                generation,
                reason: "http status 500: 500 Internal Server Error".to_string(),
            }
        );
    }
}

//! Deals engine: backend configuration, HTTP retrieval and cancellable fetch execution.
mod config;
mod engine;
mod payload;
mod source;
mod types;

pub use config::{ConfigError, DealsConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
pub use engine::{EngineError, EngineHandle};
pub use payload::{decode_deals, PayloadError};
pub use source::{ChannelEventSink, DealSource, EventSink, FetchSettings, ReqwestDealSource};
pub use types::{EngineEvent, FailureKind, FetchError};

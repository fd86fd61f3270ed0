//! Deals core: pure fetch-lifecycle state machine, query projection and view-model helpers.
mod deal;
mod effect;
mod fetch_state;
mod msg;
mod projector;
mod state;
mod update;
mod view_model;

pub use deal::{DealRecord, Identifier};
pub use effect::Effect;
pub use fetch_state::{
    Completion, FetchState, FetchStatus, FetchTracker, Generation, InvalidPageRequest,
    PageRequest,
};
pub use msg::Msg;
pub use projector::{discount_badge, format_price, matches, normalize_term, project};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, DisplayDeal};

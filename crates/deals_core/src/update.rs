use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ViewMounted | Msg::RetryRequested => {
            // The engine cancels whatever it was running when it sees a newer start.
            let (generation, request) = state.start_fetch();
            vec![Effect::StartFetch {
                generation,
                request,
            }]
        }
        Msg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::ViewUnmounted => match state.cancel_fetch() {
            Some(generation) => vec![Effect::CancelFetch { generation }],
            None => Vec::new(),
        },
        Msg::FetchSucceeded { generation, items } => {
            state.apply_completion(generation, Ok(items));
            Vec::new()
        }
        Msg::FetchFailed { generation, reason } => {
            state.apply_completion(generation, Err(reason));
            Vec::new()
        }
    };

    (state, effects)
}

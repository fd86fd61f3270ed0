use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use deals_core::{update, AppState, Msg};
use deals_engine::{ConfigError, DealsConfig, EngineError};
use deals_logging::deals_info;

use super::effects::EffectRunner;
use super::input::line_to_msg;
use super::logging::{self, LogDestination};
use super::ui;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub fn run_app() -> Result<(), AppError> {
    logging::initialize(LogDestination::from_env());

    let config = DealsConfig::from_env()?;
    deals_info!("Using deals backend {}", config.base_url());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(config, msg_tx.clone())?;
    let _ = msg_tx.send(Msg::ViewMounted);
    spawn_input_reader(msg_tx);

    let mut state = AppState::new();
    let mut out = io::stdout().lock();
    while let Ok(msg) = msg_rx.recv() {
        let closing = msg == Msg::ViewUnmounted;
        let (next, fx) = update(state, msg);
        state = next;
        effects.run(fx);

        let view = state.view();
        if state.consume_dirty() {
            writeln!(out, "{}", ui::constants::SEPARATOR)?;
            for line in ui::render::render(&view) {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
        }
        if closing {
            break;
        }
    }
    deals_info!("View closed");
    Ok(())
}

/// Reads search terms from stdin until `:quit` or end of input.
fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match line_to_msg(&line) {
                Some(msg) => {
                    if msg_tx.send(msg).is_err() {
                        return;
                    }
                }
                None => break,
            }
        }
        let _ = msg_tx.send(Msg::ViewUnmounted);
    });
}

//! Terminal blockfall runner (default binary).
//!
//! The binary owns everything the engine deliberately does not: the
//! gravity timer, keyboard capture, and rendering. It fires `tick()` at
//! the engine's reported cadence, re-reading `drop_interval_ms` after
//! every tick, and stops the timer once the session is over.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{command_for_key, is_reset, should_quit};
use blockfall::term::TerminalRenderer;
use blockfall::types::Phase;

/// Poll cadence while the session is over and the timer is stopped
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut state = GameState::new(clock_seed());
    let mut next_tick = Instant::now() + drop_interval(&state);

    loop {
        term.draw(&state)?;

        // The gravity timer halts at game over; only input wakes us then.
        let timeout = match state.phase() {
            Phase::Playing => next_tick.saturating_duration_since(Instant::now()),
            Phase::GameOver => Duration::from_millis(IDLE_POLL_MS),
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_reset(key) {
                        state.reset();
                        next_tick = Instant::now() + drop_interval(&state);
                    } else if let Some(command) = command_for_key(key) {
                        state.apply(command);
                    }
                }
            }
        }

        if state.phase() == Phase::Playing && Instant::now() >= next_tick {
            state.tick();
            // Re-arm with the possibly-changed cadence.
            next_tick = Instant::now() + drop_interval(&state);
        }
    }
}

fn drop_interval(state: &GameState) -> Duration {
    Duration::from_millis(state.drop_interval_ms() as u64)
}

/// Wall-clock seed for the piece source
fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

//! Live ranking of piped size listings.
//!
//! Reads `size<tab>name` lines such as the output of `du -sh *`, keeps them
//! sorted by size as they arrive and redraws the ranked listing after each one.
//!
//! # Modules
//!
//! - [`size`] and [`record`] turn input lines into records.
//! - [`ranked`] holds the incrementally sorted sequence.
//! - [`coordinator`] serializes insertions with redraws.
//! - [`render`], [`traits`] and [`terminal`] paint the listing.
//! - [`input`] checks stdin and produces records.
pub mod args;
pub mod config;
pub mod coordinator;
pub mod errors;
pub mod input;
pub mod ranked;
pub mod record;
pub mod render;
pub mod size;
pub mod terminal;
pub mod traits;


use std::sync::Arc;
use std::thread;

use crossterm::event::{self, Event};

use crate::config::Config;
use crate::coordinator::Coordinator;
use crate::errors::ViewerError;
use crate::terminal::{is_quit_key, TerminalGuard, TerminalSurface};
use crate::traits::Surface;

/// Runs the viewer until the user presses `q` or Esc.
///
/// Refuses to start unless stdin is piped. The reader and the renderer run on
/// background threads; this thread only polls the keyboard, redrawing on resize.
/// Returning does not wait for the background threads.
pub fn run(config: Config) -> Result<(), ViewerError> {
    if !input::stdin_is_piped() {
        return Err(ViewerError::NotPiped);
    }

    let _guard = TerminalGuard::enter()?;
    let coordinator = Arc::new(Coordinator::new(TerminalSurface::new()));

    let (sender, receiver) = crossbeam_channel::bounded(0);
    input::spawn_reader(config.delimiter, sender)?;

    let consumer = Arc::clone(&coordinator);
    thread::Builder::new()
        .name("render".to_string())
        .spawn(move || consumer.consume(receiver))?;

    let result = poll_keys(&coordinator);
    // no frame may land after the guard leaves the alternate screen
    coordinator.halt();
    result
}

/// Blocks on terminal events until a quit key, redrawing on resize.
fn poll_keys<S: Surface>(coordinator: &Coordinator<S>) -> Result<(), ViewerError> {
    loop {
        match event::read()? {
            Event::Key(key) if is_quit_key(&key) => {
                log::debug!("Quit requested");
                return Ok(());
            }
            Event::Resize(cols, rows) => {
                log::debug!("Terminal resized to {}x{}", cols, rows);
                if let Err(e) = coordinator.redraw() {
                    log::warn!("Error redrawing after resize: {}", e);
                }
            }
            _ => {}
        }
    }
}

use std::io;

use crossbeam_channel::Receiver;
use parking_lot::Mutex;

use crate::ranked::RankedSequence;
use crate::record::Record;
use crate::render::draw;
use crate::traits::Surface;

struct Shared<S> {
    sequence: RankedSequence,
    finished: bool,
    halted: bool,
    surface: S,
}

impl<S: Surface> Shared<S> {
    fn render(&mut self) -> io::Result<()> {
        if self.halted {
            return Ok(());
        }
        draw(&mut self.surface, &self.sequence, self.finished)
    }
}

/// Serializes insertions into the ranked sequence with the redraws that show it.
///
/// The sequence, the completion flag and the surface sit behind one lock. Every
/// insertion and the render that follows it happen inside a single critical
/// section, so a render never sees a half-spliced chain and renders never overlap.
pub struct Coordinator<S> {
    shared: Mutex<Shared<S>>,
}

impl<S: Surface> Coordinator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            shared: Mutex::new(Shared {
                sequence: RankedSequence::new(),
                finished: false,
                halted: false,
                surface,
            }),
        }
    }

    /// Drains `receiver`, ranking and redrawing after every record.
    ///
    /// Paints the empty waiting state first, then one frame per record in arrival
    /// order, then a final frame marked finished once the channel closes. A failed
    /// render is logged and does not stop the stream.
    pub fn consume(&self, receiver: Receiver<Record>) {
        self.redraw_logged();

        for record in receiver.iter() {
            let mut shared = self.shared.lock();
            shared.sequence.insert(record);
            if let Err(e) = shared.render() {
                log::warn!("Error drawing {} entries: {}", shared.sequence.len(), e);
            }
        }

        let mut shared = self.shared.lock();
        shared.finished = true;
        if let Err(e) = shared.render() {
            log::warn!("Error drawing the final listing: {}", e);
        }
        log::debug!("Listing finished with {} entries", shared.sequence.len());
    }

    /// Repaints the current state, for instance after the terminal was resized.
    pub fn redraw(&self) -> io::Result<()> {
        self.shared.lock().render()
    }

    /// Stops all further drawing.
    ///
    /// Waits for a render in progress to finish; once this returns nothing else is
    /// written to the surface. Records keep being ranked if the stream goes on.
    pub fn halt(&self) {
        self.shared.lock().halted = true;
    }

    fn redraw_logged(&self) {
        if let Err(e) = self.redraw() {
            log::warn!("Error drawing: {}", e);
        }
    }

    /// Copies the records in their current order.
    pub fn snapshot(&self) -> Vec<Record> {
        self.shared.lock().sequence.iter().cloned().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.shared.lock().finished
    }

    pub fn into_surface(self) -> S {
        self.shared.into_inner().surface
    }
}

//! Host-side test double for the panel hardware.
//!
//! Records the exact signal sequence a scan step emits so tests (here and in
//! downstream crates) can assert on ordering and content without a physical
//! shift-register chain. Enable with the `testing` feature outside of this
//! crate's own tests.

use crate::scan::{PanelInterface, RowBank};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Shift(u8),
    Latch,
    SelectBank(RowBank),
    Illuminate(bool),
}

/// A panel that remembers everything done to it.
#[derive(Default)]
pub struct RecordingPanel {
    pub events: Vec<PanelEvent>,
    /// Simulates another device holding the shared serial bus.
    pub busy: bool,
}

impl RecordingPanel {
    pub fn new() -> Self { Default::default() }

    /// Just the shifted bytes, in transmission order.
    pub fn shifted(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PanelEvent::Shift(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

impl PanelInterface for RecordingPanel {
    fn shift_byte(&mut self, byte: u8) { self.events.push(PanelEvent::Shift(byte)); }

    fn latch(&mut self) { self.events.push(PanelEvent::Latch); }

    fn select_bank(&mut self, bank: RowBank) { self.events.push(PanelEvent::SelectBank(bank)); }

    fn illuminate(&mut self, on: bool) { self.events.push(PanelEvent::Illuminate(on)); }

    fn bus_busy(&self) -> bool { self.busy }
}

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;

use crate::fb::{FrameBuffer, ROW_BYTES};

/// Number of interleaved row groups; one scan step drives one group, so four
/// steps refresh the whole panel once.
pub const BANKS: usize = 4;

/// One of the four interleaved row groups the panel's A/B address lines can
/// select. Bank `p` drives physical rows `p`, `p+4`, `p+8` and `p+12`
/// simultaneously.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum RowBank {
    Bank0 = 0,
    Bank1 = 1,
    Bank2 = 2,
    Bank3 = 3,
}

impl RowBank {
    pub fn base_row(self) -> usize { self as usize }

    /// The physical rows this bank covers, nearest first.
    pub fn rows(self) -> [usize; BANKS] {
        let p = self as usize;
        [p, p + 4, p + 8, p + 12]
    }

    /// The bank due after this one; wraps after the fourth.
    pub fn next(self) -> RowBank {
        RowBank::from_u8((self as u8 + 1) & 3).unwrap_or(RowBank::Bank0)
    }
}

/// The hardware capabilities the scan driver composes, in place of direct
/// pin writes. Implementations cover the real shift-register chain as well
/// as host-side doubles (see [`crate::testing`]).
pub trait PanelInterface {
    /// Clock one byte out to the panel's serial shift-register chain.
    fn shift_byte(&mut self, byte: u8);
    /// Pulse the strobe line, latching the shifted bits into the output
    /// drivers.
    fn latch(&mut self);
    /// Drive the row-address lines to select a row bank.
    fn select_bank(&mut self, bank: RowBank);
    /// Output enable for the selected rows.
    fn illuminate(&mut self, on: bool);
    /// True while another device owns the shared serial bus. Panels on a
    /// dedicated bus can leave the default.
    fn bus_busy(&self) -> bool { false }
}

/// Multiplexed transmission of the frame buffer mirror out to the panel.
///
/// [`ScanDriver::scan`] is designed to be invoked from a timer interrupt or
/// a tight polling loop; each invocation is bounded and synchronous. The
/// driver holds no reference to the frame buffer between steps, so a step
/// that races a drawing call sees at worst a single-frame tear, never
/// corrupted memory. Hosts wanting strict frame consistency can serialize
/// callers with their platform mutex or double-buffer the mirror.
pub struct ScanDriver<P: PanelInterface> {
    panel: P,
    bank: RowBank,
}

impl<P: PanelInterface> ScanDriver<P> {
    pub fn new(panel: P) -> Self { ScanDriver { panel, bank: RowBank::Bank0 } }

    /// The row group due to be transmitted by the next step.
    pub fn bank(&self) -> RowBank { self.bank }

    pub fn panel(&self) -> &P { &self.panel }

    pub fn panel_mut(&mut self) -> &mut P { &mut self.panel }

    /// One scan step: transmit the current row group and advance the cursor.
    ///
    /// Illumination is switched off before the address lines change and back
    /// on only after the new data is latched, so a slow step smears dark
    /// rather than ghosting across rows. If the shared bus is busy the step
    /// is skipped whole, shifting nothing and keeping the cursor, and the
    /// same group is retried on the next invocation.
    pub fn scan(&mut self, fb: &FrameBuffer) {
        if self.panel.bus_busy() {
            log::trace!("serial bus contended, skipping scan of {:?}", self.bank);
            return;
        }
        self.panel.illuminate(false);
        let p = self.bank.base_row();
        for col in 0..ROW_BYTES {
            // The register chain runs away from the input, so the farthest
            // row's byte goes out first, one byte column at a time. Column
            // drivers are active low: a lit mirror bit leaves as a zero.
            self.panel.shift_byte(!fb.byte(p + 12, col));
            self.panel.shift_byte(!fb.byte(p + 8, col));
            self.panel.shift_byte(!fb.byte(p + 4, col));
            self.panel.shift_byte(!fb.byte(p, col));
        }
        self.panel.latch();
        self.panel.select_bank(self.bank);
        self.panel.illuminate(true);
        self.bank = self.bank.next();
    }
}

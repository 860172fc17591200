#![cfg_attr(not(any(test, feature = "testing")), no_std)]

//! Driver core for a 32x16 monochrome LED dot-matrix panel.
//!
//! The panel has no memory of its own: a lit pixel is only on for the
//! instant its row is driven. The crate therefore keeps a byte-packed
//! mirror of the display in RAM (`FrameBuffer`), rasterizes shapes and
//! glyphs into it (`op`, `blit`), and re-transmits it to the hardware in
//! interleaved row groups (`scan`), four scan steps per full refresh.
//!
//! Panel layout in RAM:
//!
//! ```text
//!              32 pixels (4 bytes)
//!   top left ----------------------
//!            |                    |
//!            |  512 px (64 bytes) |  16 pixels
//!            |                    |
//!            ---------------------- bottom right
//! ```

pub mod api;
pub use api::*;
mod blit;
pub use blit::*;
pub mod fb;
pub use fb::*;
pub mod fonts;
mod op;
pub use op::*;
pub mod scan;
pub use scan::*;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

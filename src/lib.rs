//! Orientation-aware crop rectangles with reversible rotate, flip, and crop edits.
//!
//! Pure geometry, no pixel operations. The orientation and crop modules are
//! `no_std` and allocation-free; the history and session need `alloc`.
//!
//! # Modules
//!
//! - [`orientation`]: the 8 orientations (D4 dihedral group), rotate/mirror gestures, EXIF
//! - [`crop`]: moving crop rects between display frames through the canonical frame
//! - [`history`]: undo/redo stacks of reversible operations
//! - [`session`]: one image under edit: orientation, crop, history, render plan

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod crop;
pub mod geometry;
#[cfg(feature = "alloc")]
pub mod history;
pub mod orientation;
#[cfg(feature = "alloc")]
pub mod session;

pub use crop::{
    CanonicalFrame, CanonicalRect, DisplayFrame, DisplayRect, Framed, from_canonical_crop_rect,
    oriented_crop_rect, to_canonical_crop_rect,
};
pub use geometry::{MAX_EXTENT, Rect, Size};
#[cfg(feature = "alloc")]
pub use history::{History, HistoryError, Reversible, Stack};
pub use orientation::{FlipAxis, Orientation, RotateDirection};
#[cfg(feature = "alloc")]
pub use session::{CropState, Edit, EditSession, RenderPlan};

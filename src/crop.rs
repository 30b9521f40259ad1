//! Crop rectangles across orientations.
//!
//! Every conversion pivots through the canonical frame: the stored image
//! before any rotation or mirror. Going from canonical to an orientation's
//! display frame rotates clockwise `rotation` times and then mirrors
//! horizontally if the orientation is mirrored. Going back undoes the mirror
//! first, then the rotation.
//!
//! # Example
//!
//! ```
//! use cropframe::{Orientation, Rect, Size, crop};
//!
//! let canonical = Size::new(200, 300);
//! let rect = Rect::new(0, 0, 100, 150);
//!
//! let shown = crop::from_canonical_crop_rect(rect, canonical, Orientation::Rotate90FlipNone);
//! assert_eq!(shown, Rect::new(150, 0, 150, 100));
//!
//! let back = crop::to_canonical_crop_rect(shown, canonical, Orientation::Rotate90FlipNone);
//! assert_eq!(back, rect);
//! ```

use core::marker::PhantomData;

use crate::geometry::{Rect, Size, extent, saturate};
use crate::orientation::Orientation;

/// Rotate `rect` 90° clockwise together with the frame it lives in.
///
/// `frame` is the size of the frame `rect` is expressed in; the result lives
/// in the transposed frame.
pub const fn rotate_cw90(rect: Rect, frame: Size) -> Rect {
    Rect::new(
        far_edge(frame.height, rect.y, rect.height),
        rect.x,
        rect.height,
        rect.width,
    )
}

/// Exact inverse of [`rotate_cw90`]. `frame` is the size of the frame
/// `rect` is expressed in.
pub const fn rotate_ccw90(rect: Rect, frame: Size) -> Rect {
    Rect::new(
        rect.y,
        far_edge(frame.width, rect.x, rect.width),
        rect.height,
        rect.width,
    )
}

/// Mirror `rect` left-right inside a frame of width `frame_width`.
/// Self-inverse.
pub const fn mirror_horizontal(rect: Rect, frame_width: u32) -> Rect {
    Rect::new(
        far_edge(frame_width, rect.x, rect.width),
        rect.y,
        rect.width,
        rect.height,
    )
}

/// Offset of a span measured from the opposite edge of a frame axis.
const fn far_edge(frame_len: u32, start: i32, len: i32) -> i32 {
    saturate(extent(frame_len) as i64 - start as i64 - len as i64)
}

/// Map a rect from `orientation`'s display frame to the canonical frame.
///
/// `rect` must be expressed in the display frame, whose size is
/// `orientation.oriented_size(canonical)`.
pub fn to_canonical_crop_rect(rect: Rect, canonical: Size, orientation: Orientation) -> Rect {
    let mut frame = orientation.oriented_size(canonical);
    let mut rect = rect;
    if orientation.is_mirrored() {
        rect = mirror_horizontal(rect, frame.width);
    }
    for _ in 0..orientation.rotation() {
        rect = rotate_ccw90(rect, frame);
        frame = frame.transposed();
    }
    debug_assert_eq!(frame, canonical);
    rect
}

/// Map a rect from the canonical frame to `orientation`'s display frame.
pub fn from_canonical_crop_rect(rect: Rect, canonical: Size, orientation: Orientation) -> Rect {
    let mut frame = canonical;
    let mut rect = rect;
    for _ in 0..orientation.rotation() {
        rect = rotate_cw90(rect, frame);
        frame = frame.transposed();
    }
    if orientation.is_mirrored() {
        rect = mirror_horizontal(rect, frame.width);
    }
    rect
}

/// Re-express a crop rect from the display frame of `from` in the display
/// frame of `to`.
///
/// `canonical` is always the stored image size, never a display size.
pub fn oriented_crop_rect(
    rect: Rect,
    canonical: Size,
    from: Orientation,
    to: Orientation,
) -> Rect {
    let pivot = to_canonical_crop_rect(rect, canonical, from);
    from_canonical_crop_rect(pivot, canonical, to)
}

/// Marker for rects in the canonical (stored) frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalFrame;

/// Marker for rects in some orientation's display frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayFrame;

/// A [`Rect`] tagged at the type level with the frame it belongs to.
///
/// Zero-cost: the tag only stops a display rect from being passed where a
/// canonical one is expected, and the reverse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Framed<F> {
    rect: Rect,
    frame: PhantomData<F>,
}

/// Rect in the canonical frame.
pub type CanonicalRect = Framed<CanonicalFrame>;
/// Rect in a display frame.
pub type DisplayRect = Framed<DisplayFrame>;

impl<F> Framed<F> {
    /// Tag a rect as belonging to frame `F`.
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            frame: PhantomData,
        }
    }

    /// The untagged rect.
    pub const fn rect(&self) -> Rect {
        self.rect
    }
}

impl Orientation {
    /// Typed form of [`to_canonical_crop_rect`].
    pub fn to_canonical(self, rect: DisplayRect, canonical: Size) -> CanonicalRect {
        Framed::new(to_canonical_crop_rect(rect.rect, canonical, self))
    }

    /// Typed form of [`from_canonical_crop_rect`].
    pub fn from_canonical(self, rect: CanonicalRect, canonical: Size) -> DisplayRect {
        Framed::new(from_canonical_crop_rect(rect.rect, canonical, self))
    }
}

//! Sizes and rectangles.
//!
//! A [`Rect`] never records which coordinate frame it belongs to. Callers
//! track that themselves, or wrap it in [`Framed`](crate::crop::Framed).

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The same size with width and height exchanged.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Largest frame dimension a [`Rect`] can address. Wider or taller frames
/// are treated as this size.
pub const MAX_EXTENT: u32 = i32::MAX as u32;

/// A frame dimension as a rect coordinate, capped at [`MAX_EXTENT`].
pub(crate) const fn extent(v: u32) -> i32 {
    if v > MAX_EXTENT { i32::MAX } else { v as i32 }
}

/// Narrow an intermediate coordinate back to `i32`, saturating.
pub(crate) const fn saturate(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else if v < i32::MIN as i64 {
        i32::MIN
    } else {
        v as i32
    }
}

/// Axis-aligned rectangle in pixel coordinates.
///
/// Signed so that a rect dragged partly outside its frame still maps through
/// the transforms without wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rect covering an entire frame of the given size, capped at
    /// [`MAX_EXTENT`] on each axis.
    pub const fn full(size: Size) -> Self {
        Self {
            x: 0,
            y: 0,
            width: extent(size.width),
            height: extent(size.height),
        }
    }

    /// Exclusive right edge, saturating.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether this rect covers the full frame (no actual crop).
    pub fn is_full(&self, frame: Size) -> bool {
        *self == Self::full(frame)
    }

    /// Whether this rect lies entirely inside a frame of the given size.
    pub fn fits_within(&self, frame: Size) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && i64::from(self.x) + i64::from(self.width) <= i64::from(frame.width)
            && i64::from(self.y) + i64::from(self.height) <= i64::from(frame.height)
    }

    /// Clamp this rect to fit within `(0, 0, frame.width, frame.height)`.
    /// Width and height are clamped to at least 1 unless the frame is empty.
    pub fn clamp_to(self, frame: Size) -> Self {
        if frame.is_empty() {
            return Self::default();
        }
        let max_w = extent(frame.width);
        let max_h = extent(frame.height);
        let x = self.x.clamp(0, max_w - 1);
        let y = self.y.clamp(0, max_h - 1);
        let w = self.width.min(max_w - x).max(1);
        let h = self.height.min(max_h - y).max(1);
        Self {
            x,
            y,
            width: w,
            height: h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rect_matches_frame() {
        let r = Rect::full(Size::new(200, 300));
        assert_eq!(r, Rect::new(0, 0, 200, 300));
        assert!(r.is_full(Size::new(200, 300)));
        assert!(!r.is_full(Size::new(300, 200)));
    }

    #[test]
    fn transposed_swaps() {
        assert_eq!(Size::new(4, 3).transposed(), Size::new(3, 4));
    }

    #[test]
    fn edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn fits_within() {
        let frame = Size::new(100, 50);
        assert!(Rect::new(0, 0, 100, 50).fits_within(frame));
        assert!(Rect::new(90, 40, 10, 10).fits_within(frame));
        assert!(!Rect::new(91, 40, 10, 10).fits_within(frame));
        assert!(!Rect::new(-1, 0, 10, 10).fits_within(frame));
    }

    #[test]
    fn clamp_pulls_inside() {
        let frame = Size::new(100, 50);
        assert_eq!(
            Rect::new(-10, -5, 40, 20).clamp_to(frame),
            Rect::new(0, 0, 40, 20)
        );
        assert_eq!(
            Rect::new(80, 40, 50, 50).clamp_to(frame),
            Rect::new(80, 40, 20, 10)
        );
        assert_eq!(
            Rect::new(200, 200, 5, 5).clamp_to(frame),
            Rect::new(99, 49, 1, 1)
        );
    }

    #[test]
    fn clamp_keeps_minimum_extent() {
        let r = Rect::new(5, 5, 0, -3).clamp_to(Size::new(10, 10));
        assert_eq!((r.width, r.height), (1, 1));
    }

    #[test]
    fn full_rect_at_the_coordinate_limit() {
        let r = Rect::full(Size::new(MAX_EXTENT, 10));
        assert_eq!(r, Rect::new(0, 0, i32::MAX, 10));
        assert!(r.fits_within(Size::new(MAX_EXTENT, 10)));
        assert_eq!(r.right(), i32::MAX);
    }

    #[test]
    fn oversized_frame_is_capped() {
        let frame = Size::new(3_000_000_000, 10);
        let r = Rect::full(frame);
        assert_eq!(r, Rect::new(0, 0, i32::MAX, 10));
        assert!(r.fits_within(frame));
        assert!(r.is_full(frame));
        assert_eq!(
            Rect::new(0, 0, 10, 10).clamp_to(frame),
            Rect::new(0, 0, 10, 10)
        );
        assert_eq!(
            Rect::new(i32::MAX, 0, 10, 10).clamp_to(frame),
            Rect::new(i32::MAX - 1, 0, 1, 10)
        );
    }

    #[test]
    fn saturate_narrows() {
        assert_eq!(saturate(5), 5);
        assert_eq!(saturate(i64::from(i32::MAX) + 1), i32::MAX);
        assert_eq!(saturate(i64::from(i32::MIN) - 1), i32::MIN);
        assert_eq!(extent(u32::MAX), i32::MAX);
    }

    #[test]
    fn clamp_empty_frame() {
        assert_eq!(
            Rect::new(3, 3, 3, 3).clamp_to(Size::new(0, 10)),
            Rect::default()
        );
    }
}

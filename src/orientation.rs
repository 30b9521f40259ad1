//! Orientation (D4 dihedral group), rotate/mirror composition, and EXIF mapping.

use core::fmt;

use crate::geometry::Size;

/// Image orientation as an element of the D4 dihedral group.
///
/// Each value is a clockwise rotation of the canonical (stored) frame in
/// 90-degree steps, optionally followed by a horizontal mirror. The eight
/// variants cover every `(rotation, mirrored)` pair exactly once.
///
/// ```text
///     RotateNoneFlipNone  RotateNoneFlipX  Rotate180FlipNone  Rotate180FlipX
///     ┌───┐               ┌───┐            ┌───┐              ┌───┐
///     │ F │               │ Ꟊ │            │   │              │   │
///     │   │               │   │            │ Ꟊ │              │ F │
///     └───┘               └───┘            └───┘              └───┘
///
///     Rotate90FlipX       Rotate90FlipNone Rotate270FlipX     Rotate270FlipNone
///     ┌────┐              ┌────┐           ┌────┐             ┌────┐
///     │ F  │              │  F │           │  Ꟊ │             │ Ꟊ  │
///     └────┘              └────┘           └────┘             └────┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Canonical frame. EXIF 1.
    #[default]
    RotateNoneFlipNone,
    /// 90° clockwise. EXIF 6.
    Rotate90FlipNone,
    /// 180°. EXIF 3.
    Rotate180FlipNone,
    /// 270° clockwise (90° counter-clockwise). EXIF 8.
    Rotate270FlipNone,
    /// Horizontal mirror. EXIF 2.
    RotateNoneFlipX,
    /// 90° clockwise, then mirrored; a transpose. EXIF 5.
    Rotate90FlipX,
    /// 180°, then mirrored; a vertical flip. EXIF 4.
    Rotate180FlipX,
    /// 270° clockwise, then mirrored; a transverse. EXIF 7.
    Rotate270FlipX,
}

/// Direction of a single 90° rotation gesture, as the user sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotateDirection {
    /// Quarter turn to the right.
    Clockwise,
    /// Quarter turn to the left.
    CounterClockwise,
}

/// Axis for flip gestures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlipAxis {
    /// Flip left-right.
    Horizontal,
    /// Flip top-bottom.
    Vertical,
}

impl Orientation {
    /// All 8 elements of the D4 group, indexed by EXIF value - 1.
    pub const ALL: [Self; 8] = [
        Self::RotateNoneFlipNone,
        Self::RotateNoneFlipX,
        Self::Rotate180FlipNone,
        Self::Rotate180FlipX,
        Self::Rotate90FlipX,
        Self::Rotate90FlipNone,
        Self::Rotate270FlipX,
        Self::Rotate270FlipNone,
    ];

    /// Build from a rotation step count (taken mod 4) and a mirror flag.
    pub const fn new(rotation: u8, mirrored: bool) -> Self {
        match (rotation & 3, mirrored) {
            (0, false) => Self::RotateNoneFlipNone,
            (1, false) => Self::Rotate90FlipNone,
            (2, false) => Self::Rotate180FlipNone,
            (3, false) => Self::Rotate270FlipNone,
            (0, true) => Self::RotateNoneFlipX,
            (1, true) => Self::Rotate90FlipX,
            (2, true) => Self::Rotate180FlipX,
            _ => Self::Rotate270FlipX,
        }
    }

    /// Clockwise 90° steps applied to the canonical frame (0-3).
    pub const fn rotation(self) -> u8 {
        match self {
            Self::RotateNoneFlipNone | Self::RotateNoneFlipX => 0,
            Self::Rotate90FlipNone | Self::Rotate90FlipX => 1,
            Self::Rotate180FlipNone | Self::Rotate180FlipX => 2,
            Self::Rotate270FlipNone | Self::Rotate270FlipX => 3,
        }
    }

    /// Whether a horizontal mirror follows the rotation.
    pub const fn is_mirrored(self) -> bool {
        matches!(
            self,
            Self::RotateNoneFlipX | Self::Rotate90FlipX | Self::Rotate180FlipX | Self::Rotate270FlipX
        )
    }

    /// Clockwise rotation in degrees (0, 90, 180 or 270).
    pub const fn degrees(self) -> u16 {
        self.rotation() as u16 * 90
    }

    /// Whether this is the canonical orientation.
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::RotateNoneFlipNone)
    }

    /// Whether the display frame has width and height swapped relative to
    /// the canonical frame (rotation of 90° or 270°).
    pub const fn is_turned(self) -> bool {
        self.rotation() % 2 == 1
    }

    /// Display-frame size for a canonical size under this orientation.
    ///
    /// Applying it twice with orientations of equal turned-ness gives back
    /// the input.
    pub const fn oriented_size(self, canonical: Size) -> Size {
        if self.is_turned() {
            canonical.transposed()
        } else {
            canonical
        }
    }

    /// Compose two orientations: apply `self` first, then `other`.
    pub const fn compose(self, other: Self) -> Self {
        if !self.is_mirrored() {
            Self::new(self.rotation() + other.rotation(), other.is_mirrored())
        } else {
            Self::new(
                self.rotation().wrapping_sub(other.rotation()),
                !other.is_mirrored(),
            )
        }
    }

    /// The inverse orientation: `self.compose(self.inverse())` is the identity.
    pub const fn inverse(self) -> Self {
        if !self.is_mirrored() {
            Self::new(4 - self.rotation(), false)
        } else {
            // mirrored elements are involutions
            self
        }
    }

    /// Turn the displayed image one 90° step.
    ///
    /// On a mirrored orientation the stored rotation index moves the other
    /// way, since the mirror reverses chirality: a visually clockwise turn
    /// decrements it.
    pub const fn apply_rotation(self, direction: RotateDirection) -> Self {
        let step = match direction {
            RotateDirection::Clockwise => 1,
            RotateDirection::CounterClockwise => 3,
        };
        if self.is_mirrored() {
            Self::new(self.rotation().wrapping_sub(step), true)
        } else {
            Self::new(self.rotation() + step, false)
        }
    }

    /// Mirror the displayed image across `axis`.
    ///
    /// A vertical flip is a horizontal flip plus a 180° turn, which keeps
    /// the value space at eight orientations.
    pub const fn apply_mirror(self, axis: FlipAxis) -> Self {
        let rotation = match axis {
            FlipAxis::Horizontal => self.rotation(),
            FlipAxis::Vertical => self.rotation() + 2,
        };
        Self::new(rotation, !self.is_mirrored())
    }

    /// Clockwise 90° steps separating the rotation of `from` and `to` (0-3).
    ///
    /// The mirror flag is ignored on both sides. This drives rotation
    /// animations; it is not the group distance between two orientations.
    pub const fn rotation_steps(from: Self, to: Self) -> u8 {
        (to.rotation() + 4 - from.rotation()) % 4
    }

    /// Create from EXIF orientation tag (1-8). Returns `None` for invalid values.
    pub fn from_exif(value: u8) -> Option<Self> {
        if (1..=8).contains(&value) {
            Some(Self::ALL[(value - 1) as usize])
        } else {
            None
        }
    }

    /// Convert to EXIF orientation tag (1-8).
    pub fn to_exif(self) -> u8 {
        let index = Self::ALL.iter().position(|&o| o == self).unwrap_or(0);
        index as u8 + 1
    }

    /// Variant name, e.g. `"Rotate90FlipX"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RotateNoneFlipNone => "RotateNoneFlipNone",
            Self::Rotate90FlipNone => "Rotate90FlipNone",
            Self::Rotate180FlipNone => "Rotate180FlipNone",
            Self::Rotate270FlipNone => "Rotate270FlipNone",
            Self::RotateNoneFlipX => "RotateNoneFlipX",
            Self::Rotate90FlipX => "Rotate90FlipX",
            Self::Rotate180FlipX => "Rotate180FlipX",
            Self::Rotate270FlipX => "Rotate270FlipX",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

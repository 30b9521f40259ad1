//! Edit session: the current orientation and crop of one image, driven by
//! rotate, flip, and crop gestures with undo/redo.
//!
//! # Example
//!
//! ```
//! use cropframe::{EditSession, Orientation, Rect, RotateDirection, Size};
//!
//! let mut session = EditSession::new(Size::new(200, 300));
//! session.set_crop(Rect::new(0, 0, 100, 150));
//! session.rotate(RotateDirection::Clockwise);
//!
//! assert_eq!(session.orientation(), Orientation::Rotate90FlipNone);
//! assert_eq!(session.crop(), Rect::new(150, 0, 150, 100));
//!
//! session.undo().unwrap();
//! assert_eq!(session.orientation(), Orientation::RotateNoneFlipNone);
//! assert_eq!(session.crop(), Rect::new(0, 0, 100, 150));
//! ```

use crate::crop::{oriented_crop_rect, to_canonical_crop_rect};
use crate::geometry::{Rect, Size};
use crate::history::{History, HistoryError, Reversible};
use crate::orientation::{FlipAxis, Orientation, RotateDirection};

/// Displayed state of an image being edited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CropState {
    /// Stored image size. Fixed for the session.
    pub canonical_size: Size,
    /// Current orientation.
    pub orientation: Orientation,
    /// Current crop, in `orientation`'s display frame.
    pub crop: Rect,
}

impl CropState {
    /// Canonical orientation, crop covering the whole image.
    pub const fn new(canonical_size: Size) -> Self {
        Self {
            canonical_size,
            orientation: Orientation::RotateNoneFlipNone,
            crop: Rect::full(canonical_size),
        }
    }

    /// Size of the current display frame.
    pub const fn display_size(&self) -> Size {
        self.orientation.oriented_size(self.canonical_size)
    }

    /// Move to `orientation`, carrying the crop into its display frame.
    fn reorient(&mut self, orientation: Orientation) {
        let crop = oriented_crop_rect(
            self.crop,
            self.canonical_size,
            self.orientation,
            orientation,
        );
        tracing::debug!(
            from = %self.orientation,
            to = %orientation,
            old_crop = ?self.crop,
            new_crop = ?crop,
            "orientation changed"
        );
        self.orientation = orientation;
        self.crop = crop;
    }
}

/// One recorded edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edit {
    /// A rotate or flip. The crop is recomputed for the target orientation
    /// in both directions rather than stored.
    Orientation { from: Orientation, to: Orientation },
    /// A crop drag. Both rects are in the display frame of the orientation
    /// current at the time, which a crop edit never changes.
    Crop { from: Rect, to: Rect },
}

impl Reversible<CropState> for Edit {
    fn apply(&self, state: &mut CropState) {
        match *self {
            Self::Orientation { to, .. } => state.reorient(to),
            Self::Crop { to, .. } => state.crop = to,
        }
    }

    fn revert(&self, state: &mut CropState) {
        match *self {
            Self::Orientation { from, .. } => state.reorient(from),
            Self::Crop { from, .. } => state.crop = from,
        }
    }
}

/// What a renderer needs to draw or export the edited image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderPlan {
    /// Orientation to apply to the stored pixels.
    pub orientation: Orientation,
    /// Stored image size.
    pub canonical_size: Size,
    /// Crop in the display frame.
    pub crop: Rect,
    /// The same crop in stored-pixel coordinates, for cropping before
    /// orienting.
    pub source_crop: Rect,
    /// Output dimensions.
    pub output_size: Size,
}

impl RenderPlan {
    /// True when the output is the stored image unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.orientation.is_identity() && self.source_crop.is_full(self.canonical_size)
    }
}

/// Orientation and crop of one image under edit, with undo/redo.
#[derive(Clone, Debug)]
pub struct EditSession {
    state: CropState,
    history: History<Edit>,
}

impl EditSession {
    /// Start editing an image whose stored size is `canonical_size`.
    pub fn new(canonical_size: Size) -> Self {
        Self {
            state: CropState::new(canonical_size),
            history: History::new(),
        }
    }

    /// Orientation, crop and canonical size as one value.
    pub fn state(&self) -> &CropState {
        &self.state
    }

    /// Current orientation.
    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    /// Current crop in the current display frame.
    pub fn crop(&self) -> Rect {
        self.state.crop
    }

    /// Stored image size.
    pub fn canonical_size(&self) -> Size {
        self.state.canonical_size
    }

    /// Size of the current display frame.
    pub fn display_size(&self) -> Size {
        self.state.display_size()
    }

    /// Current crop in the canonical frame.
    pub fn canonical_crop(&self) -> Rect {
        to_canonical_crop_rect(
            self.state.crop,
            self.state.canonical_size,
            self.state.orientation,
        )
    }

    /// Recorded edits.
    pub fn history(&self) -> &History<Edit> {
        &self.history
    }

    /// Turn the image a quarter turn.
    pub fn rotate(&mut self, direction: RotateDirection) {
        let from = self.state.orientation;
        self.commit(Edit::Orientation {
            from,
            to: from.apply_rotation(direction),
        });
    }

    /// Mirror the image.
    pub fn flip(&mut self, axis: FlipAxis) {
        let from = self.state.orientation;
        self.commit(Edit::Orientation {
            from,
            to: from.apply_mirror(axis),
        });
    }

    /// Replace the crop. `rect` is in the current display frame.
    ///
    /// Setting the current crop again records nothing.
    pub fn set_crop(&mut self, rect: Rect) {
        if rect == self.state.crop {
            return;
        }
        self.commit(Edit::Crop {
            from: self.state.crop,
            to: rect,
        });
    }

    /// Revert the newest edit. Fails with `EmptyStack` when there is none.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        self.history.undo(&mut self.state)
    }

    /// Re-apply the last undone edit. Fails with `EmptyStack` when there is none.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        self.history.redo(&mut self.state)
    }

    /// Whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Back to the canonical orientation and full crop, with no history.
    pub fn reset(&mut self) {
        self.state = CropState::new(self.state.canonical_size);
        self.history.clear();
    }

    /// Snapshot for the renderer.
    pub fn render_plan(&self) -> RenderPlan {
        let crop = self.state.crop;
        RenderPlan {
            orientation: self.state.orientation,
            canonical_size: self.state.canonical_size,
            crop,
            source_crop: self.canonical_crop(),
            output_size: Size::new(crop.width.max(0) as u32, crop.height.max(0) as u32),
        }
    }

    fn commit(&mut self, edit: Edit) {
        edit.apply(&mut self.state);
        self.history.record(edit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Orientation::*;

    fn session() -> EditSession {
        EditSession::new(Size::new(200, 300))
    }

    #[test]
    fn new_session_shows_whole_image() {
        let s = session();
        assert_eq!(s.orientation(), RotateNoneFlipNone);
        assert_eq!(s.crop(), Rect::new(0, 0, 200, 300));
        assert_eq!(s.display_size(), Size::new(200, 300));
        assert!(!s.can_undo());
        assert!(!s.can_redo());
        assert!(s.render_plan().is_passthrough());
    }

    #[test]
    fn rotate_carries_crop() {
        let mut s = session();
        s.set_crop(Rect::new(0, 0, 100, 150));
        s.rotate(RotateDirection::Clockwise);
        assert_eq!(s.orientation(), Rotate90FlipNone);
        assert_eq!(s.display_size(), Size::new(300, 200));
        assert_eq!(s.crop(), Rect::new(150, 0, 150, 100));
        assert_eq!(s.canonical_crop(), Rect::new(0, 0, 100, 150));
    }

    #[test]
    fn undo_rotation_restores_orientation_and_crop() {
        let mut s = session();
        s.set_crop(Rect::new(10, 20, 30, 40));
        s.rotate(RotateDirection::CounterClockwise);
        s.flip(FlipAxis::Vertical);
        assert_eq!(s.history().undo_len(), 3);

        s.undo().unwrap();
        assert_eq!(s.orientation(), Rotate270FlipNone);
        s.undo().unwrap();
        assert_eq!(s.orientation(), RotateNoneFlipNone);
        assert_eq!(s.crop(), Rect::new(10, 20, 30, 40));
        s.undo().unwrap();
        assert_eq!(s.crop(), Rect::new(0, 0, 200, 300));
        assert_eq!(
            s.undo(),
            Err(HistoryError::EmptyStack {
                stack: crate::history::Stack::Undo
            })
        );
    }

    #[test]
    fn redo_replays() {
        let mut s = session();
        s.flip(FlipAxis::Horizontal);
        s.set_crop(Rect::new(5, 5, 50, 50));
        let after = *s.state();
        s.undo().unwrap();
        s.undo().unwrap();
        s.redo().unwrap();
        s.redo().unwrap();
        assert_eq!(*s.state(), after);
        assert!(s.redo().is_err());
    }

    #[test]
    fn crop_edit_leaves_orientation_alone() {
        let mut s = session();
        s.rotate(RotateDirection::Clockwise);
        s.set_crop(Rect::new(1, 2, 3, 4));
        s.undo().unwrap();
        assert_eq!(s.orientation(), Rotate90FlipNone);
        assert_eq!(s.crop(), Rect::new(0, 0, 300, 200));
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut s = session();
        s.rotate(RotateDirection::Clockwise);
        s.undo().unwrap();
        assert!(s.can_redo());
        s.flip(FlipAxis::Horizontal);
        assert!(!s.can_redo());
        assert_eq!(s.orientation(), RotateNoneFlipX);
    }

    #[test]
    fn unchanged_crop_records_nothing() {
        let mut s = session();
        s.rotate(RotateDirection::Clockwise);
        s.undo().unwrap();
        s.set_crop(s.crop());
        assert!(!s.can_undo());
        assert!(s.can_redo());
    }

    #[test]
    fn render_plan_reports_both_frames() {
        let mut s = session();
        s.set_crop(Rect::new(0, 0, 100, 150));
        s.rotate(RotateDirection::Clockwise);
        let plan = s.render_plan();
        assert_eq!(plan.orientation, Rotate90FlipNone);
        assert_eq!(plan.canonical_size, Size::new(200, 300));
        assert_eq!(plan.crop, Rect::new(150, 0, 150, 100));
        assert_eq!(plan.source_crop, Rect::new(0, 0, 100, 150));
        assert_eq!(plan.output_size, Size::new(150, 100));
        assert!(!plan.is_passthrough());
    }

    #[test]
    fn reset_forgets_everything() {
        let mut s = session();
        s.rotate(RotateDirection::Clockwise);
        s.set_crop(Rect::new(1, 1, 10, 10));
        s.undo().unwrap();
        s.reset();
        assert_eq!(*s.state(), CropState::new(Size::new(200, 300)));
        assert!(!s.can_undo());
        assert!(!s.can_redo());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn render_plan_serializes() {
        let mut s = session();
        s.flip(FlipAxis::Horizontal);
        let plan = s.render_plan();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"RotateNoneFlipX\""));
        let back: RenderPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn oversized_image_keeps_a_valid_crop() {
        let size = Size::new(3_000_000_000, 10);
        let mut s = EditSession::new(size);
        assert_eq!(s.crop(), Rect::new(0, 0, i32::MAX, 10));
        assert!(s.crop().fits_within(s.display_size()));
        assert_eq!(s.render_plan().output_size, Size::new(i32::MAX as u32, 10));

        s.rotate(RotateDirection::Clockwise);
        assert!(s.crop().fits_within(s.display_size()));
        assert!(s.crop().x >= 0 && s.crop().y >= 0);
        s.undo().unwrap();
        assert_eq!(s.crop(), Rect::new(0, 0, i32::MAX, 10));
    }

    #[test]
    fn edits_can_drive_a_bare_history() {
        let mut state = CropState::new(Size::new(4, 3));
        let mut history = History::new();
        let edit = Edit::Orientation {
            from: RotateNoneFlipNone,
            to: Rotate90FlipX,
        };
        edit.apply(&mut state);
        history.record(edit);
        assert_eq!(state.crop, Rect::new(0, 0, 3, 4));
        history.undo(&mut state).unwrap();
        assert_eq!(state, CropState::new(Size::new(4, 3)));
    }
}

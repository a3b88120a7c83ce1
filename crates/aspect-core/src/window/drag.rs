//! Title bar drag state.
//!
//! A drag keeps the pointer at the same offset from the window's top-left
//! corner for as long as the button is held.

use crate::window::types::ScreenPoint;

#[derive(Debug, Clone, Default)]
pub struct WindowDrag {
    /// Pointer position relative to the window origin, captured on press.
    offset: Option<ScreenPoint>,
}

impl WindowDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pointer offset from the window origin.
    pub fn begin(&mut self, window_origin: ScreenPoint, pointer: ScreenPoint) {
        self.offset = Some(pointer - window_origin);
    }

    /// Where the window origin must go so the pointer keeps its offset.
    ///
    /// `None` when no drag is in progress.
    pub fn target_origin(&self, pointer: ScreenPoint) -> Option<ScreenPoint> {
        self.offset.map(|offset| pointer - offset)
    }

    pub fn end(&mut self) {
        self.offset = None;
    }

    pub fn is_active(&self) -> bool {
        self.offset.is_some()
    }

    #[cfg(test)]
    fn offset(&self) -> Option<ScreenPoint> {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_keeps_pointer_offset() {
        let (x0, y0) = (400, 300);
        let (dx, dy) = (25, 12);
        let mut drag = WindowDrag::new();

        drag.begin(ScreenPoint::new(x0, y0), ScreenPoint::new(x0 + dx, y0 + dy));
        assert_eq!(drag.offset(), Some(ScreenPoint::new(dx, dy)));

        let (px, py) = (1000, 750);
        assert_eq!(
            drag.target_origin(ScreenPoint::new(px, py)),
            Some(ScreenPoint::new(px - dx, py - dy))
        );
    }

    #[test]
    fn test_drag_can_move_window_to_negative_coordinates() {
        let mut drag = WindowDrag::new();
        drag.begin(ScreenPoint::new(0, 0), ScreenPoint::new(40, 20));
        assert_eq!(
            drag.target_origin(ScreenPoint::new(10, 5)),
            Some(ScreenPoint::new(-30, -15))
        );
    }

    #[test]
    fn test_successive_moves_use_same_offset() {
        let mut drag = WindowDrag::new();
        drag.begin(ScreenPoint::new(100, 100), ScreenPoint::new(150, 110));

        for (px, py) in [(200, 200), (210, 190), (0, 0)] {
            assert_eq!(
                drag.target_origin(ScreenPoint::new(px, py)),
                Some(ScreenPoint::new(px - 50, py - 10))
            );
        }
    }

    #[test]
    fn test_no_target_without_drag() {
        let drag = WindowDrag::new();
        assert!(!drag.is_active());
        assert_eq!(drag.target_origin(ScreenPoint::new(10, 10)), None);
    }

    #[test]
    fn test_end_clears_offset() {
        let mut drag = WindowDrag::new();
        drag.begin(ScreenPoint::new(0, 0), ScreenPoint::new(5, 5));
        assert!(drag.is_active());

        drag.end();
        assert!(!drag.is_active());
        assert_eq!(drag.target_origin(ScreenPoint::new(10, 10)), None);
    }

    #[test]
    fn test_new_press_replaces_offset() {
        let mut drag = WindowDrag::new();
        drag.begin(ScreenPoint::new(0, 0), ScreenPoint::new(5, 5));
        drag.begin(ScreenPoint::new(100, 100), ScreenPoint::new(130, 120));
        assert_eq!(drag.offset(), Some(ScreenPoint::new(30, 20)));
    }
}

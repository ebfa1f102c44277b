//! プレビューオーバーレイの状態
//!
//! 開閉とドラッグを一つの状態機械で表す:
//! `Closed` / `Open`（静止）/ `Dragging`（ドラッグ中）。
//! 位置は開くたびに既定値へ戻り、開閉をまたいで保持しない。

use crate::session::SelectionId;

/// 画面座標
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// 開いた直後のパネル位置
pub const DEFAULT_POSITION: Point = Point::new(80.0, 80.0);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PreviewOverlay {
    #[default]
    Closed,
    Open {
        selection: SelectionId,
        position: Point,
    },
    Dragging {
        selection: SelectionId,
        position: Point,
        /// 押下時のポインタ位置とパネル位置の差
        grab: Point,
    },
}

impl PreviewOverlay {
    /// 選択中ファイルのプレビューを開く（位置は既定値）
    pub fn open(&mut self, selection: SelectionId) {
        *self = PreviewOverlay::Open {
            selection,
            position: DEFAULT_POSITION,
        };
    }

    pub fn close(&mut self) {
        *self = PreviewOverlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, PreviewOverlay::Closed)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, PreviewOverlay::Dragging { .. })
    }

    pub fn selection(&self) -> Option<SelectionId> {
        match self {
            PreviewOverlay::Closed => None,
            PreviewOverlay::Open { selection, .. } | PreviewOverlay::Dragging { selection, .. } => {
                Some(*selection)
            }
        }
    }

    pub fn position(&self) -> Option<Point> {
        match self {
            PreviewOverlay::Closed => None,
            PreviewOverlay::Open { position, .. } | PreviewOverlay::Dragging { position, .. } => {
                Some(*position)
            }
        }
    }

    /// パネル上での押下。開いていればドラッグを開始して true
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        match *self {
            PreviewOverlay::Open { selection, position } => {
                *self = PreviewOverlay::Dragging {
                    selection,
                    position,
                    grab: pointer.offset_from(position),
                };
                true
            }
            _ => false,
        }
    }

    /// ポインタ移動。ドラッグ中なら新しい位置を返す
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Point> {
        match self {
            PreviewOverlay::Dragging { position, grab, .. } => {
                *position = pointer.offset_from(*grab);
                Some(*position)
            }
            _ => None,
        }
    }

    /// ポインタ解放。ドラッグを終えて静止状態へ
    pub fn pointer_up(&mut self) {
        if let PreviewOverlay::Dragging { selection, position, .. } = *self {
            *self = PreviewOverlay::Open { selection, position };
        }
    }

    /// 選択ファイルの変更を反映する
    ///
    /// 開いているプレビューが現在の選択を指していなければ閉じて true を返す。
    pub fn sync_selection(&mut self, current: Option<SelectionId>) -> bool {
        match self.selection() {
            Some(shown) if Some(shown) != current => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_at_default_position() {
        let mut overlay = PreviewOverlay::default();
        assert!(!overlay.is_open());

        overlay.open(1);
        assert!(overlay.is_open());
        assert!(!overlay.is_dragging());
        assert_eq!(overlay.position(), Some(DEFAULT_POSITION));
        assert_eq!(overlay.selection(), Some(1));
    }

    #[test]
    fn test_drag_moves_by_pointer_delta() {
        let mut overlay = PreviewOverlay::default();
        overlay.open(1);

        // パネル内 (10, 20) の位置をつかむ
        assert!(overlay.pointer_down(Point::new(90.0, 100.0)));
        assert!(overlay.is_dragging());

        let moved = overlay.pointer_move(Point::new(140.0, 70.0));
        assert_eq!(moved, Some(Point::new(130.0, 50.0)));

        overlay.pointer_up();
        assert!(!overlay.is_dragging());
        assert_eq!(overlay.position(), Some(Point::new(130.0, 50.0)));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut overlay = PreviewOverlay::default();
        assert_eq!(overlay.pointer_move(Point::new(5.0, 5.0)), None);
        assert!(!overlay.pointer_down(Point::new(5.0, 5.0)));

        overlay.open(1);
        assert_eq!(overlay.pointer_move(Point::new(500.0, 500.0)), None);
        assert_eq!(overlay.position(), Some(DEFAULT_POSITION));
    }

    #[test]
    fn test_reopen_resets_position() {
        let mut overlay = PreviewOverlay::default();
        overlay.open(1);
        overlay.pointer_down(Point::new(80.0, 80.0));
        overlay.pointer_move(Point::new(300.0, 240.0));
        overlay.pointer_up();
        assert_eq!(overlay.position(), Some(Point::new(300.0, 240.0)));

        overlay.close();
        assert_eq!(overlay.position(), None);

        overlay.open(1);
        assert_eq!(overlay.position(), Some(DEFAULT_POSITION));
    }

    #[test]
    fn test_close_while_dragging() {
        let mut overlay = PreviewOverlay::default();
        overlay.open(1);
        overlay.pointer_down(Point::new(100.0, 100.0));
        overlay.close();
        assert!(!overlay.is_dragging());
        assert_eq!(overlay.pointer_move(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_sync_selection_closes_on_replace_or_clear() {
        let mut overlay = PreviewOverlay::default();
        overlay.open(1);
        assert!(!overlay.sync_selection(Some(1)));
        assert!(overlay.is_open());

        assert!(overlay.sync_selection(Some(2)));
        assert!(!overlay.is_open());

        overlay.open(2);
        assert!(overlay.sync_selection(None));
        assert!(!overlay.is_open());

        assert!(!overlay.sync_selection(None));
    }
}

//! Shared input handling: event types, click targets, and coordinate
//! conversion.
//!
//! Every clickable region on screen carries a [`UiAction`] — either exactly
//! one router [`Action`] or one shell-only command. There is no other
//! mutation path from a pointer event into the application.

use ratzilla::ratatui::layout::Rect;

use crate::nav::Action;

/// The payload of a click target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// Forwarded to the router unchanged.
    Nav(Action),
    /// Shell-only commands; they never touch `NavState`.
    OpenSearch,
    CloseSearch,
    PickResult(u8),
    ScrollUp,
    ScrollDown,
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone, Copy)]
pub struct ClickTarget {
    /// Terminal cell coordinates for hit testing.
    pub rect: Rect,
    pub action: UiAction,
}

/// Shared state between the render pass and the pointer handler. Targets are
/// re-registered from scratch every frame, mirroring the full re-render of
/// the screen itself.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action: UiAction) {
        self.targets.push(ClickTarget { rect, action });
    }

    /// Convenience: register a full-row click target at the given row within
    /// an area.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action: UiAction) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action,
            });
        }
    }

    /// Register click targets for a horizontal tab bar based on actual text
    /// widths.
    ///
    /// Each entry in `tab_widths` is `(display_width, action)` for the
    /// **padded** label text of that tab; `separator_width` is the display
    /// width of the separator between tabs. Targets cover each label plus
    /// half of the adjacent separator(s); the first and last tabs extend to
    /// the area edges so the bar has no dead zones.
    pub fn register_tab_targets(
        &mut self,
        tab_widths: &[(u16, UiAction)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = tab_widths.len();
        if n == 0 || total_width == 0 {
            return;
        }

        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in tab_widths.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        for i in 0..n {
            let (_, action) = tab_widths[i];

            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + tab_widths[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };

            let right = if i == n - 1 {
                total_width
            } else {
                let cur_end = starts[i] + tab_widths[i].0;
                cur_end + (starts[i + 1] - cur_end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_click_target(Rect::new(x + left, y, w, height), action);
            }
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    /// Later-registered (topmost) targets win, matching UI layering.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<UiAction> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should use the narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y coordinate (relative to the grid container's top edge)
/// to a terminal row index. `None` when outside the grid or inputs invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }
    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;
    if row >= terminal_rows {
        return None;
    }
    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        None
    } else {
        Some(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Action;

    const A: UiAction = UiAction::Nav(Action::GoHome);
    const B: UiAction = UiAction::Nav(Action::CycleLocale);
    const C: UiAction = UiAction::OpenSearch;

    // ── hit_test ───────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), A);
        cs.add_click_target(Rect::new(0, 11, 80, 1), B);

        assert_eq!(cs.hit_test(5, 10), Some(A));
        assert_eq!(cs.hit_test(5, 11), Some(B));
    }

    #[test]
    fn hit_test_miss_returns_none() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), A);

        assert_eq!(cs.hit_test(5, 9), None);
        assert_eq!(cs.hit_test(5, 11), None);
    }

    #[test]
    fn hit_test_multi_row_rect() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 40, 3), C);

        assert_eq!(cs.hit_test(10, 4), None);
        assert_eq!(cs.hit_test(10, 5), Some(C));
        assert_eq!(cs.hit_test(10, 7), Some(C));
        assert_eq!(cs.hit_test(10, 8), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 80, 1), A);
        cs.add_click_target(Rect::new(5, 5, 10, 1), B);

        assert_eq!(cs.hit_test(7, 5), Some(B));
        assert_eq!(cs.hit_test(0, 5), Some(A));
        assert_eq!(cs.hit_test(20, 5), Some(A));
    }

    #[test]
    fn hit_test_empty() {
        let cs = ClickState::new();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    // ── add_row_target ─────────────────────────────────────────

    #[test]
    fn add_row_target_within_area() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 12, C);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(C));
    }

    #[test]
    fn add_row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, A); // before area
        cs.add_row_target(area, 15, B); // after area

        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn click_state_clear() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), A);
        cs.add_click_target(Rect::new(0, 2, 80, 1), B);
        cs.clear_targets();
        assert_eq!(cs.targets.len(), 0);
        assert_eq!(cs.hit_test(0, 1), None);
    }

    // ── layout / coordinates ───────────────────────────────────

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(30));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
        assert!(!is_narrow_layout(80));
    }

    #[test]
    fn pixel_to_row_basic() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(14.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
    }

    #[test]
    fn pixel_to_row_out_of_bounds() {
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_x_to_col_basic() {
        assert_eq!(pixel_x_to_col(0.0, 800.0, 80), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 800.0, 80), Some(1));
        assert_eq!(pixel_x_to_col(799.0, 800.0, 80), Some(79));
        assert_eq!(pixel_x_to_col(800.0, 800.0, 80), None);
        assert_eq!(pixel_x_to_col(-1.0, 800.0, 80), None);
    }

    // ── register_tab_targets ───────────────────────────────────

    #[test]
    fn tab_targets_cover_the_full_bar() {
        // 3 tabs, each padded label 6 cols, separator " │ " = 3 cols.
        let mut cs = ClickState::new();
        let tabs: Vec<(u16, UiAction)> = vec![(6, A), (6, B), (6, C)];
        cs.register_tab_targets(&tabs, 3, 0, 5, 80, 1);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 5), Some(A));
        assert_eq!(cs.hit_test(6, 5), Some(A)); // first separator col
        assert_eq!(cs.hit_test(7, 5), Some(B));
        assert_eq!(cs.hit_test(15, 5), Some(B));
        assert_eq!(cs.hit_test(16, 5), Some(C));
        assert_eq!(cs.hit_test(79, 5), Some(C)); // extends to the edge
    }

    #[test]
    fn tab_targets_unequal_width_labels() {
        let mut cs = ClickState::new();
        let tabs: Vec<(u16, UiAction)> = vec![(6, A), (11, B), (12, C)];
        cs.register_tab_targets(&tabs, 1, 0, 0, 60, 1);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 0), Some(A));
        assert_eq!(cs.hit_test(5, 0), Some(A));
        assert_eq!(cs.hit_test(6, 0), Some(B));
        assert_eq!(cs.hit_test(17, 0), Some(B));
        assert_eq!(cs.hit_test(18, 0), Some(C));
        assert_eq!(cs.hit_test(59, 0), Some(C));
    }

    #[test]
    fn tab_targets_single_and_empty() {
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[(8, C)], 3, 5, 10, 40, 1);
        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(5, 10), Some(C));
        assert_eq!(cs.hit_test(44, 10), Some(C));

        let mut cs = ClickState::new();
        cs.register_tab_targets(&[], 3, 0, 0, 80, 1);
        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn tab_targets_with_offset() {
        let mut cs = ClickState::new();
        let tabs: Vec<(u16, UiAction)> = vec![(6, A), (6, B)];
        cs.register_tab_targets(&tabs, 1, 5, 3, 30, 2);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(5, 3), Some(A));
        assert_eq!(cs.hit_test(5, 4), Some(A)); // height=2
        assert_eq!(cs.hit_test(4, 3), None); // before x offset
    }

    // ── full pipeline ──────────────────────────────────────────

    #[test]
    fn full_click_pipeline() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;

        cs.add_click_target(Rect::new(0, 11, 80, 1), A);
        cs.add_click_target(Rect::new(0, 12, 80, 1), B);

        let grid_height = 450.0;
        let cell_height = grid_height / 30.0;

        let click_y = 11.0 * cell_height + 7.0;
        let row = pixel_y_to_row(click_y, grid_height, cs.terminal_rows).unwrap();
        assert_eq!(row, 11);
        assert_eq!(cs.hit_test(0, row), Some(A));

        let click_y = 12.0 * cell_height + 2.0;
        let row = pixel_y_to_row(click_y, grid_height, cs.terminal_rows).unwrap();
        assert_eq!(cs.hit_test(0, row), Some(B));
    }
}

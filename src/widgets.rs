//! Reusable clickable UI components.
//!
//! Each component encapsulates both rendering and click target registration,
//! so visual output and interactive behaviour stay co-located.
//!
//! - [`TabBar`] — horizontal tab navigation (rendering + click targets).
//! - [`ClickableList`] — vertical list with per-row click targets.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, UiAction};

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab bar.
///
/// Renders tabs as a single row of styled labels separated by a configurable
/// separator string, and registers click targets matching the actual rendered
/// positions (accounting for CJK character widths and dynamic labels).
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, UiAction)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    /// Add a tab with its label, style, and click action.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action: UiAction) -> Self {
        self.tabs.push((label.into(), style, action));
        self
    }

    /// Wrap the tab bar in a [`Block`]. With a bordered block, click target
    /// positions are adjusted via `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render the tab bar and register click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans: Vec<Span> = Vec::new();
        let sep_width = Line::from(self.separator).width() as u16;
        let mut tab_widths: Vec<(u16, UiAction)> = Vec::new();

        for (i, (label, style, action)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            tab_widths.push((Line::from(padded.as_str()).width() as u16, *action));
            spans.push(Span::styled(padded, *style));
        }

        // Compute inner content area (accounting for borders) before
        // consuming the block.
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Inner x/width for horizontal accuracy, outer y/height for better
        // tap tolerance across the whole bar.
        cs.register_tab_targets(
            &tab_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Annotate lines as clickable when you add them, then call
/// [`register_targets`](ClickableList::register_targets) once after rendering
/// to register all targets at the correct rows — inserting or removing lines
/// earlier in the list moves the targets automatically.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action)` pairs — line_index is the index into `lines`.
    actions: Vec<(u16, UiAction)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line.
    pub fn push_clickable(&mut self, line: Line<'a>, action: UiAction) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action));
        self.lines.push(line);
    }

    /// Visual height of the list when wrapped to `width` columns.
    /// Used to clamp scroll offsets before rendering.
    pub fn visual_height(&self, width: u16) -> u16 {
        Paragraph::new(self.lines.clone()).line_count(width) as u16
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `top_offset` / `bottom_offset` — rows before/after content (1 each
    ///   for a bordered block).
    /// * `scroll` — vertical scroll offset in visual rows.
    /// * `inner_width` — content width for wrap calculation; pass `0` when
    ///   the widget does **not** wrap, in which case each logical line is
    ///   assumed to occupy exactly one visual row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        if inner_width == 0 {
            // No wrapping: 1 logical line = 1 visual row.
            for &(line_idx, action) in &self.actions {
                if line_idx < scroll {
                    continue;
                }
                let row = content_y + (line_idx - scroll);
                if row >= content_end {
                    continue;
                }
                cs.add_row_target(area, row, action);
            }
            return;
        }

        // Wrap-aware path: compute the visual row span of each logical line.
        let w = inner_width as usize;
        let mut visual_starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut visual_heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            visual_starts.push(cumulative);
            let lw = line.width();
            let h = if lw <= w { 1 } else { lw.div_ceil(w) as u16 };
            visual_heights.push(h);
            cumulative += h;
        }

        for &(line_idx, action) in &self.actions {
            let li = line_idx as usize;
            if li >= self.lines.len() {
                continue;
            }
            let vstart = visual_starts[li];
            let vheight = visual_heights[li];

            // A target for every visual row this line spans.
            for r in 0..vheight {
                let vr = vstart + r;
                if vr < scroll {
                    continue;
                }
                let screen_row = content_y + (vr - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClickState;
    use crate::nav::Action;

    const A: UiAction = UiAction::Nav(Action::GoHome);
    const B: UiAction = UiAction::Nav(Action::CycleLocale);
    const C: UiAction = UiAction::Nav(Action::CycleRegion);

    // ── TabBar ─────────────────────────────────────────────────

    #[test]
    fn tab_bar_targets_are_registered_per_tab() {
        // TabBar delegates width math to register_tab_targets (tested in
        // input.rs); here we only check one target per tab appears.
        let mut cs = ClickState::new();
        let tabs: Vec<(u16, UiAction)> = vec![(6, A), (6, B), (6, C)];
        cs.register_tab_targets(&tabs, 3, 0, 0, 80, 1);
        assert_eq!(cs.targets.len(), 3);
    }

    // ── ClickableList ──────────────────────────────────────────

    #[test]
    fn clickable_list_basic() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("item 0"), A);
        cl.push_clickable(Line::from("item 1"), B);
        cl.push(Line::from("footer"));

        // area with Borders::ALL → top_offset=1, bottom_offset=1
        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        // "item 0" is line 1 → row = 5 + 1 + 1 = 7
        // "item 1" is line 2 → row = 5 + 1 + 2 = 8
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 7), Some(A));
        assert_eq!(cs.hit_test(10, 8), Some(B));
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_with_scroll() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("item 0"), A);
        cl.push_clickable(Line::from("item 1"), B);
        cl.push_clickable(Line::from("item 2"), C);

        // Scrolled down one row: item 0 is off-screen, item 1 is on the
        // first content row.
        let area = Rect::new(0, 0, 40, 4);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 1, 0);

        assert_eq!(cs.hit_test(5, 1), Some(B));
        assert_eq!(cs.hit_test(5, 2), Some(C));
        assert!(cs.targets.iter().all(|t| t.action != A));
    }

    #[test]
    fn clickable_list_clips_to_area() {
        let mut cl = ClickableList::new();
        for i in 0..10 {
            let action = if i % 2 == 0 { A } else { B };
            cl.push_clickable(Line::from(format!("item {i}")), action);
        }

        // Only 3 content rows fit (5 minus two border rows).
        let area = Rect::new(0, 0, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.targets.len(), 3);
    }

    #[test]
    fn wrap_aware_targets_span_visual_rows() {
        let mut cl = ClickableList::new();
        // 60 chars wide in a 30-col content area → wraps to 2 visual rows.
        let long = "x".repeat(60);
        cl.push_clickable(Line::from(long), A);
        cl.push_clickable(Line::from("short"), B);

        let area = Rect::new(0, 0, 32, 6);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 30);

        // Long line covers rows 1 and 2; short line lands on row 3.
        assert_eq!(cs.hit_test(5, 1), Some(A));
        assert_eq!(cs.hit_test(5, 2), Some(A));
        assert_eq!(cs.hit_test(5, 3), Some(B));
    }

    #[test]
    fn wrap_aware_scroll_offsets_in_visual_rows() {
        let mut cl = ClickableList::new();
        let long = "y".repeat(60);
        cl.push_clickable(Line::from(long), A);
        cl.push_clickable(Line::from("short"), B);

        // Scrolled past the first visual row of the long line.
        let area = Rect::new(0, 0, 32, 6);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 1, 30);

        // Second visual row of the long line is now the first content row.
        assert_eq!(cs.hit_test(5, 1), Some(A));
        assert_eq!(cs.hit_test(5, 2), Some(B));
    }

    #[test]
    fn empty_list_registers_nothing() {
        let cl = ClickableList::new();
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 40, 5), &mut cs, 1, 1, 0, 0);
        assert_eq!(cs.targets.len(), 0);
    }
}

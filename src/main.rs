mod content;
mod input;
mod locale;
mod nav;
mod prefs;
mod render;
mod search;
mod view;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::{Frame, Terminal};
use ratzilla::{DomBackend, WebRenderer};

use input::{is_narrow_layout, ClickState, UiAction};
use locale::Locale;
use nav::{Action, NavState, View, ALL_TABS};
use view::ViewDescription;

/// Rows scrolled per j/k press or wheel-ish tap.
const SCROLL_STEP: u16 = 2;

/// Transient search overlay state. Never part of [`NavState`]: the overlay
/// is dismissed without leaving a trace, and picking a result goes through
/// an ordinary router action.
struct SearchBox {
    open: bool,
    query: String,
    selected: usize,
}

impl SearchBox {
    fn new() -> Self {
        Self {
            open: false,
            query: String::new(),
            selected: 0,
        }
    }

    fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.selected = 0;
    }

    fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.selected = 0;
    }
}

/// Query the grid container's bounding rect and convert pixel coordinates to
/// a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = input::pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = input::pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// The single funnel for every input gesture. Router actions go through
/// `nav::transition`; shell commands touch only shell-local cells.
fn apply(
    action: UiAction,
    nav: &RefCell<NavState>,
    sbox: &RefCell<SearchBox>,
    scroll: &RefCell<u16>,
) {
    match action {
        UiAction::Nav(a) => {
            let next = {
                let cur = nav.borrow();
                nav::transition(&cur, a)
            };
            let mut cur = nav.borrow_mut();
            if next != *cur {
                #[cfg(target_arch = "wasm32")]
                if next.locale != cur.locale || next.region != cur.region {
                    prefs::store(next.locale, next.region);
                }
                // Scroll survives locale/region/menu changes but resets when
                // the location itself moves.
                let moved = next.view != cur.view
                    || next.category != cur.category
                    || next.topic != cur.topic
                    || next.tab != cur.tab;
                if moved {
                    *scroll.borrow_mut() = 0;
                }
                *cur = next;
            }
            drop(cur);
            // Navigating anywhere dismisses the overlay.
            let mut sb = sbox.borrow_mut();
            if sb.open {
                sb.close();
            }
        }
        UiAction::OpenSearch => sbox.borrow_mut().open(),
        UiAction::CloseSearch => sbox.borrow_mut().close(),
        UiAction::PickResult(i) => {
            let query = sbox.borrow().query.clone();
            let locale = nav.borrow().locale;
            let picked = search::search(&query, locale)
                .matches
                .get(i as usize)
                .map(|m| m.action);
            if let Some(a) = picked {
                apply(UiAction::Nav(a), nav, sbox, scroll);
            }
        }
        UiAction::ScrollUp => {
            let mut s = scroll.borrow_mut();
            *s = s.saturating_sub(SCROLL_STEP);
        }
        UiAction::ScrollDown => {
            let mut s = scroll.borrow_mut();
            *s = s.saturating_add(SCROLL_STEP);
        }
    }
}

/// Browse-mode key map. Digits are contextual: tabs inside a category,
/// category cards on the home screen.
fn browse_key_action(c: char, state: &NavState) -> Option<UiAction> {
    match c {
        '/' => Some(UiAction::OpenSearch),
        'm' => Some(UiAction::Nav(Action::ToggleMenu)),
        'l' => Some(UiAction::Nav(Action::CycleLocale)),
        'g' => Some(UiAction::Nav(Action::CycleRegion)),
        'h' => Some(UiAction::Nav(Action::GoHome)),
        'f' => Some(UiAction::Nav(Action::GoTo(View::GlobalFaq))),
        'r' => Some(UiAction::Nav(Action::GoTo(View::GlobalResources))),
        'a' => Some(UiAction::Nav(Action::GoTo(View::Legal))),
        'q' => {
            if state.menu_open {
                Some(UiAction::Nav(Action::ToggleMenu))
            } else {
                Some(UiAction::Nav(Action::GoHome))
            }
        }
        'j' => Some(UiAction::ScrollDown),
        'k' => Some(UiAction::ScrollUp),
        'n' => neighbor_topic(state, 1),
        'p' => neighbor_topic(state, -1),
        '1'..='9' => {
            let idx = c as usize - '1' as usize;
            if state.view == View::Category {
                ALL_TABS
                    .get(idx)
                    .map(|&t| UiAction::Nav(Action::SwitchTab(t)))
            } else {
                content::categories()
                    .get(idx)
                    .map(|cat| UiAction::Nav(Action::OpenCategory(cat.id)))
            }
        }
        _ => None,
    }
}

/// Next/previous sub-topic within the active category, wrapping around.
fn neighbor_topic(state: &NavState, delta: i32) -> Option<UiAction> {
    let cat = content::category(state.category?)?;
    let idx = cat.topics.iter().position(|t| Some(t.id) == state.topic)?;
    let n = cat.topics.len() as i32;
    let next = ((idx as i32 + delta) % n + n) % n;
    Some(UiAction::Nav(Action::OpenTopic(
        cat.id,
        cat.topics[next as usize].id,
    )))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    let (restored_locale, restored_region) = {
        let pair = prefs::load();
        web_sys::console::log_1(
            &format!(
                "dev-atlas: boot locale={} region={}",
                pair.0.code(),
                pair.1.code()
            )
            .into(),
        );
        pair
    };
    #[cfg(not(target_arch = "wasm32"))]
    let (restored_locale, restored_region) = (locale::BASE_LOCALE, locale::GLOBAL_REGION);

    let nav = Rc::new(RefCell::new(NavState::boot(
        restored_locale,
        restored_region,
    )));
    let sbox = Rc::new(RefCell::new(SearchBox::new()));
    let scroll = Rc::new(RefCell::new(0u16));
    let click_state = Rc::new(RefCell::new(ClickState::new()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch handler
    terminal.on_mouse_event({
        let nav = nav.clone();
        let sbox = sbox.clone();
        let scroll = scroll.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            // ratzilla's MouseEvent already reports terminal grid coordinates
            // (cells), so the pixel->cell conversion is done by the backend.
            let (col, row) = (mouse_event.col, mouse_event.row);
            let matched = cs.hit_test(col, row);
            drop(cs);

            if let Some(action) = matched {
                apply(action, &nav, &sbox, &scroll);
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let nav = nav.clone();
        let sbox = sbox.clone();
        let scroll = scroll.clone();
        move |key_event| {
            if sbox.borrow().open {
                match key_event.code {
                    KeyCode::Esc => apply(UiAction::CloseSearch, &nav, &sbox, &scroll),
                    KeyCode::Enter => {
                        let selected = sbox.borrow().selected;
                        apply(
                            UiAction::PickResult(selected as u8),
                            &nav,
                            &sbox,
                            &scroll,
                        );
                    }
                    KeyCode::Backspace => {
                        let mut sb = sbox.borrow_mut();
                        sb.query.pop();
                        sb.selected = 0;
                    }
                    KeyCode::Up => {
                        let mut sb = sbox.borrow_mut();
                        sb.selected = sb.selected.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        let count = {
                            let sb = sbox.borrow();
                            search::search(&sb.query, nav.borrow().locale).matches.len()
                        };
                        let mut sb = sbox.borrow_mut();
                        if count > 0 {
                            sb.selected = (sb.selected + 1).min(count - 1);
                        }
                    }
                    KeyCode::Char(c) => {
                        let mut sb = sbox.borrow_mut();
                        sb.query.push(c);
                        sb.selected = 0;
                    }
                    _ => {}
                }
                return;
            }

            match key_event.code {
                KeyCode::Esc => {
                    let menu_open = nav.borrow().menu_open;
                    let action = if menu_open {
                        Action::ToggleMenu
                    } else {
                        Action::GoHome
                    };
                    apply(UiAction::Nav(action), &nav, &sbox, &scroll);
                }
                KeyCode::Up => apply(UiAction::ScrollUp, &nav, &sbox, &scroll),
                KeyCode::Down => apply(UiAction::ScrollDown, &nav, &sbox, &scroll),
                KeyCode::Char(c) => {
                    let action = browse_key_action(c, &nav.borrow());
                    if let Some(action) = action {
                        apply(action, &nav, &sbox, &scroll);
                    }
                }
                _ => {}
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let nav_state = nav.borrow();
            let size = f.area();

            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = size.width;
            cs.terminal_rows = size.height;
            cs.clear_targets();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            let vd = view::build_view(&nav_state);
            render_header(&vd, f, chunks[0], &mut cs);

            let applied = render::render(&vd, f, chunks[1], &mut cs, *scroll.borrow());
            *scroll.borrow_mut() = applied;

            render_footer(&nav_state, f, chunks[2], &mut cs);

            let sb = sbox.borrow();
            if sb.open {
                let results = search::search(&sb.query, nav_state.locale);
                render::render_search_overlay(
                    &sb.query,
                    &results,
                    sb.selected,
                    nav_state.locale,
                    f,
                    chunks[1],
                    &mut cs,
                );
            }
        }
    });

    Ok(())
}

/// Header bar: breadcrumb trail on the left, locale/region/search buttons on
/// the right (plus the menu button on narrow screens).
fn render_header(vd: &ViewDescription, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let narrow = is_narrow_layout(area.width);

    let mut buttons: Vec<(String, UiAction)> = Vec::new();
    if narrow {
        buttons.push(("[≡]".to_string(), UiAction::Nav(Action::ToggleMenu)));
    }
    buttons.push((
        format!("[{}]", vd.locale.label()),
        UiAction::Nav(Action::CycleLocale),
    ));
    buttons.push((
        format!("[{}]", vd.region.label(vd.locale)),
        UiAction::Nav(Action::CycleRegion),
    ));
    buttons.push(("[/]".to_string(), UiAction::OpenSearch));

    let crumb_text = format!(" {}", vd.breadcrumbs.join(" › "));
    let crumb_width = Line::from(crumb_text.as_str()).width() as u16;

    let buttons_width: u16 = buttons
        .iter()
        .map(|(label, _)| Line::from(label.as_str()).width() as u16 + 1)
        .sum();

    let inner_width = area.width.saturating_sub(2);
    let pad = inner_width
        .saturating_sub(crumb_width)
        .saturating_sub(buttons_width);

    let mut spans = vec![Span::styled(
        crumb_text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" ".repeat(pad as usize)));

    // Register a click target per button at its rendered columns.
    let mut x = area.x + 1 + crumb_width + pad;
    for (label, action) in &buttons {
        let w = Line::from(label.as_str()).width() as u16;
        spans.push(Span::styled(
            label.clone(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(" "));
        cs.add_click_target(Rect::new(x, area.y, w + 1, area.height), *action);
        x += w + 1;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let widget = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(widget, area);
}

/// Help bar. The whole bar is a tap target for search, the most common
/// action on touch screens.
fn render_footer(state: &NavState, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let hints = footer_hints(state);
    let widget = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(ratzilla::ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);

    for row in area.y..area.y + area.height {
        cs.add_row_target(area, row, UiAction::OpenSearch);
    }
}

fn footer_hints(state: &NavState) -> &'static str {
    let in_category = state.view == View::Category;
    match (state.locale, in_category) {
        (Locale::Ja, true) => "[/] 検索  [1-4] タブ  [N/P] トピック  [L] 言語  [G] 地域  [J/K] スクロール",
        (Locale::Ja, false) => "[/] 検索  [L] 言語  [G] 地域  [F] FAQ  [R] リソース  [H] ホーム",
        (Locale::Es, true) => "[/] buscar  [1-4] pestañas  [N/P] tema  [L] idioma  [G] región  [J/K] desplazar",
        (Locale::Es, false) => "[/] buscar  [L] idioma  [G] región  [F] FAQ  [R] recursos  [H] inicio",
        (Locale::En, true) => "[/] search  [1-4] tabs  [N/P] topic  [L] language  [G] region  [J/K] scroll",
        (Locale::En, false) => "[/] search  [L] language  [G] region  [F] FAQ  [R] resources  [H] home",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{BASE_LOCALE, GLOBAL_REGION};

    fn boot_cells() -> (RefCell<NavState>, RefCell<SearchBox>, RefCell<u16>) {
        (
            RefCell::new(NavState::boot(BASE_LOCALE, GLOBAL_REGION)),
            RefCell::new(SearchBox::new()),
            RefCell::new(0u16),
        )
    }

    #[test]
    fn nav_action_resets_scroll_on_move() {
        let (nav, sbox, scroll) = boot_cells();
        *scroll.borrow_mut() = 7;
        apply(
            UiAction::Nav(Action::OpenCategory("web-dev")),
            &nav,
            &sbox,
            &scroll,
        );
        assert_eq!(*scroll.borrow(), 0);
        assert_eq!(nav.borrow().category, Some("web-dev"));
    }

    #[test]
    fn locale_cycle_preserves_scroll() {
        let (nav, sbox, scroll) = boot_cells();
        *scroll.borrow_mut() = 7;
        apply(UiAction::Nav(Action::CycleLocale), &nav, &sbox, &scroll);
        assert_eq!(*scroll.borrow(), 7);
        assert_ne!(nav.borrow().locale, BASE_LOCALE);
    }

    #[test]
    fn rejected_nav_leaves_everything_untouched() {
        let (nav, sbox, scroll) = boot_cells();
        *scroll.borrow_mut() = 3;
        let before = nav.borrow().clone();
        apply(
            UiAction::Nav(Action::OpenTopic("mobile-dev", "frontend")),
            &nav,
            &sbox,
            &scroll,
        );
        assert_eq!(*nav.borrow(), before);
        assert_eq!(*scroll.borrow(), 3);
    }

    #[test]
    fn picking_a_result_navigates_and_closes_overlay() {
        let (nav, sbox, scroll) = boot_cells();
        sbox.borrow_mut().open();
        sbox.borrow_mut().query.push_str("kotlin");
        apply(UiAction::PickResult(0), &nav, &sbox, &scroll);
        assert!(!sbox.borrow().open);
        assert_eq!(nav.borrow().category, Some("mobile-dev"));
        assert_eq!(nav.borrow().topic, Some("android"));
    }

    #[test]
    fn picking_out_of_range_is_a_noop() {
        let (nav, sbox, scroll) = boot_cells();
        sbox.borrow_mut().open();
        sbox.borrow_mut().query.push_str("kotlin");
        let before = nav.borrow().clone();
        apply(UiAction::PickResult(200), &nav, &sbox, &scroll);
        assert_eq!(*nav.borrow(), before);
        assert!(sbox.borrow().open);
    }

    #[test]
    fn scroll_commands_saturate() {
        let (nav, sbox, scroll) = boot_cells();
        apply(UiAction::ScrollUp, &nav, &sbox, &scroll);
        assert_eq!(*scroll.borrow(), 0);
        apply(UiAction::ScrollDown, &nav, &sbox, &scroll);
        assert_eq!(*scroll.borrow(), SCROLL_STEP);
    }

    #[test]
    fn digits_switch_tabs_inside_a_category() {
        let (nav, sbox, scroll) = boot_cells();
        apply(
            UiAction::Nav(Action::OpenCategory("mobile-dev")),
            &nav,
            &sbox,
            &scroll,
        );
        let action = browse_key_action('3', &nav.borrow()).expect("tab key");
        apply(action, &nav, &sbox, &scroll);
        assert_eq!(nav.borrow().tab, nav::Tab::Jobs);
    }

    #[test]
    fn digits_open_categories_on_home() {
        let (nav, sbox, scroll) = boot_cells();
        let action = browse_key_action('1', &nav.borrow()).expect("category key");
        apply(action, &nav, &sbox, &scroll);
        assert_eq!(nav.borrow().category, Some("mobile-dev"));
        assert_eq!(nav.borrow().topic, Some("ios"));
    }

    #[test]
    fn topic_cycling_wraps() {
        let (nav, sbox, scroll) = boot_cells();
        apply(
            UiAction::Nav(Action::OpenCategory("mobile-dev")),
            &nav,
            &sbox,
            &scroll,
        );
        let next = neighbor_topic(&nav.borrow(), 1).expect("next topic");
        apply(next, &nav, &sbox, &scroll);
        assert_eq!(nav.borrow().topic, Some("android"));
        let wrap = neighbor_topic(&nav.borrow(), 1).expect("wrap");
        apply(wrap, &nav, &sbox, &scroll);
        assert_eq!(nav.borrow().topic, Some("ios"));
    }

    #[test]
    fn search_box_open_clears_previous_query() {
        let mut sb = SearchBox::new();
        sb.open();
        sb.query.push_str("rust");
        sb.selected = 2;
        sb.close();
        sb.open();
        assert!(sb.query.is_empty());
        assert_eq!(sb.selected, 0);
    }
}

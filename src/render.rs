//! Materialize a [`ViewDescription`] into ratatui widgets and click targets.
//!
//! Everything here is read-only over the description: state changes flow
//! exclusively through the click/key handlers in `main.rs`. Dynamic text is
//! rendered through `Span`/`Line` construction only — no markup assembly.

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState, UiAction};
use crate::locale::Locale;
use crate::nav::Action;
use crate::search::{SearchResults, MIN_QUERY_LEN};
use crate::view::{
    global_fallback_notice, Body, JobsPane, NavEntry, Pane, QaItem, ResourceItem, ViewDescription,
};
use crate::widgets::{ClickableList, TabBar};

const SIDE_NAV_WIDTH: u16 = 26;

/// Render the main body (side navigation + active view content).
/// Returns the effective (clamped) scroll offset so the shell can store it.
pub fn render(vd: &ViewDescription, f: &mut Frame, area: Rect, cs: &mut ClickState, scroll: u16) -> u16 {
    let narrow = is_narrow_layout(area.width);

    if narrow {
        // Narrow screens show either the menu or the content, never both.
        if vd.menu_open {
            render_nav(vd, f, area, cs);
            return scroll;
        }
        return render_content(vd, f, area, cs, scroll, narrow);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDE_NAV_WIDTH), Constraint::Min(20)])
        .split(area);

    render_nav(vd, f, chunks[0], cs);
    render_content(vd, f, chunks[1], cs, scroll, narrow)
}

// ── Side navigation ────────────────────────────────────────────────────

fn render_nav(vd: &ViewDescription, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let mut cl = ClickableList::new();
    for entry in &vd.nav {
        cl.push_clickable(nav_line(entry), UiAction::Nav(entry.action));
    }
    cl.push(Line::from(""));
    for (label, action) in footer_nav_entries(vd.locale) {
        let selected = matches!(
            (action, vd.body_kind()),
            (Action::GoTo(v), Some(bv)) if v == bv
        );
        cl.push_clickable(
            Line::from(Span::styled(
                format!("  {label}"),
                Style::default().fg(if selected { Color::White } else { Color::Gray }),
            )),
            UiAction::Nav(action),
        );
    }

    cl.register_targets(area, cs, 1, 1, 0, 0);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " dev-atlas ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn nav_line(entry: &NavEntry) -> Line<'static> {
    let marker = if entry.selected { "▸ " } else { "  " };
    let indent = if entry.depth == 0 { "" } else { "  " };
    let style = if entry.selected {
        Style::default().fg(entry.color).add_modifier(Modifier::BOLD)
    } else if entry.depth == 0 {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(
        format!("{indent}{marker}{}", entry.label),
        style,
    ))
}

fn footer_nav_entries(locale: Locale) -> [(&'static str, Action); 3] {
    use crate::nav::View;
    let resources = match locale {
        Locale::Ja => "リソース",
        Locale::Es => "Recursos",
        Locale::En => "Resources",
    };
    [
        ("FAQ", Action::GoTo(View::GlobalFaq)),
        (resources, Action::GoTo(View::GlobalResources)),
        ("About", Action::GoTo(View::Legal)),
    ]
}

// ── View content ───────────────────────────────────────────────────────

fn render_content(
    vd: &ViewDescription,
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
    scroll: u16,
    narrow: bool,
) -> u16 {
    let area = if vd.region_fallback {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);
        let notice = Paragraph::new(Line::from(Span::styled(
            format!(" ⓘ {}", global_fallback_notice(vd.locale, vd.region)),
            Style::default().fg(Color::Yellow),
        )));
        f.render_widget(notice, chunks[0]);
        chunks[1]
    } else {
        area
    };

    match &vd.body {
        Body::Home { intro, cards } => {
            let mut cl = ClickableList::new();
            cl.push(Line::from(Span::styled(
                intro.clone(),
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(""));
            for card in cards {
                cl.push_clickable(
                    Line::from(Span::styled(
                        format!("{} {}", card.icon, card.title),
                        Style::default().fg(card.color).add_modifier(Modifier::BOLD),
                    )),
                    UiAction::Nav(card.action),
                );
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!("   {}", card.description),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(
                            format!("  ({})", card.meta),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    UiAction::Nav(card.action),
                );
                cl.push(Line::from(""));
            }
            paint_list(cl, None, f, area, cs, scroll, narrow)
        }
        Body::Category {
            title,
            description,
            color,
            tabs,
            pane,
        } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3)])
                .split(area);

            let mut bar = TabBar::new(" │ ");
            for t in tabs {
                let style = if t.active {
                    Style::default().fg(*color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                bar = bar.tab(
                    t.label.clone(),
                    style,
                    UiAction::Nav(Action::SwitchTab(t.tab)),
                );
            }
            bar.render(f, chunks[0], cs);

            let mut cl = ClickableList::new();
            if !narrow {
                cl.push(Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
                cl.push(Line::from(""));
            }
            push_pane(&mut cl, pane, vd.locale);
            paint_list(
                cl,
                Some((title.clone(), *color)),
                f,
                chunks[1],
                cs,
                scroll,
                narrow,
            )
        }
        Body::FaqList { title, items } => {
            let mut cl = ClickableList::new();
            push_qa_items(&mut cl, items);
            paint_list(cl, Some((title.clone(), Color::Cyan)), f, area, cs, scroll, narrow)
        }
        Body::ResourceList { title, items } => {
            let mut cl = ClickableList::new();
            push_resources(&mut cl, items);
            paint_list(cl, Some((title.clone(), Color::Green)), f, area, cs, scroll, narrow)
        }
        Body::Legal { title, text } => {
            let mut cl = ClickableList::new();
            for line in text.lines() {
                cl.push(Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Color::Gray),
                )));
            }
            paint_list(cl, Some((title.clone(), Color::DarkGray)), f, area, cs, scroll, narrow)
        }
    }
}

/// Shared tail of every content render: clamp scroll against the wrapped
/// height, paint the paragraph, register targets.
#[allow(clippy::too_many_arguments)]
fn paint_list(
    cl: ClickableList<'static>,
    title: Option<(String, Color)>,
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
    scroll: u16,
    narrow: bool,
) -> u16 {
    let borders = if narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let mut block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    if let Some((title, color)) = &title {
        block = block.title(Span::styled(
            format!(" {title} "),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
    }

    let inner = block.inner(area);
    let content_height = cl.visual_height(inner.width);
    let max_scroll = content_height.saturating_sub(inner.height);
    let scroll = scroll.min(max_scroll);

    cl.register_targets(area, cs, 1, 1, scroll, inner.width);
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);
    scroll
}

// ── Pane bodies ────────────────────────────────────────────────────────

fn push_pane(cl: &mut ClickableList<'static>, pane: &Pane, locale: Locale) {
    match pane {
        Pane::Roadmap(milestones) => {
            for m in milestones {
                cl.push(Line::from(vec![
                    Span::styled(
                        format!("◆ {}", m.title),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", m.stage_label),
                        Style::default().fg(m.stage_color),
                    ),
                ]));
                for item in &m.items {
                    cl.push(Line::from(Span::styled(
                        format!("    • {item}"),
                        Style::default().fg(Color::Gray),
                    )));
                }
                cl.push(Line::from(""));
            }
        }
        Pane::Resources(items) => push_resources(cl, items),
        Pane::Jobs(JobsPane::Aggregate {
            platforms,
            top_skills,
            salary_band,
        }) => {
            cl.push(Line::from(vec![
                Span::styled(salary_heading(locale), Style::default().fg(Color::Gray)),
                Span::styled(
                    salary_band.clone(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]));
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                skills_heading(locale),
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(Span::styled(
                format!("    {}", top_skills.join(", ")),
                Style::default().fg(Color::White),
            )));
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                platforms_heading(locale),
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(Span::styled(
                format!("    {}", platforms.join(", ")),
                Style::default().fg(Color::White),
            )));
        }
        Pane::Jobs(JobsPane::Postings(posts)) => {
            for p in posts {
                cl.push(Line::from(Span::styled(
                    format!("▪ {}", p.title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )));
                cl.push(Line::from(Span::styled(
                    format!("    {} — {}", p.company, p.location),
                    Style::default().fg(Color::Gray),
                )));
                cl.push(Line::from(""));
            }
        }
        Pane::Faq(items) => push_qa_items(cl, items),
        Pane::ComingSoon(text) | Pane::PickTopic(text) => {
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                format!("  {text}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
}

fn push_resources(cl: &mut ClickableList<'static>, items: &[ResourceItem]) {
    for r in items {
        cl.push(Line::from(vec![
            Span::styled(
                format!("{:>8} ", r.kind_label),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                r.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", r.lang_code),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        cl.push(Line::from(Span::styled(
            format!("         {}", r.description),
            Style::default().fg(Color::Gray),
        )));
        cl.push(Line::from(Span::styled(
            format!("         {}", r.url),
            Style::default().fg(Color::Blue),
        )));
        cl.push(Line::from(""));
    }
}

fn push_qa_items(cl: &mut ClickableList<'static>, items: &[QaItem]) {
    for qa in items {
        cl.push(Line::from(Span::styled(
            format!("Q. {}", qa.question),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        cl.push(Line::from(Span::styled(
            format!("   {}", qa.answer),
            Style::default().fg(Color::Gray),
        )));
        cl.push(Line::from(""));
    }
}

fn salary_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "  給与レンジ: ",
        Locale::Es => "  Banda salarial: ",
        Locale::En => "  Salary band: ",
    }
}

fn skills_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "  求められるスキル:",
        Locale::Es => "  Habilidades más pedidas:",
        Locale::En => "  Top skills:",
    }
}

fn platforms_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "  主な求人サイト:",
        Locale::Es => "  Dónde buscar:",
        Locale::En => "  Where to look:",
    }
}

// ── Search overlay ─────────────────────────────────────────────────────

/// Paint the transient search overlay over the body. Results are clickable;
/// the highlighted row follows the keyboard selection.
pub fn render_search_overlay(
    query: &str,
    results: &SearchResults,
    selected: usize,
    locale: Locale,
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
) {
    let overlay = centered_rect(area, 56, 16);
    f.render_widget(Clear, overlay);

    let mut cl = ClickableList::new();
    cl.push(Line::from(vec![
        Span::styled(" 🔍 ", Style::default().fg(Color::Yellow)),
        Span::styled(
            query.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ]));
    cl.push(Line::from(""));

    if query.chars().count() < MIN_QUERY_LEN {
        cl.push(Line::from(Span::styled(
            format!("   {}", type_more_hint(locale)),
            Style::default().fg(Color::DarkGray),
        )));
    } else if results.is_empty() {
        cl.push(Line::from(Span::styled(
            format!("   {}", no_matches(locale)),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (i, m) in results.matches.iter().enumerate() {
            let row_style = if i == selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" {:<8} ", m.kind.label(locale)),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(m.title.clone(), row_style),
                    Span::styled(
                        format!("  {}", m.context),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                UiAction::PickResult(i as u8),
            );
        }
        if results.overflow() > 0 {
            cl.push(Line::from(Span::styled(
                format!("   {}", more_hint(locale, results.overflow())),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            format!(" {}", close_hint(locale)),
            Style::default().fg(Color::DarkGray),
        )),
        UiAction::CloseSearch,
    );

    cl.register_targets(overlay, cs, 1, 1, 0, 0);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            search_title(locale),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), overlay);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 3;
    Rect::new(x, y, w, h)
}

fn search_title(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => " 検索 ",
        Locale::Es => " Buscar ",
        Locale::En => " Search ",
    }
}

fn type_more_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "2文字以上入力してください",
        Locale::Es => "Escribe al menos 2 caracteres",
        Locale::En => "Type at least 2 characters",
    }
}

fn no_matches(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "一致する結果がありません",
        Locale::Es => "Sin resultados",
        Locale::En => "No matches found",
    }
}

fn more_hint(locale: Locale, n: usize) -> String {
    match locale {
        Locale::Ja => format!("ほか{n}件"),
        Locale::Es => format!("+{n} más"),
        Locale::En => format!("+{n} more"),
    }
}

fn close_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "[Esc] 閉じる   [↑↓] 選択   [Enter] 開く",
        Locale::Es => "[Esc] cerrar   [↑↓] elegir   [Enter] abrir",
        Locale::En => "[Esc] close   [↑↓] select   [Enter] open",
    }
}

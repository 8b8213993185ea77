//! The renderer's pure half: derive a full screen description from the
//! navigation state and the content repository.
//!
//! `build_view` has no side effects and no memory of prior output. It is the
//! only place locale/region fallback and placeholder rules are decided; the
//! materialization in `render.rs` just draws what it is told. Keeping this
//! layer widget-free makes every screen snapshot-testable from a plain
//! `NavState` fixture.

use ratzilla::ratatui::style::Color;

use crate::content;
use crate::content::{FaqData, JobsData};
use crate::locale::{Locale, Region};
use crate::nav::{Action, NavState, Tab, View, ALL_TABS};

// ── Description types ──────────────────────────────────────────────────

pub struct ViewDescription {
    pub locale: Locale,
    pub region: Region,
    pub menu_open: bool,
    /// Trail from home to the current location, already localized.
    pub breadcrumbs: Vec<String>,
    /// Side navigation: categories, with the active one expanded.
    pub nav: Vec<NavEntry>,
    pub body: Body,
    /// True when jobs data fell back from the active region to global;
    /// the shell surfaces a "showing global data" notice.
    pub region_fallback: bool,
}

impl ViewDescription {
    /// The view this description was built for, derived from the body shape.
    pub fn body_kind(&self) -> Option<View> {
        match self.body {
            Body::Home { .. } => Some(View::Home),
            Body::Category { .. } => Some(View::Category),
            Body::FaqList { .. } => Some(View::GlobalFaq),
            Body::ResourceList { .. } => Some(View::GlobalResources),
            Body::Legal { .. } => Some(View::Legal),
        }
    }
}

pub struct NavEntry {
    pub label: String,
    pub action: Action,
    pub selected: bool,
    /// 0 = category row, 1 = sub-topic row under the active category.
    pub depth: u8,
    pub color: Color,
}

pub enum Body {
    Home {
        intro: String,
        cards: Vec<CategoryCard>,
    },
    Category {
        title: String,
        description: String,
        color: Color,
        tabs: Vec<TabEntry>,
        pane: Pane,
    },
    FaqList {
        title: String,
        items: Vec<QaItem>,
    },
    ResourceList {
        title: String,
        items: Vec<ResourceItem>,
    },
    Legal {
        title: String,
        text: String,
    },
}

pub struct CategoryCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Localized sub-topic count, e.g. "2 topics".
    pub meta: String,
    pub color: Color,
    pub action: Action,
}

pub struct TabEntry {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
}

pub enum Pane {
    Roadmap(Vec<MilestoneView>),
    Resources(Vec<ResourceItem>),
    Jobs(JobsPane),
    Faq(Vec<QaItem>),
    /// Content absent for the current locale/region — fixed placeholder,
    /// never an empty container.
    ComingSoon(String),
    /// Category has no sub-topic selected (or none at all).
    PickTopic(String),
}

pub struct MilestoneView {
    pub title: String,
    pub stage_label: String,
    pub stage_color: Color,
    pub items: Vec<String>,
}

pub struct ResourceItem {
    pub kind_label: String,
    pub title: String,
    pub url: String,
    pub description: String,
    /// Code of the language the material is written in, e.g. "ja".
    pub lang_code: String,
}

pub enum JobsPane {
    Aggregate {
        platforms: Vec<String>,
        top_skills: Vec<String>,
        salary_band: String,
    },
    Postings(Vec<PostingView>),
}

pub struct PostingView {
    pub title: String,
    pub company: String,
    pub location: String,
}

pub struct QaItem {
    pub question: String,
    pub answer: String,
}

// ── Chrome strings ─────────────────────────────────────────────────────

fn home_crumb(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "ホーム",
        Locale::Es => "Inicio",
        Locale::En => "Home",
    }
}

fn home_intro(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "分野を選んで学習ロードマップを進めましょう。",
        Locale::Es => "Elige un campo y sigue su ruta de aprendizaje.",
        Locale::En => "Pick a field and follow its learning roadmap.",
    }
}

fn coming_soon(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "準備中です。しばらくお待ちください。",
        Locale::Es => "Próximamente.",
        Locale::En => "Coming soon.",
    }
}

fn pick_topic(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "左のメニューからサブトピックを選んでください。",
        Locale::Es => "Selecciona un subtema en el menú.",
        Locale::En => "Select a sub-topic from the menu.",
    }
}

fn no_topics_yet(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "このカテゴリのコンテンツは準備中です。",
        Locale::Es => "El contenido de esta categoría llegará pronto.",
        Locale::En => "Content for this category is on its way.",
    }
}

fn faq_title(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "よくある質問",
        Locale::Es => "Preguntas frecuentes",
        Locale::En => "Frequently Asked Questions",
    }
}

fn resources_title(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "おすすめリソース",
        Locale::Es => "Recursos recomendados",
        Locale::En => "Recommended Resources",
    }
}

fn legal_title(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "このサイトについて",
        Locale::Es => "Aviso legal",
        Locale::En => "About & Legal",
    }
}

fn topic_count(locale: Locale, n: usize) -> String {
    match locale {
        Locale::Ja => format!("{n}トピック"),
        Locale::Es => format!("{n} temas"),
        Locale::En => {
            if n == 1 {
                "1 topic".to_string()
            } else {
                format!("{n} topics")
            }
        }
    }
}

/// Notice text for the region fallback flag; the shell renders it when
/// `region_fallback` is set.
pub fn global_fallback_notice(locale: Locale, region: Region) -> String {
    let region = region.label(locale);
    match locale {
        Locale::Ja => format!("{region}のデータがないため、グローバルのデータを表示しています。"),
        Locale::Es => format!("No hay datos para {region}; se muestran datos globales."),
        Locale::En => format!("No data for {region} yet — showing global data."),
    }
}

// ── build_view ─────────────────────────────────────────────────────────

/// Derive the complete next screen from the navigation state.
pub fn build_view(state: &NavState) -> ViewDescription {
    let locale = state.locale;
    let mut breadcrumbs = vec![home_crumb(locale).to_string()];
    let mut region_fallback = false;

    let body = match state.view {
        View::Home => Body::Home {
            intro: home_intro(locale).to_string(),
            cards: content::categories()
                .iter()
                .map(|c| CategoryCard {
                    icon: c.icon.to_string(),
                    title: c.title.get(locale).to_string(),
                    description: c.description.get(locale).to_string(),
                    meta: topic_count(locale, c.topics.len()),
                    color: c.color,
                    action: Action::OpenCategory(c.id),
                })
                .collect(),
        },
        View::Category => {
            // The router guarantees the id is set and valid while in this view.
            let cat = state.category.and_then(content::category);
            match cat {
                Some(cat) => {
                    breadcrumbs.push(cat.title.get(locale).to_string());
                    let topic = state
                        .topic
                        .and_then(|tid| cat.topics.iter().find(|t| t.id == tid));
                    if let Some(topic) = topic {
                        breadcrumbs.push(topic.title.get(locale).to_string());
                    }
                    let (pane, fell_back) = build_pane(state, topic.map(|t| t.id));
                    region_fallback = fell_back;
                    Body::Category {
                        title: match topic {
                            Some(t) => t.title.get(locale).to_string(),
                            None => cat.title.get(locale).to_string(),
                        },
                        description: cat.description.get(locale).to_string(),
                        color: cat.color,
                        tabs: ALL_TABS
                            .iter()
                            .map(|&tab| TabEntry {
                                tab,
                                label: tab.label(locale).to_string(),
                                active: tab == state.tab,
                            })
                            .collect(),
                        pane,
                    }
                }
                // Unreachable through the router; still render a defined state.
                None => Body::Home {
                    intro: home_intro(locale).to_string(),
                    cards: Vec::new(),
                },
            }
        }
        View::GlobalFaq => {
            breadcrumbs.push(faq_title(locale).to_string());
            Body::FaqList {
                title: faq_title(locale).to_string(),
                items: content::global_faq()
                    .iter()
                    .map(|e| QaItem {
                        question: e.question.get(locale).to_string(),
                        answer: e.answer.get(locale).to_string(),
                    })
                    .collect(),
            }
        }
        View::GlobalResources => {
            breadcrumbs.push(resources_title(locale).to_string());
            Body::ResourceList {
                title: resources_title(locale).to_string(),
                items: content::global_resources()
                    .iter()
                    .map(|r| resource_item(r, locale))
                    .collect(),
            }
        }
        View::Legal => {
            breadcrumbs.push(legal_title(locale).to_string());
            Body::Legal {
                title: legal_title(locale).to_string(),
                text: content::legal_text(locale).to_string(),
            }
        }
    };

    ViewDescription {
        locale,
        region: state.region,
        menu_open: state.menu_open,
        breadcrumbs,
        nav: build_nav(state),
        body,
        region_fallback,
    }
}

fn build_nav(state: &NavState) -> Vec<NavEntry> {
    let locale = state.locale;
    let mut entries = Vec::new();
    for cat in content::categories() {
        let is_active = state.category == Some(cat.id);
        entries.push(NavEntry {
            label: format!("{} {}", cat.icon, cat.title.get(locale)),
            action: Action::OpenCategory(cat.id),
            selected: is_active && state.topic.is_none(),
            depth: 0,
            color: cat.color,
        });
        // Only the active category is expanded.
        if is_active {
            for topic in cat.topics {
                entries.push(NavEntry {
                    label: topic.title.get(locale).to_string(),
                    action: Action::OpenTopic(cat.id, topic.id),
                    selected: state.topic == Some(topic.id),
                    depth: 1,
                    color: cat.color,
                });
            }
        }
    }
    entries
}

fn resource_item(r: &content::Resource, locale: Locale) -> ResourceItem {
    ResourceItem {
        kind_label: r.kind.label(locale).to_string(),
        title: r.title.to_string(),
        url: r.url.to_string(),
        description: r.description.to_string(),
        lang_code: r.source_lang.code().to_string(),
    }
}

/// Resolve the active tab's content, applying locale and region fallback.
/// Returns the pane plus whether a region fallback happened.
fn build_pane(state: &NavState, topic_id: Option<&str>) -> (Pane, bool) {
    let locale = state.locale;
    let Some(topic_id) = topic_id else {
        let text = if state
            .category
            .and_then(content::category)
            .map(|c| c.topics.is_empty())
            .unwrap_or(true)
        {
            no_topics_yet(locale)
        } else {
            pick_topic(locale)
        };
        return (Pane::PickTopic(text.to_string()), false);
    };
    let Some(tc) = content::topic_content(topic_id) else {
        return (Pane::ComingSoon(coming_soon(locale).to_string()), false);
    };

    match state.tab {
        Tab::Roadmap => {
            let milestones = tc.roadmap.get(locale);
            if milestones.is_empty() {
                (Pane::ComingSoon(coming_soon(locale).to_string()), false)
            } else {
                (
                    Pane::Roadmap(
                        milestones
                            .iter()
                            .map(|m| MilestoneView {
                                title: m.title.to_string(),
                                stage_label: m.stage.label(locale).to_string(),
                                stage_color: m.stage.color(),
                                items: m.items.iter().map(|i| i.to_string()).collect(),
                            })
                            .collect(),
                    ),
                    false,
                )
            }
        }
        Tab::Resources => {
            if tc.resources.is_empty() {
                (Pane::ComingSoon(coming_soon(locale).to_string()), false)
            } else {
                (
                    Pane::Resources(
                        tc.resources.iter().map(|r| resource_item(r, locale)).collect(),
                    ),
                    false,
                )
            }
        }
        Tab::Jobs => match tc.jobs_for(state.region) {
            Some(jobs) => {
                let pane = match jobs.data {
                    JobsData::Aggregate {
                        platforms,
                        top_skills,
                        salary_band,
                    } => JobsPane::Aggregate {
                        platforms: platforms.iter().map(|p| p.to_string()).collect(),
                        top_skills: top_skills.iter().map(|s| s.to_string()).collect(),
                        salary_band: salary_band.to_string(),
                    },
                    JobsData::Postings(postings) => JobsPane::Postings(
                        postings
                            .iter()
                            .map(|p| PostingView {
                                title: p.title.to_string(),
                                company: p.company.to_string(),
                                location: p.location.to_string(),
                            })
                            .collect(),
                    ),
                };
                (Pane::Jobs(pane), jobs.fell_back)
            }
            None => (Pane::ComingSoon(coming_soon(locale).to_string()), false),
        },
        Tab::Faq => match tc.faq {
            Some(FaqData::FlatList(entries)) => (
                Pane::Faq(
                    entries
                        .iter()
                        .map(|e| QaItem {
                            question: e.question.get(locale).to_string(),
                            answer: e.answer.get(locale).to_string(),
                        })
                        .collect(),
                ),
                false,
            ),
            Some(FaqData::LocaleKeyed(by_locale)) => (
                Pane::Faq(
                    by_locale
                        .get(locale)
                        .iter()
                        .map(|e| QaItem {
                            question: e.question.to_string(),
                            answer: e.answer.to_string(),
                        })
                        .collect(),
                ),
                false,
            ),
            None => (Pane::ComingSoon(coming_soon(locale).to_string()), false),
        },
    }
}

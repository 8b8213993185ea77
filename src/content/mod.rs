//! The immutable content repository.
//!
//! Everything here is `static` data built at compile time: categories,
//! sub-topics, and per-sub-topic payloads (roadmap, resources, jobs, FAQ).
//! Lookups return `Option` — absence is an ordinary answer, never a panic —
//! so the renderer and the search indexer can apply fallback and placeholder
//! rules uniformly.

mod catalog;
mod global;

use ratzilla::ratatui::style::Color;

use crate::locale::{Locale, Localized, Region, GLOBAL_REGION};

// ── Catalog structure ──────────────────────────────────────────────────

pub struct Category {
    pub id: &'static str,
    /// Icon glyph shown on cards and in the side navigation.
    pub icon: &'static str,
    /// Accent color token for this category's cards and borders.
    pub color: Color,
    pub title: Localized<&'static str>,
    pub description: Localized<&'static str>,
    /// Display order is the declaration order. May be empty.
    pub topics: &'static [SubTopic],
}

pub struct SubTopic {
    pub id: &'static str,
    pub title: Localized<&'static str>,
}

// ── Roadmap ────────────────────────────────────────────────────────────

/// Progression tag on a roadmap milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Start,
    Mid,
    Advanced,
    Expert,
}

impl Stage {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Stage::Start, Locale::Ja) => "入門",
            (Stage::Start, Locale::Es) => "inicio",
            (Stage::Start, Locale::En) => "start",
            (Stage::Mid, Locale::Ja) => "中級",
            (Stage::Mid, Locale::Es) => "medio",
            (Stage::Mid, Locale::En) => "mid",
            (Stage::Advanced, Locale::Ja) => "上級",
            (Stage::Advanced, Locale::Es) => "avanzado",
            (Stage::Advanced, Locale::En) => "advanced",
            (Stage::Expert, Locale::Ja) => "達人",
            (Stage::Expert, Locale::Es) => "experto",
            (Stage::Expert, Locale::En) => "expert",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Stage::Start => Color::Green,
            Stage::Mid => Color::Yellow,
            Stage::Advanced => Color::Magenta,
            Stage::Expert => Color::Red,
        }
    }
}

pub struct Milestone {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub stage: Stage,
}

// ── Resources ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Video,
    Article,
    Course,
    Book,
    Tool,
}

impl ResourceKind {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ResourceKind::Video, Locale::Ja) => "動画",
            (ResourceKind::Video, _) => "video",
            (ResourceKind::Article, Locale::Ja) => "記事",
            (ResourceKind::Article, Locale::Es) => "artículo",
            (ResourceKind::Article, Locale::En) => "article",
            (ResourceKind::Course, Locale::Ja) => "講座",
            (ResourceKind::Course, Locale::Es) => "curso",
            (ResourceKind::Course, Locale::En) => "course",
            (ResourceKind::Book, Locale::Ja) => "書籍",
            (ResourceKind::Book, Locale::Es) => "libro",
            (ResourceKind::Book, Locale::En) => "book",
            (ResourceKind::Tool, Locale::Ja) => "ツール",
            (ResourceKind::Tool, Locale::Es) => "herramienta",
            (ResourceKind::Tool, Locale::En) => "tool",
        }
    }
}

pub struct Resource {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    /// Language the linked material is written in.
    pub source_lang: Locale,
}

// ── Jobs ───────────────────────────────────────────────────────────────

/// Regional jobs data comes in two historical shapes: an aggregate market
/// snapshot, or a list of concrete postings. Both are preserved as found;
/// consumers pattern-match.
pub enum JobsData {
    Aggregate {
        platforms: &'static [&'static str],
        top_skills: &'static [&'static str],
        salary_band: &'static str,
    },
    Postings(&'static [Posting]),
}

pub struct Posting {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

// ── FAQ ────────────────────────────────────────────────────────────────

pub struct FaqEntry {
    pub id: &'static str,
    pub question: Localized<&'static str>,
    pub answer: Localized<&'static str>,
}

pub struct LocalFaq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Per-topic FAQ data, again in two historical shapes: entries carrying
/// per-locale fields, or lists keyed by locale.
pub enum FaqData {
    FlatList(&'static [FaqEntry]),
    LocaleKeyed(Localized<&'static [LocalFaq]>),
}

// ── Per-topic payload ──────────────────────────────────────────────────

pub struct TopicContent {
    pub topic_id: &'static str,
    /// Per-locale roadmap. An empty base slice means "no roadmap yet".
    pub roadmap: Localized<&'static [Milestone]>,
    pub resources: &'static [Resource],
    /// Regional jobs data in declaration order. Empty means "no jobs yet".
    pub jobs: &'static [(Region, JobsData)],
    pub faq: Option<&'static FaqData>,
}

/// Result of a regional jobs lookup: the data found, and whether the lookup
/// had to fall back to the global entry.
pub struct RegionalJobs {
    pub data: &'static JobsData,
    pub fell_back: bool,
}

impl TopicContent {
    /// Jobs for `region`, falling back to [`GLOBAL_REGION`] when the region
    /// has no entry of its own. `None` when not even global data exists.
    pub fn jobs_for(&self, region: Region) -> Option<RegionalJobs> {
        if let Some((_, data)) = self.jobs.iter().find(|(r, _)| *r == region) {
            return Some(RegionalJobs {
                data,
                fell_back: false,
            });
        }
        self.jobs
            .iter()
            .find(|(r, _)| *r == GLOBAL_REGION)
            .map(|(_, data)| RegionalJobs {
                data,
                fell_back: region != GLOBAL_REGION,
            })
    }
}

// ── Repository lookups ─────────────────────────────────────────────────

/// All categories in display order.
pub fn categories() -> &'static [Category] {
    catalog::CATEGORIES
}

pub fn category(id: &str) -> Option<&'static Category> {
    catalog::CATEGORIES.iter().find(|c| c.id == id)
}

/// The sub-topic only if it actually belongs to the named category.
pub fn topic_in(category_id: &str, topic_id: &str) -> Option<&'static SubTopic> {
    category(category_id)?.topics.iter().find(|t| t.id == topic_id)
}

pub fn topic_content(topic_id: &str) -> Option<&'static TopicContent> {
    catalog::TOPIC_CONTENT.iter().find(|tc| tc.topic_id == topic_id)
}

pub fn global_faq() -> &'static [FaqEntry] {
    global::GLOBAL_FAQ
}

pub fn global_resources() -> &'static [Resource] {
    global::GLOBAL_RESOURCES
}

pub fn legal_text(locale: Locale) -> &'static str {
    global::LEGAL.get(locale)
}

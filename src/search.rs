//! Free-text search over the content repository.
//!
//! Case-insensitive substring containment — no fuzzy matching, no scoring.
//! Three match classes are scanned in a fixed priority order (titles, then
//! roadmap content, then the global FAQ) and results are appended in
//! discovery order, so ranking is entirely positional. The function reads
//! only static data and is cheap enough to run on every keystroke.

use crate::content;
use crate::locale::Locale;
use crate::nav::{Action, View};

/// Queries shorter than this return nothing and the overlay stays hidden.
pub const MIN_QUERY_LEN: usize = 2;

/// Hard cap on returned matches; the rest is reported as a count.
pub const MAX_RESULTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    Category,
    Topic,
    Roadmap,
    Faq,
}

impl MatchKind {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MatchKind::Category, Locale::Ja) => "カテゴリ",
            (MatchKind::Category, Locale::Es) => "categoría",
            (MatchKind::Category, Locale::En) => "category",
            (MatchKind::Topic, Locale::Ja) => "トピック",
            (MatchKind::Topic, Locale::Es) => "tema",
            (MatchKind::Topic, Locale::En) => "topic",
            (MatchKind::Roadmap, Locale::Ja) => "ロードマップ",
            (MatchKind::Roadmap, Locale::Es) => "ruta",
            (MatchKind::Roadmap, Locale::En) => "roadmap",
            (MatchKind::Faq, _) => "FAQ",
        }
    }
}

/// One result row: what matched, where it came from, and the single router
/// action that navigates to it.
#[derive(Clone, Debug)]
pub struct SearchMatch {
    pub kind: MatchKind,
    pub title: String,
    /// Breadcrumb-ish context shown dimmed next to the title.
    pub context: String,
    pub action: Action,
}

/// Matches truncated to [`MAX_RESULTS`], plus the pre-truncation total so
/// callers can render a "+N more" indicator.
#[derive(Debug, Default)]
pub struct SearchResults {
    pub matches: Vec<SearchMatch>,
    pub total: usize,
}

impl SearchResults {
    pub fn overflow(&self) -> usize {
        self.total - self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Scan the repository for `query` in the given display locale.
pub fn search(query: &str, locale: Locale) -> SearchResults {
    if query.chars().count() < MIN_QUERY_LEN {
        return SearchResults::default();
    }
    let needle = query.to_lowercase();
    let mut matches: Vec<SearchMatch> = Vec::new();

    // Class 1: category and sub-topic titles.
    for cat in content::categories() {
        let cat_title = cat.title.get(locale);
        if contains_ci(cat_title, &needle) {
            matches.push(SearchMatch {
                kind: MatchKind::Category,
                title: cat_title.to_string(),
                context: cat.description.get(locale).to_string(),
                action: Action::OpenCategory(cat.id),
            });
        }
        for topic in cat.topics {
            let topic_title = topic.title.get(locale);
            if contains_ci(topic_title, &needle) {
                matches.push(SearchMatch {
                    kind: MatchKind::Topic,
                    title: topic_title.to_string(),
                    context: cat_title.to_string(),
                    action: Action::OpenTopic(cat.id, topic.id),
                });
            }
        }
    }

    // Class 2: roadmap milestones, one match per matching milestone.
    for cat in content::categories() {
        for topic in cat.topics {
            let Some(tc) = content::topic_content(topic.id) else {
                continue;
            };
            for milestone in tc.roadmap.get(locale) {
                let hit = contains_ci(milestone.title, &needle)
                    || milestone.items.iter().any(|i| contains_ci(i, &needle));
                if hit {
                    matches.push(SearchMatch {
                        kind: MatchKind::Roadmap,
                        title: milestone.title.to_string(),
                        context: format!(
                            "{} › {}",
                            cat.title.get(locale),
                            topic.title.get(locale)
                        ),
                        action: Action::OpenTopic(cat.id, topic.id),
                    });
                }
            }
        }
    }

    // Class 3: the global FAQ, questions and answers alike.
    for entry in content::global_faq() {
        let question = entry.question.get(locale);
        if contains_ci(question, &needle) || contains_ci(entry.answer.get(locale), &needle) {
            matches.push(SearchMatch {
                kind: MatchKind::Faq,
                title: question.to_string(),
                context: "FAQ".to_string(),
                action: Action::GoTo(View::GlobalFaq),
            });
        }
    }

    let total = matches.len();
    matches.truncate(MAX_RESULTS);
    SearchResults { matches, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::BASE_LOCALE;

    #[test]
    fn short_queries_return_nothing() {
        assert!(search("", BASE_LOCALE).is_empty());
        assert!(search("a", BASE_LOCALE).is_empty());
        assert_eq!(search("a", BASE_LOCALE).total, 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = search("android", BASE_LOCALE);
        let upper = search("ANDROID", BASE_LOCALE);
        assert!(!lower.is_empty());
        assert_eq!(lower.total, upper.total);
    }

    #[test]
    fn kotlin_finds_the_android_roadmap() {
        let results = search("kotlin", BASE_LOCALE);
        let hit = results
            .matches
            .iter()
            .find(|m| m.kind == MatchKind::Roadmap)
            .expect("roadmap match for kotlin");
        assert_eq!(hit.action, Action::OpenTopic("mobile-dev", "android"));
    }

    #[test]
    fn topic_title_match_carries_navigation() {
        let results = search("frontend", BASE_LOCALE);
        let hit = results
            .matches
            .iter()
            .find(|m| m.kind == MatchKind::Topic)
            .expect("topic match");
        assert_eq!(hit.action, Action::OpenTopic("web-dev", "frontend"));
    }

    #[test]
    fn faq_match_navigates_to_global_faq() {
        let results = search("salary", BASE_LOCALE);
        let hit = results
            .matches
            .iter()
            .find(|m| m.kind == MatchKind::Faq)
            .expect("faq match");
        assert_eq!(hit.action, Action::GoTo(View::GlobalFaq));
    }

    #[test]
    fn class_order_is_preserved() {
        // "data" hits the Data & AI category title, roadmap milestones, and
        // FAQ answers; kinds must appear in class order.
        let results = search("data", BASE_LOCALE);
        let ranks: Vec<u8> = results
            .matches
            .iter()
            .map(|m| match m.kind {
                MatchKind::Category | MatchKind::Topic => 0,
                MatchKind::Roadmap => 1,
                MatchKind::Faq => 2,
            })
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn results_are_capped_and_total_preserved() {
        // A needle common across the whole catalog.
        let results = search("in", BASE_LOCALE);
        assert!(results.matches.len() <= MAX_RESULTS);
        assert!(results.total >= results.matches.len());
        assert_eq!(
            results.overflow(),
            results.total - results.matches.len()
        );
    }

    #[test]
    fn localized_scan_falls_back_to_base() {
        // backend has no Japanese roadmap; scanning in Japanese must still
        // hit the English fallback text.
        let results = search("idempotency", crate::locale::Locale::Ja);
        assert!(results
            .matches
            .iter()
            .any(|m| m.kind == MatchKind::Roadmap));
    }

    #[test]
    fn no_matches_is_an_empty_result_not_an_error() {
        let results = search("zzzzzz", BASE_LOCALE);
        assert!(results.is_empty());
        assert_eq!(results.total, 0);
        assert_eq!(results.overflow(), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The cap holds for arbitrary queries, and totals never lie.
            #[test]
            fn cap_holds_for_any_query(q in "\\PC{0,24}") {
                let results = search(&q, BASE_LOCALE);
                prop_assert!(results.matches.len() <= MAX_RESULTS);
                prop_assert!(results.total >= results.matches.len());
            }
        }
    }
}

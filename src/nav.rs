//! Navigation state and the pure transition function that owns it.
//!
//! Every user-facing navigation gesture becomes exactly one [`Action`], and
//! [`transition`] is the only place a new [`NavState`] is produced. The state
//! is replaced wholesale on every action; nothing patches fields in place.
//! Invalid targets (a sub-topic outside the named category, a tab switch
//! outside the category view) return the prior state unchanged.

use crate::content;
use crate::locale::{Locale, Region};

/// Top-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Category,
    GlobalFaq,
    GlobalResources,
    Legal,
}

/// Content tabs inside the category view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Roadmap,
    Resources,
    Jobs,
    Faq,
}

/// Tabs in display order.
pub const ALL_TABS: [Tab; 4] = [Tab::Roadmap, Tab::Resources, Tab::Jobs, Tab::Faq];

impl Tab {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Tab::Roadmap, Locale::Ja) => "ロードマップ",
            (Tab::Roadmap, Locale::Es) => "Ruta",
            (Tab::Roadmap, Locale::En) => "Roadmap",
            (Tab::Resources, Locale::Ja) => "リソース",
            (Tab::Resources, Locale::Es) => "Recursos",
            (Tab::Resources, Locale::En) => "Resources",
            (Tab::Jobs, Locale::Ja) => "求人",
            (Tab::Jobs, Locale::Es) => "Empleo",
            (Tab::Jobs, Locale::En) => "Jobs",
            (Tab::Faq, _) => "FAQ",
        }
    }
}

/// What the user is currently looking at. The single mutable value of the
/// whole application; only [`transition`] produces new ones.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub view: View,
    pub category: Option<&'static str>,
    pub topic: Option<&'static str>,
    /// Meaningful only while `view == View::Category`.
    pub tab: Tab,
    pub locale: Locale,
    pub region: Region,
    /// Transient UI flag; never persisted.
    pub menu_open: bool,
}

impl NavState {
    /// Fresh-session state: home screen, menu closed, preferences applied.
    pub fn boot(locale: Locale, region: Region) -> Self {
        Self {
            view: View::Home,
            category: None,
            topic: None,
            tab: Tab::Roadmap,
            locale,
            region,
            menu_open: false,
        }
    }
}

/// Every navigation gesture, as data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    GoHome,
    GoTo(View),
    OpenCategory(&'static str),
    OpenTopic(&'static str, &'static str),
    SwitchTab(Tab),
    CycleLocale,
    CycleRegion,
    ToggleMenu,
}

/// The router: a total function from (state, action) to the next state.
pub fn transition(state: &NavState, action: Action) -> NavState {
    match action {
        Action::GoHome => leave_category(state, View::Home),
        Action::GoTo(View::Category) => {
            // A category view without a category id would violate the state
            // invariant; entering categories goes through OpenCategory.
            state.clone()
        }
        Action::GoTo(view) => leave_category(state, view),
        Action::OpenCategory(category_id) => match content::category(category_id) {
            Some(cat) => NavState {
                view: View::Category,
                category: Some(cat.id),
                topic: cat.topics.first().map(|t| t.id),
                tab: Tab::Roadmap,
                menu_open: false,
                ..state.clone()
            },
            None => state.clone(),
        },
        Action::OpenTopic(category_id, topic_id) => {
            match content::topic_in(category_id, topic_id) {
                Some(topic) => NavState {
                    view: View::Category,
                    // Resolve through the repository so both ids are the
                    // canonical 'static entries.
                    category: content::category(category_id).map(|c| c.id),
                    topic: Some(topic.id),
                    tab: Tab::Roadmap,
                    menu_open: false,
                    ..state.clone()
                },
                None => state.clone(),
            }
        }
        Action::SwitchTab(tab) => {
            if state.view == View::Category {
                NavState {
                    tab,
                    ..state.clone()
                }
            } else {
                state.clone()
            }
        }
        Action::CycleLocale => NavState {
            locale: state.locale.next(),
            ..state.clone()
        },
        Action::CycleRegion => NavState {
            region: state.region.next(),
            ..state.clone()
        },
        Action::ToggleMenu => NavState {
            menu_open: !state.menu_open,
            ..state.clone()
        },
    }
}

fn leave_category(state: &NavState, view: View) -> NavState {
    NavState {
        view,
        category: None,
        topic: None,
        menu_open: false,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{ALL_LOCALES, ALL_REGIONS, BASE_LOCALE, GLOBAL_REGION};

    fn boot() -> NavState {
        NavState::boot(BASE_LOCALE, GLOBAL_REGION)
    }

    /// The invariants the router must uphold after every transition.
    fn assert_valid(s: &NavState) {
        if s.view == View::Category {
            assert!(s.category.is_some());
        }
        if let Some(topic) = s.topic {
            let cat = s.category.expect("topic without category");
            assert!(content::topic_in(cat, topic).is_some());
        }
    }

    #[test]
    fn open_category_selects_first_topic() {
        let s = transition(&boot(), Action::OpenCategory("mobile-dev"));
        assert_eq!(s.view, View::Category);
        assert_eq!(s.category, Some("mobile-dev"));
        assert_eq!(s.topic, Some("ios"));
        assert_eq!(s.tab, Tab::Roadmap);
        assert_valid(&s);
    }

    #[test]
    fn open_category_is_idempotent() {
        let once = transition(&boot(), Action::OpenCategory("web-dev"));
        let twice = transition(&once, Action::OpenCategory("web-dev"));
        assert_eq!(once, twice);
    }

    #[test]
    fn open_empty_category_leaves_topic_unset() {
        let s = transition(&boot(), Action::OpenCategory("game-dev"));
        assert_eq!(s.view, View::Category);
        assert_eq!(s.category, Some("game-dev"));
        assert_eq!(s.topic, None);
        assert_valid(&s);
    }

    #[test]
    fn open_unknown_category_is_noop() {
        let before = boot();
        let after = transition(&before, Action::OpenCategory("quantum-basket-weaving"));
        assert_eq!(before, after);
    }

    #[test]
    fn open_topic_sets_both_ids() {
        let s = transition(&boot(), Action::OpenTopic("mobile-dev", "android"));
        assert_eq!(s.category, Some("mobile-dev"));
        assert_eq!(s.topic, Some("android"));
        assert_eq!(s.tab, Tab::Roadmap);
    }

    #[test]
    fn open_topic_outside_category_is_noop() {
        // frontend belongs to web-dev, not mobile-dev
        let before = transition(&boot(), Action::OpenCategory("mobile-dev"));
        let after = transition(&before, Action::OpenTopic("mobile-dev", "frontend"));
        assert_eq!(before, after);
    }

    #[test]
    fn open_topic_resets_tab() {
        let mut s = transition(&boot(), Action::OpenTopic("mobile-dev", "ios"));
        s = transition(&s, Action::SwitchTab(Tab::Jobs));
        assert_eq!(s.tab, Tab::Jobs);
        s = transition(&s, Action::OpenTopic("mobile-dev", "android"));
        assert_eq!(s.tab, Tab::Roadmap);
    }

    #[test]
    fn switch_tab_outside_category_is_noop() {
        let before = boot();
        let after = transition(&before, Action::SwitchTab(Tab::Jobs));
        assert_eq!(before, after);
    }

    #[test]
    fn goto_category_without_id_is_noop() {
        let before = boot();
        let after = transition(&before, Action::GoTo(View::Category));
        assert_eq!(before, after);
    }

    #[test]
    fn goto_clears_category_context_and_menu() {
        let mut s = transition(&boot(), Action::OpenCategory("web-dev"));
        s = transition(&s, Action::ToggleMenu);
        assert!(s.menu_open);
        s = transition(&s, Action::GoTo(View::GlobalFaq));
        assert_eq!(s.view, View::GlobalFaq);
        assert_eq!(s.category, None);
        assert_eq!(s.topic, None);
        assert!(!s.menu_open);
    }

    #[test]
    fn cycle_locale_full_circle() {
        let mut s = boot();
        for _ in 0..ALL_LOCALES.len() {
            s = transition(&s, Action::CycleLocale);
        }
        assert_eq!(s.locale, BASE_LOCALE);
    }

    #[test]
    fn cycle_region_full_circle() {
        let mut s = boot();
        for _ in 0..ALL_REGIONS.len() {
            s = transition(&s, Action::CycleRegion);
        }
        assert_eq!(s.region, GLOBAL_REGION);
    }

    #[test]
    fn cycle_locale_touches_nothing_else() {
        let before = transition(&boot(), Action::OpenTopic("web-dev", "backend"));
        let after = transition(&before, Action::CycleLocale);
        assert_eq!(
            NavState {
                locale: after.locale,
                ..before.clone()
            },
            after
        );
        assert_ne!(before.locale, after.locale);
    }

    #[test]
    fn toggle_menu_flips_only_the_flag() {
        let before = boot();
        let open = transition(&before, Action::ToggleMenu);
        assert!(open.menu_open);
        let closed = transition(&open, Action::ToggleMenu);
        assert_eq!(before, closed);
    }

    #[test]
    fn every_category_opens_to_its_first_topic() {
        for cat in content::categories() {
            let s = transition(&boot(), Action::OpenCategory(cat.id));
            assert_eq!(s.topic, cat.topics.first().map(|t| t.id));
            assert_valid(&s);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_action() -> impl Strategy<Value = Action> {
            let views = prop_oneof![
                Just(View::Home),
                Just(View::Category),
                Just(View::GlobalFaq),
                Just(View::GlobalResources),
                Just(View::Legal),
            ];
            let tabs = prop_oneof![
                Just(Tab::Roadmap),
                Just(Tab::Resources),
                Just(Tab::Jobs),
                Just(Tab::Faq),
            ];
            // Mixes valid ids, an empty category, and garbage targets.
            let cat_ids = prop_oneof![
                Just("mobile-dev"),
                Just("web-dev"),
                Just("data-ai"),
                Just("infra"),
                Just("game-dev"),
                Just("bogus"),
            ];
            let topic_ids = prop_oneof![
                Just("ios"),
                Just("android"),
                Just("frontend"),
                Just("backend"),
                Just("devops"),
                Just("bogus"),
            ];
            prop_oneof![
                Just(Action::GoHome),
                views.prop_map(Action::GoTo),
                cat_ids.clone().prop_map(Action::OpenCategory),
                (cat_ids, topic_ids).prop_map(|(c, t)| Action::OpenTopic(c, t)),
                tabs.prop_map(Action::SwitchTab),
                Just(Action::CycleLocale),
                Just(Action::CycleRegion),
                Just(Action::ToggleMenu),
            ]
        }

        proptest! {
            /// No action sequence can drive the state invalid.
            #[test]
            fn transitions_are_total(actions in prop::collection::vec(arb_action(), 0..64)) {
                let mut s = boot();
                for a in actions {
                    s = transition(&s, a);
                    assert_valid(&s);
                }
            }

            /// Cycling either preference |enum| times is the identity from
            /// any reachable state.
            #[test]
            fn pref_cycles_are_cyclic(actions in prop::collection::vec(arb_action(), 0..16)) {
                let mut s = boot();
                for a in actions {
                    s = transition(&s, a);
                }
                let mut l = s.clone();
                for _ in 0..ALL_LOCALES.len() {
                    l = transition(&l, Action::CycleLocale);
                }
                prop_assert_eq!(&l, &s);
                let mut r = s.clone();
                for _ in 0..ALL_REGIONS.len() {
                    r = transition(&r, Action::CycleRegion);
                }
                prop_assert_eq!(&r, &s);
            }
        }
    }
}

//! The fixed set of tabs and their panels.

use leptos::prelude::*;

/// Identifier of a tab. The selector always holds exactly one of these.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TabId {
    #[default]
    One,
    Two,
    Three,
}

impl TabId {
    /// Token bound to the tab list and written to the URL.
    pub fn value(&self) -> &'static str {
        match self {
            TabId::One => "1",
            TabId::Two => "2",
            TabId::Three => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabId::One => "Item One",
            TabId::Two => "Item Two",
            TabId::Three => "Item Three",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        match s {
            "1" => Some(TabId::One),
            "2" => Some(TabId::Two),
            "3" => Some(TabId::Three),
            _ => None,
        }
    }

    pub fn all() -> [TabId; 3] {
        [TabId::One, TabId::Two, TabId::Three]
    }
}

/// Selection after the tab list offers `value`; unknown tokens keep `current`.
pub fn next_active(current: TabId, value: &str) -> TabId {
    TabId::from_value(value).unwrap_or(current)
}

pub fn is_visible(panel: TabId, active: TabId) -> bool {
    panel == active
}

/// Panel content, rendered only while its tab is active.
#[component]
pub fn TabPanel(tab: TabId, active: RwSignal<TabId>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || is_visible(tab, active.get())>
            <div class="tab-panel" role="tabpanel" data-tab=tab.value()>
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for tab in TabId::all() {
            assert_eq!(TabId::from_value(tab.value()), Some(tab));
        }
        assert_eq!(TabId::from_value("4"), None);
        assert_eq!(TabId::from_value(""), None);
    }

    #[test]
    fn test_default_is_first_tab() {
        assert_eq!(TabId::default(), TabId::One);
        assert_eq!(TabId::default().value(), "1");
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = TabId::all().iter().map(TabId::label).collect();
        assert_eq!(labels, vec!["Item One", "Item Two", "Item Three"]);
    }

    #[test]
    fn test_unknown_value_keeps_selection() {
        assert_eq!(next_active(TabId::Two, "3"), TabId::Three);
        assert_eq!(next_active(TabId::Two, "Item One"), TabId::Two);
        assert_eq!(next_active(TabId::Three, ""), TabId::Three);
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        for active in TabId::all() {
            let visible: Vec<TabId> = TabId::all()
                .into_iter()
                .filter(|panel| is_visible(*panel, active))
                .collect();
            assert_eq!(visible, vec![active]);
        }
    }
}

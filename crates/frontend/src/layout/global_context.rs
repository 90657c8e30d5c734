use crate::layout::tabs::{next_active, TabId};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter mirroring the active tab.
pub const TAB_QUERY_KEY: &str = "tab";

/// UI state shared through context: the active tab selector.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<TabId>,
    /// Raw token bound to the tab list.
    pub selected: RwSignal<String>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let initial = TabId::default();
        Self {
            active: RwSignal::new(initial),
            selected: RwSignal::new(initial.value().to_string()),
        }
    }

    /// Tab-change handler. Unknown tokens leave the selection unchanged.
    /// Afterwards the tab list token always equals the active tab.
    pub fn select(&self, value: &str) {
        let current = self.active.get_untracked();
        let next = next_active(current, value);
        if next != current {
            leptos::logging::log!("tab: '{}' -> '{}'", current.value(), next.value());
            self.active.set(next);
        }
        if self.selected.with_untracked(|s| s != next.value()) {
            self.selected.set(next.value().to_string());
        }
    }

    /// Applies the token currently held by the tab list.
    pub fn sync_from_tab_list(&self) {
        let value = self.selected.get();
        self.select(&value);
    }

    /// Routes tab list changes through [`Self::select`].
    pub fn init_tab_binding(&self) {
        let this = *self;
        Effect::new(move |_| this.sync_from_tab_list());
    }

    /// Selects the tab named by a `?tab=` query, if any.
    pub fn restore_from_query(&self, search: &str) {
        if let Some(tab) = tab_from_query(search) {
            self.select(tab.value());
        }
    }

    /// Restores the tab from `?tab=` and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.restore_from_query(&search);

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn tab_from_query(search: &str) -> Option<TabId> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(TAB_QUERY_KEY).and_then(|v| TabId::from_value(v))
}

pub fn query_for(tab: TabId) -> String {
    let query = serde_qs::to_string(&HashMap::from([(TAB_QUERY_KEY, tab.value())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(tab_from_query("?tab=2"), Some(TabId::Two));
        assert_eq!(tab_from_query("tab=3"), Some(TabId::Three));
        assert_eq!(tab_from_query("?other=x&tab=1"), Some(TabId::One));
        assert_eq!(tab_from_query("?tab=7"), None);
        assert_eq!(tab_from_query(""), None);
    }

    #[test]
    fn test_query_for() {
        assert_eq!(query_for(TabId::Two), "?tab=2");
        for tab in TabId::all() {
            assert_eq!(tab_from_query(&query_for(tab)), Some(tab));
        }
    }

    #[test]
    fn test_select_keeps_invariant() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.active.get_untracked(), TabId::One);

        ctx.select("3");
        assert_eq!(ctx.active.get_untracked(), TabId::Three);
        assert_eq!(ctx.selected.get_untracked(), "3");

        ctx.select("bogus");
        assert_eq!(ctx.active.get_untracked(), TabId::Three);
        assert_eq!(ctx.selected.get_untracked(), "3");

        ctx.select("2");
        assert_eq!(ctx.active.get_untracked(), TabId::Two);
        assert_eq!(ctx.selected.get_untracked(), "2");
    }

    #[test]
    fn test_restored_tab_survives_tab_list_sync() {
        let ctx = AppGlobalContext::new();
        ctx.restore_from_query("?tab=2");
        assert_eq!(ctx.active.get_untracked(), TabId::Two);
        assert_eq!(ctx.selected.get_untracked(), "2");

        // what the tab binding effect does on its first run
        ctx.sync_from_tab_list();
        assert_eq!(ctx.active.get_untracked(), TabId::Two);
        assert_eq!(ctx.selected.get_untracked(), "2");
        assert_eq!(query_for(ctx.active.get_untracked()), "?tab=2");
    }

    #[test]
    fn test_invalid_query_keeps_default() {
        let ctx = AppGlobalContext::new();
        ctx.restore_from_query("?tab=9");
        ctx.sync_from_tab_list();
        assert_eq!(ctx.active.get_untracked(), TabId::One);
        assert_eq!(ctx.selected.get_untracked(), "1");
    }

    #[test]
    fn test_tab_list_click_updates_active() {
        let ctx = AppGlobalContext::new();
        ctx.selected.set("3".to_string());
        ctx.sync_from_tab_list();
        assert_eq!(ctx.active.get_untracked(), TabId::Three);

        ctx.selected.set("nope".to_string());
        ctx.sync_from_tab_list();
        assert_eq!(ctx.active.get_untracked(), TabId::Three);
        assert_eq!(ctx.selected.get_untracked(), "3");
    }
}

use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::{Theme, ThemeProvider};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider theme=Theme::nc_default()>
            <ConfigProvider>
                <AppShell />
            </ConfigProvider>
        </ThemeProvider>
    }
}

pub mod global_context;
pub mod tabs;
pub mod top_header;

use crate::shared::theme::use_theme;
use leptos::prelude::*;
use top_header::TopHeader;

/// Full-width container: app bar on top, tab panels below.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (title | tab | tab | tab)      |
/// +------------------------------------------+
/// |  active panel                            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="app-layout" style=theme.css_vars()>
            <TopHeader />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}

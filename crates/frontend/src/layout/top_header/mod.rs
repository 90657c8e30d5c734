//! TopHeader component - the application bar.
//!
//! Contains the application title and the tab list bound to the active tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabId;
use crate::shared::theme::use_theme;
use leptos::prelude::*;
use thaw::{Tab, TabList};

pub const APP_TITLE: &str = "Aurora's Reactor Generator";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let theme = use_theme();

    let brand_style = format!(
        "padding: {}; height: 200px; display: flex; flex-direction: column; justify-content: center;",
        theme.spacing(&[3, 2])
    );

    view! {
        <header class="top-header" style="position: static;">
            <TabList selected_value=ctx.selected>
                <div class="top-header__brand" style=brand_style>
                    <h5 class="top-header__title">
                        <b>{APP_TITLE}</b>
                    </h5>
                </div>
                {TabId::all()
                    .into_iter()
                    .map(|tab| {
                        view! { <Tab value=tab.value()>{tab.label()}</Tab> }
                    })
                    .collect_view()}
            </TabList>
        </header>
    }
}

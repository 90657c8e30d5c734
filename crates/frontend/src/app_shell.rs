//! Application Shell - the root layout with its three tab panels.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{TabId, TabPanel};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_router_integration();
    ctx.init_tab_binding();

    view! {
        <Shell>
            {TabId::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <TabPanel tab=tab active=ctx.active>
                            {tab.label()}
                        </TabPanel>
                    }
                })
                .collect_view()}
        </Shell>
    }
}

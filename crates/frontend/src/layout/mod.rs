pub mod header;
pub mod sidebar;

use header::TopHeader;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------+
/// |             TopHeader              |
/// +------------------------------------+
/// |  Sidebar  |       Content          |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside class="app-sidebar">
                    {left()}
                </aside>

                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}

use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

/// Корневой компонент консоли администрирования
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <AppRoutes /> }.into_any()
            />
        </Router>
    }
}

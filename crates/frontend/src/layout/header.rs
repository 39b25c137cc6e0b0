use leptos::prelude::*;

/// Верхняя панель приложения
#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__logo">{"IdM"}</span>
                <span class="top-header__title">{"Консоль администрирования"}</span>
            </div>
        </header>
    }
}

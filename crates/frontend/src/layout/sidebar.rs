//! Sidebar component with grouped navigation links

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "identities",
            label: "Пользователи и роли",
            items: vec![
                ("/identities", "Пользователи", "users"),
                ("/roles", "Роли", "shield"),
                ("/automatic-roles", "Автоматические роли", "zap"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Настройки",
            items: vec![
                ("/form-definitions", "Формы (EAV)", "layout"),
                ("/password-policies", "Парольные политики", "key"),
                ("/scripts", "Скрипты", "code"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "Система",
            items: vec![
                ("/scheduled-tasks", "Планировщик", "clock"),
                ("/audit", "Журнал аудита", "history"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let groups = get_menu_groups();

    view! {
        <nav class="sidebar">
            {groups
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(href, label, icon_name)| {
                                    view! {
                                        <A href=href attr:class="sidebar__link">
                                            {icon(icon_name)}
                                            <span class="sidebar__link-label">{label}</span>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

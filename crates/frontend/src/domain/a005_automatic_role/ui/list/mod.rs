use crate::domain::a005_automatic_role::ui::details::{model, AutomaticRoleDetails};
use crate::shared::icons::icon;
use contracts::domain::a005_automatic_role::aggregate::AutomaticRole;
use contracts::domain::common::AggregateId;
use contracts::enums::CodedEnum;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct AutomaticRoleRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub role: String,
    pub recursion: String,
    pub rules: String,
}

impl AutomaticRoleRow {
    fn build(a: AutomaticRole, role_names: &HashMap<String, String>) -> Self {
        let role_id = a.role_id.to_string();
        Self {
            id: a.base.id.as_string(),
            code: a.base.code,
            description: a.base.description,
            role: role_names.get(&role_id).cloned().unwrap_or(role_id),
            recursion: a.recursion.display_name().to_string(),
            rules: a.rules.len().to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AutomaticRoleList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<AutomaticRoleRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    // Названия ролей подтягиваются отдельным запросом, в строке показываем имя
    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let role_names: HashMap<String, String> =
                match crate::domain::a002_role::ui::details::model::fetch_list().await {
                    Ok(roles) => roles
                        .into_iter()
                        .map(|r| (r.base.id.as_string(), r.base.description))
                        .collect(),
                    Err(_) => HashMap::new(),
                };
            match model::fetch_list().await {
                Ok(v) => {
                    set_items.set(
                        v.into_iter()
                            .map(|a| AutomaticRoleRow::build(a, &role_names))
                            .collect(),
                    );
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || {
        set_editing_id.set(None);
        set_show_modal.set(true);
    };

    let handle_edit = move |id: String| {
        if items.get().iter().any(|item| item.id == id) {
            set_editing_id.set(Some(id));
            set_show_modal.set(true);
        }
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Удалить выбранные автоматические роли? Количество: {}",
                    ids.len()
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = model::delete_by_id(&id).await {
                    set_error.set(Some(format!("Ошибка удаления {}: {}", id, e)));
                }
            }
            fetch();
        });
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Автоматические роли"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Новая автоматическая роль"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        if checked {
                                            set_selected.update(|s| {
                                                for item in items.get().iter() {
                                                    s.insert(item.id.clone());
                                                }
                                            });
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell">{"Код"}</th>
                            <th class="table__header-cell">{"Название"}</th>
                            <th class="table__header-cell">{"Роль"}</th>
                            <th class="table__header-cell">{"Рекурсия"}</th>
                            <th class="table__header-cell">{"Правил"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_checkbox = id.clone();
                            let id_for_toggle = id.clone();
                            let is_selected = selected.get().contains(&id);
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=is_selected
                                    on:click=move |_| handle_edit(id_for_click.clone())
                                >
                                    <td class="table__cell table__cell--checkbox" on:click=|ev| ev.stop_propagation()>
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            prop:checked=move || selected.get().contains(&id_for_checkbox)
                                            on:change=move |ev| toggle_select(id_for_toggle.clone(), event_target_checked(&ev))
                                        />
                                    </td>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.role}</td>
                                    <td class="table__cell">{row.recursion}</td>
                                    <td class="table__cell">{row.rules}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || if show_modal.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            <AutomaticRoleDetails
                                id=editing_id.get()
                                on_saved=Rc::new(move |_| { set_show_modal.set(false); set_editing_id.set(None); fetch(); })
                                on_cancel=Rc::new(move |_| { set_show_modal.set(false); set_editing_id.set(None); })
                            />
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

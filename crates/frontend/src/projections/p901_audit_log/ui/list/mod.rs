use crate::projections::p901_audit_log::api;
use crate::shared::components::Button;
use crate::shared::date_utils::{format_datetime, parse_date_input};
use chrono::Duration;
use contracts::enums::CodedEnum;
use contracts::projections::p901_audit_log::{AuditFilter, AuditLogEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Типы сущностей, по которым ведётся аудит
const ENTITY_TYPES: &[(&str, &str)] = &[
    ("identity", "Пользователь"),
    ("role", "Роль"),
    ("automatic-role", "Автоматическая роль"),
    ("form-definition", "Определение формы"),
    ("password-policy", "Парольная политика"),
    ("script", "Скрипт"),
    ("scheduled-task", "Задача планировщика"),
];

#[derive(Clone, Debug)]
struct AuditRow {
    revision_date: String,
    entity_type: String,
    entity_id: String,
    operation: String,
    modifier: String,
    changed: String,
}

impl From<AuditLogEntry> for AuditRow {
    fn from(e: AuditLogEntry) -> Self {
        let entity_type = ENTITY_TYPES
            .iter()
            .find(|(code, _)| *code == e.entity_type)
            .map(|(_, name)| name.to_string())
            .unwrap_or(e.entity_type);
        Self {
            revision_date: format_datetime(&e.revision_date.to_rfc3339()),
            entity_type,
            entity_id: e.entity_id.to_string(),
            operation: e.operation.display_name().to_string(),
            modifier: e.modifier,
            changed: if e.changed_attributes.is_empty() {
                "—".to_string()
            } else {
                e.changed_attributes.join(", ")
            },
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AuditLogList() -> impl IntoView {
    let (entries, set_entries) = signal::<Vec<AuditRow>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let (entity_type_filter, set_entity_type_filter) = signal(String::new());
    let (modifier_filter, set_modifier_filter) = signal(String::new());
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());

    // Поколение ввода для дебаунса текстового фильтра
    let (generation, set_generation) = signal(0u32);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);

        let filter = AuditFilter {
            entity_type: {
                let value = entity_type_filter.get_untracked();
                (!value.is_empty()).then_some(value)
            },
            modifier: {
                let value = modifier_filter.get_untracked();
                (!value.trim().is_empty()).then(|| value.trim().to_string())
            },
            from: parse_date_input(&date_from.get_untracked()),
            // Верхняя граница включает весь выбранный день
            till: parse_date_input(&date_to.get_untracked()).map(|d| d + Duration::days(1)),
        };

        spawn_local(async move {
            match api::list_entries(&filter).await {
                Ok(items) => {
                    set_entries.set(items.into_iter().map(Into::into).collect());
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    let schedule_reload = move || {
        let current = generation.get_untracked() + 1;
        set_generation.set(current);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(400).await;
            if generation.get_untracked() == current {
                load_data();
            }
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    view! {
        <div class="page audit-log">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {"Журнал аудита"}
                        {move || {
                            let count = entries.get().len();
                            if count > 0 { format!(" — {} записей", count) } else { String::new() }
                        }}
                    </h1>
                </div>
                <div class="header__actions">
                    <Button variant={"secondary".to_string()} on_click=Callback::new(move |_| load_data())>
                        {"Обновить"}
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel__field">
                    <label>{"Тип сущности"}</label>
                    <select on:change=move |ev| {
                        set_entity_type_filter.set(event_target_value(&ev));
                        load_data();
                    }>
                        <option value="">{"Все"}</option>
                        {ENTITY_TYPES.iter().map(|(code, name)| {
                            view! { <option value=*code>{*name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="filter-panel__field">
                    <label>{"Автор изменения"}</label>
                    <input
                        type="text"
                        placeholder="admin"
                        prop:value=move || modifier_filter.get()
                        on:input=move |ev| {
                            set_modifier_filter.set(event_target_value(&ev));
                            schedule_reload();
                        }
                    />
                </div>

                <div class="filter-panel__field">
                    <label>{"Дата от"}</label>
                    <input
                        type="date"
                        prop:value=move || date_from.get()
                        on:input=move |ev| {
                            set_date_from.set(event_target_value(&ev));
                            load_data();
                        }
                    />
                </div>

                <div class="filter-panel__field">
                    <label>{"Дата до"}</label>
                    <input
                        type="date"
                        prop:value=move || date_to.get()
                        on:input=move |ev| {
                            set_date_to.set(event_target_value(&ev));
                            load_data();
                        }
                    />
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || {
                if loading.get() {
                    view! {
                        <div class="table__placeholder">{"Загрузка данных..."}</div>
                    }.into_any()
                } else if entries.get().is_empty() {
                    view! {
                        <div class="table__placeholder">{"Нет записей за выбранный период"}</div>
                    }.into_any()
                } else {
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Дата"}</th>
                                        <th class="table__header-cell">{"Тип сущности"}</th>
                                        <th class="table__header-cell">{"Сущность"}</th>
                                        <th class="table__header-cell">{"Операция"}</th>
                                        <th class="table__header-cell">{"Автор"}</th>
                                        <th class="table__header-cell">{"Изменённые атрибуты"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {entries.get().into_iter().map(|row| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.revision_date}</td>
                                            <td class="table__cell">{row.entity_type}</td>
                                            <td class="table__cell"><code>{row.entity_id}</code></td>
                                            <td class="table__cell">{row.operation}</td>
                                            <td class="table__cell">{row.modifier}</td>
                                            <td class="table__cell">{row.changed}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

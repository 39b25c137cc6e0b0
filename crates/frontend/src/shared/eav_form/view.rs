use super::view_model::EavFormViewModel;
use crate::shared::components::{Checkbox, Input, Textarea};
use crate::shared::icons::icon;
use contracts::eav::{presentation, AttributeDefinition, FieldPresentation};
use leptos::prelude::*;
use std::rc::Rc;

/// Динамическая форма дополнительных атрибутов сущности.
///
/// Порядок полей задаётся определением формы; каждый атрибут получает
/// ровно один виджет (или предупреждение, если комбинация его свойств
/// не поддерживается).
#[component]
pub fn EavForm(
    /// API-сегмент сущности-владельца ("identity", "role", ...)
    entity: String,
    /// Идентификатор сущности-владельца
    owner_id: String,
    on_saved: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = EavFormViewModel::new(entity, owner_id);
    vm.load();

    let vm_clone = vm.clone();

    view! {
        <div class="eav-form">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            {
                let vm = vm_clone.clone();
                move || vm.instance.get().map(|instance| {
                    let mut attrs = instance.definition.form_attributes.clone();
                    attrs.sort_by_key(|a| a.seq);
                    let title = instance.definition.name.clone();
                    let vm = vm.clone();
                    view! {
                        <div class="eav-form__body">
                            <h4 class="eav-form__title">{title}</h4>
                            {attrs
                                .into_iter()
                                .map(|attr| field_view(vm.clone(), attr))
                                .collect_view()}
                        </div>
                    }
                })
            }

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.saving.get() || !vm.is_valid()
                    }
                >
                    {icon("save")}
                    {"Сохранить атрибуты"}
                </button>
            </div>
        </div>
    }
}

fn warning(text: String) -> AnyView {
    view! {
        <div class="warning-box">
            <span class="warning-box__icon">"⚠"</span>
            <span class="warning-box__text">{text}</span>
        </div>
    }
    .into_any()
}

/// Ровно один виджет на атрибут, по результату диспетчеризации
fn field_view(vm: EavFormViewModel, attr: AttributeDefinition) -> AnyView {
    let code = attr.code.clone();
    let label = attr.name.clone();
    let help = attr.description.clone().unwrap_or_default();

    match presentation(&attr) {
        FieldPresentation::UnsupportedMultiplicity => warning(format!(
            "{}: множественные значения не поддерживаются для типа {}",
            label, attr.persistent_type
        )),
        FieldPresentation::UnsupportedConfidential => warning(format!(
            "{}: конфиденциальные значения типа {} не поддерживаются",
            label, attr.persistent_type
        )),
        FieldPresentation::UnsupportedType => warning(format!(
            "{}: неизвестный тип атрибута '{}'",
            label, attr.persistent_type
        )),

        FieldPresentation::SingleLineText { masked } => {
            let value = {
                let vm = vm.clone();
                let code = code.clone();
                Signal::derive(move || vm.display_text(&code))
            };
            let error = {
                let vm = vm.clone();
                let attr = attr.clone();
                Signal::derive(move || vm.field_error(&attr))
            };
            let on_input = {
                let vm = vm.clone();
                let code = code.clone();
                Callback::new(move |text: String| vm.set_text(&code, text))
            };
            view! {
                <Input
                    label=label
                    value=value
                    on_input=on_input
                    input_type={if masked { "password".to_string() } else { "text".to_string() }}
                    disabled=attr.readonly
                    required=attr.required
                    error=error
                    help=help
                />
            }
            .into_any()
        }

        FieldPresentation::MultilineText { masked } => {
            let value = {
                let vm = vm.clone();
                let code = code.clone();
                Signal::derive(move || vm.display_text(&code))
            };
            let error = {
                let vm = vm.clone();
                let attr = attr.clone();
                Signal::derive(move || vm.field_error(&attr))
            };
            let on_input = {
                let vm = vm.clone();
                let code = code.clone();
                Callback::new(move |text: String| vm.set_text(&code, text))
            };
            view! {
                <Textarea
                    label=label
                    value=value
                    on_input=on_input
                    rows=4
                    disabled=attr.readonly
                    required=attr.required
                    error=error
                    help={if help.is_empty() {
                        "Каждое значение — на отдельной строке".to_string()
                    } else {
                        help
                    }}
                    class={if masked {
                        "form__textarea--masked".to_string()
                    } else {
                        String::new()
                    }}
                />
            }
            .into_any()
        }

        FieldPresentation::PlainTextArea | FieldPresentation::RichText => {
            let rich = presentation(&attr) == FieldPresentation::RichText;
            let value = {
                let vm = vm.clone();
                let code = code.clone();
                Signal::derive(move || vm.display_text(&code))
            };
            let error = {
                let vm = vm.clone();
                let attr = attr.clone();
                Signal::derive(move || vm.field_error(&attr))
            };
            let on_input = {
                let vm = vm.clone();
                let code = code.clone();
                Callback::new(move |text: String| vm.set_text(&code, text))
            };
            view! {
                <Textarea
                    label=label
                    value=value
                    on_input=on_input
                    rows={if rich { 8 } else { 4 }}
                    disabled=attr.readonly
                    required=attr.required
                    error=error
                    help=help
                    class={if rich {
                        "form__textarea--rich".to_string()
                    } else {
                        String::new()
                    }}
                />
            }
            .into_any()
        }

        FieldPresentation::DatePicker { with_time } => {
            let value = {
                let vm = vm.clone();
                let code = code.clone();
                Signal::derive(move || vm.date_input_value(&code, with_time))
            };
            let on_input = {
                let vm = vm.clone();
                let code = code.clone();
                Callback::new(move |raw: String| vm.set_date_input(&code, &raw, with_time))
            };
            view! {
                <Input
                    label=label
                    value=value
                    on_input=on_input
                    input_type={if with_time {
                        "datetime-local".to_string()
                    } else {
                        "date".to_string()
                    }}
                    disabled=attr.readonly
                    required=attr.required
                    help=help
                />
            }
            .into_any()
        }

        FieldPresentation::BooleanCheckbox => {
            let checked = {
                let vm = vm.clone();
                let code = code.clone();
                Signal::derive(move || vm.checked(&code))
            };
            let on_change = {
                let vm = vm.clone();
                let code = code.clone();
                Callback::new(move |value: bool| vm.set_bool(&code, value))
            };
            view! {
                <Checkbox
                    label=label
                    checked=checked
                    on_change=on_change
                    disabled=attr.readonly
                    help=help
                />
            }
            .into_any()
        }
    }
}

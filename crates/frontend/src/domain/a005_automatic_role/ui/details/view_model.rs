use super::model;
use contracts::domain::a005_automatic_role::aggregate::{AutomaticRoleDto, AutomaticRoleRule};
use contracts::domain::common::AggregateId;
use contracts::enums::{symbol_by_key, RecursionType, RuleComparison};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Automatic Role details form
///
/// `roles` holds the (id, name) options of the role selector, loaded once
/// alongside the form.
#[derive(Clone)]
pub struct AutomaticRoleDetailsViewModel {
    pub form: RwSignal<AutomaticRoleDto>,
    pub roles: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
}

impl AutomaticRoleDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AutomaticRoleDto::default()),
            roles: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.description.trim().is_empty()
                && uuid::Uuid::parse_str(&f.role_id).is_ok()
                && f.rules
                    .iter()
                    .all(|r| !r.attribute_name.trim().is_empty() && !r.value.is_empty())
        }
    }

    pub fn set_recursion(&self, code: &str) {
        if let Some(recursion) = symbol_by_key::<RecursionType>(code) {
            self.form.update(|f| f.recursion = recursion);
        }
    }

    pub fn add_rule(&self) {
        self.form.update(|f| {
            f.rules.push(AutomaticRoleRule {
                id: None,
                attribute_name: String::new(),
                comparison: RuleComparison::Equals,
                value: String::new(),
            });
        });
    }

    pub fn remove_rule(&self, index: usize) {
        self.form.update(|f| {
            if index < f.rules.len() {
                f.rules.remove(index);
            }
        });
    }

    pub fn set_rule_attribute(&self, index: usize, attribute_name: String) {
        self.form.update(|f| {
            if let Some(rule) = f.rules.get_mut(index) {
                rule.attribute_name = attribute_name;
            }
        });
    }

    pub fn set_rule_comparison(&self, index: usize, code: &str) {
        if let Some(comparison) = symbol_by_key::<RuleComparison>(code) {
            self.form.update(|f| {
                if let Some(rule) = f.rules.get_mut(index) {
                    rule.comparison = comparison;
                }
            });
        }
    }

    pub fn set_rule_value(&self, index: usize, value: String) {
        self.form.update(|f| {
            if let Some(rule) = f.rules.get_mut(index) {
                rule.value = value;
            }
        });
    }

    /// Load the role selector options
    pub fn load_roles(&self) {
        let roles = self.roles;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::a002_role::ui::details::model::fetch_list().await {
                Ok(list) => {
                    let options = list
                        .into_iter()
                        .map(|r| (r.base.id.as_string(), r.base.description))
                        .collect();
                    roles.set(options);
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки ролей: {}", e))),
            }
        });
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => {
                        let dto = AutomaticRoleDto {
                            id: Some(aggregate.base.id.as_string()),
                            code: aggregate.base.code,
                            description: aggregate.base.description,
                            role_id: aggregate.role_id.to_string(),
                            recursion: aggregate.recursion,
                            rules: aggregate.rules,
                        };
                        form.set(dto);
                    }
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            });
        }
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if current.description.trim().is_empty() {
            self.error
                .set(Some("Название обязательно для заполнения".to_string()));
            return;
        }
        if uuid::Uuid::parse_str(&current.role_id).is_err() {
            self.error.set(Some("Не выбрана назначаемая роль".to_string()));
            return;
        }
        for rule in &current.rules {
            if rule.attribute_name.trim().is_empty() {
                self.error.set(Some("Правило без атрибута".to_string()));
                return;
            }
            if rule.value.is_empty() {
                self.error
                    .set(Some(format!("Правило '{}' без значения", rule.attribute_name)));
                return;
            }
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

use super::model;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a006_scheduled_task::aggregate::ScheduledTaskDto;
use contracts::domain::common::AggregateId;
use contracts::enums::CodedEnum;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Scheduled Task details form
///
/// Сведения о состоянии (state/lastRun/nextRun) заполняются сервером и
/// показываются только для чтения, поэтому они не входят в DTO.
#[derive(Clone)]
pub struct ScheduledTaskDetailsViewModel {
    pub form: RwSignal<ScheduledTaskDto>,
    pub state_info: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl ScheduledTaskDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ScheduledTaskDto {
                instance_id: "default".to_string(),
                ..Default::default()
            }),
            state_info: RwSignal::new(None),
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
                && !f.task_type.trim().is_empty()
                && (5..=6).contains(&f.cron_expression.split_whitespace().count())
        }
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let state_info = self.state_info;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(task) => {
                        let last_run = task
                            .last_run
                            .map(|t| format_datetime(&t.to_rfc3339()))
                            .unwrap_or_else(|| "—".to_string());
                        let next_run = task
                            .next_run
                            .map(|t| format_datetime(&t.to_rfc3339()))
                            .unwrap_or_else(|| "—".to_string());
                        state_info.set(Some(format!(
                            "{} · последний запуск: {} · следующий запуск: {}",
                            task.state.display_name(),
                            last_run,
                            next_run
                        )));
                        let dto = ScheduledTaskDto {
                            id: Some(task.base.id.as_string()),
                            code: task.base.code,
                            description: task.base.description,
                            task_type: task.task_type,
                            cron_expression: task.cron_expression,
                            instance_id: task.instance_id,
                            disabled: task.disabled,
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
        if current.task_type.trim().is_empty() {
            self.error
                .set(Some("Тип задачи обязателен для заполнения".to_string()));
            return;
        }
        if !(5..=6).contains(&current.cron_expression.split_whitespace().count()) {
            self.error.set(Some(
                "Крон-выражение должно содержать 5 или 6 полей".to_string(),
            ));
            return;
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

    /// Trigger an immediate run of a saved task
    pub fn run_command(&self) {
        let Some(id) = self.form.get().id else {
            return;
        };
        let error = self.error;
        let state_info = self.state_info;
        wasm_bindgen_futures::spawn_local(async move {
            match model::run_now(&id).await {
                Ok(()) => state_info.set(Some("Задача поставлена в очередь запуска".to_string())),
                Err(e) => error.set(Some(format!("Ошибка запуска: {}", e))),
            }
        });
    }
}

use crate::domain::a001_identity::ui::list::IdentityList;
use crate::domain::a002_role::ui::list::RoleList;
use crate::domain::a003_password_policy::ui::list::PasswordPolicyList;
use crate::domain::a004_script::ui::list::ScriptList;
use crate::domain::a005_automatic_role::ui::list::AutomaticRoleList;
use crate::domain::a006_scheduled_task::ui::list::ScheduledTaskList;
use crate::domain::a007_form_definition::ui::list::FormDefinitionList;
use crate::projections::p901_audit_log::ui::AuditLogList;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{"Страница не найдена"}</span>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=IdentityList />
            <Route path=path!("/identities") view=IdentityList />
            <Route path=path!("/roles") view=RoleList />
            <Route path=path!("/automatic-roles") view=AutomaticRoleList />
            <Route path=path!("/form-definitions") view=FormDefinitionList />
            <Route path=path!("/password-policies") view=PasswordPolicyList />
            <Route path=path!("/scripts") view=ScriptList />
            <Route path=path!("/scheduled-tasks") view=ScheduledTaskList />
            <Route path=path!("/audit") view=AuditLogList />
        </Routes>
    }
}

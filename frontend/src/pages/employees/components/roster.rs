use crate::{api::Employee, pages::employees::workflow::EmployeeList};
use leptos::*;

#[component]
pub fn EmployeeRow(employee: Employee, on_delete: Callback<String>) -> impl IntoView {
    let id = employee.id.clone();
    view! {
        <div class="employee__row flex items-center justify-between border-b border-border py-3">
            <div>
                <div class="text-base font-semibold text-fg">{employee.display_name()}</div>
                <div class="text-sm text-fg-muted">{employee.role.label()}</div>
            </div>
            <button
                type="button"
                class="btn--delete text-status-error-text hover:opacity-75"
                aria-label="Delete employee"
                on:click=move |_| on_delete.call(id.clone())
            >
                "Delete"
            </button>
        </div>
    }
}

#[component]
pub fn EmployeeRoster(list: RwSignal<EmployeeList>, on_delete: Callback<String>) -> impl IntoView {
    let employees = Signal::derive(move || list.with(|sync| sync.items().to_vec()));
    let first_load = Signal::derive(move || list.with(|sync| sync.is_fetching() && !sync.has_loaded()));

    view! {
        <div class="space-y-1">
            <Show when=move || first_load.get()>
                <crate::components::layout::LoadingSpinner />
            </Show>
            <For
                each=move || employees.get()
                key=|employee| employee.id.clone()
                children=move |employee: Employee| {
                    view! { <EmployeeRow employee=employee on_delete=on_delete /> }
                }
            />
        </div>
    }
}

use crate::components::{confirm_dialog::ConfirmDialog, layout::ErrorMessage};
use leptos::*;

use super::{
    components::{create_modal::CreateEmployeeModal, roster::EmployeeRoster},
    view_model::{use_employees_view_model, EmployeesViewModel},
    workflow::DeleteState,
};

#[component]
pub fn EmployeesPage(token: String) -> impl IntoView {
    let vm = use_employees_view_model(token);
    view! { <EmployeesPanel vm=vm /> }
}

#[component]
pub fn EmployeesPanel(vm: EmployeesViewModel) -> impl IntoView {
    let EmployeesViewModel {
        list,
        create_form,
        delete_state,
        refresh_action,
        create_action,
        delete_action,
    } = vm;

    let refreshing = Signal::derive(move || list.with(|sync| sync.is_fetching()));
    let load_error = Signal::derive(move || {
        list.with(|sync| {
            sync.is_stale()
                .then(|| sync.last_error().map(|err| err.error.clone()))
                .flatten()
        })
    });
    let confirm_open = Signal::derive(move || delete_state.with(DeleteState::is_confirming));
    let confirm_busy = Signal::derive(move || delete_state.with(DeleteState::is_submitting));
    let prompt = Signal::derive(move || delete_state.with(|state| state.prompt().unwrap_or_default()));

    let on_delete = Callback::new(move |id: String| vm.request_delete(&id));
    let on_submit = Callback::new(move |_| create_action.dispatch(()));
    let on_confirm = Callback::new(move |_| delete_action.dispatch(()));
    let on_cancel = Callback::new(move |_| vm.cancel_delete());

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-fg">"Employees"</h1>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="px-3 py-2 rounded border border-border text-sm disabled:opacity-50"
                        disabled=move || refreshing.get()
                        on:click=move |_| refresh_action.dispatch(())
                    >
                        "Refresh"
                    </button>
                    <button
                        type="button"
                        class="px-3 py-2 rounded bg-action-primary-bg text-action-primary-text text-sm"
                        on:click=move |_| vm.open_create()
                    >
                        "Add New Employee"
                    </button>
                </div>
            </div>
            {move || load_error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <EmployeeRoster list=list on_delete=on_delete />
        </div>
        <CreateEmployeeModal form=create_form on_submit=on_submit />
        <ConfirmDialog
            is_open=confirm_open
            title="Delete user"
            message=prompt
            on_confirm=on_confirm
            on_cancel=on_cancel
            busy=confirm_busy
            destructive=true
        />
    }
}

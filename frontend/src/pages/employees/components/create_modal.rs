use crate::{
    api::Role,
    components::layout::ErrorMessage,
    pages::employees::utils::{CreateFormState, FormField},
};
use leptos::{ev, *};

#[component]
fn FieldError(form: RwSignal<CreateFormState>, field: FormField) -> impl IntoView {
    let message = move || form.with(|state| state.field_errors.message(field));
    view! {
        {move || message().map(|text| view! {
            <p class="mt-1 text-xs text-status-error-text">{text}</p>
        })}
    }
}

#[component]
fn TextField(
    form: RwSignal<CreateFormState>,
    field: FormField,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let read = move |state: &CreateFormState| match field {
        FormField::FirstName => state.first_name.clone(),
        FormField::LastName => state.last_name.clone(),
        FormField::Email => state.email.clone(),
        FormField::Password => state.password.clone(),
        FormField::Permissions => state.permissions.clone(),
    };
    let write = move |state: &mut CreateFormState, value: String| match field {
        FormField::FirstName => state.first_name = value,
        FormField::LastName => state.last_name = value,
        FormField::Email => state.email = value,
        FormField::Password => state.password = value,
        FormField::Permissions => state.permissions = value,
    };

    view! {
        <div>
            <input
                type=input_type.unwrap_or("text")
                class="w-full border border-border rounded px-3 py-2"
                placeholder=placeholder
                disabled=move || form.with(CreateFormState::is_submitting)
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| write(state, value));
                }
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
pub fn CreateEmployeeModal(form: RwSignal<CreateFormState>, on_submit: Callback<()>) -> impl IntoView {
    let submitting = Signal::derive(move || form.with(CreateFormState::is_submitting));
    let submit_error = Signal::derive(move || form.with(|state| state.submit_error.clone()));

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        on_submit.call(());
    };

    view! {
        <Show when=move || form.with(CreateFormState::is_visible)>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| form.update(CreateFormState::close)
                ></button>
                <div
                    class="relative z-[61] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-fg">"Add new user"</h2>
                    {move || submit_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                    <form class="space-y-3" on:submit=handle_submit>
                        <TextField form=form field=FormField::FirstName placeholder="First name" />
                        <TextField form=form field=FormField::LastName placeholder="Last name" />
                        <TextField form=form field=FormField::Email placeholder="Email" />
                        <TextField
                            form=form
                            field=FormField::Password
                            placeholder="Password"
                            input_type="password"
                        />
                        <div>
                            <select
                                class="w-full border border-border rounded px-3 py-2"
                                disabled=move || submitting.get()
                                prop:value=move || form.with(|state| state.permissions.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|state| state.permissions = value);
                                }
                            >
                                <option value=Role::Employee.as_str()>{"Employee"}</option>
                                <option value=Role::Admin.as_str()>{"Admin"}</option>
                            </select>
                            <FieldError form=form field=FormField::Permissions />
                        </div>
                        <div class="text-center">
                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                            >
                                {move || if submitting.get() { "Creating..." } else { "Create account" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

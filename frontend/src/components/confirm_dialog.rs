use leptos::ev::KeyboardEvent;
use leptos::*;

const DANGER_BUTTON: &str = "rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50";
const PRIMARY_BUTTON: &str = "rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50";

/// Yes/no modal. While `busy` is set both answers are disabled and
/// dismissal is ignored, so a pending mutation cannot be answered twice.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Yes")] confirm_label: &'static str,
    #[prop(default = "No")] cancel_label: &'static str,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive {
        DANGER_BUTTON
    } else {
        PRIMARY_BUTTON
    };
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let busy = Signal::derive(move || busy.get());
    let dismiss = move || {
        if !busy.get_untracked() {
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| dismiss()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            dismiss();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    <p class="text-sm text-fg-muted">{message}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg disabled:opacity-50"
                            disabled=move || busy.get()
                            on:click=move |_| dismiss()
                        >
                            {cancel_label}
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

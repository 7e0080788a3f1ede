use crate::{
    router::nav_links,
    state::session::{self, use_session, use_session_store},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let store = use_session_store();
    let links = create_memo(move |_| nav_links(&session.get()));
    let greeting = move || {
        session
            .get()
            .profile
            .map(|profile| format!("Hi, {}", profile.display_name()))
    };
    let on_sign_out = move |_| {
        log::info!("signing out");
        session::sign_out(store);
    };

    view! {
        <Show when=move || session.get().is_logged_in>
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <a href="/" class="text-xl font-semibold text-fg">
                            "Employee Reviews"
                        </a>
                        <nav class="flex items-center space-x-4">
                            <For
                                each=move || links.get()
                                key=|route| route.path
                                children=move |route| {
                                    view! {
                                        <a
                                            href=route.path
                                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        >
                                            {route.label}
                                        </a>
                                    }
                                }
                            />
                            <button
                                on:click=on_sign_out
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Sign Out"
                            </button>
                            {move || greeting().map(|text| view! {
                                <span class="text-sm text-fg-muted">{text}</span>
                            })}
                        </nav>
                    </div>
                </div>
            </header>
        </Show>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

use crate::{
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    router::DEFAULT_PATH,
};
use leptos::*;
use leptos_router::{NavigateOptions, Redirect};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    view! {
        <Show
            when=move || vm.signed_in.get()
            fallback=move || view! { <LoginForm vm=vm /> }
        >
            <Redirect
                path=DEFAULT_PATH
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        </Show>
    }
}

use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest};
use crate::state::session::{self, use_session};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub signed_in: Signal<bool>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = session::use_sign_in_action();
    let session = use_session();
    let signed_in = Signal::derive(move || session.get().is_logged_in);

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.clear_password();
                }
                Err(err) => {
                    log::warn!("sign in failed: {}", err);
                    error.set(Some(err));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
        signed_in,
    }
}

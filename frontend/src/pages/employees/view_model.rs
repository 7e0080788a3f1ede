use super::{
    repository::EmployeesRepository,
    utils::CreateFormState,
    workflow::{
        confirm_delete, refresh_employees, submit_create, CreateOutcome, DeleteOutcome,
        DeleteState, EmployeeList,
    },
};
use crate::{
    api::{ApiClient, ApiError},
    state::session::{self, use_session_store, SessionStore},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub list: RwSignal<EmployeeList>,
    pub create_form: RwSignal<CreateFormState>,
    pub delete_state: RwSignal<DeleteState>,
    pub refresh_action: Action<(), Result<(), ApiError>>,
    pub create_action: Action<(), CreateOutcome>,
    pub delete_action: Action<(), DeleteOutcome>,
}

impl EmployeesViewModel {
    pub fn open_create(&self) {
        self.create_form.update(CreateFormState::open);
    }

    pub fn close_create(&self) {
        self.create_form.update(CreateFormState::close);
    }

    pub fn request_delete(&self, id: &str) {
        let list = self.list;
        self.delete_state.update(|state| {
            list.with_untracked(|snapshot| {
                state.request(id, snapshot);
            });
        });
    }

    pub fn cancel_delete(&self) {
        self.delete_state.update(DeleteState::cancel);
    }
}

/// A rejected token ends the session; the route gate then redirects.
fn end_session_if_rejected(store: SessionStore, rejected: Option<ApiError>) {
    if let Some(err) = rejected {
        log::warn!("employee request rejected, signing out: {}", err);
        session::sign_out(store);
    }
}

pub fn use_employees_view_model(token: String) -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api), token);
    let session_store = use_session_store();

    let list = create_rw_signal(EmployeeList::new());
    let create_form = create_rw_signal(CreateFormState::default());
    let delete_state = create_rw_signal(DeleteState::default());

    let repo_for_refresh = repository.clone();
    let refresh_action = create_action(move |_: &()| {
        let repo = repo_for_refresh.clone();
        async move {
            let result = refresh_employees(&repo, list).await;
            end_session_if_rejected(
                session_store,
                result.clone().err().filter(ApiError::is_unauthorized),
            );
            result
        }
    });

    let repo_for_create = repository.clone();
    let create_action = create_action(move |_: &()| {
        let repo = repo_for_create.clone();
        async move {
            let outcome = submit_create(&repo, create_form, list).await;
            end_session_if_rejected(session_store, outcome.auth_error());
            outcome
        }
    });

    let repo_for_delete = repository;
    let delete_action = leptos::create_action(move |_: &()| {
        let repo = repo_for_delete.clone();
        async move {
            let outcome = confirm_delete(&repo, delete_state, list).await;
            end_session_if_rejected(session_store, outcome.auth_error());
            outcome
        }
    });

    // Initial load on mount.
    create_effect(move |_| refresh_action.dispatch(()));

    EmployeesViewModel {
        list,
        create_form,
        delete_state,
        refresh_action,
        create_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::state::session::derive_session;
    use crate::test_support::helpers::provide_profile;
    use crate::test_support::ssr::{settle_action, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;
    use tokio::task::LocalSet;

    #[test]
    fn view_model_starts_closed_and_empty() {
        with_runtime(|| {
            let vm = use_employees_view_model("jwt".into());
            assert!(!vm.create_form.get().is_visible());
            assert!(vm.list.get().items().is_empty());
            assert_eq!(vm.delete_state.get(), DeleteState::Idle);
        });
    }

    #[test]
    fn open_and_close_create_modal() {
        with_runtime(|| {
            let vm = use_employees_view_model("jwt".into());
            vm.open_create();
            assert!(vm.create_form.get().is_visible());
            vm.close_create();
            assert!(!vm.create_form.get().is_visible());
        });
    }

    #[test]
    fn delete_request_for_missing_row_is_ignored() {
        with_runtime(|| {
            let vm = use_employees_view_model("jwt".into());
            vm.request_delete("ghost");
            assert_eq!(vm.delete_state.get(), DeleteState::Idle);
            vm.cancel_delete();
            assert_eq!(vm.delete_state.get(), DeleteState::Idle);
        });
    }

    #[tokio::test]
    async fn rejected_refresh_ends_the_session() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/employees");
                then.status(401).json_body(json!({ "error": "token expired" }));
            })
            .await;

        let runtime = create_runtime();
        LocalSet::new()
            .run_until(async {
                provide_context(ApiClient::new_with_base_url(server.url("/api")));
                let store = provide_profile(Role::Admin);
                let vm = use_employees_view_model("t".into());

                vm.refresh_action.dispatch(());
                let result = settle_action(vm.refresh_action).await;

                assert!(result.unwrap_err().is_unauthorized());
                assert!(!derive_session(&store.get_untracked()).is_logged_in);
            })
            .await;
        list.assert_hits_async(1).await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_delete_ends_the_session() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/employees");
                then.status(200).json_body(json!([
                    { "_id": "e1", "firstName": "Ada", "lastName": "L", "type": "admin" }
                ]));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/employees/e1");
                then.status(401).json_body(json!({ "error": "token expired" }));
            })
            .await;

        let runtime = create_runtime();
        LocalSet::new()
            .run_until(async {
                provide_context(ApiClient::new_with_base_url(server.url("/api")));
                let store = provide_profile(Role::Admin);
                let vm = use_employees_view_model("t".into());

                vm.refresh_action.dispatch(());
                assert_eq!(settle_action(vm.refresh_action).await, Ok(()));
                assert!(derive_session(&store.get_untracked()).is_logged_in);

                vm.request_delete("e1");
                vm.delete_action.dispatch(());
                let outcome = settle_action(vm.delete_action).await;

                assert!(outcome.auth_error().is_some());
                assert!(!derive_session(&store.get_untracked()).is_logged_in);
                assert_eq!(vm.list.get_untracked().items().len(), 1);
            })
            .await;
        list.assert_hits_async(1).await;
        delete.assert_hits_async(1).await;
        runtime.dispose();
    }
}

use super::{repository::EmployeesRepository, utils::CreateFormState};
use crate::{
    api::{ApiError, Employee},
    state::resource::{run_refresh, ResourceSync},
};
use leptos::*;

pub type EmployeeList = ResourceSync<Employee>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming {
        id: String,
        name: String,
    },
    Submitting {
        id: String,
    },
}

impl DeleteState {
    /// Starts confirmation for an employee in the current snapshot. Unknown
    /// ids are ignored.
    pub fn request(&mut self, id: &str, list: &EmployeeList) -> bool {
        if *self != DeleteState::Idle {
            return false;
        }
        match list.find(id) {
            Some(employee) => {
                *self = DeleteState::Confirming {
                    id: employee.id.clone(),
                    name: employee.display_name(),
                };
                true
            }
            None => {
                log::warn!("delete requested for unknown employee {}", id);
                false
            }
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self, DeleteState::Confirming { .. }) {
            *self = DeleteState::Idle;
        }
    }

    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            DeleteState::Confirming { id, .. } => {
                *self = DeleteState::Submitting { id: id.clone() };
                Some(id)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn finish(&mut self) {
        *self = DeleteState::Idle;
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, DeleteState::Confirming { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DeleteState::Submitting { .. })
    }

    pub fn prompt(&self) -> Option<String> {
        match self {
            DeleteState::Confirming { name, .. } => {
                Some(format!("Are you sure you want to delete user {}", name))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The form was closed or already submitting.
    Ignored,
    Invalid,
    Created { refresh: Result<(), ApiError> },
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Ignored,
    Deleted { refresh: Result<(), ApiError> },
    Failed(ApiError),
}

fn auth_error_in(result: Result<&(), &ApiError>) -> Option<ApiError> {
    result.err().filter(|err| err.is_unauthorized()).cloned()
}

impl CreateOutcome {
    pub fn auth_error(&self) -> Option<ApiError> {
        match self {
            CreateOutcome::Created { refresh } => auth_error_in(refresh.as_ref()),
            CreateOutcome::Failed(err) => auth_error_in(Err(err)),
            _ => None,
        }
    }
}

impl DeleteOutcome {
    pub fn auth_error(&self) -> Option<ApiError> {
        match self {
            DeleteOutcome::Deleted { refresh } => auth_error_in(refresh.as_ref()),
            DeleteOutcome::Failed(err) => auth_error_in(Err(err)),
            DeleteOutcome::Ignored => None,
        }
    }
}

pub async fn refresh_employees(
    repo: &EmployeesRepository,
    list: RwSignal<EmployeeList>,
) -> Result<(), ApiError> {
    run_refresh(list, || repo.fetch_employees()).await
}

/// Validate, create, close, then re-sync. The created record is never
/// spliced into the list.
pub async fn submit_create(
    repo: &EmployeesRepository,
    form: RwSignal<CreateFormState>,
    list: RwSignal<EmployeeList>,
) -> CreateOutcome {
    let Some(payload) = form.try_update(CreateFormState::begin_submit).flatten() else {
        let invalid = form
            .try_with_untracked(|state| !state.field_errors.is_empty())
            .unwrap_or(false);
        return if invalid {
            CreateOutcome::Invalid
        } else {
            CreateOutcome::Ignored
        };
    };

    match repo.create_employee(&payload).await {
        Ok(()) => {
            form.update(|state| state.finish_submit(Ok(())));
            let refresh = refresh_employees(repo, list).await;
            CreateOutcome::Created { refresh }
        }
        Err(err) => {
            log::warn!("failed to create employee {}: {}", payload.email, err);
            form.update(|state| state.finish_submit(Err(err.error.clone())));
            CreateOutcome::Failed(err)
        }
    }
}

/// Runs a confirmed delete. Failures are only logged and leave the list
/// as it was.
pub async fn confirm_delete(
    repo: &EmployeesRepository,
    state: RwSignal<DeleteState>,
    list: RwSignal<EmployeeList>,
) -> DeleteOutcome {
    let Some(id) = state.try_update(DeleteState::confirm).flatten() else {
        return DeleteOutcome::Ignored;
    };

    let result = repo.delete_employee(&id).await;
    state.update(DeleteState::finish);
    match result {
        Ok(()) => {
            let refresh = refresh_employees(repo, list).await;
            DeleteOutcome::Deleted { refresh }
        }
        Err(err) => {
            log::error!("failed to delete employee {}: {}", id, err);
            DeleteOutcome::Failed(err)
        }
    }
}

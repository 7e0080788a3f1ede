use crate::api::{CreateEmployee, Role};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    Permissions,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter first name")]
    FirstNameRequired,
    #[error("Please enter last name")]
    LastNameRequired,
    #[error("Please enter email")]
    EmailRequired,
    #[error("Please enter password")]
    PasswordRequired,
    #[error("Please select permissions")]
    PermissionsRequired,
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::FirstNameRequired => FormField::FirstName,
            FieldError::LastNameRequired => FormField::LastName,
            FieldError::EmailRequired => FormField::Email,
            FieldError::PasswordRequired => FormField::Password,
            FieldError::PermissionsRequired => FormField::Permissions,
        }
    }
}

/// Field errors in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn for_field(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|err| err.field() == field)
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.for_field(field).map(ToString::to_string)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreatePhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Transient state of the "Add new user" modal. Dropped back to the
/// default whenever the modal closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFormState {
    pub phase: CreatePhase,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub permissions: String,
    pub field_errors: FieldErrors,
    pub submit_error: Option<String>,
}

impl Default for CreateFormState {
    fn default() -> Self {
        Self {
            phase: CreatePhase::Closed,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            permissions: Role::Employee.as_str().to_string(),
            field_errors: FieldErrors::default(),
            submit_error: None,
        }
    }
}

impl CreateFormState {
    pub fn is_visible(&self) -> bool {
        self.phase != CreatePhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == CreatePhase::Submitting
    }

    pub fn open(&mut self) {
        if self.phase == CreatePhase::Closed {
            *self = Self {
                phase: CreatePhase::Open,
                ..Self::default()
            };
        }
    }

    /// Dismisses the modal unless a submission is still pending.
    pub fn close(&mut self) {
        if !self.is_submitting() {
            *self = Self::default();
        }
    }

    pub fn validate(&self) -> Result<CreateEmployee, FieldErrors> {
        let mut errors = Vec::new();
        if self.first_name.is_empty() {
            errors.push(FieldError::FirstNameRequired);
        }
        if self.last_name.is_empty() {
            errors.push(FieldError::LastNameRequired);
        }
        if self.email.is_empty() {
            errors.push(FieldError::EmailRequired);
        }
        if self.password.is_empty() {
            errors.push(FieldError::PasswordRequired);
        }
        let permissions = Role::parse(&self.permissions);
        if permissions.is_none() {
            errors.push(FieldError::PermissionsRequired);
        }

        match permissions {
            Some(permissions) if errors.is_empty() => Ok(CreateEmployee {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                permissions,
            }),
            _ => Err(FieldErrors(errors)),
        }
    }

    /// Validates and, when valid, locks the form for submission. Returns the
    /// payload to send, or `None` when nothing may be sent.
    pub fn begin_submit(&mut self) -> Option<CreateEmployee> {
        if self.phase != CreatePhase::Open {
            return None;
        }
        self.submit_error = None;
        match self.validate() {
            Ok(payload) => {
                self.field_errors = FieldErrors::default();
                self.phase = CreatePhase::Submitting;
                Some(payload)
            }
            Err(errors) => {
                self.field_errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => *self = Self::default(),
            Err(message) => {
                self.phase = CreatePhase::Open;
                self.submit_error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreateFormState {
        let mut state = CreateFormState::default();
        state.open();
        state.first_name = "A".into();
        state.last_name = "B".into();
        state.email = "a@b.com".into();
        state.password = "x".into();
        state.permissions = "admin".into();
        state
    }

    #[test]
    fn defaults_to_closed_with_employee_permissions() {
        let state = CreateFormState::default();
        assert!(!state.is_visible());
        assert_eq!(state.permissions, "employee");
    }

    #[test]
    fn missing_first_name_is_reported_first() {
        let mut state = filled();
        state.first_name.clear();
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase, CreatePhase::Open);
        assert_eq!(state.field_errors.first(), Some(&FieldError::FirstNameRequired));
        assert_eq!(
            state.field_errors.message(FormField::FirstName).as_deref(),
            Some("Please enter first name")
        );
        assert!(state.field_errors.for_field(FormField::Email).is_none());
    }

    #[test]
    fn values_are_only_checked_for_presence_and_sent_as_typed() {
        let mut state = filled();
        state.first_name = "  ".into();
        state.email = " a@b.com ".into();
        let payload = state.validate().unwrap();
        assert_eq!(payload.first_name, "  ");
        assert_eq!(payload.email, " a@b.com ");
    }

    #[test]
    fn every_required_field_gets_its_own_error() {
        let mut state = CreateFormState::default();
        state.open();
        state.permissions = "owner".into();
        let errors = state.validate().unwrap_err();
        for field in [
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Password,
            FormField::Permissions,
        ] {
            assert!(errors.for_field(field).is_some(), "{:?}", field);
        }
    }

    #[test]
    fn valid_form_locks_for_submission() {
        let mut state = filled();
        let payload = state.begin_submit().unwrap();
        assert_eq!(payload.permissions, Role::Admin);
        assert_eq!(payload.email, "a@b.com");
        assert!(state.is_submitting());
        assert!(state.begin_submit().is_none(), "double submit must be ignored");
        state.close();
        assert!(state.is_visible(), "cannot dismiss while submitting");
    }

    #[test]
    fn success_closes_and_resets() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish_submit(Ok(()));
        assert_eq!(state, CreateFormState::default());
    }

    #[test]
    fn failure_reopens_with_values_and_message() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish_submit(Err("Email already registered".into()));
        assert_eq!(state.phase, CreatePhase::Open);
        assert_eq!(state.first_name, "A");
        assert_eq!(state.submit_error.as_deref(), Some("Email already registered"));
        assert!(state.begin_submit().is_some(), "retry allowed");
    }

    #[test]
    fn closed_form_never_submits() {
        let mut state = CreateFormState::default();
        assert!(state.begin_submit().is_none());
        assert!(state.field_errors.is_empty());
    }
}

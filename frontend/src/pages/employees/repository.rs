use crate::api::{ApiClient, ApiError, CreateEmployee, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
    token: String,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.get_employees(&self.token).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<(), ApiError> {
        self.client.create_employee(&self.token, payload).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(&self.token, id).await
    }
}

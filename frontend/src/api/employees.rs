use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Employee},
};

impl ApiClient {
    pub async fn get_employees(&self, token: &str) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        let response = Self::send(Self::authorized(self.http_client().get(&url), token)).await?;
        Self::decode(response).await
    }

    pub async fn create_employee(
        &self,
        token: &str,
        payload: &CreateEmployee,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("/employees").await;
        let response = Self::send(Self::authorized(
            self.http_client().post(&url).json(payload),
            token,
        ))
        .await?;
        // The created record is never used locally; the list comes back
        // through a full refresh.
        Self::expect_success(response).await
    }

    pub async fn delete_employee(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let encoded = utf8_percent_encode(id, NON_ALPHANUMERIC).to_string();
        let url = self.endpoint(&format!("/employees/{}", encoded)).await;
        let response =
            Self::send(Self::authorized(self.http_client().delete(&url), token)).await?;
        Self::expect_success(response).await
    }
}

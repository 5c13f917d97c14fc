//! HTTP access to the tips ledger API.
//!
//! Engine code talks to [`TipsApi`] only. [`HttpTipsApi`] is the browser
//! implementation on top of `gloo-net`.

use async_trait::async_trait;
use contracts::dashboards::d410_merchant_tips::MerchantSummaryResponse;
use contracts::dashboards::d411_employee_tips::EmployeeTipsResponse;
use contracts::domain::a101_employee::{CreateEmployeeDto, Employee};
use contracts::domain::a102_dining_table::{CreateTableDto, DiningTable};
use contracts::shared::api_error::normalize_message;
use contracts::shared::created::Created;
use contracts::system::auth::{AuthCredentials, AuthResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_url, path_segment};
use crate::shared::error::ClientError;

/// Operations of the ledger API used by the client.
///
/// Futures are not `Send`: the client runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TipsApi {
    /// `POST /auth/{mode}`
    async fn authenticate(&self, credentials: &AuthCredentials) -> Result<AuthResponse, ClientError>;

    /// `GET /employees/{id}/tips`
    async fn employee_tips(
        &self,
        token: &str,
        employee_id: &str,
    ) -> Result<EmployeeTipsResponse, ClientError>;

    /// `GET /merchants/{id}/tips/summary`
    async fn merchant_summary(
        &self,
        token: &str,
        merchant_id: &str,
    ) -> Result<MerchantSummaryResponse, ClientError>;

    /// `GET /merchants/employees`
    async fn list_employees(&self, token: &str) -> Result<Vec<Employee>, ClientError>;

    /// `GET /merchants/tables`
    async fn list_tables(&self, token: &str) -> Result<Vec<DiningTable>, ClientError>;

    /// `POST /merchants/employees`
    async fn create_employee(
        &self,
        token: &str,
        dto: &CreateEmployeeDto,
    ) -> Result<Employee, ClientError>;

    /// `POST /merchants/tables`
    async fn create_table(&self, token: &str, dto: &CreateTableDto)
        -> Result<DiningTable, ClientError>;
}

/// [`TipsApi`] over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpTipsApi {
    base: String,
}

impl HttpTipsApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.base, path)
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }

    async fn send(request: Request) -> Result<Response, ClientError> {
        request
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to send request: {}", e)))
    }

    /// Turns a response into `T`, or into a rejection carrying the server's message.
    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = normalize_message(&body);
            log::warn!(
                "{} rejected with {}: {}",
                response.url(),
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ClientError::Rejected { status, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Malformed(format!("Failed to parse response: {}", e)))
    }

    async fn get_with_auth<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ClientError> {
        let request = Self::authorized(Request::get(&self.url(path)), token)
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build request: {}", e)))?;
        Self::read(Self::send(request).await?).await
    }

    async fn post_json<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let mut builder = Request::post(&self.url(path));
        if let Some(token) = token {
            builder = Self::authorized(builder, token);
        }
        let request = builder
            .json(body)
            .map_err(|e| ClientError::Transport(format!("Failed to serialize request: {}", e)))?;
        Self::read(Self::send(request).await?).await
    }
}

#[async_trait(?Send)]
impl TipsApi for HttpTipsApi {
    async fn authenticate(&self, credentials: &AuthCredentials) -> Result<AuthResponse, ClientError> {
        let path = format!("/auth/{}", credentials.mode().path_segment());
        self.post_json(&path, None, credentials).await
    }

    async fn employee_tips(
        &self,
        token: &str,
        employee_id: &str,
    ) -> Result<EmployeeTipsResponse, ClientError> {
        let path = format!("/employees/{}/tips", path_segment(employee_id));
        self.get_with_auth(&path, token).await
    }

    async fn merchant_summary(
        &self,
        token: &str,
        merchant_id: &str,
    ) -> Result<MerchantSummaryResponse, ClientError> {
        let path = format!("/merchants/{}/tips/summary", path_segment(merchant_id));
        self.get_with_auth(&path, token).await
    }

    async fn list_employees(&self, token: &str) -> Result<Vec<Employee>, ClientError> {
        self.get_with_auth("/merchants/employees", token).await
    }

    async fn list_tables(&self, token: &str) -> Result<Vec<DiningTable>, ClientError> {
        self.get_with_auth("/merchants/tables", token).await
    }

    async fn create_employee(
        &self,
        token: &str,
        dto: &CreateEmployeeDto,
    ) -> Result<Employee, ClientError> {
        let created: Created<Employee> = self
            .post_json("/merchants/employees", Some(token), dto)
            .await?;
        Ok(created.into_inner())
    }

    async fn create_table(
        &self,
        token: &str,
        dto: &CreateTableDto,
    ) -> Result<DiningTable, ClientError> {
        let created: Created<DiningTable> =
            self.post_json("/merchants/tables", Some(token), dto).await?;
        Ok(created.into_inner())
    }
}

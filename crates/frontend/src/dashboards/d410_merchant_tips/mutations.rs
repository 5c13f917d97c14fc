//! Merchant-side writes: add an employee, add a table.
//!
//! Both end with a full reload of the dashboard so server-assigned fields
//! and derived totals come from the server, not from a local merge.

use std::cell::RefCell;

use contracts::domain::a101_employee::CreateEmployeeDto;
use contracts::domain::a102_dining_table::{validate_table_code, CreateTableDto};

use crate::dashboards::sync::{DashboardScope, DashboardSync, LoadOutcome};
use crate::shared::api_client::TipsApi;
use crate::shared::error::ClientError;
use crate::shared::notice::{NoticeState, Notices};

pub const EMPLOYEE_CREATED: &str = "Employee created successfully!";
pub const TABLE_CREATED: &str = "Table created successfully!";
pub const CREATE_EMPLOYEE_FALLBACK: &str = "Failed to create employee";
pub const CREATE_TABLE_FALLBACK: &str = "Failed to create table";

/// Input a mutation reads its payload from and clears on success.
pub trait DraftForm {
    type Draft;

    fn read(&self) -> Self::Draft;
    fn reset(&self);
}

impl<T: Clone + Default> DraftForm for RefCell<T> {
    type Draft = T;

    fn read(&self) -> T {
        self.borrow().clone()
    }

    fn reset(&self) {
        *self.borrow_mut() = T::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Pass `notice_id` to [`Notices::expire_after`] to drop the banner later.
    /// `reload` is the outcome of the follow-up dashboard load.
    Created { notice_id: u64, reload: LoadOutcome },
    Failed(String),
}

#[derive(Default)]
pub struct MutationPipeline {
    notices: Notices,
}

impl MutationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notice_state(&self) -> NoticeState {
        self.notices.state()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.notices.subscribe(listener);
    }

    pub async fn create_employee<F>(
        &self,
        api: &dyn TipsApi,
        sync: &DashboardSync,
        scope: &DashboardScope,
        form: &F,
    ) -> MutationOutcome
    where
        F: DraftForm<Draft = CreateEmployeeDto>,
    {
        let dto = form.read();
        log::debug!("creating employee {}", dto.email);

        match api.create_employee(&scope.token, &dto).await {
            Ok(employee) => {
                log::info!("employee {} created", employee.id);
                form.reset();
                let notice_id = self.notices.success(EMPLOYEE_CREATED);
                let reload = sync.load(api, scope).await;
                MutationOutcome::Created { notice_id, reload }
            }
            Err(err) => self.fail(err, CREATE_EMPLOYEE_FALLBACK),
        }
    }

    pub async fn create_table<F>(
        &self,
        api: &dyn TipsApi,
        sync: &DashboardSync,
        scope: &DashboardScope,
        form: &F,
    ) -> MutationOutcome
    where
        F: DraftForm<Draft = String>,
    {
        let code = form.read();
        if let Err(invalid) = validate_table_code(&code) {
            return self.fail(invalid.into(), CREATE_TABLE_FALLBACK);
        }

        match api.create_table(&scope.token, &CreateTableDto { code }).await {
            Ok(table) => {
                log::info!("table {} created", table.code);
                sync.append_table(table);
                form.reset();
                let notice_id = self.notices.success(TABLE_CREATED);
                // Summary counts are derived server-side
                let reload = sync.load(api, scope).await;
                MutationOutcome::Created { notice_id, reload }
            }
            Err(err) => self.fail(err, CREATE_TABLE_FALLBACK),
        }
    }

    fn fail(&self, err: ClientError, fallback: &str) -> MutationOutcome {
        let message = err.user_message(fallback);
        log::warn!("mutation failed: {}", err);
        self.notices.error(message.clone());
        MutationOutcome::Failed(message)
    }
}

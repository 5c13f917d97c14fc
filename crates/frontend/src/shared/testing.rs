//! In-memory stand-in for the ledger API used by engine tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use contracts::dashboards::d410_merchant_tips::{MerchantSummaryResponse, StatusTotals, TipSummary};
use contracts::dashboards::d411_employee_tips::{EmployeeTipsResponse, TipLedgerEntry};
use contracts::domain::a101_employee::{CreateEmployeeDto, Employee};
use contracts::domain::a102_dining_table::{CreateTableDto, DiningTable};
use contracts::system::auth::{AuthCredentials, AuthResponse};
use futures::channel::oneshot;

use crate::shared::api_client::TipsApi;
use crate::shared::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Authenticate,
    EmployeeTips,
    MerchantSummary,
    ListEmployees,
    ListTables,
    CreateEmployee,
    CreateTable,
}

/// Server-side data the fake answers from.
#[derive(Debug, Clone, Default)]
pub struct FakeLedger {
    pub summary: TipSummary,
    pub employees: Vec<Employee>,
    pub tables: Vec<DiningTable>,
    pub tips: EmployeeTipsResponse,
    pub next_id: u64,
}

impl FakeLedger {
    fn issue_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub endpoint: Endpoint,
    pub token: Option<String>,
}

/// Answers from [`FakeLedger`] unless a failure or a gate was queued for the
/// endpoint. Replies are computed when the call starts, so a gated call
/// returns the data as it was before later mutations.
#[derive(Default)]
pub struct FakeTipsApi {
    pub ledger: RefCell<FakeLedger>,
    auth_replies: RefCell<VecDeque<Result<AuthResponse, ClientError>>>,
    failures: RefCell<HashMap<Endpoint, VecDeque<ClientError>>>,
    gates: RefCell<HashMap<Endpoint, VecDeque<oneshot::Receiver<()>>>>,
    calls: RefCell<Vec<Call>>,
    submitted: RefCell<Vec<AuthCredentials>>,
}

impl FakeTipsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A merchant with one employee, one table and two summary statuses.
    pub fn with_merchant_data() -> Self {
        let api = Self::new();
        {
            let mut ledger = api.ledger.borrow_mut();
            ledger.summary.insert(
                "pending".to_string(),
                StatusTotals {
                    count: 1,
                    total_amount_minor_units: 250,
                },
            );
            ledger.summary.insert(
                "settled".to_string(),
                StatusTotals {
                    count: 3,
                    total_amount_minor_units: 4500,
                },
            );
            ledger.employees.push(Employee {
                id: "emp-1".to_string(),
                name: "Sara".to_string(),
                email: "sara@example.com".to_string(),
            });
            ledger.tables.push(DiningTable {
                id: "tbl-1".to_string(),
                code: "T-1".to_string(),
            });
        }
        api
    }

    /// An employee ledger with `amounts` as entries.
    pub fn with_employee_tips(amounts: &[u64]) -> Self {
        let api = Self::new();
        {
            let mut ledger = api.ledger.borrow_mut();
            ledger.tips.entries = amounts
                .iter()
                .enumerate()
                .map(|(i, amount)| ledger_entry(&format!("l{}", i + 1), *amount))
                .collect();
            ledger.tips.total = amounts.iter().sum();
        }
        api
    }

    pub fn reply_auth(&self, reply: Result<AuthResponse, ClientError>) {
        self.auth_replies.borrow_mut().push_back(reply);
    }

    /// The next call to `endpoint` fails with `err`.
    pub fn fail_next(&self, endpoint: Endpoint, err: ClientError) {
        self.failures
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(err);
    }

    /// The next call to `endpoint` does not complete until the sender fires (or drops).
    pub fn hold_next(&self, endpoint: Endpoint) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .count()
    }

    pub fn submitted(&self) -> Vec<AuthCredentials> {
        self.submitted.borrow().clone()
    }

    fn record(&self, endpoint: Endpoint, token: Option<&str>) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(Call {
            endpoint,
            token: token.map(str::to_string),
        });
        let failure = self
            .failures
            .borrow_mut()
            .get_mut(&endpoint)
            .and_then(|queue| queue.pop_front());
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn pass_gate(&self, endpoint: Endpoint) {
        let gate = self
            .gates
            .borrow_mut()
            .get_mut(&endpoint)
            .and_then(|queue| queue.pop_front());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

pub fn ledger_entry(id: &str, amount: u64) -> TipLedgerEntry {
    TipLedgerEntry {
        id: id.to_string(),
        kind: "tip".to_string(),
        amount_minor_units: amount,
        created_at: "2024-03-15T14:02:26Z".to_string(),
        tip_intent_id: format!("ti-{}", id),
        table_code: Some("T-1".to_string()),
        employee_name: None,
    }
}

pub fn rejected(status: u16, message: &str) -> ClientError {
    ClientError::Rejected {
        status,
        message: Some(message.to_string()),
    }
}

#[async_trait(?Send)]
impl TipsApi for FakeTipsApi {
    async fn authenticate(&self, credentials: &AuthCredentials) -> Result<AuthResponse, ClientError> {
        self.submitted.borrow_mut().push(credentials.clone());
        let reply = self.record(Endpoint::Authenticate, None).and_then(|_| {
            self.auth_replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Transport("no scripted reply".to_string())))
        });
        self.pass_gate(Endpoint::Authenticate).await;
        reply
    }

    async fn employee_tips(
        &self,
        token: &str,
        _employee_id: &str,
    ) -> Result<EmployeeTipsResponse, ClientError> {
        let reply = self
            .record(Endpoint::EmployeeTips, Some(token))
            .map(|_| self.ledger.borrow().tips.clone());
        self.pass_gate(Endpoint::EmployeeTips).await;
        reply
    }

    async fn merchant_summary(
        &self,
        token: &str,
        merchant_id: &str,
    ) -> Result<MerchantSummaryResponse, ClientError> {
        let reply = self
            .record(Endpoint::MerchantSummary, Some(token))
            .map(|_| MerchantSummaryResponse {
                merchant_id: Some(merchant_id.to_string()),
                summary: self.ledger.borrow().summary.clone(),
            });
        self.pass_gate(Endpoint::MerchantSummary).await;
        reply
    }

    async fn list_employees(&self, token: &str) -> Result<Vec<Employee>, ClientError> {
        let reply = self
            .record(Endpoint::ListEmployees, Some(token))
            .map(|_| self.ledger.borrow().employees.clone());
        self.pass_gate(Endpoint::ListEmployees).await;
        reply
    }

    async fn list_tables(&self, token: &str) -> Result<Vec<DiningTable>, ClientError> {
        let reply = self
            .record(Endpoint::ListTables, Some(token))
            .map(|_| self.ledger.borrow().tables.clone());
        self.pass_gate(Endpoint::ListTables).await;
        reply
    }

    async fn create_employee(
        &self,
        token: &str,
        dto: &CreateEmployeeDto,
    ) -> Result<Employee, ClientError> {
        let reply = self.record(Endpoint::CreateEmployee, Some(token)).map(|_| {
            let mut ledger = self.ledger.borrow_mut();
            let employee = Employee {
                id: ledger.issue_id("emp"),
                name: dto.name.clone(),
                email: dto.email.clone(),
            };
            ledger.employees.push(employee.clone());
            employee
        });
        self.pass_gate(Endpoint::CreateEmployee).await;
        reply
    }

    async fn create_table(
        &self,
        token: &str,
        dto: &CreateTableDto,
    ) -> Result<DiningTable, ClientError> {
        let reply = self.record(Endpoint::CreateTable, Some(token)).map(|_| {
            let mut ledger = self.ledger.borrow_mut();
            let table = DiningTable {
                id: ledger.issue_id("tbl"),
                code: dto.code.clone(),
            };
            ledger.tables.push(table.clone());
            table
        });
        self.pass_gate(Endpoint::CreateTable).await;
        reply
    }
}

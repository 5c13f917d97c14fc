//! Dashboard data synchronization.
//!
//! A [`DashboardSync`] owns the snapshot a dashboard renders. Loads are
//! numbered; a load publishes only if it is still the latest one issued, and
//! it publishes everything it fetched or nothing at all.

use std::cell::{Cell, RefCell};

use contracts::dashboards::d410_merchant_tips::TipSummary;
use contracts::dashboards::d411_employee_tips::TipLedgerEntry;
use contracts::domain::a101_employee::Employee;
use contracts::domain::a102_dining_table::DiningTable;
use contracts::system::auth::Role;

use crate::shared::api_client::TipsApi;
use crate::shared::change_notifier::ChangeNotifier;
use crate::shared::error::ClientError;
use crate::system::router;
use crate::system::session::store::{Session, SessionStore};

pub const MERCHANT_LOAD_FALLBACK: &str = "Backend error fetching merchant data";
pub const EMPLOYEE_LOAD_FALLBACK: &str = "Failed to fetch tips";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerchantSnapshot {
    pub summary: TipSummary,
    pub employees: Vec<Employee>,
    pub tables: Vec<DiningTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeSnapshot {
    /// Minor units (fils)
    pub total: u64,
    pub entries: Vec<TipLedgerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardSnapshot {
    Merchant(MerchantSnapshot),
    Employee(EmployeeSnapshot),
}

impl DashboardSnapshot {
    /// What a dashboard shows before its first successful load.
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Merchant => DashboardSnapshot::Merchant(MerchantSnapshot::default()),
            Role::Employee => DashboardSnapshot::Employee(EmployeeSnapshot::default()),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            DashboardSnapshot::Merchant(_) => Role::Merchant,
            DashboardSnapshot::Employee(_) => Role::Employee,
        }
    }

    pub fn as_merchant(&self) -> Option<&MerchantSnapshot> {
        match self {
            DashboardSnapshot::Merchant(snapshot) => Some(snapshot),
            DashboardSnapshot::Employee(_) => None,
        }
    }

    pub fn as_employee(&self) -> Option<&EmployeeSnapshot> {
        match self {
            DashboardSnapshot::Employee(snapshot) => Some(snapshot),
            DashboardSnapshot::Merchant(_) => None,
        }
    }
}

/// Who a load is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardScope {
    pub role: Role,
    pub identity: String,
    pub token: String,
}

impl DashboardScope {
    fn is_complete(&self) -> bool {
        !self.identity.trim().is_empty() && !self.token.trim().is_empty()
    }
}

impl From<&Session> for DashboardScope {
    fn from(session: &Session) -> Self {
        Self {
            role: session.role,
            identity: session.identity.clone(),
            token: session.token.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncState {
    pub snapshot: DashboardSnapshot,
    pub loading: bool,
    pub error: Option<String>,
    /// At least one load has published.
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed(String),
    /// 401/403 from one of the fetches; the session is no longer valid.
    Unauthorized,
    /// A newer load was issued before this one finished; its result was dropped.
    Stale,
    /// Identity or token missing; nothing was requested.
    Skipped,
}

pub struct DashboardSync {
    issued: Cell<u64>,
    state: RefCell<SyncState>,
    changes: ChangeNotifier,
}

impl DashboardSync {
    pub fn new(role: Role) -> Self {
        Self {
            issued: Cell::new(0),
            state: RefCell::new(SyncState {
                snapshot: DashboardSnapshot::empty(role),
                loading: false,
                error: None,
                loaded: false,
            }),
            changes: ChangeNotifier::default(),
        }
    }

    pub fn state(&self) -> SyncState {
        self.state.borrow().clone()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.borrow().snapshot.clone()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.changes.subscribe(listener);
    }

    pub async fn load(&self, api: &dyn TipsApi, scope: &DashboardScope) -> LoadOutcome {
        if !scope.is_complete() {
            return LoadOutcome::Skipped;
        }

        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        self.update(|state| state.loading = true);
        log::debug!("dashboard load #{} for {} {}", seq, scope.role, scope.identity);

        let fetched = fetch_snapshot(api, scope).await;

        if seq != self.issued.get() {
            log::warn!("dashboard load #{} superseded, result dropped", seq);
            return LoadOutcome::Stale;
        }

        match fetched {
            Ok(snapshot) => {
                self.update(|state| {
                    state.snapshot = snapshot;
                    state.loading = false;
                    state.error = None;
                    state.loaded = true;
                });
                LoadOutcome::Applied
            }
            Err(err) if err.is_unauthorized() => {
                log::warn!("dashboard load #{} unauthorized: {}", seq, err);
                self.update(|state| {
                    state.loading = false;
                    state.error = Some(SESSION_EXPIRED.to_string());
                });
                LoadOutcome::Unauthorized
            }
            Err(err) => {
                let message = err.user_message(load_fallback(scope.role));
                log::warn!("dashboard load #{} failed: {}", seq, err);
                self.update(|state| {
                    state.loading = false;
                    state.error = Some(message.clone());
                });
                LoadOutcome::Failed(message)
            }
        }
    }

    /// Adds a freshly created table to the published roster. The snapshot is
    /// replaced as a whole; a no-op outside a merchant dashboard.
    pub fn append_table(&self, table: DiningTable) {
        let next = match &self.state.borrow().snapshot {
            DashboardSnapshot::Merchant(current) => {
                let mut next = current.clone();
                next.tables.push(table);
                next
            }
            DashboardSnapshot::Employee(_) => return,
        };
        self.update(|state| state.snapshot = DashboardSnapshot::Merchant(next));
    }

    fn update(&self, apply: impl FnOnce(&mut SyncState)) {
        apply(&mut self.state.borrow_mut());
        self.changes.notify();
    }
}

fn load_fallback(role: Role) -> &'static str {
    match role {
        Role::Merchant => MERCHANT_LOAD_FALLBACK,
        Role::Employee => EMPLOYEE_LOAD_FALLBACK,
    }
}

async fn fetch_snapshot(
    api: &dyn TipsApi,
    scope: &DashboardScope,
) -> Result<DashboardSnapshot, ClientError> {
    match scope.role {
        Role::Merchant => fetch_merchant(api, scope)
            .await
            .map(DashboardSnapshot::Merchant),
        Role::Employee => {
            let response = api.employee_tips(&scope.token, &scope.identity).await?;
            Ok(DashboardSnapshot::Employee(EmployeeSnapshot {
                total: response.total,
                entries: response.entries,
            }))
        }
    }
}

/// Issues the three merchant fetches together and waits for all of them.
async fn fetch_merchant(
    api: &dyn TipsApi,
    scope: &DashboardScope,
) -> Result<MerchantSnapshot, ClientError> {
    let (summary, employees, tables) = futures::join!(
        api.merchant_summary(&scope.token, &scope.identity),
        api.list_employees(&scope.token),
        api.list_tables(&scope.token),
    );

    match (summary, employees, tables) {
        (Ok(summary), Ok(employees), Ok(tables)) => Ok(MerchantSnapshot {
            summary: summary.summary,
            employees,
            tables,
        }),
        (summary, employees, tables) => Err(first_failure(vec![
            summary.err(),
            employees.err(),
            tables.err(),
        ])),
    }
}

/// An authorization failure outranks everything else; otherwise the first
/// failure in fetch order.
fn first_failure(errors: Vec<Option<ClientError>>) -> ClientError {
    let errors: Vec<ClientError> = errors.into_iter().flatten().collect();
    match errors.iter().position(ClientError::is_unauthorized) {
        Some(index) => errors[index].clone(),
        None => errors
            .into_iter()
            .next()
            .unwrap_or_else(|| ClientError::Malformed("no failure recorded".to_string())),
    }
}

/// Loads the dashboard of whoever the store says is signed in. An
/// authorization failure ends the session.
pub async fn refresh_for_session(
    sync: &DashboardSync,
    api: &dyn TipsApi,
    sessions: &SessionStore,
) -> LoadOutcome {
    let Some(session) = sessions.current() else {
        return LoadOutcome::Skipped;
    };

    let outcome = sync.load(api, &DashboardScope::from(&session)).await;
    if outcome == LoadOutcome::Unauthorized {
        router::logout(sessions);
    }
    outcome
}

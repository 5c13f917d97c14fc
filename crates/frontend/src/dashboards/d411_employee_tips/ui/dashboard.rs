use std::rc::Rc;

use contracts::dashboards::d411_employee_tips::TipLedgerEntry;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::sync::{refresh_for_session, DashboardSync, LoadOutcome};
use crate::shared::api_context::use_api;
use crate::shared::date_utils::format_timestamp;
use crate::shared::number_format::format_minor_units;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireSession;

const MISSING: &str = "N/A";

/// `/employees/:id/tips`
#[component]
pub fn EmployeeTipsPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Employee>
            <EmployeeTipsDashboard />
        </RequireSession>
    }
}

#[component]
pub fn EmployeeTipsDashboard() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let sync = StoredValue::new_local(Rc::new(DashboardSync::new(Role::Employee)));
    let revision = RwSignal::new(0u64);
    sync.with_value(|s| {
        s.subscribe(move || {
            let _ = revision.try_update(|r| *r += 1);
        })
    });

    let state = Signal::derive(move || {
        revision.track();
        sync.with_value(|s| s.state())
    });

    Effect::new(move |_| {
        let sync = sync.get_value();
        let api = api.get();
        let store = session.store();
        spawn_local(async move {
            if refresh_for_session(&sync, api.as_ref(), &store).await == LoadOutcome::Unauthorized {
                session.refresh();
            }
        });
    });

    let body = move || {
        let state = state.get();
        if let Some(error) = state.error {
            return view! { <div class="alert alert--error">{format!("Error: {}", error)}</div> }
                .into_any();
        }
        if !state.loaded {
            return view! { <p class="empty">"Loading tips..."</p> }.into_any();
        }

        let employee = state.snapshot.as_employee().cloned().unwrap_or_default();
        view! {
            <div class="dashboard__total">
                "Total tips: " <strong>{format_minor_units(employee.total)}</strong> " fils"
            </div>
            {ledger_table(employee.entries)}
        }
        .into_any()
    };

    view! {
        <div class="dashboard employee-dashboard">
            <h2 class="dashboard__title">"My Tips"</h2>
            {body}
        </div>
    }
}

fn ledger_table(entries: Vec<TipLedgerEntry>) -> AnyView {
    if entries.is_empty() {
        return view! { <p class="empty">"No tips recorded yet."</p> }.into_any();
    }

    let rows = entries
        .into_iter()
        .map(|entry| {
            view! {
                <tr>
                    <td>{format_timestamp(&entry.created_at)}</td>
                    <td class="num">{format_minor_units(entry.amount_minor_units)}</td>
                    <td>{entry.kind}</td>
                    <td>{entry.table_code.unwrap_or_else(|| MISSING.to_string())}</td>
                    <td>{entry.employee_name.unwrap_or_else(|| MISSING.to_string())}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Amount (fils)"</th>
                    <th>"Type"</th>
                    <th>"Table"</th>
                    <th>"Name"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}

use std::rc::Rc;

use contracts::dashboards::d410_merchant_tips::summary_totals;
use contracts::domain::a101_employee::CreateEmployeeDto;
use contracts::system::auth::Role;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::NOTICE_TTL_MS;
use crate::dashboards::d410_merchant_tips::mutations::{
    DraftForm, MutationOutcome, MutationPipeline,
};
use crate::dashboards::sync::{
    refresh_for_session, DashboardScope, DashboardSync, LoadOutcome, MerchantSnapshot,
};
use crate::shared::api_context::use_api;
use crate::shared::number_format::format_minor_units;
use crate::system::session::context::use_session;
use crate::system::session::guard::RequireSession;

/// Add-employee form inputs.
#[derive(Clone, Copy)]
struct EmployeeFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
}

impl EmployeeFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }
}

impl DraftForm for EmployeeFields {
    type Draft = CreateEmployeeDto;

    fn read(&self) -> CreateEmployeeDto {
        CreateEmployeeDto {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
    }
}

impl DraftForm for RwSignal<String> {
    type Draft = String;

    fn read(&self) -> String {
        self.get_untracked()
    }

    fn reset(&self) {
        self.set(String::new());
    }
}

/// `/merchants/:id/tips/summary`
#[component]
pub fn MerchantTipsPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Merchant>
            <MerchantTipsDashboard />
        </RequireSession>
    }
}

/// Merchant Tips Dashboard component
#[component]
pub fn MerchantTipsDashboard() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    // Engines are not Send+Sync, store locally
    let sync = StoredValue::new_local(Rc::new(DashboardSync::new(Role::Merchant)));
    let pipeline = StoredValue::new_local(Rc::new(MutationPipeline::new()));

    let revision = RwSignal::new(0u64);
    let bump = move || {
        let _ = revision.try_update(|r| *r += 1);
    };
    sync.with_value(|s| s.subscribe(bump));
    pipeline.with_value(|p| p.subscribe(bump));

    let state = Signal::derive(move || {
        revision.track();
        sync.with_value(|s| s.state())
    });
    let notices = Signal::derive(move || {
        revision.track();
        pipeline.with_value(|p| p.notice_state())
    });

    let employee = EmployeeFields::new();
    let table_code = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);

    // Load data on mount
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

    let settle = move |outcome: MutationOutcome| match outcome {
        MutationOutcome::Created { reload: LoadOutcome::Unauthorized, .. } => {
            session.logout();
        }
        MutationOutcome::Created { notice_id, .. } => {
            let pipeline = pipeline.get_value();
            spawn_local(async move {
                pipeline
                    .notices()
                    .expire_after(notice_id, TimeoutFuture::new(NOTICE_TTL_MS))
                    .await;
            });
        }
        MutationOutcome::Failed(_) => {}
    };

    let add_employee = move |_| {
        let Some(current) = session.get_untracked() else {
            return;
        };
        let scope = DashboardScope::from(&current);
        let (sync, pipeline, api) = (sync.get_value(), pipeline.get_value(), api.get());
        set_submitting.set(true);
        spawn_local(async move {
            let outcome = pipeline
                .create_employee(api.as_ref(), &sync, &scope, &employee)
                .await;
            set_submitting.set(false);
            settle(outcome);
        });
    };

    let add_table = move |_| {
        let Some(current) = session.get_untracked() else {
            return;
        };
        let scope = DashboardScope::from(&current);
        let (sync, pipeline, api) = (sync.get_value(), pipeline.get_value(), api.get());
        set_submitting.set(true);
        spawn_local(async move {
            let outcome = pipeline
                .create_table(api.as_ref(), &sync, &scope, &table_code)
                .await;
            set_submitting.set(false);
            settle(outcome);
        });
    };

    let merchant = move || {
        state
            .get()
            .snapshot
            .as_merchant()
            .cloned()
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard merchant-dashboard">
            <h2 class="dashboard__title">"Merchant Dashboard"</h2>

            {move || notices.get().error.map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}
            {move || notices.get().success.map(|n| view! {
                <div class="alert alert--success">{n.text}</div>
            })}
            {move || state.get().error.map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <Show when=move || state.get().loading>
                <div class="dashboard__loading">"Loading..."</div>
            </Show>

            <section class="dashboard__section">
                <h3>"Tips Summary"</h3>
                {move || summary_table(&merchant())}
            </section>

            <section class="dashboard__section">
                <h3>"Employees"</h3>
                <ul class="dashboard__list">
                    {move || merchant()
                        .employees
                        .into_iter()
                        .map(|e| view! { <li>{format!("{} ({})", e.name, e.email)}</li> })
                        .collect_view()}
                </ul>

                <div class="form">
                    <div class="form__group">
                        <Input value=employee.name placeholder="Name" />
                    </div>
                    <div class="form__group">
                        <Input value=employee.email input_type=InputType::Email placeholder="Email" />
                    </div>
                    <div class="form__group">
                        <Input value=employee.password input_type=InputType::Password placeholder="Password" />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=add_employee
                        disabled=submitting
                    >
                        "Add Employee"
                    </Button>
                </div>
            </section>

            <section class="dashboard__section">
                <h3>"Tables"</h3>
                <ul class="dashboard__list">
                    {move || merchant()
                        .tables
                        .into_iter()
                        .map(|t| view! { <li>{t.code}</li> })
                        .collect_view()}
                </ul>

                <div class="form">
                    <div class="form__group">
                        <Input value=table_code placeholder="Table code" />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=add_table
                        disabled=submitting
                    >
                        "Add Table"
                    </Button>
                </div>
            </section>
        </div>
    }
}

fn summary_table(snapshot: &MerchantSnapshot) -> AnyView {
    let totals = summary_totals(&snapshot.summary);
    let rows = snapshot
        .summary
        .iter()
        .map(|(status, bucket)| {
            view! {
                <tr>
                    <td>{status.clone()}</td>
                    <td class="num">{bucket.count}</td>
                    <td class="num">{format_minor_units(bucket.total_amount_minor_units)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Status"</th>
                    <th>"Count"</th>
                    <th>"Total (fils)"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
            <tfoot>
                <tr>
                    <td>"Total"</td>
                    <td class="num">{totals.count}</td>
                    <td class="num">{format_minor_units(totals.total_amount_minor_units)}</td>
                </tr>
            </tfoot>
        </table>
    }
    .into_any()
}

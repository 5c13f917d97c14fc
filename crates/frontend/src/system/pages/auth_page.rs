use std::rc::Rc;

use contracts::system::auth::{AuthCredentials, AuthMode, LoginRequest, Role, SignupRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::config::SIGNUP_REDIRECT_DELAY_MS;
use crate::shared::api_context::use_api;
use crate::system::auth::flow::{AuthFlow, AuthOutcome, AuthPhase};
use crate::system::router::route;
use crate::system::session::context::use_session;

/// Login and signup behind one form, served at `/` and `/login`.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();

    let flow = StoredValue::new_local(Rc::new(AuthFlow::new()));
    let revision = RwSignal::new(0u64);
    flow.with_value(|f| {
        f.subscribe(move || {
            let _ = revision.try_update(|r| *r += 1);
        })
    });
    let auth = Signal::derive(move || {
        revision.track();
        flow.with_value(|f| f.view())
    });

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Merchant.as_str().to_string());

    // A session restored from storage skips the form
    let redirect = navigate.clone();
    Effect::new(move |_| {
        if let Some(current) = session.get_untracked() {
            redirect(&route(Some(&current)).path(), Default::default());
        }
    });

    let is_signup = move || auth.get().mode == AuthMode::Signup;
    let is_submitting = move || auth.get().phase == AuthPhase::Submitting;

    let toggle_mode = move |_| {
        let next = match auth.get_untracked().mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        flow.with_value(|f| f.set_mode(next));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = match auth.get_untracked().mode {
            AuthMode::Login => AuthCredentials::Login(LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            }),
            AuthMode::Signup => AuthCredentials::Signup(SignupRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                role: Role::parse(&role.get_untracked()).unwrap_or(Role::Merchant),
            }),
        };

        let flow = flow.get_value();
        let api = api.get();
        let store = session.store();
        let navigate = navigate.clone();
        spawn_local(async move {
            match flow.submit(api.as_ref(), &store, credentials).await {
                AuthOutcome::LoggedIn(destination) => {
                    session.refresh();
                    log::info!("signed in, going to {}", destination.path());
                    navigate(&destination.path(), Default::default());
                }
                AuthOutcome::SignedUp { ticket } => {
                    flow.complete_signup(ticket, TimeoutFuture::new(SIGNUP_REDIRECT_DELAY_MS))
                        .await;
                }
                AuthOutcome::Failed(_) | AuthOutcome::Superseded => {}
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>
                    {move || if is_signup() { "Create Your Account" } else { "Welcome To Ecom payments" }}
                </h1>

                {move || auth.get().notices.error.map(|e| view! {
                    <div class="error-message">{e}</div>
                })}
                {move || auth.get().notices.success.map(|n| view! {
                    <div class="success-message">{n.text}</div>
                })}

                <form on:submit=on_submit>
                    <Show when=is_signup>
                        <div class="form-group">
                            <label for="name">"Full name"</label>
                            <input
                                type="text"
                                id="name"
                                value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                                disabled=is_submitting
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=is_submitting
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_submitting
                        />
                    </div>

                    <Show when=is_signup>
                        <div class="form-group">
                            <label for="role">"Role"</label>
                            <select
                                id="role"
                                prop:value=move || role.get()
                                on:change=move |ev| set_role.set(event_target_value(&ev))
                                disabled=is_submitting
                            >
                                <option value=Role::Merchant.as_str()>{Role::Merchant.as_str()}</option>
                            </select>
                        </div>
                    </Show>

                    <button type="submit" class="btn-primary" disabled=is_submitting>
                        {move || match (is_signup(), is_submitting()) {
                            (false, false) => "Login",
                            (false, true) => "Logging in...",
                            (true, false) => "Sign up",
                            (true, true) => "Signing up...",
                        }}
                    </button>
                </form>

                <button type="button" class="link-button" on:click=toggle_mode>
                    {move || if is_signup() {
                        "Already have an account? Login"
                    } else {
                        "Don't have an account? Sign up"
                    }}
                </button>
            </div>
        </div>
    }
}

//! Login / signup state machine.
//!
//! Each submission takes a ticket; only the latest ticket may settle, so a
//! slow earlier response can never overwrite the session a later one
//! established.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use contracts::system::auth::{AuthCredentials, AuthMode};

use crate::shared::api_client::TipsApi;
use crate::shared::change_notifier::ChangeNotifier;
use crate::shared::error::ClientError;
use crate::shared::notice::{NoticeState, Notices};
use crate::system::router::Destination;
use crate::system::session::store::SessionStore;

pub const AUTH_FALLBACK: &str = "Auth failed";
pub const SIGNUP_NOTICE: &str = "Signup successful! Redirecting to login...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Idle,
    Submitting,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session established; go here.
    LoggedIn(Destination),
    /// Account created. Pass `ticket` to [`AuthFlow::complete_signup`].
    SignedUp { ticket: u64 },
    Failed(String),
    /// A newer submission was made while this one was in flight.
    Superseded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthView {
    pub mode: AuthMode,
    pub phase: AuthPhase,
    pub notices: NoticeState,
}

#[derive(Default)]
pub struct AuthFlow {
    latest: Cell<u64>,
    mode: Cell<AuthMode>,
    phase: Cell<AuthPhase>,
    notices: Notices,
    changes: ChangeNotifier,
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AuthView {
        AuthView {
            mode: self.mode.get(),
            phase: self.phase.get(),
            notices: self.notices.state(),
        }
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        let listener: Rc<dyn Fn()> = Rc::new(listener);
        let on_notice = listener.clone();
        self.notices.subscribe(move || on_notice());
        self.changes.subscribe(move || listener());
    }

    /// Form toggle between login and signup.
    pub fn set_mode(&self, mode: AuthMode) {
        self.mode.set(mode);
        self.changes.notify();
    }

    pub async fn submit(
        &self,
        api: &dyn TipsApi,
        session: &SessionStore,
        credentials: AuthCredentials,
    ) -> AuthOutcome {
        let mode = credentials.mode();
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        self.phase.set(AuthPhase::Submitting);
        self.changes.notify();
        log::debug!("auth submission #{} to /auth/{}", ticket, mode.path_segment());

        let result = api.authenticate(&credentials).await;

        if ticket != self.latest.get() {
            log::warn!("auth submission #{} superseded, response dropped", ticket);
            return AuthOutcome::Superseded;
        }
        self.phase.set(AuthPhase::Settled);

        let outcome = match (mode, result) {
            (_, Err(err)) => AuthOutcome::Failed(err.user_message(AUTH_FALLBACK)),
            (AuthMode::Signup, Ok(_)) => {
                self.notices.success(SIGNUP_NOTICE);
                AuthOutcome::SignedUp { ticket }
            }
            (AuthMode::Login, Ok(response)) => match response.into_grant() {
                Ok(grant) => {
                    session.establish(&grant.token, grant.role, &grant.identity);
                    self.notices.clear();
                    AuthOutcome::LoggedIn(Destination::for_role(grant.role, &grant.identity))
                }
                Err(malformed) => {
                    log::warn!("login response unusable: {}", malformed);
                    AuthOutcome::Failed(ClientError::from(malformed).user_message(AUTH_FALLBACK))
                }
            },
        };

        if let AuthOutcome::Failed(message) = &outcome {
            self.notices.error(message.clone());
        }
        self.changes.notify();
        outcome
    }

    /// After `delay`, returns the form to login mode, unless another
    /// submission happened in the meantime.
    pub async fn complete_signup<F>(&self, ticket: u64, delay: F)
    where
        F: Future<Output = ()>,
    {
        delay.await;
        if ticket != self.latest.get() || self.mode.get() != AuthMode::Signup {
            return;
        }
        self.mode.set(AuthMode::Login);
        self.phase.set(AuthPhase::Idle);
        self.notices.clear();
        self.changes.notify();
    }
}

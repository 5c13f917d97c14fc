//! Where a session belongs.
//!
//! Pure mapping from session to path; `leptos_router` does the navigating.

use contracts::system::auth::Role;

use crate::shared::api_utils::path_segment;
use crate::system::session::store::{Session, SessionStore};

/// Path of the public auth view.
pub const AUTH_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Auth,
    MerchantSummary(String),
    EmployeeTips(String),
}

impl Destination {
    pub fn for_role(role: Role, identity: &str) -> Self {
        match role {
            Role::Merchant => Destination::MerchantSummary(identity.to_string()),
            Role::Employee => Destination::EmployeeTips(identity.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Destination::Auth => AUTH_PATH.to_string(),
            Destination::MerchantSummary(id) => {
                format!("/merchants/{}/tips/summary", path_segment(id))
            }
            Destination::EmployeeTips(id) => format!("/employees/{}/tips", path_segment(id)),
        }
    }
}

pub fn route(session: Option<&Session>) -> Destination {
    match session {
        None => Destination::Auth,
        Some(session) => Destination::for_role(session.role, &session.identity),
    }
}

/// Whether the view for (`role`, `identity`) may render for `session`.
pub fn admits(session: Option<&Session>, role: Role, identity: &str) -> bool {
    matches!(session, Some(s) if s.role == role && s.identity == identity)
}

/// Clears the session and sends the user to the auth view, whatever the
/// current state.
pub fn logout(store: &SessionStore) -> Destination {
    store.clear();
    log::info!("logged out");
    Destination::Auth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::storage::MemoryStore;
    use std::rc::Rc;

    fn session(role: Role, identity: &str) -> Session {
        Session {
            token: "tok".to_string(),
            role,
            identity: identity.to_string(),
        }
    }

    #[test]
    fn test_route_by_role() {
        assert_eq!(route(None).path(), "/login");
        assert_eq!(
            route(Some(&session(Role::Merchant, "m1"))).path(),
            "/merchants/m1/tips/summary"
        );
        assert_eq!(
            route(Some(&session(Role::Employee, "e1"))).path(),
            "/employees/e1/tips"
        );
    }

    #[test]
    fn test_admits_only_own_view() {
        let merchant = session(Role::Merchant, "m1");
        assert!(admits(Some(&merchant), Role::Merchant, "m1"));
        assert!(!admits(Some(&merchant), Role::Merchant, "m2"));
        assert!(!admits(Some(&merchant), Role::Employee, "m1"));
        assert!(!admits(None, Role::Merchant, "m1"));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = SessionStore::new(Rc::new(MemoryStore::new()));
        assert_eq!(logout(&store), Destination::Auth);

        store.establish("tok", Role::Employee, "e1");
        assert_eq!(logout(&store), Destination::Auth);
        assert_eq!(store.current(), None);
        assert_eq!(logout(&store).path(), "/login");
    }
}

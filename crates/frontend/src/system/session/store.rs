//! The session: one token, one role, one identity, or nothing.

use std::rc::Rc;

use contracts::system::auth::Role;

use super::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const MERCHANT_ID_KEY: &str = "merchantId";
pub const EMPLOYEE_ID_KEY: &str = "employeeId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    /// `merchantId` for merchants, `employeeId` for employees
    pub identity: String,
}

fn identity_key(role: Role) -> &'static str {
    match role {
        Role::Merchant => MERCHANT_ID_KEY,
        Role::Employee => EMPLOYEE_ID_KEY,
    }
}

/// Single owner of the persisted session.
///
/// A record is only ever read back whole: missing keys, a blank token or an
/// unknown role all read as no session.
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Replaces any prior session. A blank token is refused and leaves the
    /// store untouched.
    pub fn establish(&self, token: &str, role: Role, identity: &str) {
        if token.trim().is_empty() {
            log::warn!("refusing to establish a session without a token");
            return;
        }

        self.clear();
        // Token goes last: until it is written the record reads as absent.
        let written = self
            .backend
            .set(ROLE_KEY, role.as_str())
            .and_then(|_| self.backend.set(identity_key(role), identity))
            .and_then(|_| self.backend.set(TOKEN_KEY, token));

        match written {
            Ok(()) => log::info!("session established for {} {}", role, identity),
            Err(e) => {
                log::error!("failed to persist session: {}", e);
                self.clear();
            }
        }
    }

    pub fn current(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
        let role = Role::parse(&self.backend.get(ROLE_KEY)?)?;
        let identity = self
            .backend
            .get(identity_key(role))
            .filter(|id| !id.trim().is_empty())?;

        Some(Session {
            token,
            role,
            identity,
        })
    }

    /// Safe to call when no session exists.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, ROLE_KEY, MERCHANT_ID_KEY, EMPLOYEE_ID_KEY] {
            self.backend.remove(key);
        }
    }
}

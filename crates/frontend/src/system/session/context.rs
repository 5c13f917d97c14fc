use std::rc::Rc;

use leptos::prelude::*;

use super::storage::browser_store;
use super::store::{Session, SessionStore};
use crate::system::router::{self, Destination};

/// Reactive mirror of the [`SessionStore`].
///
/// Components read the session through this context only; every write goes
/// through the store first and is then reflected in the signal.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<Rc<SessionStore>, LocalStorage>,
    session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let current = store.current();
        Self {
            store: StoredValue::new_local(Rc::new(store)),
            session: RwSignal::new(current),
        }
    }

    pub fn store(&self) -> Rc<SessionStore> {
        self.store.get_value()
    }

    /// Tracked read.
    pub fn get(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    /// Re-reads the store after something wrote to it.
    pub fn refresh(&self) {
        let current = self.store.with_value(|store| store.current());
        self.session.set(current);
    }

    pub fn logout(&self) -> Destination {
        let destination = self.store.with_value(|store| router::logout(store));
        self.session.set(None);
        destination
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    // Restores whatever survived the last reload
    provide_context(SessionContext::new(SessionStore::new(browser_store())));

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}

//! TopHeader component - application top bar.
//!
//! Shows who is signed in and the logout action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::session::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    // Navigator is not Send+Sync, store locally
    let navigate = StoredValue::new_local(use_navigate());

    let logout = move |_| {
        let target = session.logout();
        log::debug!("redirect to {}", target.path());
        navigate.with_value(|navigate| navigate(&target.path(), Default::default()));
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Ecom payments"</span>
            </div>

            <Show when=move || session.get().is_some()>
                <div class="top-header__actions">
                    <div class="top-header__user">
                        {move || session
                            .get()
                            .map(|s| format!("{} {}", s.role, s.identity))
                            .unwrap_or_default()}
                    </div>
                    <button class="logout-button" on:click=logout>
                        "Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}

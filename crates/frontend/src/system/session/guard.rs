use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::context::use_session;
use crate::system::router::{admits, route};

/// Renders `children` only for the session that owns the route's `:id`.
/// Anyone else is sent to where their session belongs (the auth view when
/// there is none).
#[component]
pub fn RequireSession(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();

    let admitted = move || {
        let requested = params.read().get("id").unwrap_or_default();
        admits(session.get().as_ref(), role, &requested)
    };

    Effect::new(move |_| {
        if !admitted() {
            let target = route(session.get().as_ref());
            log::debug!("guard redirect to {}", target.path());
            navigate(&target.path(), Default::default());
        }
    });

    view! {
        <Show
            when=admitted
            fallback=|| view! { <p class="empty">"Redirecting..."</p> }
        >
            {children()}
        </Show>
    }
}

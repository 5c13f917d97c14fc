use std::rc::Rc;

use crate::config::ClientConfig;
use crate::routes::routes::AppRoutes;
use crate::shared::api_client::HttpTipsApi;
use crate::shared::api_context::ApiContext;
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::load();

    // Provide the ledger API client to the whole app via context.
    provide_context(ApiContext::new(Rc::new(HttpTipsApi::new(config.api_base))));

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::{EmployeeTipsPage, MerchantTipsPage};
use crate::layout::Shell;
use crate::system::pages::AuthPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="empty">"Page not found"</p> }>
                    <Route path=path!("/") view=AuthPage />
                    <Route path=path!("/login") view=AuthPage />
                    <Route path=path!("/merchants/:id/tips/summary") view=MerchantTipsPage />
                    <Route path=path!("/employees/:id/tips") view=EmployeeTipsPage />
                </Routes>
            </Shell>
        </Router>
    }
}

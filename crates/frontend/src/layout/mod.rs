pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell: the top bar above whatever route is active.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <TopHeader />
            <main class="app-shell__content">{children()}</main>
        </div>
    }
}

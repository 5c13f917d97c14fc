use std::rc::Rc;

use leptos::prelude::*;

use super::api_client::TipsApi;

/// The [`TipsApi`] every page talks to.
#[derive(Clone, Copy)]
pub struct ApiContext {
    api: StoredValue<Rc<dyn TipsApi>, LocalStorage>,
}

impl ApiContext {
    pub fn new(api: Rc<dyn TipsApi>) -> Self {
        Self {
            api: StoredValue::new_local(api),
        }
    }

    pub fn get(&self) -> Rc<dyn TipsApi> {
        self.api.get_value()
    }
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext not found in component tree")
}

use leptos::prelude::*;

/// Application-wide UI state, provided via context at the app root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Whether the viewer may modify the catalog. Drives the access gate on
    /// every edit affordance.
    pub can_edit: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            can_edit: RwSignal::new(true),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

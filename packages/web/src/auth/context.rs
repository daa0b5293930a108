//! Authentication context provider

use dioxus::prelude::*;

use super::server_fns::current_user;
use crate::types::AuthUser;

/// Process-wide session state provided to every view.
///
/// Issued on successful OTP verification, attached to backend requests by
/// the server functions, cleared on logout or expiry.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authenticated user (if any)
    pub user: Signal<Option<AuthUser>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Refresh the auth state from the server session
    pub async fn refresh(&self) {
        let mut user = self.user;
        let mut loading = self.loading;
        match current_user().await {
            Ok(session_user) => user.set(session_user),
            Err(_) => user.set(None),
        }
        loading.set(false);
    }

    /// Clear the auth state (logout)
    pub fn clear(&self) {
        let mut user = self.user;
        user.set(None);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let user = use_signal(|| None::<AuthUser>);
    let loading = use_signal(|| true);

    let auth = AuthContext { user, loading };

    use_context_provider(|| auth);

    // Load initial auth state
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

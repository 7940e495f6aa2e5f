//! Authentication session management with persistent storage.

use dioxus::prelude::*;
use lahwita_shared::session::{clear_session, load_session, save_session};
use lahwita_shared::{ApiError, ClientConfig, RegisterRequest, Session, User};

use crate::api_client::ApiClient;
use crate::storage::PlatformStorage;

/// Authentication context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub session: Signal<Option<Session>>,
    /// True until the stored session has been read back.
    pub is_loading: Signal<bool>,
    api_url: Signal<String>,
}

/// Provider component that sets up auth context.
///
/// Expects a [`ClientConfig`] in context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<ClientConfig>();
    let mut session = use_signal(|| None::<Session>);
    let mut is_loading = use_signal(|| true);
    let api_url = use_signal(|| config.api_url.clone());

    // Restore once on mount
    use_effect(move || {
        session.set(load_session(&PlatformStorage));
        is_loading.set(false);
    });

    use_context_provider(|| AuthContext {
        session,
        is_loading,
        api_url,
    });

    children
}

impl AuthContext {
    /// Create an API client carrying the current bearer token
    pub fn client(&self) -> ApiClient {
        let token = self.session.read().as_ref().map(|s| s.token.clone());
        ApiClient::new(self.api_url.read().clone()).with_token(token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    pub fn display_name(&self) -> String {
        self.session
            .read()
            .as_ref()
            .map(|s| s.user.display_name().to_string())
            .unwrap_or_else(|| "there".to_string())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let res = self.client().login(email, password).await?;
        self.start_session(Session::from(res));
        Ok(())
    }

    pub async fn register(&mut self, req: &RegisterRequest) -> Result<(), ApiError> {
        let res = self.client().register(req).await?;
        self.start_session(Session::from(res));
        Ok(())
    }

    /// Tell the backend, then drop the local session whatever it answered.
    pub async fn logout(&mut self) {
        if let Err(e) = self.client().logout().await {
            crate::log_warn!("logout request failed, clearing local session anyway: {e}");
        }
        self.end_session();
    }

    pub async fn delete_account(&mut self) -> Result<(), ApiError> {
        self.client().delete_account().await?;
        self.end_session();
        Ok(())
    }

    fn start_session(&mut self, session: Session) {
        if !save_session(&PlatformStorage, &session) {
            crate::log_warn!("session could not be persisted; it will not survive a restart");
        }
        crate::log_info!("signed in as {}", session.user.email);
        self.session.set(Some(session));
    }

    fn end_session(&mut self) {
        clear_session(&PlatformStorage);
        self.session.set(None);
    }
}

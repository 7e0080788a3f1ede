use crate::{
    api::{ApiClient, ApiError, LoginRequest, Profile},
    utils::{jwt, storage},
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Resolving,
    Resolved(Option<Credentials>),
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    Resolved(Option<Credentials>),
    SignedIn(Credentials),
    SignedOut,
}

/// Immutable, versioned session state. New snapshots are produced only by
/// [`SessionSnapshot::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    version: u64,
    phase: SessionPhase,
}

impl SessionSnapshot {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match &self.phase {
            SessionPhase::Resolved(Some(credentials)) => Some(credentials),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials().map(|c| c.token.as_str())
    }

    pub fn apply(&self, action: SessionAction) -> Self {
        let phase = match action {
            // A late token check must not undo an explicit sign-in or sign-out.
            SessionAction::Resolved(_) if self.phase != SessionPhase::Resolving => {
                return self.clone();
            }
            SessionAction::Resolved(credentials) => SessionPhase::Resolved(credentials),
            SessionAction::SignedIn(credentials) => SessionPhase::Resolved(Some(credentials)),
            SessionAction::SignedOut => SessionPhase::Resolved(None),
        };
        Self {
            version: self.version + 1,
            phase,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub loading: bool,
    pub is_logged_in: bool,
    pub profile: Option<Profile>,
}

pub fn derive_session(snapshot: &SessionSnapshot) -> Session {
    match snapshot.phase() {
        SessionPhase::Resolving => Session {
            loading: true,
            is_logged_in: false,
            profile: None,
        },
        SessionPhase::Resolved(None) => Session::default(),
        SessionPhase::Resolved(Some(credentials)) => Session {
            loading: false,
            is_logged_in: true,
            profile: credentials.profile.clone(),
        },
    }
}

pub type SessionStore = RwSignal<SessionSnapshot>;

pub fn dispatch(store: SessionStore, action: SessionAction) {
    store.update(|snapshot| {
        *snapshot = snapshot.apply(action);
        log::debug!("session snapshot v{}", snapshot.version());
    });
}

fn create_session_store() -> SessionStore {
    let store = create_rw_signal(SessionSnapshot::default());
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        resolve_session(&api, storage::load_token(), store).await;
    });
    store
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context::<SessionStore>(create_session_store());
    view! { <>{children()}</> }
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| create_rw_signal(SessionSnapshot::default()))
}

pub fn use_session() -> Memo<Session> {
    let store = use_session_store();
    create_memo(move |_| derive_session(&store.get()))
}

/// Settles the initial `loading` phase. Any failure resolves to signed out.
pub async fn resolve_session(api: &ApiClient, token: Option<String>, store: SessionStore) {
    let token = match token {
        Some(token) if !jwt::is_expired_now(&token) => token,
        Some(_) => {
            log::info!("stored token has expired");
            storage::clear_token();
            dispatch(store, SessionAction::Resolved(None));
            return;
        }
        None => {
            dispatch(store, SessionAction::Resolved(None));
            return;
        }
    };

    match api.get_me(&token).await {
        Ok(profile) => dispatch(
            store,
            SessionAction::Resolved(Some(Credentials {
                token,
                profile: Some(profile),
            })),
        ),
        Err(err) => {
            log::warn!("session check failed: {}", err);
            if err.is_unauthorized() {
                storage::clear_token();
            }
            dispatch(store, SessionAction::Resolved(None));
        }
    }
}

pub async fn sign_in(
    request: LoginRequest,
    api: &ApiClient,
    store: SessionStore,
) -> Result<(), ApiError> {
    let response = api.login(&request).await?;
    if let Err(err) = storage::store_token(&response.token) {
        log::warn!("token not persisted: {}", err);
    }
    dispatch(
        store,
        SessionAction::SignedIn(Credentials {
            token: response.token,
            profile: response.profile,
        }),
    );
    Ok(())
}

pub fn sign_out(store: SessionStore) {
    storage::clear_token();
    dispatch(store, SessionAction::SignedOut);
}

pub fn use_sign_in_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let store = use_session_store();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let api = api.clone();
        async move { sign_in(request, &api, store).await }
    })
}

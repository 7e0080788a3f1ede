#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Profile, Role};
    use crate::state::session::{Credentials, SessionAction, SessionSnapshot, SessionStore};
    use leptos::*;

    pub fn profile(role: Role) -> Profile {
        Profile {
            first_name: "Test".into(),
            last_name: "User".into(),
            role,
        }
    }

    pub fn provide_snapshot(snapshot: SessionSnapshot) -> SessionStore {
        let store = create_rw_signal(snapshot);
        provide_context::<SessionStore>(store);
        store
    }

    pub fn provide_profile(role: Role) -> SessionStore {
        provide_snapshot(SessionSnapshot::default().apply(SessionAction::SignedIn(Credentials {
            token: "t".into(),
            profile: Some(profile(role)),
        })))
    }

    pub fn provide_signed_out() -> SessionStore {
        provide_snapshot(SessionSnapshot::default().apply(SessionAction::Resolved(None)))
    }
}

use crate::{
    components::layout::LoadingSpinner,
    router::{RouteEntry, LOGIN_PATH},
    state::session::{use_session, Session},
};
use leptos::*;
use leptos_router::{NavigateOptions, Redirect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    /// Session not resolved yet; the shell shows a loading indicator.
    AwaitSession,
    RenderTarget,
    RedirectToLogin,
}

/// Session-only gate. Role requirements are left to the screens.
pub fn guard(route: &RouteEntry, session: &Session) -> RenderDecision {
    if session.loading {
        RenderDecision::AwaitSession
    } else if route.requires_auth && !session.is_logged_in {
        RenderDecision::RedirectToLogin
    } else {
        RenderDecision::RenderTarget
    }
}

#[component]
pub fn RouteGate(route: &'static RouteEntry, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = create_memo(move |_| guard(route, &session.get()));

    move || match decision.get() {
        RenderDecision::AwaitSession => view! { <LoadingSpinner /> }.into_view(),
        RenderDecision::RedirectToLogin => {
            log::debug!("redirecting {} to {}", route.path, LOGIN_PATH);
            view! {
                <Redirect
                    path=LOGIN_PATH
                    options=NavigateOptions { replace: true, ..Default::default() }
                />
            }
            .into_view()
        }
        RenderDecision::RenderTarget => children().into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Profile, Role};
    use crate::router::{route_for, Screen, ROUTES};

    fn session(loading: bool, is_logged_in: bool, role: Option<Role>) -> Session {
        Session {
            loading,
            is_logged_in,
            profile: role.map(|role| Profile {
                first_name: "Sam".into(),
                last_name: "Doe".into(),
                role,
            }),
        }
    }

    #[test]
    fn never_redirects_while_loading() {
        for route in ROUTES {
            for logged_in in [false, true] {
                let decision = guard(route, &session(true, logged_in, None));
                assert_eq!(decision, RenderDecision::AwaitSession);
            }
        }
    }

    #[test]
    fn redirects_only_protected_routes_when_logged_out() {
        let logged_out = session(false, false, None);
        for route in ROUTES {
            let expected = if route.requires_auth {
                RenderDecision::RedirectToLogin
            } else {
                RenderDecision::RenderTarget
            };
            assert_eq!(guard(route, &logged_out), expected, "{}", route.path);
        }
    }

    #[test]
    fn gate_ignores_role_for_admin_screen() {
        let employee = session(false, true, Some(Role::Employee));
        let route = route_for(Screen::Employees);
        assert_eq!(guard(route, &employee), RenderDecision::RenderTarget);
        assert!(!crate::router::is_authorized(route, employee.profile.as_ref()));
    }

    #[test]
    fn logged_in_without_profile_still_renders() {
        let no_profile = session(false, true, None);
        assert_eq!(
            guard(route_for(Screen::Reviews), &no_profile),
            RenderDecision::RenderTarget
        );
    }
}

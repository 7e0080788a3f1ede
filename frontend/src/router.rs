use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Profile, Role},
    components::{guard::RouteGate, layout::Layout},
    pages::{
        employees::EmployeesPage,
        login::LoginPage,
        reviews::{ReviewDetailsPage, ReviewsPage},
    },
    state::session::{use_session_store, Session, SessionProvider},
};

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_PATH: &str = "/reviews";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Employees,
    Reviews,
    ReviewDetails,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub screen: Screen,
    pub requires_auth: bool,
    pub required_role: Option<Role>,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/employees",
        label: "Employees",
        screen: Screen::Employees,
        requires_auth: true,
        required_role: Some(Role::Admin),
    },
    RouteEntry {
        path: "/reviews",
        label: "Reviews",
        screen: Screen::Reviews,
        requires_auth: true,
        required_role: None,
    },
    RouteEntry {
        path: "/reviews/:id",
        label: "Review",
        screen: Screen::ReviewDetails,
        requires_auth: true,
        required_role: None,
    },
    RouteEntry {
        path: LOGIN_PATH,
        label: "Login",
        screen: Screen::Login,
        requires_auth: false,
        required_role: None,
    },
];

/// Screens listed in the header menu, in display order.
const MENU: &[Screen] = &[Screen::Employees, Screen::Reviews];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Matched {
        route: &'static RouteEntry,
        params: Vec<(&'static str, String)>,
    },
    Redirect(&'static str),
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        match self {
            RouteMatch::Matched { params, .. } => params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str()),
            RouteMatch::Redirect(_) => None,
        }
    }
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());
    let mut params = Vec::new();
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.push((name, actual.to_string()));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Unknown paths fall through to the default landing screen.
pub fn resolve(path: &str) -> RouteMatch {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES
        .iter()
        .find_map(|route| {
            match_pattern(route.path, path).map(|params| RouteMatch::Matched { route, params })
        })
        .unwrap_or(RouteMatch::Redirect(DEFAULT_PATH))
}

pub fn route_for(screen: Screen) -> &'static RouteEntry {
    match screen {
        Screen::Employees => &ROUTES[0],
        Screen::Reviews => &ROUTES[1],
        Screen::ReviewDetails => &ROUTES[2],
        Screen::Login => &ROUTES[3],
    }
}

/// Role check for screen-level authorization. The route gate never calls
/// this; it only looks at whether a session exists.
pub fn is_authorized(route: &RouteEntry, profile: Option<&Profile>) -> bool {
    match route.required_role {
        None => true,
        Some(role) => profile.is_some_and(|p| p.role == role),
    }
}

pub fn nav_links(session: &Session) -> Vec<&'static RouteEntry> {
    if !session.is_logged_in {
        return Vec::new();
    }
    MENU.iter()
        .map(|screen| route_for(*screen))
        .filter(|route| is_authorized(route, session.profile.as_ref()))
        .collect()
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Employee Reviews"/>
        <SessionProvider>
            <Router>
                <Layout>
                    <Shell/>
                </Layout>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let current = create_memo(move |_| resolve(&location.pathname.get()));

    move || match current.get() {
        RouteMatch::Redirect(target) => view! {
            <Redirect
                path=target
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        }
        .into_view(),
        RouteMatch::Matched { route, params } => {
            let review_id = params
                .into_iter()
                .find_map(|(key, value)| (key == "id").then_some(value))
                .unwrap_or_default();
            view! {
                <RouteGate route=route>
                    {
                        let review_id = review_id.clone();
                        move || screen_view(route.screen, review_id.clone())
                    }
                </RouteGate>
            }
            .into_view()
        }
    }
}

fn screen_view(screen: Screen, review_id: String) -> View {
    let store = use_session_store();
    let token = store
        .with_untracked(|snapshot| snapshot.token().map(str::to_string))
        .unwrap_or_default();
    match screen {
        Screen::Employees => view! { <EmployeesPage token=token/> }.into_view(),
        Screen::Reviews => view! { <ReviewsPage/> }.into_view(),
        Screen::ReviewDetails => view! { <ReviewDetailsPage id=review_id/> }.into_view(),
        Screen::Login => view! { <LoginPage/> }.into_view(),
    }
}

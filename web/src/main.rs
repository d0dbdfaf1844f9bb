//! ClinicDesk web application: route table, session-gated shell, and views.

use dioxus::prelude::*;

use ui::{clear_token, use_session, Navbar, SessionProvider};
use views::{ClinicDetail, Clinics, DoctorDetail, Doctors, Login, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/profile")]
    Profile {},
    #[route("/clinics")]
    Clinics {},
    #[route("/clinics/:id")]
    ClinicDetail { id: i64 },
    #[route("/doctors")]
    Doctors {},
    #[route("/doctors/:id")]
    DoctorDetail { id: i64 },
}

/// Whether a route requires a session token. Everything except the login
/// screen (and the `/` redirect onto it) does. Client-side convenience only;
/// the server authorizes every request on its own.
fn is_protected(route: &Route) -> bool {
    !matches!(route, Route::Login {} | Route::Root {})
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the login screen.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Navigation bar plus the route guard: protected paths render the login
/// view in place of their content while no token is present.
#[component]
fn Shell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let handle_logout = move |_| {
        clear_token(session);
        nav.push(Route::Login {});
    };

    let show_login = is_protected(&route) && !session().is_logged_in();

    rsx! {
        Navbar {
            li { Link { to: Route::Profile {}, "Profile" } }
            li { Link { to: Route::Clinics {}, "Clinics Management" } }
            li { Link { to: Route::Doctors {}, "Doctors Management" } }
            if session().is_logged_in() {
                li {
                    button {
                        class: "navbar-logout",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            } else {
                li { Link { to: Route::Login {}, "Login" } }
            }
        }

        if show_login {
            Login {}
        } else {
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_the_root_redirect_are_public() {
        assert!(!is_protected(&Route::Login {}));
        assert!(!is_protected(&Route::Root {}));
    }

    #[test]
    fn every_data_route_requires_a_token() {
        let routes = [
            Route::Profile {},
            Route::Clinics {},
            Route::ClinicDetail { id: 1 },
            Route::Doctors {},
            Route::DoctorDetail { id: 7 },
        ];
        for route in routes {
            assert!(is_protected(&route), "{route:?} should be guarded");
        }
    }
}

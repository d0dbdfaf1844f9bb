use dioxus::prelude::*;

/// Top navigation bar. The app composes the links and the logout control;
/// this only provides the layout.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            ul {
                class: "navbar-links",
                {children}
            }
        }
    }
}

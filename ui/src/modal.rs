use dioxus::prelude::*;

/// Full-screen overlay centering a titled card. Clicking the backdrop or the
/// header button triggers `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}

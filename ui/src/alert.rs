/// Blocking browser alert. Failure surfaces for every data operation go
/// through here, with the server's message when there is one. Native builds
/// have no window, so the message lands in the log instead.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("alert: {message}");
    }
}

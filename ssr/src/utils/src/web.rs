/// Copies `text` through the async clipboard API, fire-and-forget.
/// Returns `None` when no window is available (server render).
pub fn copy_to_clipboard(text: &str) -> Option<()> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::window;
        let _ = window().navigator().clipboard().write_text(text);
        Some(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        None
    }
}

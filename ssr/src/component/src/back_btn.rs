use gloo::history::{BrowserHistory, History};
use leptos::prelude::*;
use leptos_icons::*;
use leptos_router::hooks::use_navigate;

/// Navigates one step back, or to `fallback` when this tab has no
/// history to go back to (fresh tab / deep link).
#[component]
pub fn BackButton(#[prop(into)] fallback: String) -> impl IntoView {
    let navigate = use_navigate();
    let go_back = move |_| {
        let can_go_back = window()
            .history()
            .ok()
            .and_then(|h| h.length().ok())
            .map(|len| len > 1)
            .unwrap_or(false);
        if can_go_back {
            BrowserHistory::new().back();
        } else {
            navigate(&fallback, Default::default());
        }
    };

    view! {
        <button on:click=go_back class="items-center">
            <Icon attr:class="text-2xl" icon=icondata::AiLeftOutlined />
        </button>
    }
}

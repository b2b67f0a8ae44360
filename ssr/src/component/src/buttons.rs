use leptos::prelude::*;

#[component]
pub fn HighlightedButton(
    children: Children,
    on_click: impl Fn() + Send + Sync + 'static,
    #[prop(optional)] classes: String,
    #[prop(optional)] alt_style: bool,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <button
            disabled=disabled
            on:click=move |_| on_click()
            class=move || {
                format!(
                    "w-full px-5 py-3 rounded-lg font-bold transition-all {} {}",
                    if alt_style {
                        "bg-neutral-800 text-white hover:bg-neutral-700"
                    } else {
                        "bg-primary-600 text-white hover:bg-primary-700 disabled:bg-neutral-600"
                    },
                    classes,
                )
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn HighlightedLinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] classes: String,
    #[prop(optional)] alt_style: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=move || {
                format!(
                    "block text-center px-5 py-3 rounded-lg font-bold transition-all {} {}",
                    if alt_style {
                        "bg-neutral-800 text-white hover:bg-neutral-700"
                    } else {
                        "bg-primary-600 text-white hover:bg-primary-700"
                    },
                    classes,
                )
            }
        >
            {children()}
        </a>
    }
}

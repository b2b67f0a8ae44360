use leptos::prelude::*;
use leptos_router::hooks::use_location;

use state::session::session_state;

#[derive(Clone)]
struct NavItem {
    text: &'static str,
    href: &'static str,
    cur_selected: Signal<bool>,
}

fn nav_items() -> Vec<NavItem> {
    let path = use_location().pathname;
    let item = move |text: &'static str, href: &'static str| NavItem {
        text,
        href,
        cur_selected: Signal::derive(move || path.get() == href),
    };
    vec![
        item("Home", "/"),
        item("Services", "/services"),
        item("Rewards", "/rewards"),
        item("FAQs", "/faqs"),
        item("Contact", "/contact"),
    ]
}

#[component]
pub fn NavBar() -> impl IntoView {
    let items = nav_items();
    let session = session_state();
    let logged_in = session.is_valid();

    view! {
        <div class="flex fixed top-0 z-40 flex-row gap-4 justify-between items-center px-4 w-full h-14 text-white bg-black/80 backdrop-blur-sm">
            <a href="/" class="text-lg font-bold text-primary-600">
                RideNova
            </a>
            <div class="hidden flex-row gap-6 items-center md:flex">
                {items
                    .into_iter()
                    .map(|it| {
                        view! {
                            <a
                                href=it.href
                                class=move || {
                                    if it.cur_selected.get() {
                                        "text-primary-600 font-semibold"
                                    } else {
                                        "text-white/80 hover:text-white"
                                    }
                                }
                            >
                                {it.text}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || logged_in.get()
                fallback=|| {
                    view! {
                        <a href="/login" class="py-1 px-4 rounded-full bg-primary-600">
                            Login
                        </a>
                    }
                }
            >
                <a href="/dashboard" class="py-1 px-4 rounded-full bg-primary-600">
                    Dashboard
                </a>
            </Show>
        </div>
    }
}

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::*;
use leptos_meta::*;
use leptos_router::components::Redirect;
use leptos_use::use_window;

use component::buttons::HighlightedLinkButton;
use component::spinner::Spinner;
use state::app_state::AppState;
use state::referral_tree::{referral_tree_state, ReferralTreeState};
use state::session::session_state;
use utils::api::ApiClient;
use utils::event_bus::session_bus;
use utils::types::UserSummary;
use utils::web::copy_to_clipboard;

#[component]
fn ReferralLinkCard(user: UserSummary) -> impl IntoView {
    let window = use_window();
    let refer_link = window
        .as_ref()
        .and_then(|w| {
            let origin = w.location().origin().ok()?;
            Some(format!("{}/signup?ref={}", origin, user.username))
        })
        .unwrap_or_default();

    let show_copied_popup = RwSignal::new(false);
    let link = refer_link.clone();
    let click_copy = move |_| {
        let _ = copy_to_clipboard(&link);
        show_copied_popup.set(true);
        Timeout::new(1200, move || show_copied_popup.set(false)).forget();
    };

    view! {
        <div class="flex z-[1] w-full gap-2 justify-between">
            <div class="flex flex-1 items-center w-full rounded-md border-dashed border-2 p-3 gap-2 border-neutral-700 bg-neutral-900">
                <span class="text-md lg:text-lg text-ellipsis line-clamp-1 text-neutral-500">
                    {refer_link}
                </span>
                <button style="filter: invert(1)" on:click=click_copy>
                    <Icon attr:class="text-xl" icon=icondata::IoCopyOutline />
                </button>
            </div>
        </div>

        <Show when=move || show_copied_popup.get()>
            <div class="absolute flex flex-col justify-center items-center z-[10]">
                <span class="absolute top-28 flex flex-row justify-center items-center bg-white/90 rounded-md h-10 w-28 text-center shadow-lg">
                    <p class="text-black">Link Copied!</p>
                </span>
            </div>
        </Show>
    }
}

#[component]
fn ProfileCard(user: UserSummary) -> impl IntoView {
    let kyc = user.kyc_status.clone().unwrap_or_else(|| "pending".to_string());
    view! {
        <div class="flex flex-col w-full gap-4 p-4 rounded-lg bg-neutral-900">
            <div class="flex items-center gap-4">
                <img
                    src=user.avatar_or_fallback()
                    alt="Profile picture"
                    class="w-12 h-12 rounded-full object-cover shrink-0"
                />
                <div class="flex flex-col">
                    <span class="text-lg font-semibold text-neutral-50">
                        {user.display_name()}
                    </span>
                    <span class="text-sm text-neutral-400">{user.email.clone()}</span>
                </div>
            </div>
            <div class="flex flex-row gap-2 text-xs">
                <span class="py-1 px-3 rounded-full bg-neutral-800">
                    {format!("Level {}", user.level)}
                </span>
                <span class="py-1 px-3 rounded-full bg-neutral-800">{format!("KYC: {kyc}")}</span>
                {user
                    .country
                    .clone()
                    .map(|c| view! { <span class="py-1 px-3 rounded-full bg-neutral-800">{c}</span> })}
            </div>
        </div>
    }
}

#[component]
fn ReferralSummary() -> impl IntoView {
    let tree = referral_tree_state();
    view! {
        <div class="flex flex-col w-full gap-3 p-4 rounded-lg bg-neutral-900">
            <span class="font-bold text-lg">My Network</span>
            {move || {
                tree.own
                    .with(|slice| {
                        if let Some(data) = slice.data() {
                            let counts = data.counts.clone();
                            view! {
                                <div class="flex flex-row flex-wrap gap-2">
                                    <div class="flex flex-col items-center flex-1 p-3 rounded-md bg-neutral-800">
                                        <span class="text-2xl font-bold text-primary-600">
                                            {counts.total_referrals}
                                        </span>
                                        <span class="text-xs text-neutral-400">Total referrals</span>
                                    </div>
                                    {(1..=consts::MAX_REFERRAL_LEVELS)
                                        .map(|lvl| {
                                            view! {
                                                <div class="flex flex-col items-center flex-1 p-3 rounded-md bg-neutral-800">
                                                    <span class="text-2xl font-bold">{counts.at_level(lvl)}</span>
                                                    <span class="text-xs text-neutral-400">
                                                        {format!("Level {lvl}")}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        } else if let Some(message) = slice.error() {
                            let message = message.to_string();
                            view! {
                                <span class="text-sm text-red-500">{message}</span>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="flex justify-center p-4">
                                    <div class="w-8 h-8">
                                        <Spinner />
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
            <HighlightedLinkButton href="/referrals">View My Tree</HighlightedLinkButton>
        </div>
    }
}

#[component]
fn RewardShortcuts() -> impl IntoView {
    let programs = [
        (consts::rewards::CRR, "CRR"),
        (consts::rewards::DDR, "DDR"),
        (consts::rewards::BBR, "BBR"),
        (consts::rewards::HLR, "HLR"),
        (consts::rewards::REGIONAL_AMBASSADOR, "Regional Ambassador"),
    ];
    view! {
        <div class="flex flex-col w-full gap-3 p-4 rounded-lg bg-neutral-900">
            <span class="font-bold text-lg">Reward Programs</span>
            <div class="flex flex-row flex-wrap gap-2">
                {programs
                    .into_iter()
                    .map(|(slug, name)| {
                        view! {
                            <a
                                href=format!("/rewards/{slug}")
                                class="py-2 px-4 text-sm rounded-full bg-neutral-800 hover:bg-neutral-700"
                            >
                                {name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = session_state();
    let tree = referral_tree_state();
    let bus = session_bus();
    let client: ApiClient = expect_context();

    let checked = RwSignal::new(false);

    // the dashboard shares the own-tree slice with the tree view, so
    // whichever mounts first issues the single request
    Effect::new(move |_| {
        let valid = session.check_session();
        checked.set(true);
        if !valid {
            return;
        }
        let should = tree.own.with_untracked(ReferralTreeState::should_autofetch);
        if should {
            tree.fetch_own_tree(client.clone(), session, bus);
        }
    });

    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Dashboard";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center gap-4 px-4 pt-20 pb-12 w-dvw min-h-dvh bg-black text-white">
            <Show when=move || checked.get() && !session.is_valid().get()>
                <Redirect path="/login" />
            </Show>
            <div class="flex flex-col items-center gap-4 w-full max-w-md">
                {move || {
                    session
                        .user()
                        .get()
                        .map(|user| {
                            view! {
                                <ProfileCard user=user.clone() />
                                <ReferralLinkCard user />
                            }
                        })
                }}
                <ReferralSummary />
                <RewardShortcuts />
            </div>
        </div>
    }
}

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use component::{back_btn::BackButton, title::TitleText};
use state::app_state::AppState;
use state::session::session_state;

struct Program {
    slug: &'static str,
    name: &'static str,
    summary: &'static str,
    details: &'static str,
    unlock: &'static str,
}

/// Rank and payout math for all of these lives on the server; the
/// client renders descriptions plus the viewer's current standing.
const PROGRAMS: [Program; 5] = [
    Program {
        slug: consts::rewards::CRR,
        name: "Cumulative Rank Reward",
        summary: "Earn as your whole tree grows.",
        details: "Every active member across all four levels of your referral tree feeds your cumulative rank. Crossing each rank threshold unlocks a one-time reward plus a permanent boost on ride commissions.",
        unlock: "Unlocks at rank 1 and keeps scaling.",
    },
    Program {
        slug: consts::rewards::DDR,
        name: "Direct Drive Reward",
        summary: "A cut from your direct referrals' rides.",
        details: "Level-1 referrals are your directs. Whenever a direct completes a ride, a percentage of the platform fee is credited to you - no cap, paid out weekly.",
        unlock: "Available from your first direct referral.",
    },
    Program {
        slug: consts::rewards::BBR,
        name: "Booster Bonus Reward",
        summary: "Time-boxed bonus sprints.",
        details: "Seasonal booster windows multiply referral points earned while the window is open. Stack a full level within a window to take the whole booster payout.",
        unlock: "Announced per season on the dashboard.",
    },
    Program {
        slug: consts::rewards::HLR,
        name: "High Level Reward",
        summary: "Deep-tree royalties for veterans.",
        details: "Once levels 3 and 4 of your tree are active, the High Level Reward pays a royalty on the activity of your deepest levels - the long tail of your network keeps working for you.",
        unlock: "Requires activity on levels 3 and 4.",
    },
    Program {
        slug: consts::rewards::REGIONAL_AMBASSADOR,
        name: "Regional Ambassador",
        summary: "Represent RideNova in your city.",
        details: "Top referrers per region are invited to the ambassador track: a fixed monthly stipend, event budget and a regional override on every ride in your territory.",
        unlock: "By invitation, based on regional leaderboards.",
    },
];

fn program_by_slug(slug: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.slug == slug)
}

#[derive(Params, Clone, PartialEq)]
struct ProgramParams {
    program: Option<String>,
}

#[component]
fn StandingCard() -> impl IntoView {
    let session = session_state();
    view! {
        {move || {
            session
                .user()
                .get()
                .map(|user| {
                    view! {
                        <div class="flex flex-row gap-3 items-center p-4 w-full rounded-lg bg-neutral-900">
                            <img
                                src=user.avatar_or_fallback()
                                class="w-10 h-10 rounded-full object-cover shrink-0"
                            />
                            <span class="text-sm text-neutral-400">
                                {format!(
                                    "You are currently level {} - your standing in each program updates as your tree grows.",
                                    user.level,
                                )}
                            </span>
                        </div>
                    }
                })
        }}
    }
}

#[component]
pub fn Rewards() -> impl IntoView {
    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Rewards";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black">
            <div class="sticky top-0 z-10 w-full bg-black">
                <TitleText justify_center=false>
                    <div class="flex flex-row justify-between">
                        <BackButton fallback="/".to_string() />
                        <div>
                            <span class="text-xl font-bold">Reward Programs</span>
                        </div>
                        <div></div>
                    </div>
                </TitleText>
            </div>

            <div class="flex flex-col gap-4 px-8 mt-2 w-full max-w-3xl">
                <StandingCard />
                {PROGRAMS
                    .iter()
                    .map(|p| {
                        view! {
                            <a
                                href=format!("/rewards/{}", p.slug)
                                class="flex flex-col gap-1 p-4 rounded-lg bg-neutral-900 hover:bg-neutral-800"
                            >
                                <span class="text-lg font-semibold">{p.name}</span>
                                <span class="text-sm text-neutral-400">{p.summary}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn RewardProgram() -> impl IntoView {
    let params = use_params::<ProgramParams>();
    let slug = move || {
        params
            .get()
            .ok()
            .and_then(|p| p.program)
            .unwrap_or_default()
    };

    let app_state = use_context::<AppState>();
    let app_name = app_state.unwrap().name;
    view! {
        {move || match program_by_slug(&slug()) {
            None => view! { <Redirect path="/rewards" /> }.into_any(),
            Some(program) => {
                view! {
                    <Title text=format!("{} - {}", app_name, program.name) />
                    <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black">
                        <div class="sticky top-0 z-10 w-full bg-black">
                            <TitleText justify_center=false>
                                <div class="flex flex-row justify-between">
                                    <BackButton fallback="/rewards".to_string() />
                                    <div>
                                        <span class="text-xl font-bold">{program.name}</span>
                                    </div>
                                    <div></div>
                                </div>
                            </TitleText>
                        </div>

                        <div class="flex flex-col gap-4 px-8 mt-2 w-full max-w-3xl">
                            <StandingCard />
                            <div class="flex flex-col gap-3 p-4 rounded-lg bg-neutral-900">
                                <span class="text-sm text-neutral-400">{program.details}</span>
                                <span class="text-sm font-semibold text-primary-600">
                                    {program.unlock}
                                </span>
                            </div>
                            <a href="/referrals" class="text-center text-primary-600">
                                "Grow your tree to climb the ranks"
                            </a>
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

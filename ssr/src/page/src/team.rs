use leptos::prelude::*;
use leptos_meta::*;

use component::{back_btn::BackButton, title::TitleText};
use state::app_state::AppState;

#[component]
fn TeamMember(
    #[prop(into)] name: String,
    #[prop(into)] role: String,
    #[prop(into)] blurb: String,
) -> impl IntoView {
    view! {
        <div class="flex-1 p-4 rounded-lg bg-neutral-900">
            <div class="text-base font-semibold md:text-lg">{name}</div>
            <div class="text-gray-400">{role}</div>
            <div class="mt-2 text-sm md:text-base">{blurb}</div>
        </div>
    }
}

#[component]
pub fn Team() -> impl IntoView {
    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Team";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black">
            <div class="sticky top-0 z-10 w-full bg-black">
                <TitleText justify_center=false>
                    <div class="flex flex-row justify-between">
                        <BackButton fallback="/".to_string() />
                        <div>
                            <span class="text-xl font-bold">Team</span>
                        </div>
                        <div></div>
                    </div>
                </TitleText>
            </div>

            <div class="flex flex-col gap-4 px-8 mt-2 w-full max-w-5xl">
                <div class="flex flex-col gap-4 md:flex-row">
                    <TeamMember
                        name="Amara Okafor"
                        role="CEO & Co-Founder"
                        blurb="Sets the vision: a ride-hailing network its community actually owns a piece of."
                    />
                    <TeamMember
                        name="Daniyar Seitkali"
                        role="CTO & Co-Founder"
                        blurb="Runs engineering, from dispatch to the rewards ledger."
                    />
                    <TeamMember
                        name="Lucia Mendes"
                        role="COO"
                        blurb="Scales city launches and the Regional Ambassador program."
                    />
                </div>
                <div class="flex flex-col gap-4 md:flex-row">
                    <TeamMember
                        name="Yusuf Adeyemi"
                        role="Head of Driver Success"
                        blurb="Keeps onboarding smooth and drivers earning from day one."
                    />
                    <TeamMember
                        name="Elif Kaya"
                        role="Head of Community"
                        blurb="Looks after the referral community and the leaderboard events."
                    />
                    <TeamMember
                        name="Marco Dlamini"
                        role="Head of Finance"
                        blurb="Makes sure every reward program pays out on time."
                    />
                </div>
            </div>
        </div>
    }
}

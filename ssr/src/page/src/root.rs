use leptos::prelude::*;
use leptos_meta::*;

use component::buttons::HighlightedLinkButton;
use component::social::*;
use state::app_state::AppState;

#[component]
fn StepCard(#[prop(into)] head: String, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="flex flex-1 flex-col lg:flex-row items-center justify-center text-xs lg:text-md gap-3 bg-neutral-900 rounded-md px-3 lg:px-4 lg:py-5 py-4">
            <div class="font-bold text-neutral-50 whitespace-nowrap">{head}</div>
            <span class="text-neutral-400">{text}</span>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 items-center pt-10 pb-8 w-full">
            <span class="text-sm text-white/50">Follow us on</span>
            <div class="flex flex-row gap-4">
                <Telegram />
                <Twitter />
                <Facebook />
            </div>
        </div>
    }
}

#[component]
pub fn RootPage() -> impl IntoView {
    let app_state = use_context::<AppState>().unwrap_or_default();
    view! {
        <Title text=app_state.name />
        <div class="flex flex-col items-center pt-14 w-dvw min-h-dvh bg-black text-white">
            <div class="flex flex-col gap-6 items-center px-8 pt-16 w-full max-w-5xl text-center">
                <span class="text-4xl font-bold md:text-5xl">
                    {app_state.tagline}
                </span>
                <span class="max-w-2xl text-neutral-400 md:text-lg">
                    "RideNova gets you across town and pays you back for growing the community. Refer riders and drivers, climb the ranks, unlock rewards across four referral levels."
                </span>
                <div class="flex flex-row gap-4 w-full max-w-md">
                    <HighlightedLinkButton href="/signup" classes="flex-1".to_string()>
                        Get Started
                    </HighlightedLinkButton>
                    <HighlightedLinkButton href="/services" alt_style=true classes="flex-1".to_string()>
                        Our Services
                    </HighlightedLinkButton>
                </div>
            </div>

            <div class="flex flex-col w-full max-w-5xl items-center gap-8 mt-16 px-8">
                <span class="font-xl font-semibold">How it works?</span>
                <div class="flex flex-row gap-4 text-center">
                    <StepCard head="STEP 1" text="Sign up and verify your account" />
                    <StepCard head="STEP 2" text="Share your referral link" />
                    <StepCard head="STEP 3" text="Watch your network and rewards grow" />
                </div>
            </div>

            <div class="flex flex-col w-full max-w-5xl items-center gap-4 mt-16 px-8 text-center">
                <span class="font-xl font-semibold">Reward programs for every rank</span>
                <span class="max-w-2xl text-sm text-neutral-400">
                    "From the Cumulative Rank Reward to the Regional Ambassador program, every level of your referral tree counts toward something."
                </span>
                <a href="/rewards" class="text-primary-600">Explore rewards</a>
            </div>

            <Footer />
        </div>
    }
}

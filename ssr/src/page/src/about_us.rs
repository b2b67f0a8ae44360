use leptos::prelude::*;
use leptos_meta::*;

use component::{back_btn::BackButton, title::TitleText};
use state::app_state::AppState;

#[component]
pub fn AboutUs() -> impl IntoView {
    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - About Us";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black">
            <div class="sticky top-0 z-10 w-full bg-black">
                <TitleText justify_center=false>
                    <div class="flex flex-row justify-between">
                        <BackButton fallback="/".to_string() />
                        <div>
                            <span class="text-xl font-bold">About Us</span>
                        </div>
                        <div></div>
                    </div>
                </TitleText>
            </div>

            <div class="flex overflow-hidden overflow-y-auto flex-col px-8 mx-auto mt-2 w-full max-w-5xl h-full md:px-16">
                <div class="mb-6 text-sm text-left whitespace-pre-line md:text-lg md:text-center">
                    {"RideNova is a ride-hailing platform with a difference: the people who grow the network share in what it earns. Every rider or driver you bring in joins your referral tree, and activity across four levels of that tree counts toward your rank and rewards."}
                </div>

                <div class="mb-6 text-sm text-left whitespace-pre-line md:text-lg md:text-center">
                    {"We started from a simple observation: ride-hailing platforms are built by their communities, yet the upside rarely flows back to them. Our referral programs - CRR, DDR, BBR, HLR and the Regional Ambassador track - are designed to change that."}
                </div>

                <div class="mb-8 text-sm text-left whitespace-pre-line md:text-lg md:text-center">
                    {"Today RideNova operates across a growing list of cities, with thousands of active drivers and a referral community spanning the globe."}
                </div>

                <div class="flex flex-col mb-12 space-y-4">
                    <div class="mb-6 text-lg font-semibold md:text-xl md:text-center">
                        Our Leadership
                    </div>

                    <div class="flex flex-col gap-4 md:flex-row">
                        <div class="flex-1 p-4 rounded-lg bg-neutral-900">
                            <div class="text-base font-semibold md:text-lg">Amara Okafor</div>
                            <div class="text-gray-400">CEO & Co-Founder</div>
                            <div class="mt-2 text-sm md:text-base">
                                Mobility entrepreneur focused on community-owned growth across emerging markets.
                            </div>
                        </div>

                        <div class="flex-1 p-4 rounded-lg bg-neutral-900">
                            <div class="text-base font-semibold md:text-lg">Daniyar Seitkali</div>
                            <div class="text-gray-400">CTO & Co-Founder</div>
                            <div class="mt-2 text-sm md:text-base">
                                Engineer behind our dispatch and rewards platform, obsessed with reliability.
                            </div>
                        </div>

                        <div class="flex-1 p-4 rounded-lg bg-neutral-900">
                            <div class="text-base font-semibold md:text-lg">Lucia Mendes</div>
                            <div class="text-gray-400">COO</div>
                            <div class="mt-2 text-sm md:text-base">
                                Operations lead scaling driver onboarding and the ambassador network city by city.
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

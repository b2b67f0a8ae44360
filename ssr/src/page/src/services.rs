use leptos::prelude::*;
use leptos_icons::*;
use leptos_meta::*;

use component::{back_btn::BackButton, title::TitleText};
use state::app_state::AppState;

#[component]
fn ServiceCard(
    #[prop(into)] name: String,
    #[prop(into)] description: String,
    #[prop(into)] icon: icondata::Icon,
) -> impl IntoView {
    view! {
        <div class="flex flex-col flex-1 gap-3 p-6 rounded-lg bg-neutral-900">
            <Icon attr:class="text-3xl text-primary-600" icon=icon />
            <span class="text-lg font-semibold">{name}</span>
            <span class="text-sm text-neutral-400">{description}</span>
        </div>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Services";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black">
            <div class="sticky top-0 z-10 w-full bg-black">
                <TitleText justify_center=false>
                    <div class="flex flex-row justify-between">
                        <BackButton fallback="/".to_string() />
                        <div>
                            <span class="text-xl font-bold">Services</span>
                        </div>
                        <div></div>
                    </div>
                </TitleText>
            </div>

            <div class="flex flex-col gap-4 px-8 mt-2 w-full max-w-5xl md:flex-row">
                <ServiceCard
                    name="City Rides"
                    description="On-demand rides across town with upfront pricing and vetted drivers."
                    icon=icondata::AiCarOutlined
                />
                <ServiceCard
                    name="Drive with us"
                    description="Flexible hours, weekly payouts, and a referral tree that pays you for every driver you bring aboard."
                    icon=icondata::AiUserOutlined
                />
                <ServiceCard
                    name="Referral Network"
                    description="Four levels of referrals feed your rank. Track your whole tree from the dashboard."
                    icon=icondata::AiTeamOutlined
                />
            </div>
        </div>
    }
}

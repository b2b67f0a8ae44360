use leptos::prelude::*;
use leptos_icons::*;
use leptos_meta::*;

use component::social::*;
use component::{back_btn::BackButton, title::TitleText};
use state::app_state::AppState;

#[component]
fn ContactRow(
    #[prop(into)] icon: icondata::Icon,
    #[prop(into)] label: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-row gap-4 items-center p-4 rounded-lg bg-neutral-900">
            <Icon attr:class="text-2xl text-primary-600" icon=icon />
            <div class="flex flex-col">
                <span class="text-sm text-neutral-400">{label}</span>
                <span class="font-semibold">{value}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Contact";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black">
            <div class="sticky top-0 z-10 w-full bg-black">
                <TitleText justify_center=false>
                    <div class="flex flex-row justify-between">
                        <BackButton fallback="/".to_string() />
                        <div>
                            <span class="text-xl font-bold">Contact</span>
                        </div>
                        <div></div>
                    </div>
                </TitleText>
            </div>

            <div class="flex flex-col gap-4 px-8 mt-2 w-full max-w-3xl">
                <ContactRow
                    icon=icondata::AiMailOutlined
                    label="Email"
                    value="support@ridenova.app"
                />
                <ContactRow
                    icon=icondata::AiPhoneOutlined
                    label="Phone"
                    value="+1 (555) 010-7788"
                />
                <div class="flex flex-col gap-4 items-center pt-8">
                    <span class="text-sm text-white/50">Or reach us on</span>
                    <div class="flex flex-row gap-4">
                        <Telegram />
                        <Twitter />
                        <Facebook />
                    </div>
                </div>
            </div>
        </div>
    }
}

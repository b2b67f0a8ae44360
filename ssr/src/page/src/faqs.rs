use leptos::prelude::*;
use leptos_icons::*;
use leptos_meta::*;

use component::{back_btn::BackButton, title::TitleText};
use state::app_state::AppState;

#[component]
fn FaqItem(#[prop(into)] question: String, #[prop(into)] answer: String) -> impl IntoView {
    let open = RwSignal::new(false);
    view! {
        <div class="flex flex-col p-4 w-full rounded-lg bg-neutral-900">
            <button
                class="flex flex-row justify-between items-center w-full text-left"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="font-semibold">{question}</span>
                <Icon
                    attr:class="text-xl text-primary-600"
                    icon=icondata::AiRightOutlined
                />
            </button>
            <Show when=move || open.get()>
                <span class="mt-3 text-sm text-neutral-400">{answer.clone()}</span>
            </Show>
        </div>
    }
}

#[component]
pub fn Faqs() -> impl IntoView {
    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - FAQs";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black">
            <div class="sticky top-0 z-10 w-full bg-black">
                <TitleText justify_center=false>
                    <div class="flex flex-row justify-between">
                        <BackButton fallback="/".to_string() />
                        <div>
                            <span class="text-xl font-bold">FAQs</span>
                        </div>
                        <div></div>
                    </div>
                </TitleText>
            </div>

            <div class="flex flex-col gap-4 px-8 mt-2 w-full max-w-3xl">
                <FaqItem
                    question="How do referrals work?"
                    answer="Share your referral link. Anyone who signs up through it lands on level 1 of your tree; their referrals land on level 2, and so on down to level 4."
                />
                <FaqItem
                    question="How many levels does my tree have?"
                    answer="Four. Your dashboard shows a per-level breakdown and the total across all of them."
                />
                <FaqItem
                    question="What are CRR, DDR, BBR and HLR?"
                    answer="Our reward programs: Cumulative Rank Reward, Direct Drive Reward, Booster Bonus Reward and High Level Reward. Each unlocks at a different rank - see the Rewards page for details."
                />
                <FaqItem
                    question="Do I need KYC to receive rewards?"
                    answer="Yes. Rewards are held until your identity verification is approved; your KYC status is shown on the dashboard."
                />
                <FaqItem
                    question="Can I see the people my referrals brought in?"
                    answer="Yes. Open any member in your tree to view their own referrals, level by level, and step back through the breadcrumb trail."
                />
            </div>
        </div>
    }
}

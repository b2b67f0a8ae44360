use leptos::prelude::*;
use leptos_icons::*;

#[component]
fn FollowItem(#[prop(into)] href: String, #[prop(into)] icon: icondata::Icon) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            class="grid place-items-center w-12 h-12 text-2xl rounded-full border aspect-square border-primary-600"
        >
            <Icon icon />
        </a>
    }
}

macro_rules! social_button {
    ($name:ident, $icon:expr, $href:ident) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! { <FollowItem href=consts::social::$href icon=$icon /> }
        }
    };
}

social_button!(Telegram, icondata::TbBrandTelegram, TELEGRAM_RIDENOVA);
social_button!(Twitter, icondata::BiTwitter, TWITTER_RIDENOVA);
social_button!(Facebook, icondata::BiFacebook, FACEBOOK_RIDENOVA);

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::hooks::use_navigate;

use auth::{OtpResendRequest, OtpVerifyRequest};
use component::buttons::HighlightedButton;
use state::app_state::AppState;
use state::referral_tree::referral_tree_state;
use state::session::session_state;
use utils::api::ApiClient;
use utils::storage;

const RESEND_COOLDOWN_MS: u32 = 30_000;

#[component]
pub fn OtpVerify() -> impl IntoView {
    let session = session_state();
    let tree = referral_tree_state();
    let client: ApiClient = expect_context();

    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let resend_blocked = RwSignal::new(false);

    // signup stored the pending address; a reload keeps it available
    Effect::new(move |_| {
        if let Some(pending) = storage::pending_signup_email() {
            email.set(pending);
        }
    });

    let verify_client = client.clone();
    let verify_action: Action<_, _> = Action::new_unsync(move |req: &OtpVerifyRequest| {
        let req = req.clone();
        let client = verify_client.clone();
        async move { auth::verify_otp(&client, &req).await }
    });
    let pending = verify_action.pending();

    let navigate = use_navigate();
    Effect::new(move |_| {
        let Some(result) = verify_action.value().get() else {
            return;
        };
        match result {
            Ok(success) => {
                session.establish(&success.token, &success.user);
                tree.reset_after_session_change();
                navigate("/dashboard", Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let resend_action: Action<_, _> = Action::new_unsync(move |req: &OtpResendRequest| {
        let req = req.clone();
        let client = client.clone();
        async move { auth::resend_otp(&client, &req).await }
    });

    Effect::new(move |_| {
        let Some(result) = resend_action.value().get() else {
            return;
        };
        match result {
            Ok(resp) => notice.set(Some(if resp.message.is_empty() {
                "A fresh code is on its way.".to_string()
            } else {
                resp.message
            })),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let on_verify = move || {
        error.set(None);
        verify_action.dispatch(OtpVerifyRequest {
            email: email.get_untracked(),
            otp: otp.get_untracked(),
        });
    };

    let on_resend = move || {
        if resend_blocked.get_untracked() {
            return;
        }
        resend_blocked.set(true);
        Timeout::new(RESEND_COOLDOWN_MS, move || resend_blocked.set(false)).forget();
        notice.set(None);
        error.set(None);
        resend_action.dispatch(OtpResendRequest {
            email: email.get_untracked(),
        });
    };

    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Verify OTP";
    view! {
        <Title text=page_title />
        <div class="flex flex-col justify-center items-center px-4 pt-14 w-dvw min-h-dvh bg-black text-white">
            <div class="flex flex-col gap-4 p-6 w-full max-w-md rounded-lg bg-neutral-900">
                <span class="text-2xl font-bold">Check your inbox</span>
                <span class="text-sm text-neutral-400">
                    "We mailed a one-time code to the address below."
                </span>
                <input
                    type="email"
                    placeholder="Email"
                    class="p-3 rounded-md bg-neutral-800 placeholder-neutral-500"
                    on:input=move |ev| email.set(event_target_value(&ev))
                    prop:value=move || email.get()
                />
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="One-time code"
                    class="p-3 tracking-widest text-center rounded-md bg-neutral-800 placeholder-neutral-500"
                    on:input=move |ev| otp.set(event_target_value(&ev))
                    prop:value=move || otp.get()
                />
                <Show when=move || error.get().is_some()>
                    <span class="text-sm text-red-500">{move || error.get().unwrap_or_default()}</span>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <span class="text-sm text-green-500">{move || notice.get().unwrap_or_default()}</span>
                </Show>
                <HighlightedButton disabled=false on_click=on_verify>
                    {move || if pending.get() { "Verifying..." } else { "Verify" }}
                </HighlightedButton>
                <button
                    class="text-sm text-primary-600 disabled:text-neutral-500"
                    disabled=move || resend_blocked.get()
                    on:click=move |_| on_resend()
                >
                    Resend code
                </button>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use auth::SignupRequest;
use component::buttons::HighlightedButton;
use state::app_state::AppState;
use utils::api::ApiClient;
use utils::storage;

#[component]
pub fn Signup() -> impl IntoView {
    let client: ApiClient = expect_context();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let referral_code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // referral links land here as /signup?ref=<code>
    let query = use_query_map();
    Effect::new(move |_| {
        if let Some(code) = query.get().get("ref") {
            if !code.is_empty() {
                referral_code.set(code);
            }
        }
    });

    let signup_action: Action<_, _> = Action::new_unsync(move |req: &SignupRequest| {
        let req = req.clone();
        let client = client.clone();
        async move {
            auth::signup(&client, &req)
                .await
                .map(|_| req.email.clone())
        }
    });
    let pending = signup_action.pending();

    let navigate = use_navigate();
    Effect::new(move |_| {
        let Some(result) = signup_action.value().get() else {
            return;
        };
        match result {
            Ok(signup_email) => {
                // the OTP page picks the pending address up after a reload
                storage::set_pending_signup_email(&signup_email);
                navigate("/verify-otp", Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let on_submit = move || {
        error.set(None);
        let code = referral_code.get_untracked();
        signup_action.dispatch(SignupRequest {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            country: country.get_untracked(),
            referral_code: (!code.is_empty()).then_some(code),
        });
    };

    let text_input = move |placeholder: &'static str, signal: RwSignal<String>| {
        view! {
            <input
                type="text"
                placeholder=placeholder
                class="p-3 rounded-md bg-neutral-800 placeholder-neutral-500"
                on:input=move |ev| signal.set(event_target_value(&ev))
                prop:value=move || signal.get()
            />
        }
    };

    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Sign Up";
    view! {
        <Title text=page_title />
        <div class="flex flex-col justify-center items-center px-4 pt-14 pb-12 w-dvw min-h-dvh bg-black text-white">
            <div class="flex flex-col gap-4 p-6 w-full max-w-md rounded-lg bg-neutral-900">
                <span class="text-2xl font-bold">Create your account</span>
                <div class="flex flex-row gap-4">
                    {text_input("First name", first_name)}
                    {text_input("Last name", last_name)}
                </div>
                <input
                    type="email"
                    placeholder="Email"
                    class="p-3 rounded-md bg-neutral-800 placeholder-neutral-500"
                    on:input=move |ev| email.set(event_target_value(&ev))
                    prop:value=move || email.get()
                />
                {text_input("Phone", phone)}
                {text_input("Country", country)}
                <input
                    type="password"
                    placeholder="Password"
                    class="p-3 rounded-md bg-neutral-800 placeholder-neutral-500"
                    on:input=move |ev| password.set(event_target_value(&ev))
                    prop:value=move || password.get()
                />
                {text_input("Referral code (optional)", referral_code)}
                <Show when=move || error.get().is_some()>
                    <span class="text-sm text-red-500">{move || error.get().unwrap_or_default()}</span>
                </Show>
                <HighlightedButton disabled=false on_click=on_submit>
                    {move || if pending.get() { "Creating account..." } else { "Sign Up" }}
                </HighlightedButton>
                <span class="text-sm text-center text-neutral-400">
                    "Already with us? " <a class="text-primary-600" href="/login">Login</a>
                </span>
            </div>
        </div>
    }
}

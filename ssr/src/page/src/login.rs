use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::hooks::use_navigate;

use auth::LoginRequest;
use component::buttons::HighlightedButton;
use state::app_state::AppState;
use state::referral_tree::referral_tree_state;
use state::session::session_state;
use utils::api::ApiClient;

#[component]
pub fn Login() -> impl IntoView {
    let session = session_state();
    let tree = referral_tree_state();
    let client: ApiClient = expect_context();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let login_action: Action<_, _> = Action::new_unsync(move |req: &LoginRequest| {
        let req = req.clone();
        let client = client.clone();
        async move { auth::login(&client, &req).await }
    });
    let pending = login_action.pending();

    let navigate = use_navigate();
    Effect::new(move |_| {
        let Some(result) = login_action.value().get() else {
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

    let on_submit = move || {
        error.set(None);
        login_action.dispatch(LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Login";
    view! {
        <Title text=page_title />
        <div class="flex flex-col justify-center items-center px-4 pt-14 w-dvw min-h-dvh bg-black text-white">
            <div class="flex flex-col gap-4 p-6 w-full max-w-md rounded-lg bg-neutral-900">
                <span class="text-2xl font-bold">Welcome back</span>
                <input
                    type="email"
                    placeholder="Email"
                    class="p-3 rounded-md bg-neutral-800 placeholder-neutral-500"
                    on:input=move |ev| email.set(event_target_value(&ev))
                    prop:value=move || email.get()
                />
                <input
                    type="password"
                    placeholder="Password"
                    class="p-3 rounded-md bg-neutral-800 placeholder-neutral-500"
                    on:input=move |ev| password.set(event_target_value(&ev))
                    prop:value=move || password.get()
                />
                <Show when=move || error.get().is_some()>
                    <span class="text-sm text-red-500">{move || error.get().unwrap_or_default()}</span>
                </Show>
                <HighlightedButton disabled=false on_click=on_submit>
                    {move || if pending.get() { "Signing in..." } else { "Login" }}
                </HighlightedButton>
                <span class="text-sm text-center text-neutral-400">
                    "Don't have an account? " <a class="text-primary-600" href="/signup">Sign up</a>
                </span>
            </div>
        </div>
    }
}

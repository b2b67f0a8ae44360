use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use component::loading::Loading;
use state::referral_tree::referral_tree_state;
use state::session::session_state;
use utils::api::ApiClient;
use utils::event_bus::{session_bus, SessionClearReason};

#[component]
pub fn Logout() -> impl IntoView {
    let session = session_state();
    let tree = referral_tree_state();
    let bus = session_bus();
    let client: ApiClient = expect_context();
    let navigate = use_navigate();

    Effect::new(move |ran: Option<()>| {
        if ran.is_some() {
            return;
        }
        // best-effort server-side invalidation; the local purge does
        // not wait for it
        let client = client.clone();
        spawn_local(async move {
            if let Err(e) = auth::logout(&client).await {
                log::warn!("server-side logout failed: {e}");
            }
        });
        session.clear(bus, SessionClearReason::Logout, "auth/logout");
        tree.leave_to_root();
        navigate("/", Default::default());
    });

    view! {
        <Loading text="Signing out...".to_string()>
            <div></div>
        </Loading>
    }
}

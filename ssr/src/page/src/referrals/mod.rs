mod detail;
mod tree_view;

use leptos::prelude::*;
use leptos_icons::*;
use leptos_meta::*;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

use state::app_state::AppState;
use state::referral_tree::{nav_target, referral_tree_state, TreeSource};
use state::session::session_state;

use tree_view::TreeView;

#[derive(Params, Clone, PartialEq)]
struct MemberParams {
    id: Option<String>,
}

/// One view, two data sources: `/referrals` renders the session's own
/// tree, `/referrals/:id` an arbitrary member's.
#[component]
pub fn ReferralTreePage() -> impl IntoView {
    let params = use_params::<MemberParams>();
    let source = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|p| p.id)
            .filter(|id| !id.is_empty())
            .map(TreeSource::Member)
            .unwrap_or(TreeSource::Own)
    });

    let tree = referral_tree_state();
    let session = session_state();

    // one step back along the trail; an empty trail leads to the root
    let navigate = use_navigate();
    let step_back = move |_| {
        let target = tree.step_back();
        let own_id = session.user_id_if_available();
        navigate(
            &nav_target(target.as_ref(), own_id.as_deref()),
            Default::default(),
        );
    };

    let navigate_root = use_navigate();
    let back_to_main = move |_| {
        tree.leave_to_root();
        navigate_root("/referrals", Default::default());
    };

    let viewing_member = move || matches!(source.get(), TreeSource::Member(_));

    let app_state = use_context::<AppState>();
    let page_title = app_state.unwrap().name.to_owned() + " - Referral Tree";
    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-16 pb-12 min-w-dvw min-h-dvh bg-black text-white">
            <div class="flex flex-row justify-between items-center px-4 w-full max-w-3xl">
                <button on:click=step_back class="items-center">
                    <Icon attr:class="text-2xl" icon=icondata::AiLeftOutlined />
                </button>
                <span class="text-lg font-bold">
                    {move || {
                        if viewing_member() { "Member Tree" } else { "My Referral Tree" }
                    }}
                </span>
                <Show when=viewing_member fallback=|| view! { <div></div> }>
                    <button on:click=back_to_main.clone() class="text-xs text-primary-600">
                        "Main tree"
                    </button>
                </Show>
            </div>
            <div class="px-4 w-full max-w-3xl">
                <TreeView source />
            </div>
        </div>
    }
}

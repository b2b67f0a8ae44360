use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::*;

use component::spinner::Spinner;
use state::referral_tree::FetchSlice;
use state::session::session_state;
use utils::api::ApiClient;
use utils::event_bus::session_bus;
use utils::types::{TreeNode, UserSummary};

type MemberDetail = (UserSummary, Vec<TreeNode>);

/// Transient per-click state: the clicked member's full profile plus
/// their one-level-deep referral list. Fetch errors stay inside the
/// popup; the tree behind it is untouched and the popup can always be
/// dismissed.
#[component]
pub fn MemberDetailPopup(selected: RwSignal<Option<TreeNode>>) -> impl IntoView {
    let session = session_state();
    let bus = session_bus();
    let client: ApiClient = expect_context();

    let detail = RwSignal::new(FetchSlice::<MemberDetail>::default());

    Effect::new(move |_| {
        let Some(node) = selected.get() else {
            // close discards whatever was fetched
            detail.try_update(|s| s.reset());
            return;
        };
        // a new click supersedes any in-flight fetch; the stale write
        // is suppressed below
        detail.try_update(|s| {
            s.reset();
            s.begin();
        });
        let client = client.clone();
        spawn_local(async move {
            let profile = client.user_profile(&node.id).await;
            let referrals = client.member_tree(&node.id).await;
            let result = match (profile, referrals) {
                (Ok(profile), Ok(tree)) => Ok((profile, tree.level(1).to_vec())),
                (Err(err), _) | (_, Err(err)) => {
                    session.note_api_error(bus, &err);
                    Err(err.to_string())
                }
            };
            // the popup may have moved on to another member meanwhile
            let still_current = selected
                .try_get_untracked()
                .flatten()
                .map(|n| n.id == node.id)
                .unwrap_or(false);
            if still_current {
                detail.try_update(|s| s.resolve(result));
            }
        });
    });

    view! {
        <Show when=move || selected.get().is_some()>
            <div
                on:click=move |_| selected.set(None)
                class="flex fixed top-0 left-0 justify-center items-center w-dvw h-dvh cursor-pointer bg-black/60 z-[99] backdrop-blur-sm"
            >
                <div
                    on:click=|ev| ev.stop_propagation()
                    class="flex flex-col gap-4 p-6 mx-4 w-full max-w-md rounded-md cursor-auto bg-neutral-900"
                >
                    <div class="flex flex-row justify-between items-center">
                        <span class="text-lg font-bold">Member Details</span>
                        <button on:click=move |_| selected.set(None)>
                            <Icon attr:class="text-xl" icon=icondata::AiCloseOutlined />
                        </button>
                    </div>
                    {move || {
                        detail
                            .with(|slice| {
                                if let Some((profile, referrals)) = slice.data() {
                                    let referrals = referrals.clone();
                                    let profile = profile.clone();
                                    view! { <DetailLoaded profile referrals /> }.into_any()
                                } else if let Some(message) = slice.error() {
                                    let message = message.to_string();
                                    view! {
                                        <span class="text-sm text-red-500">{message}</span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="flex justify-center py-8">
                                            <Spinner />
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn DetailLoaded(profile: UserSummary, referrals: Vec<TreeNode>) -> impl IntoView {
    view! {
        <div class="flex flex-row gap-4 items-center">
            <img
                src=profile.avatar_or_fallback()
                class="w-14 h-14 rounded-full object-cover shrink-0"
            />
            <div class="flex flex-col min-w-0">
                <span class="font-semibold truncate">{profile.display_name()}</span>
                <span class="text-xs truncate text-neutral-400">{profile.email.clone()}</span>
            </div>
        </div>
        <div class="flex flex-row flex-wrap gap-2 text-xs">
            <span class="py-1 px-3 rounded-full bg-neutral-800">
                {format!("Level {}", profile.level)}
            </span>
            {profile
                .country
                .clone()
                .map(|c| view! { <span class="py-1 px-3 rounded-full bg-neutral-800">{c}</span> })}
            {profile
                .joined_at
                .clone()
                .map(|d| {
                    view! {
                        <span class="py-1 px-3 rounded-full bg-neutral-800">
                            {format!("Joined {d}")}
                        </span>
                    }
                })}
        </div>
        <div class="flex flex-col gap-2">
            <span class="text-sm font-semibold">
                {format!("Direct referrals ({})", referrals.len())}
            </span>
            {if referrals.is_empty() {
                view! {
                    <span class="text-sm text-neutral-400">"No members found"</span>
                }
                    .into_any()
            } else {
                view! {
                    <div class="flex overflow-y-auto flex-col gap-1 max-h-40">
                        {referrals
                            .iter()
                            .map(|r| {
                                let label = if r.name.is_empty() {
                                    r.username.clone()
                                } else {
                                    r.name.clone()
                                };
                                view! {
                                    <div class="flex flex-row justify-between p-2 text-sm rounded-md bg-neutral-800">
                                        <span class="truncate">{label}</span>
                                        <span class="text-xs text-neutral-500">{r.email.clone()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

use std::collections::HashMap;

use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::*;
use leptos_router::hooks::use_navigate;

use component::buttons::HighlightedButton;
use component::spinner::Spinner;
use state::referral_tree::{
    nav_target, referral_tree_state, ReferralTreeState, TreeSource,
};
use state::session::session_state;
use utils::api::ApiClient;
use utils::event_bus::session_bus;
use utils::types::{fallback_avatar, ReferralTreeData, TreeNode};

use super::detail::MemberDetailPopup;

#[component]
fn AuthRequired() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 justify-center items-center py-24 w-full">
            <span class="text-xl font-bold">Authentication Required</span>
            <span class="text-sm text-neutral-400">
                "Log in to see your referral tree."
            </span>
            <a href="/login" class="py-2 px-8 rounded-full bg-primary-600">
                Login
            </a>
        </div>
    }
}

#[component]
fn TreeLoading() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-24 w-full">
            <Spinner />
        </div>
    }
}

#[component]
fn TreeError(
    #[prop(into)] message: String,
    on_retry: impl Fn() + Send + Sync + 'static,
    on_root: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 justify-center items-center py-24 w-full">
            <Icon attr:class="h-8 w-8 text-white" icon=icondata::TbCloudX />
            <span class="text-sm text-center text-white/60">{message}</span>
            <div class="flex flex-row gap-4">
                <HighlightedButton disabled=false on_click=on_retry>
                    "Try Again"
                </HighlightedButton>
                <HighlightedButton alt_style=true disabled=false on_click=on_root>
                    "Back to main tree"
                </HighlightedButton>
            </div>
        </div>
    }
}

/// Breadcrumbs over the persisted trail: "My Tree", every recorded
/// ancestor, then the currently displayed subject.
#[component]
fn TrailNav(#[prop(into)] current: Signal<Option<String>>) -> impl IntoView {
    let tree = referral_tree_state();
    let session = session_state();

    let root_nav = use_navigate();
    let on_root = move |_| {
        tree.leave_to_root();
        root_nav("/referrals", Default::default());
    };

    let crumb_nav = use_navigate();
    let entries = move || {
        tree.trail
            .get()
            .entries()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="flex overflow-x-auto flex-row gap-1 items-center py-3 w-full text-sm whitespace-nowrap">
            <button on:click=on_root class="text-primary-600 hover:underline">
                "My Tree"
            </button>
            <For
                each=entries
                key=|(i, node)| (*i, node.id.clone())
                children=move |(i, node)| {
                    let nav = crumb_nav.clone();
                    let label = if node.name.is_empty() { node.username.clone() } else { node.name.clone() };
                    view! {
                        <Icon attr:class="text-xs text-neutral-500" icon=icondata::AiRightOutlined />
                        <button
                            on:click=move |_| {
                                let target = tree.jump_to(i);
                                let own_id = session.user_id_if_available();
                                nav(
                                    &nav_target(target.as_ref(), own_id.as_deref()),
                                    Default::default(),
                                );
                            }
                            class="text-primary-600 hover:underline"
                        >
                            {label}
                        </button>
                    }
                }
            />
            {move || {
                current
                    .get()
                    .map(|name| {
                        view! {
                            <Icon attr:class="text-xs text-neutral-500" icon=icondata::AiRightOutlined />
                            <span class="text-neutral-400">{name}</span>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn LevelSelector(data: StoredValue<ReferralTreeData>) -> impl IntoView {
    let tree = referral_tree_state();
    let selected = tree.selected_level;
    view! {
        <div class="flex flex-row gap-2 py-2 w-full">
            {(1..=consts::MAX_REFERRAL_LEVELS)
                .map(|lvl| {
                    let count = data.with_value(|d| d.counts.at_level(lvl));
                    view! {
                        <button
                            on:click=move |_| selected.set(lvl)
                            class=move || {
                                if selected.get() == lvl {
                                    "flex-1 py-2 rounded-md bg-primary-600 font-semibold"
                                } else {
                                    "flex-1 py-2 rounded-md bg-neutral-800 text-neutral-400"
                                }
                            }
                        >
                            {format!("L{lvl} ({count})")}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MemberRow(
    node: TreeNode,
    #[prop(into)] avatar: Signal<String>,
    on_open_tree: impl Fn() + Send + Sync + 'static,
    on_open_detail: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="flex flex-row gap-3 items-center p-3 w-full rounded-lg bg-neutral-900">
            <img src=avatar class="w-10 h-10 rounded-full object-cover shrink-0" />
            <div class="flex flex-col flex-1 min-w-0">
                <span class="font-semibold truncate">
                    {if node.name.is_empty() { node.username.clone() } else { node.name.clone() }}
                </span>
                <span class="text-xs truncate text-neutral-400">{node.email.clone()}</span>
                {node
                    .joined_date
                    .clone()
                    .map(|d| {
                        view! {
                            <span class="text-xs text-neutral-500">{format!("Joined {d}")}</span>
                        }
                    })}
            </div>
            <button
                on:click=move |_| on_open_detail()
                class="p-2 rounded-md bg-neutral-800 hover:bg-neutral-700"
            >
                <Icon icon=icondata::AiEyeOutlined />
            </button>
            <button
                on:click=move |_| on_open_tree()
                class="p-2 rounded-md bg-neutral-800 hover:bg-neutral-700"
            >
                <Icon icon=icondata::AiTeamOutlined />
            </button>
        </div>
    }
}

#[component]
fn TreeLoaded(data: ReferralTreeData) -> impl IntoView {
    let tree = referral_tree_state();
    let session = session_state();
    let bus = session_bus();
    let client: ApiClient = expect_context();

    let subject = data.user.clone();
    let data = StoredValue::new(data);
    let selected = tree.selected_level;
    let detail_selected = RwSignal::new(None::<TreeNode>);

    // Selfie avatars are fetched lazily per visible level, one request
    // per member, awaited together. Failures fall back to a placeholder
    // and are cached so a level revisit does not refetch.
    let avatars = RwSignal::new(HashMap::<String, String>::new());
    let avatar_client = client.clone();
    Effect::new(move |_| {
        let level = selected.get();
        let members = data.with_value(|d| d.level(level).to_vec());
        let pending: Vec<TreeNode> = avatars.with_untracked(|map| {
            members
                .into_iter()
                .filter(|m| !map.contains_key(&m.id))
                .collect()
        });
        if pending.is_empty() {
            return;
        }
        let client = avatar_client.clone();
        spawn_local(async move {
            let fetches = pending.into_iter().map(|member| {
                let client = client.clone();
                async move {
                    let url = match client.user_profile(&member.id).await {
                        Ok(profile) => profile
                            .selfie_image
                            .filter(|s| !s.is_empty())
                            .unwrap_or_else(|| fallback_avatar(member.avatar_seed())),
                        Err(err) => {
                            session.note_api_error(bus, &err);
                            fallback_avatar(member.avatar_seed())
                        }
                    };
                    (member.id, url)
                }
            });
            let resolved = join_all(fetches).await;
            // try_update: the view may be gone by the time this lands
            avatars.try_update(|map| map.extend(resolved));
        });
    });

    let subject_node = subject.as_tree_node();
    let nav = use_navigate();
    let level_members =
        move || data.with_value(|d| d.level(selected.get()).to_vec());

    view! {
        <div class="flex flex-col gap-2 w-full">
            <div class="flex flex-row gap-3 items-center p-4 w-full rounded-lg bg-neutral-900">
                <img
                    src=subject.avatar_or_fallback()
                    class="w-12 h-12 rounded-full object-cover shrink-0"
                />
                <div class="flex flex-col">
                    <span class="font-bold">{subject.display_name()}</span>
                    <span class="text-xs text-neutral-400">
                        {format!(
                            "{} referrals across {} levels",
                            data.with_value(|d| d.counts.total_referrals),
                            consts::MAX_REFERRAL_LEVELS,
                        )}
                    </span>
                </div>
            </div>

            <LevelSelector data />

            {move || {
                let members = level_members();
                if members.is_empty() {
                    view! {
                        <div class="flex justify-center py-12 w-full">
                            <span class="text-neutral-400">
                                "No members found in this level"
                            </span>
                        </div>
                    }
                        .into_any()
                } else {
                    let subject_node = subject_node.clone();
                    let nav = nav.clone();
                    view! {
                        <div class="flex flex-col gap-2 w-full">
                            <For
                                each=move || members.clone()
                                key=|node| node.id.clone()
                                children=move |node| {
                                    let node_id = node.id.clone();
                                    let seed = node.avatar_seed().to_string();
                                    let avatar = Signal::derive(move || {
                                        avatars
                                            .get()
                                            .get(&node_id)
                                            .cloned()
                                            .unwrap_or_else(|| fallback_avatar(&seed))
                                    });
                                    let open_tree = {
                                        let subject_node = subject_node.clone();
                                        let nav = nav.clone();
                                        let target = node.id.clone();
                                        move || {
                                            // record where we are before descending
                                            tree.record_visit(subject_node.clone());
                                            nav(
                                                &format!("/referrals/{target}"),
                                                Default::default(),
                                            );
                                        }
                                    };
                                    let open_detail = {
                                        let node = node.clone();
                                        move || detail_selected.set(Some(node.clone()))
                                    };
                                    view! {
                                        <MemberRow
                                            node=node
                                            avatar=avatar
                                            on_open_tree=open_tree
                                            on_open_detail=open_detail
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>

        <MemberDetailPopup selected=detail_selected />
    }
}

#[component]
pub fn TreeView(#[prop(into)] source: Signal<TreeSource>) -> impl IntoView {
    let session = session_state();
    let tree = referral_tree_state();
    let bus = session_bus();
    let client: ApiClient = expect_context();

    let session_checked = RwSignal::new(false);

    // Gate, then fetch, whenever the data source changes. The session
    // is re-read from durable storage before every fetch.
    let mount_client = client.clone();
    Effect::new(move |_| {
        let src = source.get();
        let valid = session.check_session();
        session_checked.set(true);
        if !valid {
            return;
        }
        tree.reset_level();
        match src {
            TreeSource::Own => {
                if tree.own.with_untracked(ReferralTreeState::should_autofetch) {
                    tree.fetch_own_tree(mount_client.clone(), session, bus);
                }
            }
            TreeSource::Member(id) => {
                let wants_fetch = tree.member.with_untracked(|s| {
                    !s.is_loading()
                        && !s.attempted()
                        && s.data().map(|d| d.user.id != id).unwrap_or(true)
                });
                if wants_fetch {
                    tree.fetch_member_tree(mount_client.clone(), session, bus, id);
                }
            }
        }
    });

    // Rapid navigation can leave the member slice holding another
    // member's tree; refetch once the in-flight request settles.
    let heal_client = client.clone();
    Effect::new(move |_| {
        let TreeSource::Member(id) = source.get() else {
            return;
        };
        let stale = tree.member.with(|s| {
            !s.is_loading()
                && !s.attempted()
                && s.data().map(|d| d.user.id != id).unwrap_or(false)
        });
        if stale {
            tree.fetch_member_tree(heal_client.clone(), session, bus, id);
        }
    });

    let slice = Signal::derive(move || match source.get() {
        TreeSource::Own => tree.own.get(),
        TreeSource::Member(_) => tree.member.get(),
    });

    let retry_client = client.clone();
    let retry = move || match source.get_untracked() {
        TreeSource::Own => tree.fetch_own_tree(retry_client.clone(), session, bus),
        TreeSource::Member(id) => {
            tree.fetch_member_tree(retry_client.clone(), session, bus, id)
        }
    };

    let root_nav = use_navigate();
    let go_root = move || {
        tree.leave_to_root();
        root_nav("/referrals", Default::default());
    };

    let current_label = Signal::derive(move || {
        slice.with(|s| s.data().map(|d| d.user.display_name()))
    });

    view! {
        <Show
            when=move || session_checked.get() && session.is_valid().get()
            fallback=move || {
                if session_checked.get() {
                    view! { <AuthRequired /> }.into_any()
                } else {
                    view! { <TreeLoading /> }.into_any()
                }
            }
        >
            <TrailNav current=current_label />
            {
                let retry = retry.clone();
                let go_root = go_root.clone();
                move || {
                    let retry = retry.clone();
                    let go_root = go_root.clone();
                    slice.with(|s| {
                        if let Some(data) = s.data() {
                            view! { <TreeLoaded data=data.clone() /> }.into_any()
                        } else if let Some(message) = s.error() {
                            view! {
                                <TreeError
                                    message=message.to_string()
                                    on_retry=move || retry()
                                    on_root=move || go_root()
                                />
                            }
                                .into_any()
                        } else {
                            view! { <TreeLoading /> }.into_any()
                        }
                    })
                }
            }
        </Show>
    }
}

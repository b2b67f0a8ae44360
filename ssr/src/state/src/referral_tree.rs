use leptos::prelude::*;
use leptos::task::spawn_local;

use utils::api::ApiClient;
use utils::event_bus::SessionBus;
use utils::types::{ReferralTreeData, TreeNode};

use crate::history::ReferralTrail;
use crate::session::SessionState;

/// Where a tree view sources its data from. The two origins run
/// through independent slices and must not be conflated: viewing
/// someone else's tree never clobbers the viewer's own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeSource {
    Own,
    Member(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SliceStatus<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

/// One async data slice: loading/error/data plus the "attempted" flag
/// that keeps mount/unmount cycles from hammering the API after a
/// terminal failure.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchSlice<T> {
    status: SliceStatus<T>,
    attempted: bool,
}

impl<T> Default for FetchSlice<T> {
    fn default() -> Self {
        Self {
            status: SliceStatus::Idle,
            attempted: false,
        }
    }
}

impl<T: Clone> FetchSlice<T> {
    /// Moves to Loading. Returns false, changing nothing, while a
    /// fetch is already in flight — duplicate requests to the same
    /// slice are a no-op, so exactly one write lands per outcome.
    pub fn begin(&mut self) -> bool {
        if matches!(self.status, SliceStatus::Loading) {
            return false;
        }
        self.status = SliceStatus::Loading;
        true
    }

    pub fn resolve(&mut self, result: Result<T, String>) {
        match result {
            Ok(data) => self.status = SliceStatus::Ready(data),
            Err(message) => {
                self.status = SliceStatus::Failed(message);
                self.attempted = true;
            }
        }
    }

    /// Back to square one; fired when the session becomes valid again
    /// so a re-login can retry.
    pub fn reset(&mut self) {
        self.status = SliceStatus::Idle;
        self.attempted = false;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, SliceStatus::Loading)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.status, SliceStatus::Idle)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.status {
            SliceStatus::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SliceStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }
}

/// Route for a navigation target popped off the trail. No target and
/// the viewer's own node both lead back to the root tree.
pub fn nav_target(target: Option<&TreeNode>, own_id: Option<&str>) -> String {
    match target {
        None => "/referrals".to_string(),
        Some(node) if own_id == Some(node.id.as_str()) => "/referrals".to_string(),
        Some(node) => format!("/referrals/{}", node.id),
    }
}

pub fn referral_tree_state() -> ReferralTreeState {
    expect_context()
}

/// Shared referral-tree context: the two fetch slices, the persisted
/// navigation trail and the level selector. Multiple consumers (tree
/// view, dashboard summary) subscribe to the same slices without
/// duplicating requests.
#[derive(Clone, Copy)]
pub struct ReferralTreeState {
    pub own: RwSignal<FetchSlice<ReferralTreeData>>,
    pub member: RwSignal<FetchSlice<ReferralTreeData>>,
    pub trail: RwSignal<ReferralTrail>,
    pub selected_level: RwSignal<u8>,
}

impl Default for ReferralTreeState {
    fn default() -> Self {
        Self {
            own: RwSignal::new(FetchSlice::default()),
            member: RwSignal::new(FetchSlice::default()),
            trail: RwSignal::new(ReferralTrail::default()),
            selected_level: RwSignal::new(1),
        }
    }
}

impl ReferralTreeState {
    /// Loads the persisted trail into state; corrupt storage decodes
    /// as empty.
    pub fn hydrate_trail(&self) {
        self.trail.try_set(ReferralTrail::load());
    }

    /// Whether a mount should kick off a fetch for this slice: nothing
    /// loaded, nothing in flight, and no terminal failure recorded.
    pub fn should_autofetch(slice: &FetchSlice<ReferralTreeData>) -> bool {
        slice.is_idle() && !slice.attempted()
    }

    /// Fetches the current session's tree. Gated on the session and
    /// no-op while a fetch for this slice is in flight.
    pub fn fetch_own_tree(&self, client: ApiClient, session: SessionState, bus: SessionBus) {
        if !session.check_session() {
            return;
        }
        let started = self.own.try_update(|s| s.begin()).unwrap_or(false);
        if !started {
            return;
        }
        let own = self.own;
        spawn_local(async move {
            let result = match client.own_tree().await {
                Ok(data) => {
                    // the payload carries a fresh user summary
                    session.refresh_user(&data.user);
                    Ok(data)
                }
                Err(err) => {
                    session.note_api_error(bus, &err);
                    Err(err.to_string())
                }
            };
            own.try_update(|s| s.resolve(result));
        });
    }

    /// Fetches an arbitrary member's tree into the member slice.
    pub fn fetch_member_tree(
        &self,
        client: ApiClient,
        session: SessionState,
        bus: SessionBus,
        member_id: String,
    ) {
        if !session.check_session() {
            return;
        }
        let started = self.member.try_update(|s| s.begin()).unwrap_or(false);
        if !started {
            return;
        }
        let member = self.member;
        spawn_local(async move {
            let result = match client.member_tree(&member_id).await {
                Ok(data) => Ok(data),
                Err(err) => {
                    session.note_api_error(bus, &err);
                    Err(err.to_string())
                }
            };
            member.try_update(|s| s.resolve(result));
        });
    }

    /// Records the currently displayed subject right before the
    /// display moves to one of its children.
    pub fn record_visit(&self, node: TreeNode) {
        self.trail.update(|t| {
            t.push(node);
            t.persist();
        });
    }

    /// Breadcrumb jump: truncate to `index` inclusive, hand back the
    /// navigation target.
    pub fn jump_to(&self, index: usize) -> Option<TreeNode> {
        self.trail
            .try_update(|t| {
                let target = t.pop_to(index);
                t.persist();
                target
            })
            .flatten()
    }

    /// One step back; `None` sends the caller to the root tree.
    pub fn step_back(&self) -> Option<TreeNode> {
        self.trail
            .try_update(|t| {
                let target = t.pop_last();
                t.persist();
                target
            })
            .flatten()
    }

    /// Back to the root tree: empty the trail and drop the persisted
    /// copy.
    pub fn leave_to_root(&self) {
        self.trail.try_update(|t| t.clear());
        ReferralTrail::discard();
    }

    /// Level selection starts at 1 on every new tree load.
    pub fn reset_level(&self) {
        self.selected_level.try_set(1);
    }

    /// Forgets failed attempts on both slices, e.g. after a re-login.
    pub fn reset_after_session_change(&self) {
        self.own.try_update(|s| s.reset());
        self.member.try_update(|s| s.reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> TreeNode {
        TreeNode {
            id: id.to_string(),
            name: id.to_string(),
            username: String::new(),
            email: String::new(),
            level: 1,
            sponsor_id: None,
            joined_date: None,
        }
    }

    #[test]
    fn duplicate_begin_is_a_noop() {
        let mut slice: FetchSlice<u32> = FetchSlice::default();
        assert!(slice.begin());
        assert!(!slice.begin());
        assert!(slice.is_loading());
    }

    #[test]
    fn one_resolve_per_terminal_failure_sets_attempted_once() {
        let mut slice: FetchSlice<u32> = FetchSlice::default();
        assert!(slice.begin());
        assert!(!slice.begin());
        slice.resolve(Err("boom".to_string()));
        assert_eq!(slice.error(), Some("boom"));
        assert!(slice.attempted());

        // an explicit retry may run again and succeed
        assert!(slice.begin());
        slice.resolve(Ok(7));
        assert_eq!(slice.data(), Some(&7));
        assert!(slice.attempted(), "attempted survives until reset");

        slice.reset();
        assert!(slice.is_idle());
        assert!(!slice.attempted());
    }

    #[test]
    fn autofetch_only_from_a_clean_slate() {
        let mut slice: FetchSlice<ReferralTreeData> = FetchSlice::default();
        assert!(ReferralTreeState::should_autofetch(&slice));
        slice.begin();
        assert!(!ReferralTreeState::should_autofetch(&slice));
        slice.resolve(Err("down".to_string()));
        assert!(
            !ReferralTreeState::should_autofetch(&slice),
            "a failed attempt must not refetch on remount"
        );
        slice.reset();
        assert!(ReferralTreeState::should_autofetch(&slice));
    }

    #[test]
    fn nav_target_falls_back_to_root() {
        assert_eq!(nav_target(None, Some("me")), "/referrals");
        let me = node("me");
        assert_eq!(nav_target(Some(&me), Some("me")), "/referrals");
        let other = node("m42");
        assert_eq!(nav_target(Some(&other), Some("me")), "/referrals/m42");
        assert_eq!(nav_target(Some(&other), None), "/referrals/m42");
    }
}

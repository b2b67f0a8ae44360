use gloo::storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};

use consts::REFERRAL_TRAIL_STORE;
use utils::types::TreeNode;

/// Breadcrumb of previously displayed members, oldest first.
///
/// Invariant: the trail is always a valid path down from the root tree.
/// It is maintained by only ever pushing the currently displayed node
/// right before the display moves to one of its children; arbitrary
/// insertion is not possible through this API.
///
/// Persisted to per-browser-session storage as a JSON array, so a page
/// reload keeps the trail while a new browser session starts clean.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferralTrail(Vec<TreeNode>);

impl ReferralTrail {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[TreeNode] {
        &self.0
    }

    /// Appends the currently displayed node. No-op when `node` already
    /// sits at the top, which happens on the first forward navigation
    /// after a breadcrumb jump.
    pub fn push(&mut self, node: TreeNode) {
        if self.0.last().map(|last| last.id == node.id) == Some(true) {
            return;
        }
        self.0.push(node);
    }

    /// Keeps entries `0..=index` and returns the entry now on top, the
    /// navigation target. `None` when `index` is out of bounds.
    pub fn pop_to(&mut self, index: usize) -> Option<TreeNode> {
        if index >= self.0.len() {
            return None;
        }
        self.0.truncate(index + 1);
        self.0.last().cloned()
    }

    /// Removes and returns the final entry. `None` means the trail was
    /// already empty and the caller falls back to the root tree.
    pub fn pop_last(&mut self) -> Option<TreeNode> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Loads the persisted trail. Absent or unparsable storage decodes
    /// as an empty trail rather than an error.
    pub fn load() -> Self {
        SessionStorage::get(REFERRAL_TRAIL_STORE).unwrap_or_default()
    }

    pub fn persist(&self) {
        if let Err(e) = SessionStorage::set(REFERRAL_TRAIL_STORE, self) {
            log::warn!("failed to persist referral trail: {e}");
        }
    }

    pub fn discard() {
        SessionStorage::delete(REFERRAL_TRAIL_STORE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> TreeNode {
        TreeNode {
            id: id.to_string(),
            name: id.to_uppercase(),
            username: format!("user-{id}"),
            email: format!("{id}@ridenova.app"),
            level: 1,
            sponsor_id: None,
            joined_date: None,
        }
    }

    #[test]
    fn push_then_pop_to_keeps_inclusive_prefix() {
        let mut trail = ReferralTrail::default();
        for id in ["a", "b", "c", "d"] {
            trail.push(node(id));
        }
        let target = trail.pop_to(1).unwrap();
        assert_eq!(target.id, "b");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.entries()[0].id, "a");
        assert_eq!(trail.entries()[1].id, "b");
    }

    #[test]
    fn pop_to_out_of_bounds_is_none_and_keeps_trail() {
        let mut trail = ReferralTrail::default();
        trail.push(node("a"));
        assert_eq!(trail.pop_to(5), None);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn pop_last_on_empty_is_none() {
        let mut trail = ReferralTrail::default();
        assert_eq!(trail.pop_last(), None);
        assert!(trail.is_empty());
    }

    #[test]
    fn push_dedupes_the_top_entry_only() {
        let mut trail = ReferralTrail::default();
        trail.push(node("a"));
        trail.push(node("a"));
        assert_eq!(trail.len(), 1);
        trail.push(node("b"));
        trail.push(node("a"));
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn serde_round_trip_preserves_order() {
        let mut trail = ReferralTrail::default();
        trail.push(node("a"));
        trail.push(node("b"));
        let json = serde_json::to_string(&trail).unwrap();
        // persisted as a plain JSON array
        assert!(json.starts_with('['));
        let reloaded: ReferralTrail = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, trail);
    }

    #[test]
    fn corrupt_persisted_value_reads_as_empty() {
        let reloaded: ReferralTrail =
            serde_json::from_str("{not json").unwrap_or_default();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn breadcrumb_scenario_root_a_b_then_jump_to_a() {
        // root -> memberA -> memberB, then click memberA's breadcrumb
        let mut trail = ReferralTrail::default();
        trail.push(node("root"));
        trail.push(node("a"));
        // viewing memberB now; jump to the breadcrumb at index 1
        let target = trail.pop_to(1).unwrap();
        assert_eq!(target.id, "a");
        let ids: Vec<_> = trail.entries().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["root", "a"]);
    }
}

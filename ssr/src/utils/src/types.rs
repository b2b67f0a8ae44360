use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use consts::FALLBACK_AVATAR_BASE;

/// Key of a level bucket as the referral endpoints emit it (`level1`..).
pub fn level_key(level: u8) -> String {
    format!("level{level}")
}

pub fn fallback_avatar(seed: &str) -> String {
    format!("{FALLBACK_AVATAR_BASE}?seed={seed}")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub sponsor_id: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub kyc_status: Option<String>,
    #[serde(default)]
    pub selfie_image: Option<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl UserSummary {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    pub fn avatar_or_fallback(&self) -> String {
        self.selfie_image
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fallback_avatar(&self.username))
    }

    /// The shape a user takes when it enters the referral trail.
    pub fn as_tree_node(&self) -> TreeNode {
        TreeNode {
            id: self.id.clone(),
            name: self.display_name(),
            username: self.username.clone(),
            email: self.email.clone(),
            level: self.level,
            sponsor_id: self.sponsor_id.clone(),
            joined_date: self.joined_at.clone(),
        }
    }
}

/// One member row of a referral tree. Server-produced; the client only
/// displays it and passes `id` onward to request a sub-tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub sponsor_id: Option<String>,
    #[serde(default)]
    pub joined_date: Option<String>,
}

impl TreeNode {
    pub fn avatar_seed(&self) -> &str {
        if self.username.is_empty() {
            &self.id
        } else {
            &self.username
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCounts {
    #[serde(default)]
    pub total_referrals: u64,
    #[serde(flatten)]
    pub by_level: IndexMap<String, u64>,
}

impl ReferralCounts {
    pub fn at_level(&self, level: u8) -> u64 {
        self.by_level
            .get(&level_key(level))
            .copied()
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralTreeData {
    pub user: UserSummary,
    #[serde(default)]
    pub members: IndexMap<String, Vec<TreeNode>>,
    #[serde(default)]
    pub counts: ReferralCounts,
}

impl ReferralTreeData {
    pub fn level(&self, level: u8) -> &[TreeNode] {
        self.members
            .get(&level_key(level))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// The only wire shape the tree endpoints are expected to produce.
/// A body without `referralTree` fails decoding and surfaces as a
/// malformed-body error.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralTreeResponse {
    pub referral_tree: ReferralTreeData,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "referralTree": {
            "user": { "id": "u1" },
            "members": { "level1": [{ "id": "m1" }], "level2": [] },
            "counts": { "totalReferrals": 1, "level1": 1, "level2": 0 }
        }
    }"#;

    #[test]
    fn sample_payload_decodes() {
        let resp: ReferralTreeResponse = serde_json::from_str(SAMPLE).unwrap();
        let tree = resp.referral_tree;
        assert_eq!(tree.user.id, "u1");
        assert_eq!(tree.level(1).len(), 1);
        assert_eq!(tree.level(1)[0].id, "m1");
        assert!(tree.level(2).is_empty());
        assert_eq!(tree.counts.total_referrals, 1);
        assert_eq!(tree.counts.at_level(1), 1);
        assert_eq!(tree.counts.at_level(2), 0);
    }

    #[test]
    fn missing_tree_is_a_decode_error() {
        let res = serde_json::from_str::<ReferralTreeResponse>(r#"{"ok":true}"#);
        assert!(res.is_err());
    }

    #[test]
    fn absent_level_reads_as_empty() {
        let resp: ReferralTreeResponse = serde_json::from_str(SAMPLE).unwrap();
        assert!(resp.referral_tree.level(4).is_empty());
        assert_eq!(resp.referral_tree.counts.at_level(4), 0);
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user: UserSummary =
            serde_json::from_str(r#"{ "id": "u1", "username": "rider42" }"#).unwrap();
        assert_eq!(user.display_name(), "rider42");
        assert!(user.avatar_or_fallback().contains("seed=rider42"));
    }
}

//! Team statistics.

use super::AggregationConfig;
use crate::user::domain::{User, UserRole};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headcount figures for the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    /// Every account, active or not.
    pub total_users: u64,
    /// Active accounts.
    pub active_users: u64,
    /// Active accounts per role. Every role is present, possibly with zero.
    pub by_role: BTreeMap<UserRole, u64>,
    /// Accounts created within the trailing join window ending at `now`.
    pub recent_joins: u64,
}

impl TeamStats {
    /// Active headcount for `role`.
    #[must_use]
    pub fn count_for(&self, role: UserRole) -> u64 {
        self.by_role.get(&role).copied().unwrap_or_default()
    }
}

/// Computes team statistics in a single pass.
#[must_use]
pub fn compute_team_stats(
    users: &[User],
    now: DateTime<Utc>,
    config: &AggregationConfig,
) -> TeamStats {
    let joined_after = now - TimeDelta::days(i64::from(config.recent_join_days));
    let empty = TeamStats {
        total_users: 0,
        active_users: 0,
        by_role: UserRole::ALL.into_iter().map(|role| (role, 0)).collect(),
        recent_joins: 0,
    };
    users.iter().fold(empty, |mut stats, user| {
        stats.total_users += 1;
        if user.is_active() {
            stats.active_users += 1;
            *stats.by_role.entry(user.role()).or_default() += 1;
        }
        if (joined_after..=now).contains(&user.created_at()) {
            stats.recent_joins += 1;
        }
        stats
    })
}

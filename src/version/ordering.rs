//! Recency ordering of versions
//!
//! Keys sort ascending from oldest to most recent. Within one base version the
//! ascending order is:
//!
//! ```text
//! 2.1.0-SNAPSHOT < 2.1.0-rc1-SNAPSHOT < 2.1.0-rc2-SNAPSHOT < 2.1.0-rc1 < 2.1.0-rc2 < 2.1.0
//! ```
//!
//! so the most-recent-first listing shows the stable release, then released
//! candidates (highest rc first), then snapshot candidates (highest rc first),
//! then the plain snapshot.

use crate::version::parser::parse_literal;
use crate::version::types::{Category, Version};

/// Totally ordered sort key for a version label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OrderKey {
    /// Label whose numbers could not be parsed; older than any valid version
    Unparsable,
    Ranked {
        major: u32,
        minor: u32,
        patch: u32,
        weight: u8,
        rc: u32,
    },
}

/// Ascending weight of a category, the inverse of its rank
fn weight(category: Category) -> u8 {
    3 - category.rank()
}

pub fn order_key(version: &Version) -> OrderKey {
    OrderKey::Ranked {
        major: version.major,
        minor: version.minor,
        patch: version.patch,
        weight: weight(version.category()),
        rc: version.rc.unwrap_or(0),
    }
}

/// Sort key for a textual label; unparsable labels get the bottom sentinel
pub fn label_order_key(label: &str) -> OrderKey {
    parse_literal(label)
        .map(|version| order_key(&version))
        .unwrap_or(OrderKey::Unparsable)
}

/// Versions sorted most recent first
pub fn most_recent_first(versions: &[Version]) -> Vec<Version> {
    let mut sorted = versions.to_vec();
    sorted.sort_by_key(order_key);
    sorted.reverse();
    sorted
}

/// Sort version labels most recent first, unparsable labels last
pub fn sort_labels_most_recent_first(labels: &mut [String]) {
    labels.sort_by_cached_key(|label| label_order_key(label));
    labels.reverse();
}

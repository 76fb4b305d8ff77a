use crate::model::Freshness;
use serde::{Deserialize, Serialize};

/// One dependency of a cache entry, with the fingerprint it was recorded at.
///
/// World dependencies carry a freshness. Dependencies on other cache keys
/// (`deps_state`) are sent without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepsEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<Freshness>,
    pub key: String,
    pub fingerprint: String,
}

impl DepsEntry {
    pub fn is_stale(&self) -> bool {
        self.freshness.map_or(false, |f| !f.is_fresh())
    }

    /// CSS class for the entry: `fresh`, `stale` or `untracked`
    pub fn state_class(&self) -> &'static str {
        match self.freshness {
            Some(Freshness::Fresh) => "fresh",
            Some(Freshness::Stale) => "stale",
            None => "untracked",
        }
    }
}

/// Ordered dependency list. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepsMap(pub Vec<DepsEntry>);

impl DepsMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DepsEntry> {
        self.0.iter()
    }

    pub fn stale_count(&self) -> usize {
        self.0.iter().filter(|e| e.is_stale()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryDetail {
    pub value: String,
    pub fingerprint: String,
    pub world_state: DepsMap,
    pub direct_world_state: DepsMap,
    pub deps_state: DepsMap,
}

impl CacheEntryDetail {
    /// True when every world dependency (direct or transitive) is Fresh.
    pub fn is_fully_fresh(&self) -> bool {
        self.world_state.stale_count() == 0 && self.direct_world_state.stale_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedEntry {
    pub key: String,
    pub entry: CacheEntryDetail,
}

/// Cache state as of one (chapter, op) point, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(pub Vec<KeyedEntry>);

impl Snapshot {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyedEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a KeyedEntry;
    type IntoIter = std::slice::Iter<'a, KeyedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Static reference sets consulted by the channel predicates.
//!
//! One set per (category, signal kind) pair. Membership is exact,
//! case-sensitive string equality. Referring-domain sets are matched against
//! the normalized domain, so entries with three or more labels
//! (`m.youtube.com`) can never match on their own; they are kept so the tables
//! stay aligned with the published channel definitions.
//!
//! Sets are built lazily on first use and shared read-only across threads.

pub mod search;
pub mod shopping;
pub mod social;
pub mod video;

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// A named, immutable collection of exact-match string literals.
#[derive(Debug)]
pub struct ReferenceSet {
    name: &'static str,
    entries: HashSet<&'static str>,
}

impl ReferenceSet {
    pub fn new(name: &'static str, entries: &[&'static str]) -> Self {
        Self {
            name,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exact membership test. `None` is never a member.
    pub fn contains(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| self.entries.contains(v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }
}

// ─── Medium / source vocabularies ───────────────────────────────────────────

const PAID_MEDIUMS: &[&str] = &["cpc", "cpm", "cpv", "cpa", "ppc", "retargeting"];
const DIRECT_SOURCES: &[&str] = &["(direct)", "direct"];
const EMAIL_TAGS: &[&str] = &["e mail", "e-mail", "e_mail", "email"];
const PUSH_MEDIUMS: &[&str] = &["mobile", "notification", "push"];
const DISPLAY_MEDIUMS: &[&str] = &["banner", "cpm", "display", "expandable", "interstitial"];
const REFERRAL_MEDIUMS: &[&str] = &["app", "link", "referral"];

pub static PAID_UTM_MEDIUMS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("paid utm mediums", PAID_MEDIUMS));
pub static DIRECT_UTM_SOURCES: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("direct utm sources", DIRECT_SOURCES));

pub static SEARCH_UTM_SOURCES: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("search utm sources", search::UTM_SOURCES));
pub static SEARCH_REFERRING_DOMAINS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("search referring domains", search::REFERRING_DOMAINS));

pub static SOCIAL_UTM_SOURCES: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("social utm sources", social::UTM_SOURCES));
pub static SOCIAL_UTM_MEDIUMS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("social utm mediums", social::UTM_MEDIUMS));
pub static SOCIAL_REFERRING_DOMAINS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("social referring domains", social::REFERRING_DOMAINS));

pub static VIDEO_UTM_SOURCES: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("video utm sources", video::UTM_SOURCES));
pub static VIDEO_REFERRING_DOMAINS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("video referring domains", video::REFERRING_DOMAINS));

pub static SHOPPING_UTM_SOURCES: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("shopping utm sources", shopping::UTM_SOURCES));
pub static SHOPPING_REFERRING_DOMAINS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("shopping referring domains", shopping::REFERRING_DOMAINS));

pub static EMAIL_UTM_SOURCES: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("email utm sources", EMAIL_TAGS));
pub static EMAIL_UTM_MEDIUMS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("email utm mediums", EMAIL_TAGS));

pub static PUSH_UTM_MEDIUMS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("push utm mediums", PUSH_MEDIUMS));
pub static DISPLAY_UTM_MEDIUMS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("display utm mediums", DISPLAY_MEDIUMS));
pub static REFERRAL_UTM_MEDIUMS: Lazy<ReferenceSet> =
    Lazy::new(|| ReferenceSet::new("referral utm mediums", REFERRAL_MEDIUMS));

/// Every reference set, for diagnostics and table sanity checks.
pub fn all() -> [&'static ReferenceSet; 16] {
    [
        &*PAID_UTM_MEDIUMS,
        &*DIRECT_UTM_SOURCES,
        &*SEARCH_UTM_SOURCES,
        &*SEARCH_REFERRING_DOMAINS,
        &*SOCIAL_UTM_SOURCES,
        &*SOCIAL_UTM_MEDIUMS,
        &*SOCIAL_REFERRING_DOMAINS,
        &*VIDEO_UTM_SOURCES,
        &*VIDEO_REFERRING_DOMAINS,
        &*SHOPPING_UTM_SOURCES,
        &*SHOPPING_REFERRING_DOMAINS,
        &*EMAIL_UTM_SOURCES,
        &*EMAIL_UTM_MEDIUMS,
        &*PUSH_UTM_MEDIUMS,
        &*DISPLAY_UTM_MEDIUMS,
        &*REFERRAL_UTM_MEDIUMS,
    ]
}

//! Channel predicates: one boolean test per channel category.
//!
//! Every predicate is pure and takes only the signal fields it inspects.
//! `None` never matches a reference set or literal; the direct-traffic guard
//! is the only test that looks for an absent field. Domain-based tests expect
//! the referring domain already passed through [`crate::domain::normalize`].
//!
//! Campaign sniffing uses regexes anchored over the whole campaign string. The
//! wildcard is spelled as an explicit class excluding `\n`, `\r`, U+2028 and
//! U+2029 so a campaign carrying a line terminator never matches, the same as
//! the browser engine these patterns were written for.

use once_cell::sync::Lazy;
use regex::Regex;

use attribution_core::DIRECT_REFERRER;

use crate::reference::{
    DIRECT_UTM_SOURCES, DISPLAY_UTM_MEDIUMS, EMAIL_UTM_MEDIUMS, EMAIL_UTM_SOURCES,
    PAID_UTM_MEDIUMS, PUSH_UTM_MEDIUMS, REFERRAL_UTM_MEDIUMS, SEARCH_REFERRING_DOMAINS,
    SEARCH_UTM_SOURCES, SHOPPING_REFERRING_DOMAINS, SHOPPING_UTM_SOURCES,
    SOCIAL_REFERRING_DOMAINS, SOCIAL_UTM_MEDIUMS, SOCIAL_UTM_SOURCES, VIDEO_REFERRING_DOMAINS,
    VIDEO_UTM_SOURCES,
};

/// Any character but a line terminator.
const ANY: &str = r"[^\n\r\x{2028}\x{2029}]";

static VIDEO_CAMPAIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({ANY}*video{ANY}*)$")).expect("video campaign pattern is valid")
});

// "shop" must follow start-of-string or a character outside a-d/f-z, so
// "e-shop" and "eshop" match while "workshop" does not. "shopping" matches
// anywhere.
static SHOPPING_CAMPAIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({ANY}*(([^a-df-z]|^)shop|shopping){ANY}*)$"))
        .expect("shopping campaign pattern is valid")
});

pub fn is_paid_traffic(medium: Option<&str>, any_click_id_present: bool) -> bool {
    PAID_UTM_MEDIUMS.contains(medium)
        || medium.is_some_and(|m| m.starts_with("paid"))
        || any_click_id_present
}

pub fn is_direct_traffic(
    referring_domain: Option<&str>,
    medium: Option<&str>,
    source: Option<&str>,
) -> bool {
    referring_domain == Some(DIRECT_REFERRER)
        && medium.is_none()
        && (source.is_none() || DIRECT_UTM_SOURCES.contains(source))
}

pub fn is_search(source: Option<&str>, domain: Option<&str>) -> bool {
    SEARCH_UTM_SOURCES.contains(source) || SEARCH_REFERRING_DOMAINS.contains(domain)
}

pub fn is_social(source: Option<&str>, domain: Option<&str>, medium: Option<&str>) -> bool {
    SOCIAL_UTM_SOURCES.contains(source)
        || SOCIAL_REFERRING_DOMAINS.contains(domain)
        || SOCIAL_UTM_MEDIUMS.contains(medium)
}

pub fn is_video(
    source: Option<&str>,
    domain: Option<&str>,
    medium: Option<&str>,
    campaign: Option<&str>,
) -> bool {
    VIDEO_UTM_SOURCES.contains(source)
        || VIDEO_REFERRING_DOMAINS.contains(domain)
        || medium == Some("video")
        || campaign_mentions_video(campaign)
}

pub fn is_shopping(source: Option<&str>, domain: Option<&str>, campaign: Option<&str>) -> bool {
    SHOPPING_UTM_SOURCES.contains(source)
        || SHOPPING_REFERRING_DOMAINS.contains(domain)
        || campaign_mentions_shopping(campaign)
}

pub fn is_display(medium: Option<&str>) -> bool {
    DISPLAY_UTM_MEDIUMS.contains(medium)
}

pub fn is_email(source: Option<&str>, medium: Option<&str>) -> bool {
    EMAIL_UTM_SOURCES.contains(source) || EMAIL_UTM_MEDIUMS.contains(medium)
}

pub fn is_push(source: Option<&str>, medium: Option<&str>) -> bool {
    source == Some("firebase")
        || PUSH_UTM_MEDIUMS.contains(medium)
        || medium.is_some_and(|m| m.ends_with("push"))
}

pub fn is_sms(source: Option<&str>) -> bool {
    source == Some("sms")
}

pub fn is_referral(medium: Option<&str>) -> bool {
    REFERRAL_UTM_MEDIUMS.contains(medium)
}

pub fn is_audio(medium: Option<&str>) -> bool {
    medium == Some("audio")
}

pub fn is_affiliate(medium: Option<&str>) -> bool {
    medium == Some("affiliate")
}

/// Campaign contains `video` and no line terminator.
pub fn campaign_mentions_video(campaign: Option<&str>) -> bool {
    campaign.is_some_and(|c| VIDEO_CAMPAIGN.is_match(c))
}

/// Campaign contains `shopping`, or `shop` at the start or after a character
/// other than a-d/f-z, and no line terminator.
pub fn campaign_mentions_shopping(campaign: Option<&str>) -> bool {
    campaign.is_some_and(|c| SHOPPING_CAMPAIGN.is_match(c))
}

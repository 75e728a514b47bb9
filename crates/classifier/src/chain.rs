//! Priority chain evaluator.
//!
//! A visit falls into exactly one branch: the cross-network campaign override,
//! paid, direct, or organic. The paid guard is checked before the direct guard.
//! Inside the paid and organic branches the category chains below are walked
//! in order and the first matching category decides the channel. Order is the
//! tie-break between overlapping reference sets (a source listed as both
//! search and social is search), so the arrays must not be reordered.

use serde::Serialize;
use tracing::trace;

use attribution_core::{ChannelType, VisitSignals, CROSS_NETWORK_CAMPAIGN};

use crate::domain::normalize;
use crate::predicates;

/// Channel category tested by one predicate.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Search,
    Social,
    Video,
    Shopping,
    Display,
    Email,
    Sms,
    Push,
    Referral,
    Audio,
    Affiliate,
}

impl Category {
    /// Evaluate this category's predicate. `domain` is the normalized
    /// referring domain.
    pub fn matches(&self, signals: &VisitSignals<'_>, domain: Option<&str>) -> bool {
        let source = signals.utm_source;
        let medium = signals.utm_medium;
        let campaign = signals.utm_campaign;
        match self {
            Category::Search => predicates::is_search(source, domain),
            Category::Social => predicates::is_social(source, domain, medium),
            Category::Video => predicates::is_video(source, domain, medium, campaign),
            Category::Shopping => predicates::is_shopping(source, domain, campaign),
            Category::Display => predicates::is_display(medium),
            Category::Email => predicates::is_email(source, medium),
            Category::Sms => predicates::is_sms(source),
            Category::Push => predicates::is_push(source, medium),
            Category::Referral => predicates::is_referral(medium),
            Category::Audio => predicates::is_audio(medium),
            Category::Affiliate => predicates::is_affiliate(medium),
        }
    }
}

/// Top-level decision branch a visit was routed through.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    CrossNetwork,
    Paid,
    Direct,
    Organic,
}

/// Ordered categories for paid traffic.
pub const PAID_CHAIN: [(Category, ChannelType); 5] = [
    (Category::Search, ChannelType::PaidSearch),
    (Category::Social, ChannelType::PaidSocial),
    (Category::Video, ChannelType::PaidVideo),
    (Category::Shopping, ChannelType::PaidShopping),
    (Category::Display, ChannelType::Display),
];

/// Ordered categories for non-paid, non-direct traffic.
pub const ORGANIC_CHAIN: [(Category, ChannelType); 11] = [
    (Category::Search, ChannelType::OrganicSearch),
    (Category::Social, ChannelType::OrganicSocial),
    (Category::Video, ChannelType::OrganicVideo),
    (Category::Shopping, ChannelType::OrganicShopping),
    (Category::Email, ChannelType::Email),
    (Category::Sms, ChannelType::Sms),
    (Category::Push, ChannelType::Push),
    (Category::Display, ChannelType::Display),
    (Category::Referral, ChannelType::Referral),
    (Category::Audio, ChannelType::Audio),
    (Category::Affiliate, ChannelType::Affiliate),
];

/// Classification outcome with the path that produced it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Attribution {
    pub channel: ChannelType,
    pub branch: Branch,
    /// Matching category, or `None` for the cross-network override, direct
    /// traffic, and the `Paid Unknown` / `Unknown` fallbacks.
    pub category: Option<Category>,
}

impl Attribution {
    fn new(channel: ChannelType, branch: Branch, category: Option<Category>) -> Self {
        Self {
            channel,
            branch,
            category,
        }
    }
}

/// Walk `chain` and return the first matching entry, or `fallback`.
fn first_match(
    chain: &[(Category, ChannelType)],
    signals: &VisitSignals<'_>,
    domain: Option<&str>,
    branch: Branch,
    fallback: ChannelType,
) -> Attribution {
    chain
        .iter()
        .find(|(category, _)| category.matches(signals, domain))
        .map(|&(category, channel)| Attribution::new(channel, branch, Some(category)))
        .unwrap_or_else(|| Attribution::new(fallback, branch, None))
}

/// Classify a visit and report the branch and category that decided it.
pub fn explain(signals: &VisitSignals<'_>) -> Attribution {
    if signals.utm_campaign == Some(CROSS_NETWORK_CAMPAIGN) {
        return Attribution::new(ChannelType::CrossNetwork, Branch::CrossNetwork, None);
    }

    let domain = normalize(signals.referring_domain);

    let attribution =
        if predicates::is_paid_traffic(signals.utm_medium, signals.any_click_id_present) {
            first_match(
                &PAID_CHAIN,
                signals,
                domain,
                Branch::Paid,
                ChannelType::PaidUnknown,
            )
        } else if predicates::is_direct_traffic(
            signals.referring_domain,
            signals.utm_medium,
            signals.utm_source,
        ) {
            Attribution::new(ChannelType::Direct, Branch::Direct, None)
        } else {
            first_match(
                &ORGANIC_CHAIN,
                signals,
                domain,
                Branch::Organic,
                ChannelType::Unknown,
            )
        };

    trace!(
        branch = ?attribution.branch,
        category = ?attribution.category,
        channel = %attribution.channel,
        domain = ?domain,
        "visit classified"
    );

    attribution
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttributionError;

/// Referring-domain value the instrumentation layer records when a visit has
/// no referrer.
pub const DIRECT_REFERRER: &str = "$direct";

/// Campaign value that forces the Cross Network channel.
pub const CROSS_NETWORK_CAMPAIGN: &str = "cross-network";

/// Marketing channel a visit is attributed to.
///
/// Serialized as its report label (`"Paid Search"`, `"SMS"`, ...), which is the
/// exact string attached to outbound analytics events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChannelType {
    #[serde(rename = "Cross Network")]
    CrossNetwork,
    #[serde(rename = "Paid Search")]
    PaidSearch,
    #[serde(rename = "Paid Social")]
    PaidSocial,
    #[serde(rename = "Paid Video")]
    PaidVideo,
    #[serde(rename = "Paid Shopping")]
    PaidShopping,
    #[serde(rename = "Display")]
    Display,
    #[serde(rename = "Paid Unknown")]
    PaidUnknown,
    #[serde(rename = "Direct")]
    Direct,
    #[serde(rename = "Organic Search")]
    OrganicSearch,
    #[serde(rename = "Organic Social")]
    OrganicSocial,
    #[serde(rename = "Organic Video")]
    OrganicVideo,
    #[serde(rename = "Organic Shopping")]
    OrganicShopping,
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "Push")]
    Push,
    #[serde(rename = "Referral")]
    Referral,
    #[serde(rename = "Audio")]
    Audio,
    #[serde(rename = "Affiliate")]
    Affiliate,
}

impl ChannelType {
    pub const ALL: [ChannelType; 19] = [
        ChannelType::CrossNetwork,
        ChannelType::PaidSearch,
        ChannelType::PaidSocial,
        ChannelType::PaidVideo,
        ChannelType::PaidShopping,
        ChannelType::Display,
        ChannelType::PaidUnknown,
        ChannelType::Direct,
        ChannelType::OrganicSearch,
        ChannelType::OrganicSocial,
        ChannelType::OrganicVideo,
        ChannelType::OrganicShopping,
        ChannelType::Unknown,
        ChannelType::Email,
        ChannelType::Sms,
        ChannelType::Push,
        ChannelType::Referral,
        ChannelType::Audio,
        ChannelType::Affiliate,
    ];

    /// Report label for this channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::CrossNetwork => "Cross Network",
            ChannelType::PaidSearch => "Paid Search",
            ChannelType::PaidSocial => "Paid Social",
            ChannelType::PaidVideo => "Paid Video",
            ChannelType::PaidShopping => "Paid Shopping",
            ChannelType::Display => "Display",
            ChannelType::PaidUnknown => "Paid Unknown",
            ChannelType::Direct => "Direct",
            ChannelType::OrganicSearch => "Organic Search",
            ChannelType::OrganicSocial => "Organic Social",
            ChannelType::OrganicVideo => "Organic Video",
            ChannelType::OrganicShopping => "Organic Shopping",
            ChannelType::Unknown => "Unknown",
            ChannelType::Email => "Email",
            ChannelType::Sms => "SMS",
            ChannelType::Push => "Push",
            ChannelType::Referral => "Referral",
            ChannelType::Audio => "Audio",
            ChannelType::Affiliate => "Affiliate",
        }
    }

    /// Whether the label is one of the `Paid *` channels. Display can be
    /// reached from both the paid and organic chains, so it does not count.
    pub fn is_paid(&self) -> bool {
        matches!(
            self,
            ChannelType::PaidSearch
                | ChannelType::PaidSocial
                | ChannelType::PaidVideo
                | ChannelType::PaidShopping
                | ChannelType::PaidUnknown
        )
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = AttributionError;

    /// Parses a report label exactly; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelType::ALL
            .iter()
            .copied()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| AttributionError::UnknownChannel(s.to_string()))
    }
}

/// Marketing signals captured for one visit or event.
///
/// Absent parameters are `None`; an empty string is a present value and is
/// matched as such.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitSignals<'a> {
    pub utm_campaign: Option<&'a str>,
    pub utm_medium: Option<&'a str>,
    pub utm_source: Option<&'a str>,
    /// Referring host name, or [`DIRECT_REFERRER`] when there was none.
    pub referring_domain: Option<&'a str>,
    /// True when any paid-ad click identifier was present on the URL.
    pub any_click_id_present: bool,
}

impl<'a> VisitSignals<'a> {
    pub fn new(
        utm_campaign: Option<&'a str>,
        utm_medium: Option<&'a str>,
        utm_source: Option<&'a str>,
        referring_domain: Option<&'a str>,
        any_click_id_present: bool,
    ) -> Self {
        Self {
            utm_campaign,
            utm_medium,
            utm_source,
            referring_domain,
            any_click_id_present,
        }
    }

    /// Signals for a visit with no referrer and no campaign tagging.
    pub fn direct() -> Self {
        Self {
            referring_domain: Some(DIRECT_REFERRER),
            ..Default::default()
        }
    }

    pub fn with_campaign(mut self, campaign: &'a str) -> Self {
        self.utm_campaign = Some(campaign);
        self
    }

    pub fn with_medium(mut self, medium: &'a str) -> Self {
        self.utm_medium = Some(medium);
        self
    }

    pub fn with_source(mut self, source: &'a str) -> Self {
        self.utm_source = Some(source);
        self
    }

    pub fn with_referring_domain(mut self, domain: &'a str) -> Self {
        self.referring_domain = Some(domain);
        self
    }

    pub fn with_click_id(mut self, present: bool) -> Self {
        self.any_click_id_present = present;
        self
    }
}

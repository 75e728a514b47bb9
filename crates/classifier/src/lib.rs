//! Marketing channel classifier: attributes a visit to one of a fixed set of
//! channels from its UTM parameters, referring domain, and ad click id.
//!
//! # Modules
//!
//! - [`domain`]: Referring-domain normalization to the last two labels
//! - [`reference`]: Static source/medium/domain reference sets
//! - [`predicates`]: One boolean test per channel category
//! - [`chain`]: Ordered paid/direct/organic decision procedure
//!
//! Classification is a total, pure function: every input yields exactly one
//! [`ChannelType`], and the reference tables are shared read-only, so it can
//! be called from any thread without coordination.

pub mod chain;
pub mod domain;
pub mod predicates;
pub mod reference;

pub use attribution_core::{ChannelType, VisitSignals};
pub use chain::{explain, Attribution, Branch, Category, ORGANIC_CHAIN, PAID_CHAIN};
pub use domain::normalize;

/// Attribute a visit to a marketing channel.
///
/// `referring_domain` is the full referring host, or `"$direct"` when the
/// visit had no referrer.
pub fn classify(
    campaign: Option<&str>,
    medium: Option<&str>,
    source: Option<&str>,
    referring_domain: Option<&str>,
    any_click_id_present: bool,
) -> ChannelType {
    VisitSignals::new(campaign, medium, source, referring_domain, any_click_id_present).classify()
}

/// Classification entry points on [`VisitSignals`].
pub trait Classify {
    fn classify(&self) -> ChannelType;

    fn explain(&self) -> Attribution;
}

impl Classify for VisitSignals<'_> {
    fn classify(&self) -> ChannelType {
        chain::explain(self).channel
    }

    fn explain(&self) -> Attribution {
        chain::explain(self)
    }
}

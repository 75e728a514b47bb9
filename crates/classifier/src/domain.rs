//! Referring-domain normalization.
//!
//! Reduces a host name to its last two labels (`m.search.naver.com` →
//! `naver.com`). Multi-part public suffixes are not special-cased:
//! `news.bbc.co.uk` becomes `co.uk`. Existing attribution reports depend on
//! this exact reduction, so it must not be swapped for a public-suffix lookup.

/// Normalize a referring domain to its registrable form.
///
/// Hosts with more than two `.`-separated labels are cut down to the last two;
/// anything else is returned unchanged. Empty labels count, so `a..b` yields
/// `.b`. The result always borrows from the input.
pub fn normalize(domain: Option<&str>) -> Option<&str> {
    let domain = domain?;
    let last_dot = match domain.rfind('.') {
        Some(idx) => idx,
        None => return Some(domain),
    };
    match domain[..last_dot].rfind('.') {
        Some(second_last_dot) => Some(&domain[second_last_dot + 1..]),
        None => Some(domain),
    }
}

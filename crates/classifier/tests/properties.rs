//! Property tests for classifier totality, determinism and branch guards.

use attribution_classifier::{normalize, Branch, ChannelType, Classify, VisitSignals, ORGANIC_CHAIN, PAID_CHAIN};
use proptest::prelude::*;

/// Field values mixing real vocabulary with arbitrary text so that every
/// branch is exercised.
fn field() -> impl Strategy<Value = Option<String>> {
    let vocabulary = prop::sample::select(vec![
        "", "cpc", "cpm", "paid_social", "email", "social", "video", "push", "webpush",
        "banner", "referral", "audio", "affiliate", "google", "facebook", "youtube", "amazon",
        "sms", "firebase", "direct", "(direct)", "$direct", "cross-network", "summer-shop-sale",
        "workshop", "m.search.naver.com", "l.facebook.com", "www.walmart.com", "t.co",
    ])
    .prop_map(str::to_string);

    prop::option::of(prop_oneof![vocabulary, ".{0,24}", "[a-z.]{0,20}"])
}

fn signals_strategy() -> impl Strategy<Value = (Option<String>, Option<String>, Option<String>, Option<String>, bool)>
{
    (field(), field(), field(), field(), any::<bool>())
}

fn view(
    fields: &(Option<String>, Option<String>, Option<String>, Option<String>, bool),
) -> VisitSignals<'_> {
    VisitSignals::new(
        fields.0.as_deref(),
        fields.1.as_deref(),
        fields.2.as_deref(),
        fields.3.as_deref(),
        fields.4,
    )
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(fields in signals_strategy()) {
        let signals = view(&fields);
        let first = signals.explain();
        let second = signals.explain();
        prop_assert_eq!(first, second);
        prop_assert_eq!(signals.classify(), first.channel);
        prop_assert!(ChannelType::ALL.contains(&first.channel));
    }

    #[test]
    fn prop_cross_network_wins(fields in signals_strategy()) {
        let signals = view(&fields).with_campaign("cross-network");
        prop_assert_eq!(signals.classify(), ChannelType::CrossNetwork);
    }

    #[test]
    fn prop_click_id_selects_paid_branch(fields in signals_strategy()) {
        let signals = view(&fields).with_click_id(true);
        prop_assume!(signals.utm_campaign != Some("cross-network"));
        let attribution = signals.explain();
        prop_assert_eq!(attribution.branch, Branch::Paid);
        let paid_labels: Vec<ChannelType> = PAID_CHAIN
            .iter()
            .map(|(_, channel)| *channel)
            .chain([ChannelType::PaidUnknown])
            .collect();
        prop_assert!(paid_labels.contains(&attribution.channel));
    }

    #[test]
    fn prop_category_matches_channel_in_chain(fields in signals_strategy()) {
        let attribution = view(&fields).explain();
        let chain: &[_] = match attribution.branch {
            Branch::Paid => &PAID_CHAIN,
            Branch::Organic => &ORGANIC_CHAIN,
            Branch::Direct | Branch::CrossNetwork => &[],
        };
        match attribution.category {
            Some(category) => {
                let expected = chain.iter().find(|(c, _)| *c == category).map(|(_, ch)| *ch);
                prop_assert_eq!(expected, Some(attribution.channel));
            }
            None => prop_assert!(matches!(
                attribution.channel,
                ChannelType::CrossNetwork
                    | ChannelType::Direct
                    | ChannelType::PaidUnknown
                    | ChannelType::Unknown
            )),
        }
    }

    #[test]
    fn prop_normalize_keeps_at_most_two_labels(domain in "[a-z.]{0,30}") {
        let normalized = normalize(Some(&domain)).unwrap();
        prop_assert!(domain.ends_with(normalized));
        prop_assert!(normalized.split('.').count() <= 2);
        if domain.split('.').count() <= 2 {
            prop_assert_eq!(normalized, domain.as_str());
        }
    }
}

#[test]
fn test_concurrent_classification_agrees() {
    let inputs: Vec<(Option<&str>, Option<&str>, Option<&str>, Option<&str>, bool)> = vec![
        (None, Some("cpc"), Some("google"), Some("google.com"), false),
        (None, None, None, Some("$direct"), false),
        (Some("summer-shop-sale"), Some("organic"), Some("newsletter"), Some("example.com"), false),
        (None, Some("email"), Some("mailchimp"), Some("$direct"), false),
        (None, Some("cpc"), Some("unknownvendor"), Some("unknown.example"), true),
    ];
    let expected: Vec<ChannelType> = inputs
        .iter()
        .map(|&(c, m, s, d, k)| attribution_classifier::classify(c, m, s, d, k))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let got: Vec<ChannelType> = inputs
                        .iter()
                        .map(|&(c, m, s, d, k)| attribution_classifier::classify(c, m, s, d, k))
                        .collect();
                    assert_eq!(got, expected);
                }
            });
        }
    });
}

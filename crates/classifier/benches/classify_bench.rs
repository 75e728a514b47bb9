//! Benchmarks for channel classification.
//! Run with: cargo bench -p attribution-classifier

use attribution_classifier::{classify, ChannelType};

type Visit = (
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    bool,
);

fn sample_visits() -> Vec<Visit> {
    vec![
        (None, Some("cpc"), Some("google"), Some("www.google.com"), false),
        (None, None, None, Some("$direct"), false),
        (Some("summer-shop-sale"), Some("organic"), Some("newsletter"), Some("example.com"), false),
        (None, Some("email"), Some("mailchimp"), Some("$direct"), false),
        (None, Some("cpc"), Some("unknownvendor"), Some("unknown.example"), true),
        (Some("launch-video"), None, None, Some("m.youtube.com"), false),
        (None, Some("affiliate"), Some("partner"), Some("deals.example.net"), false),
        (None, None, None, Some("news.example.org"), false),
    ]
}

fn main() {
    let visits = sample_visits();

    // Warmup; also forces the lazy tables and regexes.
    for &(c, m, s, d, k) in &visits {
        classify(c, m, s, d, k);
    }

    let iterations: u32 = 200_000;
    let start = std::time::Instant::now();
    let mut unknown = 0u64;

    for _ in 0..iterations {
        for &(c, m, s, d, k) in &visits {
            if classify(c, m, s, d, k) == ChannelType::Unknown {
                unknown += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    let calls = iterations as u64 * visits.len() as u64;

    println!("=== Classification Benchmark ===");
    println!("Calls:       {}", calls);
    println!("Total time:  {:?}", elapsed);
    println!("Per call:    {:?}", elapsed / (calls as u32));
    println!("Throughput:  {:.0} classifications/sec", calls as f64 / elapsed.as_secs_f64());
    println!("Unknown:     {}", unknown);
}

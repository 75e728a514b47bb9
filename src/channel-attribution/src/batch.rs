//! Batch classification over newline-delimited JSON visit records.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use attribution_classifier::{Classify, VisitSignals};
use attribution_core::config::BatchConfig;
use attribution_core::{AttributionError, AttributionResult, ChannelType};

/// One visit as captured by the instrumentation layer. Missing keys and JSON
/// `null` both mean the parameter was absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitRecord {
    #[serde(default, alias = "utmCampaign")]
    pub utm_campaign: Option<String>,
    #[serde(default, alias = "utmMedium")]
    pub utm_medium: Option<String>,
    #[serde(default, alias = "utmSource")]
    pub utm_source: Option<String>,
    #[serde(default, alias = "referringDomain")]
    pub referring_domain: Option<String>,
    #[serde(default, alias = "anyClickIdPresent")]
    pub any_click_id_present: Option<bool>,
}

impl VisitRecord {
    pub fn signals(&self) -> VisitSignals<'_> {
        VisitSignals::new(
            self.utm_campaign.as_deref(),
            self.utm_medium.as_deref(),
            self.utm_source.as_deref(),
            self.referring_domain.as_deref(),
            self.any_click_id_present.unwrap_or(false),
        )
    }
}

#[derive(Debug, Serialize)]
struct ChannelOnly {
    channel: ChannelType,
}

/// Totals for one batch run.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub classified: u64,
    pub skipped: u64,
    pub channels: BTreeMap<ChannelType, u64>,
}

/// Classify every record from `reader`, writing one JSON object per record to
/// `writer`. Blank lines are ignored. Malformed records, including lines that
/// are not valid UTF-8, are skipped with a warning, or abort the run when
/// `options.strict` is set.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &BatchConfig,
) -> AttributionResult<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        // serde_json validates UTF-8 itself, so undecodable bytes surface as a
        // record error rather than an I/O error.
        let record: VisitRecord = match serde_json::from_slice(&line) {
            Ok(record) => record,
            Err(source) if options.strict => {
                return Err(AttributionError::MalformedRecord {
                    line: line_no,
                    source,
                });
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping malformed visit record");
                summary.skipped += 1;
                continue;
            }
        };

        let attribution = record.signals().explain();
        if options.explain {
            serde_json::to_writer(&mut writer, &attribution)?;
        } else {
            serde_json::to_writer(
                &mut writer,
                &ChannelOnly {
                    channel: attribution.channel,
                },
            )?;
        }
        writer.write_all(b"\n")?;

        debug!(line = line_no, channel = %attribution.channel, "visit record classified");
        summary.classified += 1;
        *summary.channels.entry(attribution.channel).or_default() += 1;
    }

    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lenient() -> BatchConfig {
        BatchConfig::default()
    }

    fn output_lines(buf: Vec<u8>) -> Vec<serde_json::Value> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_classifies_each_record() {
        let input = concat!(
            r#"{"utm_medium":"cpc","utm_source":"google","referring_domain":"google.com"}"#,
            "\n",
            r#"{"referring_domain":"$direct"}"#,
            "\n",
            r#"{"utm_campaign":"summer-shop-sale","utm_medium":"organic","utm_source":"newsletter","referring_domain":"example.com","any_click_id_present":false}"#,
            "\n",
        );
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out, &lenient()).unwrap();

        let lines = output_lines(out);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], serde_json::json!({"channel": "Paid Search"}));
        assert_eq!(lines[1], serde_json::json!({"channel": "Direct"}));
        assert_eq!(lines[2], serde_json::json!({"channel": "Organic Shopping"}));

        assert_eq!(summary.classified, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.channels[&ChannelType::PaidSearch], 1);
    }

    #[test]
    fn test_camel_case_aliases_and_nulls() {
        let input = r#"{"utmCampaign":null,"utmMedium":"cpc","utmSource":"unknownvendor","referringDomain":"unknown.example","anyClickIdPresent":true}"#;
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out, &lenient()).unwrap();
        assert_eq!(output_lines(out)[0]["channel"], "Paid Unknown");
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let record: VisitRecord =
            serde_json::from_str(r#"{"utm_medium":"","referring_domain":"$direct"}"#).unwrap();
        assert_eq!(record.signals().utm_medium, Some(""));
        assert_eq!(record.signals().classify(), ChannelType::Unknown);
    }

    #[test]
    fn test_skips_blank_and_malformed_lines() {
        let input = "\n{not json}\n   \n{\"utm_source\":\"sms\"}\n[1,2]\n";
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out, &lenient()).unwrap();

        assert_eq!(summary.classified, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(output_lines(out)[0]["channel"], "SMS");
    }

    #[test]
    fn test_skips_invalid_utf8_line() {
        let input: &[u8] = b"{\"utm_source\":\"sms\"}\n{\"utm_source\":\"\xff\"}\n{\"utm_source\":\"sms\"}\n";
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out, &lenient()).unwrap();

        assert_eq!(summary.classified, 2);
        assert_eq!(summary.skipped, 1);
        let lines = output_lines(out);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l["channel"] == "SMS"));
    }

    #[test]
    fn test_strict_mode_rejects_invalid_utf8() {
        let input: &[u8] = b"{\"utm_source\":\"sms\"}\n\xfe\xff\n";
        let options = BatchConfig {
            strict: true,
            ..BatchConfig::default()
        };
        let err = run(Cursor::new(input), Vec::new(), &options).unwrap_err();
        match err {
            AttributionError::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "{\"utm_source\":\"sms\"}\r\n\r\n{\"referring_domain\":\"$direct\"}\r\n";
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out, &lenient()).unwrap();
        assert_eq!(summary.classified, 2);
        assert_eq!(output_lines(out)[1]["channel"], "Direct");
    }

    #[test]
    fn test_null_click_id_is_absent() {
        let input = r#"{"utm_source":"sms","any_click_id_present":null}"#;
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out, &lenient()).unwrap();
        assert_eq!(summary.skipped, 0);
        assert_eq!(output_lines(out)[0]["channel"], "SMS");

        let record: VisitRecord =
            serde_json::from_str(r#"{"anyClickIdPresent":null}"#).unwrap();
        assert!(!record.signals().any_click_id_present);
    }

    #[test]
    fn test_strict_mode_reports_line() {
        let input = "{\"utm_source\":\"sms\"}\n\n{\"utm_medium\": 5}\n";
        let options = BatchConfig {
            strict: true,
            ..BatchConfig::default()
        };
        let err = run(Cursor::new(input), Vec::new(), &options).unwrap_err();
        match err {
            AttributionError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_explain_output() {
        let options = BatchConfig {
            explain: true,
            ..BatchConfig::default()
        };
        let input = "{\"utm_medium\":\"email\",\"utm_source\":\"mailchimp\",\"referring_domain\":\"$direct\"}\n{\"referring_domain\":\"$direct\"}\n";
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out, &options).unwrap();

        let lines = output_lines(out);
        assert_eq!(
            lines[0],
            serde_json::json!({"channel": "Email", "branch": "organic", "category": "email"})
        );
        assert_eq!(
            lines[1],
            serde_json::json!({"channel": "Direct", "branch": "direct", "category": null})
        );
    }

    #[test]
    fn test_summary_serializes_with_labels() {
        let input = "{\"utm_source\":\"sms\"}\n{\"utm_source\":\"sms\"}\n";
        let summary = run(Cursor::new(input), Vec::new(), &lenient()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["channels"]["SMS"], 2);
    }
}

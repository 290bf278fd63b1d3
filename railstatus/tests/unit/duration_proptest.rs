//! Property-based tests using proptest

use proptest::prelude::*;
use railstatus::duration::{describe, format_duration, UNIT_LABELS};

/// Parse "<n> <unit>, <n> <unit>" back into (value, unit) pairs
fn components(formatted: &str) -> Vec<(u64, String)> {
    if formatted.is_empty() {
        return Vec::new();
    }
    formatted
        .split(", ")
        .map(|part| {
            let (value, unit) = part.split_once(' ').expect("value and unit");
            (value.parse().expect("numeric value"), unit.to_string())
        })
        .collect()
}

proptest! {
    /// ラベルは既知の単位のみ・重複なし・降順
    #[test]
    fn labels_are_known_unique_and_descending(secs in any::<u64>()) {
        let formatted = format_duration(secs);
        let mut last_index = None;
        for (_, unit) in components(&formatted) {
            let index = UNIT_LABELS.iter().position(|label| *label == unit);
            prop_assert!(index.is_some(), "unknown unit {}", unit);
            if let Some(prev) = last_index {
                prop_assert!(index > Some(prev), "out of order in {}", formatted);
            }
            last_index = index;
        }
    }

    /// 同じ入力なら同じ出力
    #[test]
    fn formatting_is_pure(secs in any::<u64>()) {
        prop_assert_eq!(format_duration(secs), format_duration(secs));
    }

    /// 各成分の合計が入力に一致する
    #[test]
    fn components_sum_back_to_input(secs in 0u64..10_000_000_000) {
        let total: u64 = components(&format_duration(secs))
            .into_iter()
            .map(|(value, unit)| {
                value * match unit.as_str() {
                    "months" => 2_592_000,
                    "days" => 86_400,
                    "hours" => 3_600,
                    "minutes" => 60,
                    _ => 1,
                }
            })
            .sum();
        prop_assert_eq!(total, secs);
    }

    /// 非零成分のみ出力される・下位単位は上限未満
    #[test]
    fn components_are_nonzero_and_bounded(secs in any::<u64>()) {
        for (value, unit) in components(&format_duration(secs)) {
            prop_assert!(value > 0);
            let bound = match unit.as_str() {
                "days" => Some(30),
                "hours" => Some(24),
                "minutes" | "seconds" => Some(60),
                _ => None,
            };
            if let Some(bound) = bound {
                prop_assert!(value < bound, "{} {} exceeds bound", value, unit);
            }
        }
    }

    /// 正でない値は常にフォールバック
    #[test]
    fn non_positive_values_use_fallback(secs in i64::MIN..=0) {
        prop_assert_eq!(describe(Some(secs), "No uptime"), "No uptime");
    }
}

#[test]
fn documented_examples() {
    assert_eq!(format_duration(0), "");
    assert_eq!(format_duration(59), "59 seconds");
    assert_eq!(format_duration(60), "1 minutes");
    assert_eq!(format_duration(3661), "1 hours, 1 minutes, 1 seconds");
    assert_eq!(format_duration(2_592_000), "1 months");
}

//! Time helpers.

use chrono::{DateTime, FixedOffset, Utc};

/// JST is UTC+9
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Get the current Unix timestamp in milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as an RFC 3339 string in JST.
///
/// Returns `None` when the timestamp is outside chrono's supported range.
pub fn timestamp_to_jst_rfc3339(millis: i64) -> Option<String> {
    let offset = FixedOffset::east_opt(JST_OFFSET_SECS)?;
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(utc.with_timezone(&offset).to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_jst_rfc3339() {
        // テスト項目: Unix エポックが JST の RFC 3339 文字列に変換される
        // when (操作):
        let formatted = timestamp_to_jst_rfc3339(0);

        // then (期待する結果):
        assert_eq!(formatted.as_deref(), Some("1970-01-01T09:00:00+09:00"));
    }

    #[test]
    fn test_timestamp_out_of_range() {
        // テスト項目: 範囲外のタイムスタンプは None になる
        assert_eq!(timestamp_to_jst_rfc3339(i64::MAX), None);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2020-01-01 以降であること
        assert!(now_millis() > 1_577_836_800_000);
    }
}

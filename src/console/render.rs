//! Projections of the view-state into text

use super::state::{ServerResponse, ViewSnapshot};
use crate::api::{
    error::ApiError,
    models::{AccessKeyEntry, BucketPolicy, EpochTime, KeyPolicy, PoolDescriptor},
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use colored::Colorize;
use std::fmt::Write;

/// Default lifetime of a new access key
pub const DEFAULT_KEY_LIFETIME_SECS: i64 = 7 * 24 * 3600;

/// Format epoch seconds as `YYYY-MM-DDTHH:MM:SSZ`; the zero sentinel stays `"0"`
pub fn format_time_z(time: EpochTime) -> String {
    if time.is_unset() {
        return "0".to_string();
    }
    match Utc.timestamp_opt(time.seconds(), 0).single() {
        Some(datetime) => datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        None => time.to_string(),
    }
}

/// Parse an RFC 3339 date+time, or a plain date taken as midnight UTC
pub fn parse_time_z(s: &str) -> Result<EpochTime, ApiError> {
    let s = s.trim();
    if let Ok(seconds) = s.parse::<i64>() {
        return Ok(EpochTime(seconds));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(EpochTime(datetime.timestamp()));
    }
    if let Some(midnight) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(EpochTime(Utc.from_utc_datetime(&midnight).timestamp()));
    }
    Err(ApiError::precondition(format!("unrecognized date: {s}")))
}

/// Expiration offered for new keys
pub fn default_key_expiration() -> EpochTime {
    EpochTime(EpochTime::now().seconds() + DEFAULT_KEY_LIFETIME_SECS)
}

/// Names of the buckets with a given policy, joined by a space
pub fn bucket_names(desc: &PoolDescriptor, policy: BucketPolicy) -> String {
    desc.buckets_with(policy)
        .map(|b| b.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// An AWS credentials file section for the first key of a pool with a given
/// policy
pub fn aws_credential(desc: &PoolDescriptor, policy: KeyPolicy, profile: &str) -> Result<String, ApiError> {
    let key = desc.secrets_with(policy).next().ok_or_else(|| {
        ApiError::precondition(format!("no access key with policy {policy} in {}", desc.pool_name))
    })?;
    Ok(format!(
        "[{profile}]\naws_access_key_id = {}\naws_secret_access_key = {}\n",
        key.access_key, key.secret_key
    ))
}

/// A labelled line of a pool listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Label
    pub label: &'static str,
    /// Value
    pub value: String,
}

impl Entry {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

fn bucket_label(policy: BucketPolicy) -> &'static str {
    match policy {
        BucketPolicy::None => "Private buckets",
        BucketPolicy::Public => "Public buckets",
        BucketPolicy::Download => "Public download buckets",
        BucketPolicy::Upload => "Public upload buckets",
    }
}

/// The lines shown for one pool in the pool list
pub fn pool_entries(desc: &PoolDescriptor) -> Vec<Entry> {
    let mut entries = vec![
        Entry::new("Buckets directory", &desc.buckets_directory),
        Entry::new("Unix user", &desc.owner_uid),
        Entry::new("Unix group", &desc.owner_gid),
    ];
    entries.extend(
        BucketPolicy::ALL
            .iter()
            .map(|policy| Entry::new(bucket_label(*policy), bucket_names(desc, *policy))),
    );
    entries.extend([
        Entry::new("Pool-ID", &desc.pool_name),
        Entry::new(
            "MinIO state",
            format!("{} (reason: {})", desc.minio_state, desc.minio_reason),
        ),
        Entry::new("Expiration date", format_time_z(desc.expiration_time)),
        Entry::new("User enabled", desc.user_enabled_status.to_string()),
        Entry::new("Pool online", desc.online_status.to_string()),
        Entry::new("Creation date", format_time_z(desc.modification_time)),
    ]);
    entries
}

fn write_entries(out: &mut String, entries: &[Entry]) {
    for entry in entries {
        let _ = writeln!(out, "{}: {}", entry.label.bold(), entry.value);
    }
}

/// The pool list, one block per pool
pub fn render_pool_list(snapshot: &ViewSnapshot) -> String {
    let mut out = format!("{}\n", "| POOLS |".yellow());
    if snapshot.pool_list.is_empty() {
        out.push_str("(no pools)\n");
    }
    for (index, desc) in snapshot.pool_list.iter().enumerate() {
        let _ = writeln!(out, "{}", format!("[{index}]").cyan());
        write_entries(&mut out, &pool_entries(desc));
        out.push('\n');
    }
    out
}

fn render_key(out: &mut String, key: &AccessKeyEntry) {
    let _ = writeln!(
        out,
        "  {}  {}  expires: {}",
        key.access_key.green(),
        key.secret_key,
        format_time_z(key.expiration_time)
    );
}

/// The pool in edit, with its buckets and keys
pub fn render_selected_pool(snapshot: &ViewSnapshot) -> String {
    let Some(desc) = &snapshot.selected else {
        return format!("{}\n", "no pool is selected".red());
    };
    let mut out = format!("{}\n", "| POOL |".yellow());
    let _ = writeln!(out, "{}: {}", "Pool-ID".bold(), desc.pool_name);
    let _ = writeln!(out, "{}: {}", "Buckets directory".bold(), desc.buckets_directory);
    let _ = writeln!(out, "{}: {}", "Owner".bold(), snapshot.owner);

    let _ = writeln!(out, "{}", "| BUCKETS |".yellow());
    for bucket in &desc.buckets {
        let _ = writeln!(out, "  {:<30} {}", bucket.name, bucket.bkt_policy);
    }

    for policy in KeyPolicy::ALL {
        let _ = writeln!(out, "{}", format!("| ACCESS KEYS ({}) |", policy.short()).yellow());
        for key in snapshot.access_keys(policy) {
            render_key(&mut out, key);
        }
    }
    out
}

/// The user and the groups new pools may belong to
pub fn render_user(snapshot: &ViewSnapshot) -> String {
    let mut out = format!("{}\n", "| USER INFO |".yellow());
    let _ = writeln!(out, "{}: {}", "Unix user".bold(), snapshot.owner);
    let _ = writeln!(out, "{}: {}", "Groups".bold(), snapshot.group_choices.join(" "));
    if let Some(info) = &snapshot.user_info {
        let _ = writeln!(out, "{}: {}", "S3 endpoint".bold(), info.s3_url);
        let _ = writeln!(out, "{}: {}", "Service version".bold(), info.lens3_version);
        if !info.footer_banner.is_empty() {
            let _ = writeln!(out, "{}", info.footer_banner.dimmed());
        }
    }
    out
}

/// The last status line block
pub fn render_response(response: &ServerResponse) -> String {
    let time = if response.time.is_unset() {
        String::new()
    } else {
        format_time_z(response.time)
    };
    format!(
        "Status: {}\nReason: {}\nTimestamp: {}\nMessage: {}\n",
        response.status, response.reason, time, response.message
    )
}

#[cfg(test)]
mod test {
    use super::{
        aws_credential, bucket_names, format_time_z, parse_time_z, pool_entries, render_response,
        render_selected_pool, DEFAULT_KEY_LIFETIME_SECS,
    };
    use crate::{
        api::models::{
            pool::test::{bucket, key, pool},
            BucketPolicy, EpochTime, KeyPolicy,
        },
        console::state::{ServerResponse, ViewSnapshot},
    };

    #[test]
    fn zero_stays_zero() {
        assert_eq!(format_time_z(EpochTime(0)), "0");
        assert_eq!(format_time_z(EpochTime::UNSET), "0");
    }

    #[test]
    fn formats_without_milliseconds() {
        assert_eq!(format_time_z(EpochTime(1686755715)), "2023-06-14T15:15:15Z");
    }

    #[test]
    fn format_parse_round_trip() {
        for seconds in [1, 59, 1686755715, 1700000000, 4102444800] {
            let formatted = format_time_z(EpochTime(seconds));
            assert_eq!(parse_time_z(&formatted).unwrap(), EpochTime(seconds));
        }
    }

    #[test]
    fn parses_browser_formats() {
        assert_eq!(
            parse_time_z("2023-06-14T15:15:15.000Z").unwrap(),
            EpochTime(1686755715)
        );
        assert_eq!(parse_time_z("2023-06-14").unwrap(), EpochTime(1686700800));
        assert_eq!(parse_time_z("0").unwrap(), EpochTime::UNSET);
        assert!(parse_time_z("next tuesday").unwrap_err().is_precondition());
    }

    #[test]
    fn default_expiration_is_a_week_out() {
        let expiration = super::default_key_expiration();
        let delta = expiration.seconds() - EpochTime::now().seconds();
        assert!((DEFAULT_KEY_LIFETIME_SECS - 5..=DEFAULT_KEY_LIFETIME_SECS).contains(&delta));
    }

    #[test]
    fn bucket_names_by_policy() {
        let mut desc = pool("p1");
        desc.buckets = vec![
            bucket("a", BucketPolicy::None),
            bucket("b", BucketPolicy::Upload),
            bucket("c", BucketPolicy::None),
        ];
        assert_eq!(bucket_names(&desc, BucketPolicy::None), "a c");
        assert_eq!(bucket_names(&desc, BucketPolicy::Upload), "b");
        assert_eq!(bucket_names(&desc, BucketPolicy::Public), "");
    }

    #[test]
    fn credential_section_uses_the_first_matching_key() {
        let mut desc = pool("p1");
        desc.secrets = vec![
            key("AKRW", KeyPolicy::ReadWrite),
            key("AKRO1", KeyPolicy::ReadOnly),
            key("AKRO2", KeyPolicy::ReadOnly),
        ];
        assert_eq!(
            aws_credential(&desc, KeyPolicy::ReadOnly, "lens3").unwrap(),
            "[lens3]\naws_access_key_id = AKRO1\naws_secret_access_key = AKRO1-secret\n"
        );
    }

    #[test]
    fn credential_needs_a_key_with_the_policy() {
        let mut desc = pool("p1");
        desc.secrets = vec![key("AKRW", KeyPolicy::ReadWrite)];
        let err = aws_credential(&desc, KeyPolicy::WriteOnly, "default").unwrap_err();
        assert!(err.is_precondition());
        assert!(err.to_string().contains("no access key with policy"));
    }

    #[test]
    fn pool_entry_values() {
        let mut desc = pool("p1");
        desc.buckets = vec![bucket("pub", BucketPolicy::Public)];
        desc.minio_state = "ready".to_string();
        desc.minio_reason = "-".to_string();
        desc.modification_time = EpochTime(1686755715);
        let entries = pool_entries(&desc);
        let value = |label: &str| {
            entries
                .iter()
                .find(|e| e.label == label)
                .map(|e| e.value.clone())
                .unwrap()
        };
        assert_eq!(value("Buckets directory"), "/home/alice/p1");
        assert_eq!(value("Public buckets"), "pub");
        assert_eq!(value("Private buckets"), "");
        assert_eq!(value("MinIO state"), "ready (reason: -)");
        assert_eq!(value("Expiration date"), "0");
        assert_eq!(value("Creation date"), "2023-06-14T15:15:15Z");
    }

    #[test]
    fn selected_pool_shows_keys() {
        colored::control::set_override(false);
        let desc = pool("p1");
        let snapshot = ViewSnapshot {
            selected: Some(desc),
            access_keys_wo: vec![key("AKWO", KeyPolicy::WriteOnly)],
            ..ViewSnapshot::default()
        };
        let text = render_selected_pool(&snapshot);
        assert!(text.contains("| ACCESS KEYS (wo) |"));
        assert!(text.contains("AKWO"));
        assert!(text.contains("AKWO-secret"));
    }

    #[test]
    fn response_block() {
        let text = render_response(&ServerResponse {
            status: "error".to_string(),
            reason: "Bad pool".to_string(),
            time: EpochTime(1686755715),
            message: "make pool ... error: Bad pool".to_string(),
        });
        assert!(text.contains("Reason: Bad pool"));
        assert!(text.contains("Timestamp: 2023-06-14T15:15:15Z"));
    }
}

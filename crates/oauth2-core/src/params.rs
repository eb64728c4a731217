//! Well-known request parameter names and delimited-list helpers.

use crate::ScopeSet;

pub const CLIENT_ID: &str = "client_id";
pub const STATE: &str = "state";
pub const REDIRECT_URI: &str = "redirect_uri";
pub const SCOPE: &str = "scope";
pub const RESPONSE_TYPE: &str = "response_type";
pub const GRANT_TYPE: &str = "grant_type";
pub const USER_OAUTH_APPROVAL: &str = "user_oauth_approval";

/// Parse a delimited parameter value into an ordered token set.
///
/// Commas and whitespace both separate tokens; empty tokens are dropped, so
/// `"read,,write"` and `" read  write "` both yield `[read, write]`.
pub fn parse_parameter_list(value: Option<&str>) -> ScopeSet {
    value
        .unwrap_or_default()
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tokens with a single space, in iteration order.
///
/// Tokens are written verbatim: a token that itself contains a space is not
/// split or quoted.
pub fn format_parameter_list<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

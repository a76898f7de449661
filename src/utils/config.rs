use serde_json::Value;
use std::env;

/// Runtime settings shared by both entry points. Construction never fails:
/// unparseable values fall back to defaults instead of aborting.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub github_token: Option<String>,
    pub include_private: bool,
    pub max_repositories: usize,
    pub max_items_per_section: usize,
    pub organizations: Vec<String>,
    pub profile: String,
    pub username: String,
}

impl DashboardConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> Self {
        Self::assemble(
            env::var("GITHUB_TOKEN").ok(),
            parse_bool(env::var("INCLUDE_PRIVATE").ok().as_deref(), true),
            parse_limit(env::var("MAX_REPOSITORIES").ok().as_deref(), 20),
            parse_limit(env::var("MAX_ITEMS_PER_SECTION").ok().as_deref(), 20),
            &env::var("ORGANIZATIONS_CSV").unwrap_or_default(),
            env::var("TARGET_GITHUB_PROFILE").unwrap_or_default(),
            env::var("TARGET_GITHUB_USERNAME").unwrap_or_default(),
        )
    }

    /// Read configuration from a query document. Values may arrive as JSON
    /// strings even for booleans and numbers, so every field goes through
    /// the same lenient parsing as the environment path. An absent or blank
    /// token falls back to the GITHUB_TOKEN environment variable.
    pub fn from_query(query: &Value) -> Self {
        let token = string_field(query, "github_token")
            .filter(|token| !token.trim().is_empty())
            .or_else(|| env::var("GITHUB_TOKEN").ok());

        Self::assemble(
            token,
            bool_field(query, "include_private", true),
            int_field(query, "max_repositories", 20),
            int_field(query, "max_items_per_section", 20),
            &string_field(query, "organizations_csv").unwrap_or_default(),
            string_field(query, "github_profile").unwrap_or_default(),
            string_field(query, "github_username").unwrap_or_default(),
        )
    }

    fn assemble(
        token: Option<String>,
        include_private: bool,
        max_repositories: usize,
        max_items_per_section: usize,
        organizations_csv: &str,
        profile: String,
        username: String,
    ) -> Self {
        let github_token = token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());
        // Private repositories are unreachable without credentials.
        let include_private = include_private && github_token.is_some();

        DashboardConfig {
            github_token,
            include_private,
            max_repositories,
            max_items_per_section,
            organizations: parse_organizations(organizations_csv),
            profile,
            username,
        }
    }
}

/// Accepts "1", "true", "yes" and "on" (any casing) as true; any other
/// present value is false. Only a missing value yields the default.
fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(raw) => matches!(
            raw.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

/// Parse a section limit, falling back to the default on garbage and
/// clamping the result into 1..=100.
fn parse_limit(value: Option<&str>, default: i64) -> usize {
    let parsed = value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(default);
    parsed.clamp(1, 100) as usize
}

fn parse_organizations(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|org| !org.is_empty())
        .map(String::from)
        .collect()
}

fn string_field(query: &Value, key: &str) -> Option<String> {
    query.get(key).and_then(Value::as_str).map(String::from)
}

fn bool_field(query: &Value, key: &str, default: bool) -> bool {
    match query.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(raw)) => parse_bool(Some(raw), default),
        Some(other) => {
            let raw = other.to_string();
            parse_bool(Some(raw.as_str()), default)
        }
    }
}

fn int_field(query: &Value, key: &str, default: i64) -> usize {
    let raw = match query.get(key) {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(raw)) => raw.trim().parse::<i64>().ok(),
        _ => None,
    };
    raw.unwrap_or(default).clamp(1, 100) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bool_accepted_spellings() {
        for raw in ["1", "true", "TRUE", "yes", "On"] {
            assert!(parse_bool(Some(raw), false), "{} should be true", raw);
        }
        for raw in ["0", "false", "no", "off", "nonsense", ""] {
            assert!(!parse_bool(Some(raw), true), "{} should be false", raw);
        }
        assert!(parse_bool(None, true));
        assert!(!parse_bool(None, false));
    }

    #[test]
    fn test_parse_limit_clamps_and_defaults() {
        assert_eq!(parse_limit(Some("7"), 20), 7);
        assert_eq!(parse_limit(Some(" 42 "), 20), 42);
        assert_eq!(parse_limit(Some("0"), 20), 1);
        assert_eq!(parse_limit(Some("-5"), 20), 1);
        assert_eq!(parse_limit(Some("999"), 20), 100);
        assert_eq!(parse_limit(Some("not a number"), 20), 20);
        assert_eq!(parse_limit(None, 20), 20);
    }

    #[test]
    fn test_parse_organizations_trims_and_drops_empties() {
        assert_eq!(
            parse_organizations(" acme , , widgets ,"),
            vec!["acme".to_string(), "widgets".to_string()]
        );
        assert!(parse_organizations("").is_empty());
        assert!(parse_organizations(" , ,").is_empty());
    }

    #[test]
    fn test_missing_token_disables_private_repositories() {
        let config = DashboardConfig::assemble(
            None,
            true,
            20,
            20,
            "",
            String::new(),
            String::new(),
        );
        assert!(config.github_token.is_none());
        assert!(!config.include_private);

        let config = DashboardConfig::assemble(
            Some("   ".to_string()),
            true,
            20,
            20,
            "",
            String::new(),
            String::new(),
        );
        assert!(config.github_token.is_none());
        assert!(!config.include_private);
    }

    #[test]
    fn test_token_is_trimmed() {
        let config = DashboardConfig::assemble(
            Some("  ghp_abc  ".to_string()),
            true,
            20,
            20,
            "",
            String::new(),
            String::new(),
        );
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
        assert!(config.include_private);
    }

    #[test]
    fn test_from_query_accepts_strings_and_native_values() {
        let query = json!({
            "github_token": "ghp_abc",
            "include_private": "false",
            "max_repositories": "5",
            "max_items_per_section": 7,
            "organizations_csv": "acme,widgets",
            "github_profile": "https://github.com/alice",
            "github_username": "bob"
        });
        let config = DashboardConfig::from_query(&query);
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
        assert!(!config.include_private);
        assert_eq!(config.max_repositories, 5);
        assert_eq!(config.max_items_per_section, 7);
        assert_eq!(config.organizations, vec!["acme", "widgets"]);
        assert_eq!(config.profile, "https://github.com/alice");
        assert_eq!(config.username, "bob");
    }

    #[test]
    fn test_from_query_defaults_for_missing_fields() {
        let query = json!({ "github_token": "ghp_abc" });
        let config = DashboardConfig::from_query(&query);
        assert!(config.include_private);
        assert_eq!(config.max_repositories, 20);
        assert_eq!(config.max_items_per_section, 20);
        assert!(config.organizations.is_empty());
        assert!(config.profile.is_empty());
        assert!(config.username.is_empty());
    }

    #[test]
    fn test_from_query_clamps_out_of_range_limits() {
        let query = json!({
            "github_token": "ghp_abc",
            "max_repositories": 500,
            "max_items_per_section": "-3"
        });
        let config = DashboardConfig::from_query(&query);
        assert_eq!(config.max_repositories, 100);
        assert_eq!(config.max_items_per_section, 1);
    }
}

use url::Url;

/// Normalize a profile URL, an @-prefixed handle, or a bare username into a
/// GitHub login. Returns an empty string when nothing usable is present;
/// resolution never touches the network.
pub fn resolve_username(profile_or_username: &str, fallback_username: &str) -> String {
    let raw = if !profile_or_username.is_empty() {
        profile_or_username
    } else {
        fallback_username
    };
    let candidate = raw.trim();
    if candidate.is_empty() {
        return String::new();
    }

    if !candidate.contains("github.com/") {
        let stripped = candidate.replace('@', "");
        return stripped.trim_matches('/').to_string();
    }

    // Scheme-less profile URLs ("github.com/alice") parse after prefixing.
    let parsed = match Url::parse(candidate)
        .or_else(|_| Url::parse(&format!("https://{}", candidate)))
    {
        Ok(parsed) => parsed,
        Err(_) => return String::new(),
    };

    match parsed
        .path_segments()
        .and_then(|mut segments| segments.find(|segment| !segment.is_empty()))
    {
        Some(segment) => segment.replace('@', ""),
        None => String::new(),
    }
}

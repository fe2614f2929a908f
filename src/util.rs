pub(crate) fn urljoin(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Keeps the first and last few characters of a secret for log and debug output.
pub(crate) fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urljoin_handles_slashes() {
        let expected = "https://www.carboninterface.com/api/v1/auth";
        assert_eq!(urljoin("https://www.carboninterface.com/api/v1/", "/auth"), expected);
        assert_eq!(urljoin("https://www.carboninterface.com/api/v1", "auth"), expected);
    }

    #[test]
    fn urljoin_keeps_absolute_path() {
        assert_eq!(urljoin("http://a", "https://b/c"), "https://b/c");
    }

    #[test]
    fn redact_hides_short_and_long_keys() {
        assert_eq!(redact("abc"), "***");
        assert_eq!(redact("abcdefghijkl"), "abcd***kl");
    }
}

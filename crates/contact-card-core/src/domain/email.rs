use regex::Regex;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Syntactic sanity check for email addresses; not RFC 5322 validation.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("good@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("a_b%c-d@sub-domain.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("bad@@x"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@domain.c"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user name@domain.com"));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(!is_valid_email(" good@x.com"));
    }
}

//! Permissive mailbox syntax check.
//!
//! Accepts a bare address or `Display Name <address>`, with RFC 5322
//! comments such as `(work)` anywhere and quoted local parts such as
//! `"john doe"@example.com`. Only syntax is checked; nothing is resolved or
//! delivered.

use std::sync::LazyLock;

use regex::Regex;

/// One innermost parenthesized comment.
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("Invalid comment regex"));

/// `local@domain`: the local part is an atom run or a quoted string, the
/// domain is an atom run or a bracketed literal.
static ADDR_SPEC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:[^\s@<>()\[\]",;:\\]+|"(?:[^"\\]|\\.)+")@(?:[^\s@<>()\[\]",;:\\]+|\[[^\[\]\\\s]+\])$"#,
    )
    .expect("Invalid address regex")
});

/// Extracts the mailbox of an address, or `None` when there is no usable one.
pub fn mailbox(value: &str) -> Option<String> {
    let stripped = strip_comments(value);
    let trimmed = stripped.trim();
    let candidate = match trimmed.rfind('<') {
        Some(open) if trimmed.ends_with('>') => trimmed[open + 1..trimmed.len() - 1].trim(),
        _ => trimmed,
    };
    ADDR_SPEC_REGEX
        .is_match(candidate)
        .then(|| candidate.to_string())
}

/// Removes comments innermost-first so nested comments disappear too.
fn strip_comments(value: &str) -> String {
    let mut current = value.to_string();
    while COMMENT_REGEX.is_match(&current) {
        current = COMMENT_REGEX.replace_all(&current, " ").into_owned();
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_address() {
        assert_eq!(mailbox("ann@example.com").as_deref(), Some("ann@example.com"));
        assert_eq!(mailbox("  ann@example.com ").as_deref(), Some("ann@example.com"));
    }

    #[test]
    fn test_display_name_address() {
        assert_eq!(
            mailbox("Ann Smith <ann@example.com>").as_deref(),
            Some("ann@example.com")
        );
        assert_eq!(
            mailbox(r#""Smith, Ann" <ann@example.com>"#).as_deref(),
            Some("ann@example.com")
        );
        assert_eq!(mailbox("<ann@localhost>").as_deref(), Some("ann@localhost"));
    }

    #[test]
    fn test_quoted_local_part() {
        assert_eq!(
            mailbox(r#""john doe"@example.com"#).as_deref(),
            Some(r#""john doe"@example.com"#)
        );
        assert!(mailbox(r#""a\"b"@example.com"#).is_some());
    }

    #[test]
    fn test_comments_are_ignored() {
        assert_eq!(
            mailbox("John Doe <john@example.com> (work)").as_deref(),
            Some("john@example.com")
        );
        assert_eq!(
            mailbox("john@example.com (John (Jack) Doe)").as_deref(),
            Some("john@example.com")
        );
    }

    #[test]
    fn test_domain_literal() {
        assert_eq!(
            mailbox("ann@[192.168.0.1]").as_deref(),
            Some("ann@[192.168.0.1]")
        );
    }

    #[test]
    fn test_no_usable_mailbox() {
        assert_eq!(mailbox(""), None);
        assert_eq!(mailbox("nobody"), None);
        assert_eq!(mailbox("Ann Smith"), None);
        assert_eq!(mailbox("Ann Smith <>"), None);
        assert_eq!(mailbox("(just a comment)"), None);
        assert_eq!(mailbox("@example.com"), None);
        assert_eq!(mailbox("ann@"), None);
        assert_eq!(mailbox("ann@@example.com"), None);
        assert_eq!(mailbox("ann smith@example.com"), None);
        assert_eq!(mailbox("ann@example.com (unclosed"), None);
    }
}

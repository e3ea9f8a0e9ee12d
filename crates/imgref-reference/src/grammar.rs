//! Character-level matchers for the reference grammar.
//!
//! ```text
//! reference       := name [ ":" tag ] [ "@" digest ]
//! name            := [ domain "/" ] path-component [ "/" path-component ]*
//! domain          := host [ ":" port ]
//! host            := domain-component [ "." domain-component ]* | "[" ipv6 "]"
//! domain-component:= [A-Za-z0-9] | [A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]
//! port            := [0-9]+
//! path-component  := alnum [ separator alnum ]*
//! alnum           := [a-z0-9]+
//! separator       := "." | "_" | "__" | "-"+
//! tag             := [A-Za-z0-9_][A-Za-z0-9_.-]{0,127}
//! digest          := algorithm ":" encoded
//! algorithm       := alg-component [ [+._-] alg-component ]*
//! alg-component   := [A-Za-z][A-Za-z0-9]*
//! encoded         := [a-fA-F0-9]+
//! ```

/// Maximum length of a rendered repository name.
pub const NAME_TOTAL_LENGTH_MAX: usize = 255;

/// Maximum length of a tag.
pub const TAG_MAX_LENGTH: usize = 128;

/// Returns `true` if the first `/`-segment of a name should be read as a
/// registry authority rather than a path component.
pub(crate) fn looks_like_domain(segment: &str) -> bool {
    segment.contains('.') || segment.contains(':') || segment == "localhost"
}

fn is_path_alnum(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

/// Matches a single path component: lowercase alphanumeric runs joined by
/// `.`, `_`, `__`, or one or more `-`.
pub(crate) fn is_path_component(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    loop {
        let run_start = i;
        while i < bytes.len() && is_path_alnum(bytes[i]) {
            i += 1;
        }
        if i == run_start {
            return false;
        }
        if i == bytes.len() {
            return true;
        }

        let sep_start = i;
        while i < bytes.len() && !is_path_alnum(bytes[i]) {
            i += 1;
        }
        match &s[sep_start..i] {
            "." | "_" | "__" => {}
            sep if sep.bytes().all(|b| b == b'-') => {}
            _ => return false,
        }
    }
}

fn is_domain_component(s: &str) -> bool {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Matches a registry authority: a hostname or bracketed IPv6 literal with an
/// optional numeric port.
pub(crate) fn is_domain(s: &str) -> bool {
    if let Some(rest) = s.strip_prefix('[') {
        let Some((literal, after)) = rest.split_once(']') else {
            return false;
        };
        if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_hexdigit() || b == b':') {
            return false;
        }
        return match after.strip_prefix(':') {
            Some(port) => is_port(port),
            None => after.is_empty(),
        };
    }

    let (host, port) = match s.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (s, None),
    };
    if let Some(port) = port {
        if !is_port(port) {
            return false;
        }
    }
    !host.is_empty() && host.split('.').all(is_domain_component)
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Matches a tag: `[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}`.
pub(crate) fn is_tag(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            bytes.len() <= TAG_MAX_LENGTH
                && is_word(*first)
                && rest.iter().all(|b| is_word(*b) || *b == b'.' || *b == b'-')
        }
        None => false,
    }
}

/// Matches a digest algorithm identifier such as `sha256` or `multihash+base58`.
pub(crate) fn is_algorithm(s: &str) -> bool {
    !s.is_empty()
        && s.split(|c| matches!(c, '+' | '.' | '_' | '-')).all(|component| {
            let mut bytes = component.bytes();
            matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic())
                && bytes.all(|b| b.is_ascii_alphanumeric())
        })
}

/// Matches a hex-encoded hash value. Length is not checked.
pub(crate) fn is_encoded(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_components() {
        assert!(is_path_component("app"));
        assert!(is_path_component("my-app"));
        assert!(is_path_component("my--app"));
        assert!(is_path_component("my_app"));
        assert!(is_path_component("my__app"));
        assert!(is_path_component("v1.2"));
        assert!(is_path_component("a0"));
    }

    #[test]
    fn reject_bad_path_components() {
        assert!(!is_path_component(""));
        assert!(!is_path_component("-app"));
        assert!(!is_path_component("app-"));
        assert!(!is_path_component("my___app"));
        assert!(!is_path_component("my..app"));
        assert!(!is_path_component("my._app"));
        assert!(!is_path_component("App"));
        assert!(!is_path_component("a b"));
        assert!(!is_path_component("caf\u{e9}"));
    }

    #[test]
    fn domains() {
        assert!(is_domain("registry.example.com"));
        assert!(is_domain("localhost"));
        assert!(is_domain("localhost:5000"));
        assert!(is_domain("my-registry.io:443"));
        assert!(is_domain("Registry.Example.COM"));
        assert!(is_domain("[::1]"));
        assert!(is_domain("[2001:db8::1]:5000"));
    }

    #[test]
    fn reject_bad_domains() {
        assert!(!is_domain(""));
        assert!(!is_domain("-bad.com"));
        assert!(!is_domain("bad-.com"));
        assert!(!is_domain("a..b"));
        assert!(!is_domain("host:"));
        assert!(!is_domain("host:port"));
        assert!(!is_domain("[]"));
        assert!(!is_domain("[::1"));
        assert!(!is_domain("[::1]5000"));
        assert!(!is_domain("under_score.com"));
    }

    #[test]
    fn tags() {
        assert!(is_tag("latest"));
        assert!(is_tag("v1.0.0-rc1"));
        assert!(is_tag("_private"));
        assert!(is_tag(&"a".repeat(TAG_MAX_LENGTH)));
        assert!(!is_tag(""));
        assert!(!is_tag(".hidden"));
        assert!(!is_tag("-dash"));
        assert!(!is_tag("has space"));
        assert!(!is_tag(&"a".repeat(TAG_MAX_LENGTH + 1)));
    }

    #[test]
    fn algorithms() {
        assert!(is_algorithm("sha256"));
        assert!(is_algorithm("sha512"));
        assert!(is_algorithm("multihash+base58"));
        assert!(is_algorithm("sha256+b64u"));
        assert!(!is_algorithm(""));
        assert!(!is_algorithm("256sha"));
        assert!(!is_algorithm("sha256+"));
        assert!(!is_algorithm("sha 256"));
    }

    #[test]
    fn encoded_values() {
        assert!(is_encoded("deadbeef"));
        assert!(is_encoded("DEADBEEF"));
        assert!(is_encoded("a"));
        assert!(!is_encoded(""));
        assert!(!is_encoded("xyz"));
    }
}

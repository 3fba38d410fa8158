#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid value '{value}' for the {filter} filter")]
    InvalidFilter { filter: &'static str, value: String },
}

/// Ordered accumulation of query parameters over a fixed base URL.
///
/// Parameters serialize in insertion order; setting a name that is already
/// present replaces its value in place so repeated setter calls stay
/// deterministic. Values are stored fully encoded — catalog tokens go in
/// verbatim, free text goes through [`encode`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString {
    base: &'static str,
    params: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            params: Vec::new(),
        }
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.params.push((name, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Serialize to a complete URL. With no parameters set this is exactly
    /// the base URL, with no trailing `?`.
    pub fn build(&self) -> String {
        if self.params.is_empty() {
            return self.base.to_string();
        }

        let mut url = String::with_capacity(self.base.len() + 16 * self.params.len());
        url.push_str(self.base);
        for (i, (name, value)) in self.params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(name);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

/// Form-urlencode a free-text value: space becomes `+`, unreserved ASCII
/// passes through, everything else percent-escapes per UTF-8 byte.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_no_params_is_bare_base_url() {
        let query = QueryString::new("https://example.org/search");
        assert_eq!(query.build(), "https://example.org/search");
        assert!(!query.build().contains('?'));
    }

    #[test]
    fn test_build_joins_params_in_insertion_order() {
        let mut query = QueryString::new("https://example.org/search");
        query.set("b", "2");
        query.set("a", "1");
        query.set("c", "3");
        assert_eq!(query.build(), "https://example.org/search?b=2&a=1&c=3");
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut query = QueryString::new("https://example.org/search");
        query.set("term", "water");
        let first = query.build();
        let second = query.build();
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut query = QueryString::new("https://example.org/search");
        query.set("a", "1");
        query.set("b", "2");
        query.set("a", "9");
        assert_eq!(query.build(), "https://example.org/search?a=9&b=2");
    }

    #[test]
    fn test_encode_spaces_as_plus() {
        assert_eq!(encode("European Union"), "European+Union");
    }

    #[test]
    fn test_encode_passes_unreserved_through() {
        assert_eq!(encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }

    #[test]
    fn test_encode_percent_escapes_reserved_bytes() {
        assert_eq!(encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode("50%"), "50%25");
    }

    #[test]
    fn test_encode_escapes_utf8_bytes() {
        assert_eq!(encode("café"), "caf%C3%A9");
    }
}

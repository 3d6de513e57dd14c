//! Message value object.

use super::headers::HeaderMap;

/// A complete parsed frame: header map plus decoded body.
///
/// Messages are immutable once assembled by the
/// [`MessageBuffer`](super::MessageBuffer); they are handed to the
/// consumer's dispatch callback and not touched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Headers of this frame. Only `Content-Length` carries semantics for
    /// the framing layer; everything else is passed through opaquely.
    pub headers: HeaderMap,
    /// Body text, decoded as UTF-8.
    pub body: String,
}

impl Message {
    /// Create a new message from parsed parts.
    pub fn new(headers: HeaderMap, body: String) -> Self {
        Self { headers, body }
    }

    /// Get the body text.
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Get the body length in bytes.
    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Look up a header value by name, ignoring case.
    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut headers = HeaderMap::new();
        headers.insert("Content-length", "5");
        let message = Message::new(headers, "hello".to_string());

        assert_eq!(message.body(), "hello");
        assert_eq!(message.body_len(), 5);
        assert_eq!(message.header("content-LENGTH"), Some("5"));
        assert_eq!(message.header("missing"), None);
    }

    #[test]
    fn test_empty_body() {
        let message = Message::new(HeaderMap::new(), String::new());
        assert_eq!(message.body(), "");
        assert_eq!(message.body_len(), 0);
    }
}

/*
[INPUT]:  Ordered key-value request parameters
[OUTPUT]: Canonical application/x-www-form-urlencoded strings
[POS]:    HTTP layer - parameter encoding shared by dispatcher and signer
[UPDATE]: When the exchange changes its parameter conventions
*/

use url::form_urlencoded::Serializer;

/// Ordered parameter set for a single request.
///
/// The encoded form is canonical: keys are sorted, values keep their append
/// order within a key. The dispatcher sends exactly the string that
/// [`encode`](Params::encode) returns and the signer hashes the same string,
/// so the signature always covers the transmitted bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key to a single value, replacing any previous entries.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.retain(|(existing, _)| existing != key);
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Add one value for a key, keeping previous entries.
    ///
    /// Used for the exchange's repeated-key convention (`uuids[]`, `states[]`).
    pub fn append(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Encode to the canonical form-urlencoded string.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.pairs.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut serializer = Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sorts_keys() {
        let mut params = Params::new();
        params.set("market", "KRW-BTC");
        params.set("count", "10");
        assert_eq!(params.encode(), "count=10&market=KRW-BTC");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(Params::new().encode(), "");
        assert!(Params::new().is_empty());
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let mut params = Params::new();
        params.set("limit", "10");
        params.set("limit", "100");
        assert_eq!(params.encode(), "limit=100");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_append_keeps_value_order_within_key() {
        let mut params = Params::new();
        params.append("uuids[]", "b");
        params.append("uuids[]", "a");
        params.set("market", "KRW-BTC");
        assert_eq!(params.encode(), "market=KRW-BTC&uuids%5B%5D=b&uuids%5B%5D=a");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let mut params = Params::new();
        params.set("identifier", "order #1&2");
        assert_eq!(params.encode(), "identifier=order+%231%262");
    }
}

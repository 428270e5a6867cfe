/// A JWT in its compact serialization (`header.payload.signature`).
#[derive(Debug, Clone, PartialEq)]
pub struct SignedJwt {
    /// Encoded value
    pub(crate) value: String,
}

impl SignedJwt {
    /// Get the encoded value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

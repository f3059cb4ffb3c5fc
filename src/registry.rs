use std::collections::HashMap;

/// Static partner credential table, built once at startup and read-only
/// afterwards. Keys are case-sensitive; secrets are stored in plaintext and
/// compared against the Base64-decoded password supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct PartnerRegistry {
    partners: HashMap<String, String>,
}

impl PartnerRegistry {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            partners: pairs.into_iter().collect(),
        }
    }

    pub fn secret(&self, partnerkey: &str) -> Option<&str> {
        self.partners.get(partnerkey).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

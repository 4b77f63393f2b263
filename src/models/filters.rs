use serde::{Deserialize, Serialize};

/// Ephemeral view state driving the filter/sort engine. Not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub query: String,
    /// `None` means "all categories".
    pub category: Option<String>,
    pub sort: SortKey,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    Newest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_uses_kebab_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&SortKey::PriceAsc).unwrap(), "\"price-asc\"");
        assert_eq!(
            serde_json::from_str::<SortKey>("\"newest\"").unwrap(),
            SortKey::Newest
        );
        assert_eq!(
            serde_json::from_str::<SortKey>("\"popular\"").unwrap(),
            SortKey::default()
        );
    }
}

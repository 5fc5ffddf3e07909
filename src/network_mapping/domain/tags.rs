use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Provider tags (`[{"Key": .., "Value": ..}]`) as an order-irrelevant map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TagEntry {
    key: String,
    #[serde(default)]
    value: Option<String>,
}

impl Tags {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The conventional `Name` tag
    pub fn name(&self) -> Option<&str> {
        self.get("Name")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Tags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `null` and a missing list both mean "untagged"
        let entries = Option::<Vec<TagEntry>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(entries
            .into_iter()
            .map(|entry| (entry.key, entry.value.unwrap_or_default()))
            .collect())
    }
}

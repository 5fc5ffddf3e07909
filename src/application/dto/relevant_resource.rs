use crate::network_mapping::domain::{Resource, ResourceKind};
use std::fmt;

/// One resource whose address ranges cover a queried IP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantResource {
    pub id: String,
    pub kind: ResourceKind,
    pub name: Option<String>,
}

impl From<&Resource> for RelevantResource {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id().to_string(),
            kind: resource.kind(),
            name: resource.name_tag().map(str::to_string),
        }
    }
}

impl fmt::Display for RelevantResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.kind, self.id)?;
        if let Some(name) = &self.name {
            write!(f, "\t{}", name)?;
        }
        Ok(())
    }
}

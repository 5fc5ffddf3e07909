use super::resource::{Resource, ResourceKind};
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Every acquired resource, keyed by identifier.
///
/// Iteration is always in identifier order so that two renders of the same
/// inventory produce the same primitive sequence. The registry is built once
/// and then only read.
#[derive(Debug, Default, Clone)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, Resource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_resources(resources: impl IntoIterator<Item = Resource>) -> Self {
        let mut registry = Self::new();
        for resource in resources {
            registry.insert(resource);
        }
        registry
    }

    /// Adds a resource. Returns `false` (and keeps the first record) when the
    /// identifier is already taken.
    pub fn insert(&mut self, resource: Resource) -> bool {
        let id = resource.id().to_string();
        if let Some(existing) = self.resources.get(&id) {
            tracing::warn!(
                id = %id,
                kept = %existing.kind(),
                dropped = %resource.kind(),
                "duplicate resource identifier, keeping the first record"
            );
            return false;
        }
        self.resources.insert(id, resource);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resources.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn of_kind(&self, kind: ResourceKind) -> impl Iterator<Item = &Resource> {
        self.iter().filter(move |r| r.kind() == kind)
    }

    pub fn relevant_to_address(&self, ip: IpAddr) -> Vec<&Resource> {
        self.iter().filter(|r| r.is_relevant_to_address(ip)).collect()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

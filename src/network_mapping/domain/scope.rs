/// Restricts a render to one network and/or one subnet.
///
/// Both fields absent means "everything". Applied uniformly through
/// [`Resource::is_visible`](super::Resource::is_visible).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFilter {
    network: Option<String>,
    subnet: Option<String>,
}

impl ScopeFilter {
    pub fn new(network: Option<String>, subnet: Option<String>) -> Self {
        Self { network, subnet }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_network(network: impl Into<String>) -> Self {
        Self::new(Some(network.into()), None)
    }

    pub fn for_subnet(subnet: impl Into<String>) -> Self {
        Self::new(None, Some(subnet.into()))
    }

    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }

    pub fn subnet(&self) -> Option<&str> {
        self.subnet.as_deref()
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_subnet(mut self, subnet: impl Into<String>) -> Self {
        self.subnet = Some(subnet.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.network.is_some() || self.subnet.is_some()
    }
}

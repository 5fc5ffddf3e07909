use crate::application::dto::RelevantResource;
use crate::network_mapping::domain::ResourceRegistry;
use crate::shared::error::NetmapError;
use crate::shared::Result;
use std::net::IpAddr;

/// FindRelevantResourcesUseCase - Lists resources whose address ranges cover an IP
///
/// Networks and subnets match on their CIDR block, route tables on route
/// destinations, network ACLs on entry ranges and security groups on rule
/// ranges. Results come back in identifier order.
pub struct FindRelevantResourcesUseCase<'a> {
    registry: &'a ResourceRegistry,
}

impl<'a> FindRelevantResourcesUseCase<'a> {
    pub fn new(registry: &'a ResourceRegistry) -> Self {
        Self { registry }
    }

    pub fn execute(&self, address: &str) -> Result<Vec<RelevantResource>> {
        let ip: IpAddr = address
            .trim()
            .parse()
            .map_err(|_| NetmapError::InvalidAddress {
                value: address.to_string(),
            })?;

        let relevant: Vec<RelevantResource> = self
            .registry
            .relevant_to_address(ip)
            .into_iter()
            .map(RelevantResource::from)
            .collect();
        tracing::debug!(%ip, matches = relevant.len(), "resolved relevant resources");
        Ok(relevant)
    }
}

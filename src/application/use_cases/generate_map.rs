use crate::application::dto::{IterateBy, MapArtifact, MapRequest, MapResponse, MapView};
use crate::network_mapping::domain::{ResourceRegistry, ScopeFilter};
use crate::network_mapping::services::{SecurityRenderer, TopologyRenderer};
use crate::ports::outbound::GraphDocument;
use crate::shared::Result;

/// GenerateMapUseCase - Renders a loaded registry into graph documents
///
/// Each artifact is written into a fresh document obtained from
/// `document_factory`, so iterated renders never share state.
///
/// # Type Parameters
/// * `F` - Factory producing an empty document
/// * `D` - GraphDocument implementation
pub struct GenerateMapUseCase<'a, F> {
    registry: &'a ResourceRegistry,
    document_factory: F,
}

impl<'a, F, D> GenerateMapUseCase<'a, F>
where
    F: Fn() -> D,
    D: GraphDocument,
{
    pub fn new(registry: &'a ResourceRegistry, document_factory: F) -> Self {
        Self {
            registry,
            document_factory,
        }
    }

    pub fn execute(&self, request: &MapRequest) -> Result<MapResponse> {
        match &request.view {
            MapView::Security { instance_id } => {
                let mut document = (self.document_factory)();
                let report = SecurityRenderer::new(self.registry).render(instance_id, &mut document)?;
                tracing::info!(
                    instance = %instance_id,
                    security_groups = report.security_groups.len(),
                    "rendered security view"
                );
                let artifact = MapArtifact {
                    name: None,
                    content: document.finish(),
                };
                Ok(MapResponse::new(vec![artifact], Some(report)))
            }
            MapView::Topology => {
                let artifacts = match request.iterate {
                    None => vec![MapArtifact {
                        name: None,
                        content: self.render_topology(request, &request.scope),
                    }],
                    Some(iterate) => {
                        let artifacts: Vec<MapArtifact> = self
                            .iteration_scopes(request, iterate)
                            .into_iter()
                            .map(|(id, scope)| MapArtifact {
                                content: self.render_topology(request, &scope),
                                name: Some(id),
                            })
                            .collect();
                        if artifacts.is_empty() {
                            tracing::warn!(kind = %iterate.kind(), "nothing to iterate over in the selected scope");
                        }
                        artifacts
                    }
                };
                Ok(MapResponse::new(artifacts, None))
            }
        }
    }

    fn render_topology(&self, request: &MapRequest, scope: &ScopeFilter) -> String {
        let mut document = (self.document_factory)();
        TopologyRenderer::new(self.registry, request.options).render(scope, &mut document);
        document.finish()
    }

    /// One narrowed scope per network or subnet visible under the request scope
    fn iteration_scopes(
        &self,
        request: &MapRequest,
        iterate: IterateBy,
    ) -> Vec<(String, ScopeFilter)> {
        self.registry
            .of_kind(iterate.kind())
            .filter(|resource| resource.is_visible(&request.scope, self.registry))
            .map(|resource| {
                let id = resource.id().to_string();
                let scope = match iterate {
                    IterateBy::Network => request.scope.clone().with_network(id.clone()),
                    IterateBy::Subnet => request.scope.clone().with_subnet(id.clone()),
                };
                (id, scope)
            })
            .collect()
    }
}

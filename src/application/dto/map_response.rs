use crate::network_mapping::services::SecurityReport;

/// One rendered graph document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapArtifact {
    /// Scope id the artifact was iterated for; `None` for a single render
    pub name: Option<String>,
    pub content: String,
}

/// MapResponse - Internal response DTO for the map generation use case
#[derive(Debug, Clone)]
pub struct MapResponse {
    pub artifacts: Vec<MapArtifact>,
    /// Present for security views
    pub security_report: Option<SecurityReport>,
}

impl MapResponse {
    pub fn new(artifacts: Vec<MapArtifact>, security_report: Option<SecurityReport>) -> Self {
        Self {
            artifacts,
            security_report,
        }
    }
}

//! Compute records: instances and the volumes / interfaces attached to them.

use super::super::tags::Tags;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    pub instance_id: String,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default)]
    pub private_ip_address: Option<String>,
    #[serde(default)]
    pub instance_type: Option<String>,
    #[serde(default)]
    pub state: Option<InstanceState>,
    #[serde(default)]
    pub security_groups: Vec<GroupIdentifier>,
    #[serde(default)]
    pub tags: Tags,
}

impl Instance {
    pub fn security_group_ids(&self) -> impl Iterator<Item = &str> {
        self.security_groups.iter().map(|g| g.group_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceState {
    #[serde(default)]
    pub name: Option<String>,
}

/// `{"GroupId": .., "GroupName": ..}` as attached to instances and interfaces
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupIdentifier {
    pub group_id: String,
    #[serde(default)]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Volume {
    pub volume_id: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub attachments: Vec<VolumeAttachment>,
    #[serde(default)]
    pub tags: Tags,
}

impl Volume {
    pub fn is_attached_to(&self, instance_id: &str) -> bool {
        self.attachments
            .iter()
            .any(|a| a.instance_id.as_deref() == Some(instance_id))
    }

    pub fn attached_instances(&self) -> impl Iterator<Item = &str> {
        self.attachments
            .iter()
            .filter_map(|a| a.instance_id.as_deref())
    }

    /// `<size>` in GiB, blank when the provider omitted it
    pub fn size_label(&self) -> String {
        self.size.map(|s| s.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeAttachment {
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInterface {
    pub network_interface_id: String,
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub private_ip_address: Option<String>,
    #[serde(default)]
    pub groups: Vec<GroupIdentifier>,
    #[serde(default)]
    pub attachment: Option<InterfaceAttachment>,
    #[serde(default)]
    pub tag_set: Tags,
}

impl NetworkInterface {
    pub fn attached_instance(&self) -> Option<&str> {
        self.attachment
            .as_ref()
            .and_then(|a| a.instance_id.as_deref())
    }

    pub fn security_group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.group_id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InterfaceAttachment {
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

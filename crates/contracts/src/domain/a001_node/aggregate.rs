use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata key that carries the address of a node being registered
pub const ADDRESS_KEY: &str = "address";

// ============================================================================
// Templates
// ============================================================================

/// Шаблон узла, предлагаемый при создании
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTemplate {
    pub name: String,
}

/// Response of the template listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTemplateList {
    #[serde(default)]
    pub templates: Vec<NodeTemplate>,
}

impl NodeTemplateList {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Failed to parse node template list")
    }

    /// Template identifiers in server order
    pub fn names(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.name.clone()).collect()
    }
}

// ============================================================================
// Create request
// ============================================================================

/// DTO для создания/регистрации узла
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCreateRequest {
    pub register: bool,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl NodeCreateRequest {
    pub fn address(&self) -> Option<&str> {
        self.metadata.get(ADDRESS_KEY).map(String::as_str)
    }

    /// Registering an existing node needs somewhere to reach it
    pub fn validate(&self) -> Result<(), String> {
        if self.register && self.address().map_or(true, |a| a.trim().is_empty()) {
            return Err("Address is required to register a node".into());
        }
        Ok(())
    }
}

/// Result returned by the node creation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCreateResponse {
    pub address: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl NodeCreateResponse {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Failed to parse node create response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(address: &str) -> NodeCreateRequest {
        let mut metadata = BTreeMap::new();
        metadata.insert(ADDRESS_KEY.to_string(), address.to_string());
        NodeCreateRequest {
            register: true,
            template: None,
            metadata,
        }
    }

    #[test]
    fn test_register_requires_address() {
        assert!(register_request("").validate().is_err());
        assert!(register_request("   ").validate().is_err());
        assert!(register_request("http://10.0.0.1:2375").validate().is_ok());

        let mut missing = register_request("x");
        missing.metadata.clear();
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_create_without_register_needs_no_address() {
        let request = NodeCreateRequest {
            template: Some("small".to_string()),
            ..Default::default()
        };
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_request_wire_format() {
        let mut request = register_request("10.0.0.1");
        request.metadata.insert("pool".to_string(), "default".to_string());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "register": true,
                "template": null,
                "metadata": {"address": "10.0.0.1", "pool": "default"}
            })
        );
    }

    #[test]
    fn test_template_list_names_keep_order() {
        let list =
            NodeTemplateList::from_json(r#"{"templates":[{"name":"b"},{"name":"a"}]}"#).unwrap();
        assert_eq!(list.names(), vec!["b".to_string(), "a".to_string()]);

        let empty = NodeTemplateList::from_json("{}").unwrap();
        assert!(empty.names().is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(NodeTemplateList::from_json("not json").is_err());
        assert!(NodeCreateResponse::from_json(r#"{"message":"x"}"#).is_err());
    }
}

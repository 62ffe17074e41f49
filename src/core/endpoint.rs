use serde::{Deserialize, Serialize};

pub const RECORD_TYPE_A: &str = "A";
pub const RECORD_TYPE_TXT: &str = "TXT";

/// A DNS name with one record type and one or more target values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub dns_name: String,
    pub record_type: String,
    #[serde(rename = "recordTTL", default)]
    pub ttl: u32,
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Endpoint {
    pub fn new_with_ttl(
        dns_name: impl Into<String>,
        record_type: impl Into<String>,
        ttl: u32,
        targets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            dns_name: dns_name.into(),
            record_type: record_type.into(),
            ttl,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }
}

/// The plan handed over by the controller for one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Changes {
    #[serde(default)]
    pub create: Vec<Endpoint>,
    #[serde(default)]
    pub update_old: Vec<Endpoint>,
    #[serde(default)]
    pub update_new: Vec<Endpoint>,
    #[serde(default)]
    pub delete: Vec<Endpoint>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty()
            && self.update_old.is_empty()
            && self.update_new.is_empty()
            && self.delete.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_ttl() {
        let ep = Endpoint::new_with_ttl("a.example.com", RECORD_TYPE_A, 300, ["1.1.1.1"]);
        assert_eq!(ep.dns_name, "a.example.com");
        assert_eq!(ep.record_type, "A");
        assert_eq!(ep.ttl, 300);
        assert_eq!(ep.targets, vec!["1.1.1.1".to_string()]);
    }

    #[test]
    fn test_endpoint_json_field_names() {
        let ep = Endpoint::new_with_ttl("b.example.com", RECORD_TYPE_TXT, 60, ["hello"]);
        let json = serde_json::to_value(&ep).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dnsName": "b.example.com",
                "recordType": "TXT",
                "recordTTL": 60,
                "targets": ["hello"],
            })
        );
    }

    #[test]
    fn test_changes_from_controller_json() {
        let raw = r#"{
            "Create": [{"dnsName": "new.example.com", "recordType": "A", "targets": ["10.0.0.1"]}],
            "Delete": [{
                "dnsName": "old.example.com",
                "recordType": "A",
                "recordTTL": 300,
                "targets": ["10.0.0.2"]
            }]
        }"#;
        let changes: Changes = serde_json::from_str(raw).unwrap();
        assert_eq!(changes.create.len(), 1);
        assert_eq!(changes.create[0].ttl, 0);
        assert_eq!(changes.delete[0].ttl, 300);
        assert!(changes.update_old.is_empty());
        assert!(changes.update_new.is_empty());
        assert!(!changes.is_empty());
        assert!(Changes::default().is_empty());
    }
}

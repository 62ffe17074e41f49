use serde::{Deserialize, Serialize};

/// Envelope wrapping every SOLIDserver REST answer.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ApiFailure {
    #[serde(default)]
    pub errno: Option<String>,
    #[serde(default)]
    pub errmsg: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsZone {
    #[serde(default)]
    pub zone_id: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub zone_type: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsRr {
    #[serde(default)]
    pub rr_id: String,
    #[serde(default)]
    pub rr_full_name: String,
    #[serde(default)]
    pub rr_type: String,
    // The appliance reports TTLs as strings.
    #[serde(default)]
    pub rr_ttl: String,
    #[serde(default)]
    pub rr_all_value: String,
}

impl DnsRr {
    pub fn ttl(&self) -> u32 {
        self.rr_ttl.trim().parse().unwrap_or(0)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RrAddInput {
    pub rr_name: String,
    pub rr_type: String,
    pub rr_ttl: i32,
    pub rr_value1: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RrDeleteInput {
    pub rr_name: String,
    pub rr_type: String,
    pub rr_value1: String,
}

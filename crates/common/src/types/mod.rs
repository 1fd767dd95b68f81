use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Body returned by write endpoints: `{"status":"success"}` plus the affected id when known.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusReply {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i32>,
}

impl StatusReply {
    pub fn success() -> Self { Self { status: "success".into(), id: None } }
    pub fn success_with_id(id: i32) -> Self { Self { status: "success".into(), id: Some(id) } }
}

/// Error body: free-text message, no structured code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageReply {
    pub message: String,
}

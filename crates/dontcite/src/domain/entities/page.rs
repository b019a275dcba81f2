//! RemotePage and WriteAck - what the page store hands back

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::PagePath;

/// Snapshot of a Dontpad page as returned by the read endpoint.
///
/// Never cached; every operation fetches a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePage {
    pub path: PagePath,
    pub body: String,
    /// Server-assigned modification time (epoch ms), when reported
    pub last_modified: Option<i64>,
}

impl RemotePage {
    /// Body with `entry` appended, in that order
    pub fn appended(&self, entry: &str) -> String {
        let mut text = String::with_capacity(self.body.len() + entry.len());
        text.push_str(&self.body);
        text.push_str(entry);
        text
    }
}

/// Server acknowledgement of a write.
///
/// Informational only: nothing reconciles against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteAck {
    /// Acknowledged modification time (epoch ms), when the response carries one
    pub last_modified: Option<i64>,
    /// The decoded response as sent by the server
    pub raw: Value,
}

impl WriteAck {
    /// Build an ack from the decoded response.
    ///
    /// Accepts a bare number or an object with `lastModified`/`timestamp`.
    pub fn from_response(raw: Value) -> Self {
        let last_modified = match &raw {
            Value::Number(n) => n.as_i64(),
            Value::Object(map) => map
                .get("lastModified")
                .or_else(|| map.get("timestamp"))
                .and_then(Value::as_i64),
            _ => None,
        };

        Self { last_modified, raw }
    }
}

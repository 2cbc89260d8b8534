//! Wire records for the subset of the control API the hook consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) result: Option<T>,
    pub(crate) error: Option<Fault>,
}

/// Fault object reported by the host.
#[derive(Debug, Deserialize)]
pub(crate) struct Fault {
    #[serde(default)]
    pub(crate) code: i64,
    #[serde(default)]
    pub(crate) message: String,
}

/// JSON-RPC request body used for commands.
#[derive(Debug, Serialize)]
pub(crate) struct Request<'a> {
    pub(crate) method: &'a str,
    pub(crate) params: Vec<Value>,
}

/// One queue group as returned by `listgroups`; only the id is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupRecord {
    /// Download identifier.
    #[serde(rename = "NZBID")]
    pub nzb_id: u64,
}

/// One file as returned by `listfiles`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    /// File identifier.
    #[serde(rename = "ID")]
    pub id: u64,
    /// File name announced by the download.
    #[serde(rename = "Filename")]
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_decodes_result_and_ignores_extra_fields() -> Result<(), serde_json::Error> {
        let body = json!({
            "version": "1.1",
            "result": [{"ID": 3, "Filename": "a.part1.rar", "FileSizeLo": 100}]
        });
        let envelope: Envelope<Vec<FileRecord>> = serde_json::from_value(body)?;
        assert!(envelope.error.is_none());
        assert_eq!(
            envelope.result,
            Some(vec![FileRecord {
                id: 3,
                filename: "a.part1.rar".into()
            }])
        );
        Ok(())
    }

    #[test]
    fn envelope_decodes_fault() -> Result<(), serde_json::Error> {
        let body = json!({
            "version": "1.1",
            "error": {"name": "JSONRPCError", "code": 2, "message": "Invalid parameter"}
        });
        let envelope: Envelope<bool> = serde_json::from_value(body)?;
        assert!(envelope.result.is_none());
        let fault = envelope.error.map(|fault| (fault.code, fault.message));
        assert_eq!(fault, Some((2, "Invalid parameter".to_string())));
        Ok(())
    }
}

//! Upload models for the Zendesk API.
//!
//! An upload is an ephemeral server-side staging area for file content.
//! Its token is consumed either by a subsequent upload call (to add
//! another file to the same batch) or by ticket creation (to attach the
//! batch to the initial comment).

use serde::{Deserialize, Serialize};

/// A file attachment stored by Zendesk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique attachment ID.
    #[serde(default)]
    pub id: Option<u64>,

    /// Original file name.
    #[serde(default)]
    pub file_name: Option<String>,

    /// URL to download the content.
    #[serde(default)]
    pub content_url: Option<String>,

    /// MIME type of the content.
    #[serde(default)]
    pub content_type: Option<String>,

    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

/// The upload reference returned by `POST /uploads.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Upload {
    /// Token identifying the upload batch. Pass it to `create_ticket` to
    /// attach the batch, or to another `upload_file` call to extend it.
    pub token: String,

    /// The attachment created by this call.
    #[serde(default)]
    pub attachment: Option<Attachment>,

    /// All attachments in the batch so far.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Response wrapper for `POST /uploads.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// The upload reference.
    pub upload: Upload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_deserializes() {
        let response: UploadResponse = serde_json::from_str(
            r#"{
                "upload": {
                    "token": "6bk3gql82em5nmf",
                    "attachment": {"id": 498483, "file_name": "crash.log", "size": 2532},
                    "attachments": [{"id": 498483, "file_name": "crash.log", "size": 2532}]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(response.upload.token, "6bk3gql82em5nmf");
        assert_eq!(response.upload.attachments.len(), 1);
        assert_eq!(
            response.upload.attachment.unwrap().file_name.as_deref(),
            Some("crash.log")
        );
    }

    #[test]
    fn test_upload_token_only() {
        let upload: Upload = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(upload.token, "abc");
        assert!(upload.attachment.is_none());
        assert!(upload.attachments.is_empty());
    }
}

//! Permission sync API
//!
//! The server reconciles the client's declared permission set against its
//! stored grants and reports the outcome as created/existing/updated/
//! deleted key lists. The console builds its permission index from the
//! outcome; this module only performs the call.

use shared::client::{SyncOutcome, SyncRequest, SyncResult};
use shared::response::Envelope;
use shared::util::now_millis;

use crate::{ClientResult, HttpClient};

/// Nested body of the sync response: `{"data": {"result": {...}}}`
#[derive(serde::Deserialize)]
struct SyncBody {
    result: SyncResult,
}

impl HttpClient {
    /// Declare the client's permission set and fetch the reconciled
    /// grants. The returned outcome carries the server timestamp the
    /// permission index is stamped with.
    pub async fn sync_permissions(&self, declared: &[String]) -> ClientResult<SyncOutcome> {
        let req = SyncRequest {
            permissions: declared.to_vec(),
        };

        let resp: Envelope<SyncBody> = self.post("/api/permissions/sync", &req).await?;
        let timestamp = resp
            .timestamp
            .unwrap_or_else(|| now_millis().to_string());
        let result = resp.data.map(|body| body.result).unwrap_or_default();

        if !result.errors.is_empty() {
            tracing::warn!(
                rejected = result.errors.len(),
                "Permission sync rejected keys"
            );
        }

        Ok(SyncOutcome { result, timestamp })
    }
}

use tracing::warn;

use crate::logging::pii::Redacted;
use crate::web::trace_ctx;

/// Log a request that presented an owner token not belonging to the session.
pub fn owner_token_rejected(code: &str, presented: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_OWNER_TOKEN_REJECTED",
        %trace_id,
        code,
        presented = %Redacted(presented),
        "Owner token mismatch"
    );
}

//! Types exposed to JavaScript via wasm-bindgen.

use druidic_ui_browser::SharedQuery;
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

/// A decoded share link.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsSharedQuery {
    pub text: String,
    /// Script id as carried by the link (may be unknown).
    pub script_id: Option<String>,
    /// Resolved script id, `ELDER_FUTHARK` when unknown.
    pub script: String,
    pub script_name: String,
}

impl From<SharedQuery> for JsSharedQuery {
    fn from(query: SharedQuery) -> Self {
        Self {
            text: query.text,
            script_id: query.script_id,
            script: query.script.id().to_owned(),
            script_name: query.script.display_name().to_owned(),
        }
    }
}

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no global `window`; not running in a browser")]
    NoWindow,
    #[error("container is not attached to a document")]
    NoDocument,
    #[error("failed to attach `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
}

impl DomError {
    pub(crate) fn listener(event: &'static str, err: JsValue) -> Self {
        Self::Listener {
            event,
            message: format!("{err:?}"),
        }
    }
}

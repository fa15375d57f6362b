use wasm_bindgen::JsValue;

mod config;
mod error;
mod helper;
mod listener;
mod marker;
pub mod node;
pub mod toggle;
mod util;

pub type Result<V, E = JsValue> = std::result::Result<V, E>;

pub use config::LikeConfig;
pub use error::LikeError;
pub use listener::{register, register_on_body, ListenerHandle, ListenerId, ToggleCallback};
pub use marker::IconMarkers;
pub use node::LikeNode;
pub use toggle::{dispatch_click, handle_click, is_liked, toggle_icons, ClickOutcome, ToggledIcon};

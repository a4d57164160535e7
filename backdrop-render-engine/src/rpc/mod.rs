//! JSON-RPC 2.0 communication layer for the embedding portfolio page.
//!
//! Implements bidirectional messaging between the Bevy backdrop and the host
//! page via iframe postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Portfolio page (parent)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! Requests without an ID are still dispatched; only the response is dropped.
//!
//! ## Sending Notifications from Bevy
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({ "data": "value" }));
//! }
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32700`: Parse error (message is not JSON)
//! - `-32600`: Invalid request (wrong `jsonrpc` version or request shape)
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//!
//! ## Methods
//!
//! ### Backdrop
//! - `set_backdrop_mounted`: Mount or unmount the starfield, galaxy and moon
//! - `get_backdrop_status`: Mount state, point counts and current rotation per field
//!
//! ### Contact menu
//! - `set_contact_menu`: Open, close, or toggle (no `open` param) the dropdown
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//! - `fps_update`, `backdrop_state_changed`, `contact_menu_changed`

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;

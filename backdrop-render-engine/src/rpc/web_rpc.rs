use bevy::diagnostic::DiagnosticsStore;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::animation::rotation::RotationState;
use crate::engine::scene::backdrop::{BackdropMountRequest, BackdropState, PointField};
use crate::engine::systems::fps_tracking::smoothed_fps;
use crate::ui::contact_menu::ContactMenuEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication with the host page.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    notify_backdrop_state_changed,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) = window
                .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
                return;
            }
        }
        None => {
            error!("Window object not available");
            return;
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// World access the request handlers need.
#[derive(SystemParam)]
struct RpcTargets<'w, 's> {
    diagnostics: Res<'w, DiagnosticsStore>,
    backdrop_state: Res<'w, State<BackdropState>>,
    point_fields: Query<'w, 's, (&'static PointField, &'static RotationState)>,
    mount_requests: EventWriter<'w, BackdropMountRequest>,
    menu_events: EventWriter<'w, ContactMenuEvent>,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut targets: RpcTargets,
) {
    for event in events.read() {
        match parse_request(&event.content) {
            Ok(request) => {
                if let Some(response) = handle_rpc_request(&request, &mut targets) {
                    rpc_interface.queue_response(response);
                }
            }
            Err((error, id)) => {
                warn!("Rejected RPC message: {}", error.message);
                rpc_interface.queue_response(RpcResponse {
                    jsonrpc: "2.0".to_string(),
                    result: None,
                    error: Some(error),
                    id,
                });
            }
        }
    }
}

/// Parse raw message text into a JSON-RPC 2.0 request.
/// On failure returns the error together with whatever ID could be recovered.
fn parse_request(content: &str) -> Result<RpcRequest, (RpcError, Option<serde_json::Value>)> {
    let value = serde_json::from_str::<serde_json::Value>(content)
        .map_err(|e| (RpcError::parse_error(&e.to_string()), None))?;
    let id = value.get("id").cloned();

    let request = serde_json::from_value::<RpcRequest>(value)
        .map_err(|e| (RpcError::invalid_request(&e.to_string()), id.clone()))?;

    if request.jsonrpc != "2.0" {
        return Err((
            RpcError::invalid_request(&format!(
                "Unsupported jsonrpc version '{}'",
                request.jsonrpc
            )),
            id,
        ));
    }

    Ok(request)
}

/// Handle individual RPC request and generate response based on method.
/// Requests without an ID are dispatched but get no response.
fn handle_rpc_request(request: &RpcRequest, targets: &mut RpcTargets) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_fps" => handle_get_fps(&targets.diagnostics),
        "set_backdrop_mounted" => {
            handle_set_backdrop_mounted(&request.params, &mut targets.mount_requests)
        }
        "get_backdrop_status" => {
            handle_get_backdrop_status(&targets.backdrop_state, &targets.point_fields)
        }
        "set_contact_menu" => handle_set_contact_menu(&request.params, &mut targets.menu_events),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    let id = request.id.clone()?;

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = smoothed_fps(diagnostics).unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

fn handle_set_backdrop_mounted(
    params: &serde_json::Value,
    mount_requests: &mut EventWriter<BackdropMountRequest>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct MountParams {
        mounted: bool,
    }

    let mount_params = serde_json::from_value::<MountParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected boolean 'mounted' parameter"))?;

    mount_requests.write(BackdropMountRequest {
        mounted: mount_params.mounted,
    });

    Ok(serde_json::json!({
        "success": true,
        "mounted": mount_params.mounted
    }))
}

fn handle_get_backdrop_status(
    state: &State<BackdropState>,
    point_fields: &Query<(&PointField, &RotationState)>,
) -> Result<serde_json::Value, RpcError> {
    let mut fields: Vec<(&PointField, &RotationState)> = point_fields.iter().collect();
    fields.sort_by_key(|(field, _)| field.kind.as_str());

    let fields: Vec<serde_json::Value> = fields
        .into_iter()
        .map(|(field, rotation)| {
            serde_json::json!({
                "name": field.kind.as_str(),
                "point_count": field.point_count,
                "rotation": [rotation.x, rotation.y]
            })
        })
        .collect();

    Ok(serde_json::json!({
        "state": state.get().as_str(),
        "fields": fields
    }))
}

fn handle_set_contact_menu(
    params: &serde_json::Value,
    menu_events: &mut EventWriter<ContactMenuEvent>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize, Default)]
    struct MenuParams {
        open: Option<bool>,
    }

    let menu_params = if params.is_null() {
        MenuParams::default()
    } else {
        serde_json::from_value::<MenuParams>(params.clone())
            .map_err(|_| RpcError::invalid_params("Expected optional boolean 'open' parameter"))?
    };

    let event = match menu_params.open {
        Some(true) => ContactMenuEvent::Open,
        Some(false) => ContactMenuEvent::Close,
        None => ContactMenuEvent::Toggle,
    };
    menu_events.write(event);

    Ok(serde_json::json!({
        "success": true,
        "action": event.as_str()
    }))
}

/// Push mount state changes to the host page.
fn notify_backdrop_state_changed(
    state: Res<State<BackdropState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if state.is_changed() {
        rpc_interface.send_notification(
            "backdrop_state_changed",
            serde_json::json!({
                "state": state.get().as_str()
            }),
        );
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn parse_error(detail: &str) -> Self {
        Self {
            code: -32700,
            message: "Parse error".to_string(),
            data: Some(serde_json::json!({ "detail": detail })),
        }
    }

    pub fn invalid_request(detail: &str) -> Self {
        Self {
            code: -32600,
            message: "Invalid Request".to_string(),
            data: Some(serde_json::json!({ "detail": detail })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::backdrop::PointFieldKind;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<BackdropState>()
            .init_resource::<DiagnosticsStore>()
            .init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<BackdropMountRequest>()
            .add_event::<ContactMenuEvent>()
            .add_systems(Update, handle_rpc_messages);
        app
    }

    fn call(app: &mut App, message: serde_json::Value) -> Vec<RpcResponse> {
        app.world_mut().send_event(IncomingRpcMessage {
            content: message.to_string(),
        });
        app.update();
        std::mem::take(
            &mut app
                .world_mut()
                .resource_mut::<WebRpcInterface>()
                .outgoing_responses,
        )
    }

    fn written<E: Event + Clone>(app: &App) -> Vec<E> {
        let events = app.world().resource::<Events<E>>();
        events.iter_current_update_events().cloned().collect()
    }

    #[test]
    fn unknown_method_reports_not_found() {
        let mut app = test_app();
        let responses = call(
            &mut app,
            serde_json::json!({"jsonrpc": "2.0", "method": "warp_drive", "params": {}, "id": 1}),
        );

        assert_eq!(responses.len(), 1);
        let error = responses[0].error.as_ref().unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(responses[0].id, Some(serde_json::json!(1)));
    }

    #[test]
    fn mount_request_is_forwarded() {
        let mut app = test_app();
        let responses = call(
            &mut app,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "set_backdrop_mounted",
                "params": {"mounted": false},
                "id": "a"
            }),
        );

        assert_eq!(
            responses[0].result,
            Some(serde_json::json!({"success": true, "mounted": false}))
        );
        assert_eq!(
            written::<BackdropMountRequest>(&app),
            vec![BackdropMountRequest { mounted: false }]
        );
    }

    #[test]
    fn mount_request_requires_boolean() {
        let mut app = test_app();
        let responses = call(
            &mut app,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "set_backdrop_mounted",
                "params": {"mounted": "yes"},
                "id": 2
            }),
        );

        assert_eq!(responses[0].error.as_ref().unwrap().code, -32602);
        assert!(written::<BackdropMountRequest>(&app).is_empty());
    }

    #[test]
    fn notifications_dispatch_without_response() {
        let mut app = test_app();
        let responses = call(
            &mut app,
            serde_json::json!({"jsonrpc": "2.0", "method": "set_contact_menu"}),
        );

        assert!(responses.is_empty());
        assert_eq!(
            written::<ContactMenuEvent>(&app),
            vec![ContactMenuEvent::Toggle]
        );
    }

    #[test]
    fn contact_menu_open_flag_maps_to_event() {
        let mut app = test_app();
        call(
            &mut app,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "set_contact_menu",
                "params": {"open": true},
                "id": 3
            }),
        );
        assert_eq!(
            written::<ContactMenuEvent>(&app),
            vec![ContactMenuEvent::Open]
        );
    }

    #[test]
    fn status_lists_fields_with_rotation() {
        let mut app = test_app();
        app.world_mut().spawn((
            PointField {
                kind: PointFieldKind::Starfield,
                point_count: 3000,
            },
            RotationState { x: -0.5, y: -0.25 },
        ));

        let responses = call(
            &mut app,
            serde_json::json!({"jsonrpc": "2.0", "method": "get_backdrop_status", "id": 4}),
        );

        assert_eq!(
            responses[0].result,
            Some(serde_json::json!({
                "state": "unmounted",
                "fields": [{"name": "starfield", "point_count": 3000, "rotation": [-0.5, -0.25]}]
            }))
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut app = test_app();
        app.world_mut().send_event(IncomingRpcMessage {
            content: "{\"jsonrpc\": ".to_string(),
        });
        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        assert_eq!(rpc.outgoing_responses.len(), 1);
        assert_eq!(rpc.outgoing_responses[0].error.as_ref().unwrap().code, -32700);
        assert_eq!(rpc.outgoing_responses[0].id, None);
    }

    #[test]
    fn wrong_version_is_rejected_before_dispatch() {
        let mut app = test_app();
        let responses = call(
            &mut app,
            serde_json::json!({
                "jsonrpc": "1.0",
                "method": "set_backdrop_mounted",
                "params": {"mounted": true},
                "id": 7
            }),
        );

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].error.as_ref().unwrap().code, -32600);
        assert_eq!(responses[0].id, Some(serde_json::json!(7)));
        assert!(written::<BackdropMountRequest>(&app).is_empty());
    }

    #[test]
    fn missing_method_is_invalid_request() {
        let mut app = test_app();
        let responses = call(&mut app, serde_json::json!({"jsonrpc": "2.0", "id": 8}));

        assert_eq!(responses[0].error.as_ref().unwrap().code, -32600);
        assert_eq!(responses[0].id, Some(serde_json::json!(8)));
    }
}

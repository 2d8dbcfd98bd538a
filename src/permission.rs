use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, thiserror::Error)]
pub enum PermissionError {
    #[error("Access to motion sensors was denied.")]
    Denied,
    #[error("Requesting sensor access failed: {0}")]
    RequestFailed(String),
}

/// Ask for motion-sensor access.
///
/// Platforms that gate sensors behind `DeviceOrientationEvent.requestPermission`
/// (iOS 13+) get the prompt; everywhere else access is implicit. Must be called
/// from a user gesture.
pub async fn request_sensor_access() -> Result<(), PermissionError> {
    let global = js_sys::global();
    let ctor = js_sys::Reflect::get(&global, &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(JsValue::UNDEFINED);
    let request = if ctor.is_undefined() {
        JsValue::UNDEFINED
    } else {
        js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
            .unwrap_or(JsValue::UNDEFINED)
    };
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        log::info!("[permission] no explicit request needed");
        return Ok(());
    };

    let promise = request
        .call0(&ctor)
        .map_err(|e| PermissionError::RequestFailed(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| PermissionError::RequestFailed(format!("{:?}", e)))?;
    let state = JsFuture::from(promise)
        .await
        .map_err(|e| PermissionError::RequestFailed(format!("{:?}", e)))?;

    match state.as_string().as_deref() {
        Some("granted") => {
            log::info!("[permission] granted");
            Ok(())
        }
        other => {
            log::warn!("[permission] state={:?}", other);
            Err(PermissionError::Denied)
        }
    }
}

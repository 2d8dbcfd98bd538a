pub mod lifecycle;
pub mod sensors;
pub mod throttle;

pub use lifecycle::wire_session_lifecycle;
pub use sensors::{wire_sensor_handlers, SensorWiring};
pub use throttle::wire_throttle_hold;

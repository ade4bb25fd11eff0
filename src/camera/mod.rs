pub mod camera_client;
pub mod commands;
pub mod connection;
pub mod response_parser;
pub mod settings;
pub mod transport;

pub use camera_client::{CameraClient, CameraInfo};
pub use commands::CameraCommand;
pub use connection::ConnectionConfig;
pub use settings::{CameraSettings, Orientation, Resolution, VideoMode};
pub use transport::{HttpTransport, Transport, TransportResponse};

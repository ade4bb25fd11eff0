use crate::camera::commands::CameraCommand;
use crate::camera::connection::ConnectionConfig;
use crate::camera::response_parser::parse_assignments;
use crate::camera::settings::{
    self, param_id, CameraSettings, Orientation, Resolution, VideoMode, BRIGHTNESS_WIRE_SCALE,
};
use crate::camera::transport::{HttpTransport, Transport};
use crate::errors::{NetwaveError, NetwaveResult};
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

pub const CAMERA_CONTROL_PATH: &str = "camera_control.cgi";
pub const DECODER_CONTROL_PATH: &str = "decoder_control.cgi";
pub const CAMERA_PARAMS_PATH: &str = "get_camera_params.cgi";
pub const INFO_PATH: &str = "get_params.cgi";
pub const REBOOT_PATH: &str = "reboot.cgi";
pub const FACTORY_RESET_PATH: &str = "restore_factory.cgi";
pub const SNAPSHOT_PATH: &str = "snapshot.cgi";

/// Free-form device info as reported by `get_params.cgi`.
pub type CameraInfo = BTreeMap<String, String>;

/// Client for one Netwave camera with a cache of its last-known state.
///
/// Getters only read the cache; nothing is fetched until `update_*` is called.
/// Setters update the cache only after the camera acknowledges the change.
/// The client is meant to have a single owner; share it behind a lock if needed.
pub struct CameraClient<T: Transport = HttpTransport> {
    connection: ConnectionConfig,
    transport: T,
    settings: CameraSettings,
    info: CameraInfo,
}

impl CameraClient<HttpTransport> {
    /// Builds a client over HTTP. No request is made.
    pub fn new(address: &str, username: &str, password: &str, timeout: Duration) -> NetwaveResult<Self> {
        let connection = ConnectionConfig::new(address, username, password, timeout);
        Self::from_connection(connection)
    }

    pub fn from_connection(connection: ConnectionConfig) -> NetwaveResult<Self> {
        let transport = HttpTransport::new(&connection)?;
        Ok(Self::with_transport(connection, transport))
    }
}

impl<T: Transport> CameraClient<T> {
    pub fn with_transport(connection: ConnectionConfig, transport: T) -> Self {
        debug!("📷 Camera client created for {:?}", connection);
        CameraClient {
            connection,
            transport,
            settings: CameraSettings::default(),
            info: CameraInfo::new(),
        }
    }

    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Brightness as a fraction of the camera scale, in `[0, 0.9375]`.
    pub fn brightness(&self) -> f32 {
        self.settings.brightness as f32 / BRIGHTNESS_WIRE_SCALE as f32
    }

    pub fn contrast(&self) -> u8 {
        self.settings.contrast
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.settings.resolution
    }

    pub fn video_mode(&self) -> VideoMode {
        self.settings.video_mode
    }

    pub fn horizontal_mirror(&self) -> bool {
        self.settings.orientation.horizontal()
    }

    pub fn vertical_mirror(&self) -> bool {
        self.settings.orientation.vertical()
    }

    pub fn orientation(&self) -> u8 {
        self.settings.orientation.bits()
    }

    pub fn info(&self) -> &CameraInfo {
        &self.info
    }

    pub fn alias(&self) -> NetwaveResult<&str> {
        self.info_value("alias")
    }

    pub fn id(&self) -> NetwaveResult<&str> {
        self.info_value("id")
    }

    fn info_value(&self, key: &str) -> NetwaveResult<&str> {
        self.info.get(key).map(String::as_str).ok_or_else(|| {
            if self.info.is_empty() {
                NetwaveError::NotFound(format!("camera info has not been fetched, '{}' unavailable", key))
            } else {
                NetwaveError::NotFound(format!("'{}' not reported by camera", key))
            }
        })
    }

    pub fn set_brightness(&mut self, brightness: i32) -> NetwaveResult<()> {
        let brightness = settings::validate_brightness(brightness)?;
        self.send_video_value(param_id::BRIGHTNESS, brightness as i32 * BRIGHTNESS_WIRE_SCALE)?;
        self.settings.brightness = brightness;
        Ok(())
    }

    pub fn set_contrast(&mut self, contrast: i32) -> NetwaveResult<()> {
        let contrast = settings::validate_contrast(contrast)?;
        self.send_video_value(param_id::CONTRAST, contrast as i32)?;
        self.settings.contrast = contrast;
        Ok(())
    }

    /// Accepts the wire values 2, 8 or 32.
    pub fn set_resolution(&mut self, resolution: i32) -> NetwaveResult<()> {
        self.apply_resolution(Resolution::try_from(resolution)?)
    }

    pub fn apply_resolution(&mut self, resolution: Resolution) -> NetwaveResult<()> {
        self.send_video_value(param_id::RESOLUTION, resolution.wire_value())?;
        self.settings.resolution = Some(resolution);
        Ok(())
    }

    /// Accepts 0 (50Hz), 1 (60Hz) or 2 (outdoor).
    pub fn set_video_mode(&mut self, mode: i32) -> NetwaveResult<()> {
        self.apply_video_mode(VideoMode::try_from(mode)?)
    }

    pub fn apply_video_mode(&mut self, mode: VideoMode) -> NetwaveResult<()> {
        self.send_video_value(param_id::VIDEO_MODE, mode.wire_value())?;
        self.settings.video_mode = mode;
        Ok(())
    }

    pub fn set_orientation(&mut self, orientation: i32) -> NetwaveResult<()> {
        self.apply_orientation(Orientation::try_from(orientation)?)
    }

    fn apply_orientation(&mut self, orientation: Orientation) -> NetwaveResult<()> {
        self.send_video_value(param_id::ORIENTATION, orientation.bits() as i32)?;
        self.settings.orientation = orientation;
        Ok(())
    }

    /// Keeps the cached vertical flag; if the camera was changed elsewhere the cache may be stale.
    pub fn set_mirror_horizontal(&mut self, mirrored: bool) -> NetwaveResult<()> {
        self.apply_orientation(self.settings.orientation.with_horizontal(mirrored))
    }

    /// Keeps the cached horizontal flag; if the camera was changed elsewhere the cache may be stale.
    pub fn set_mirror_vertical(&mut self, mirrored: bool) -> NetwaveResult<()> {
        self.apply_orientation(self.settings.orientation.with_vertical(mirrored))
    }

    /// Like [`Self::set_mirror_horizontal`] but reads the current settings from the camera first.
    pub fn refresh_and_set_mirror_horizontal(&mut self, mirrored: bool) -> NetwaveResult<()> {
        self.update_video_settings()?;
        self.set_mirror_horizontal(mirrored)
    }

    /// Like [`Self::set_mirror_vertical`] but reads the current settings from the camera first.
    pub fn refresh_and_set_mirror_vertical(&mut self, mirrored: bool) -> NetwaveResult<()> {
        self.update_video_settings()?;
        self.set_mirror_vertical(mirrored)
    }

    pub fn send_command(&self, command: CameraCommand) -> NetwaveResult<()> {
        info!("🎮 Sending '{}' (code {}) to {}", command, command.code(), self.connection.address());
        self.send_request(DECODER_CONTROL_PATH, &[("command", command.code().to_string())])?;
        Ok(())
    }

    pub fn stop_movement(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::StopMovement)
    }

    pub fn move_up(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveUp)
    }

    pub fn move_down(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveDown)
    }

    pub fn move_left(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveLeft)
    }

    pub fn move_right(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveRight)
    }

    pub fn move_up_left(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveUpLeft)
    }

    pub fn move_up_right(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveUpRight)
    }

    pub fn move_down_left(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveDownLeft)
    }

    pub fn move_down_right(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveDownRight)
    }

    pub fn move_center(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::MoveCenter)
    }

    pub fn patrol_vertical(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::PatrolVertical)
    }

    pub fn stop_patrol_vertical(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::StopPatrolVertical)
    }

    pub fn patrol_horizontal(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::PatrolHorizontal)
    }

    pub fn stop_patrol_horizontal(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::StopPatrolHorizontal)
    }

    pub fn pelco_patrol_horizontal(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::PelcoPatrolHorizontal)
    }

    pub fn pelco_stop_patrol_horizontal(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::PelcoStopPatrolHorizontal)
    }

    pub fn turn_io_on(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::IoOn)
    }

    pub fn turn_io_off(&self) -> NetwaveResult<()> {
        self.send_command(CameraCommand::IoOff)
    }

    /// Slot is nominally 1-15; the camera decides what to do with anything else.
    pub fn save_preset(&self, slot: i32) -> NetwaveResult<()> {
        self.send_command(CameraCommand::SavePreset(slot))
    }

    pub fn recall_preset(&self, slot: i32) -> NetwaveResult<()> {
        self.send_command(CameraCommand::RecallPreset(slot))
    }

    pub fn restart(&self) -> NetwaveResult<()> {
        warn!("🔁 Restarting camera at {}", self.connection.address());
        self.send_request(REBOOT_PATH, &[])?;
        Ok(())
    }

    pub fn factory_reset(&self) -> NetwaveResult<()> {
        warn!("🧨 Factory resetting camera at {}", self.connection.address());
        self.send_request(FACTORY_RESET_PATH, &[])?;
        Ok(())
    }

    /// Raw image bytes from `snapshot.cgi`, not decoded.
    pub fn snapshot(&self) -> NetwaveResult<Vec<u8>> {
        let bytes = self.send_request(SNAPSHOT_PATH, &[])?;
        info!("📸 Received snapshot of {} bytes from {}", bytes.len(), self.connection.address());
        Ok(bytes)
    }

    /// Refreshes info, then video settings.
    pub fn update_full(&mut self) -> NetwaveResult<()> {
        self.update_info()?;
        self.update_video_settings()
    }

    pub fn update_video_settings(&mut self) -> NetwaveResult<()> {
        let url = self.connection.url_for(CAMERA_PARAMS_PATH);
        let values = self.send_fetch(CAMERA_PARAMS_PATH, &[])?;
        self.settings = CameraSettings::from_assignments(&values, &url)?;
        debug!("Video settings refreshed: {:?}", self.settings);
        Ok(())
    }

    pub fn update_info(&mut self) -> NetwaveResult<()> {
        let values = self.send_fetch(INFO_PATH, &[])?;
        self.info = values.into_iter().collect();
        info!("ℹ️ Camera info refreshed with {} entries", self.info.len());
        Ok(())
    }

    fn send_video_value(&self, param: i32, value: i32) -> NetwaveResult<()> {
        debug!("🎛️ Setting video parameter {} to {}", param, value);
        self.send_request(CAMERA_CONTROL_PATH, &[("param", param.to_string()), ("value", value.to_string())])?;
        Ok(())
    }

    /// GETs `path` and parses the body as `key=value;` assignments.
    pub fn send_fetch(&self, path: &str, params: &[(&str, String)]) -> NetwaveResult<HashMap<String, String>> {
        let body = self.send_request(path, params)?;
        let text = String::from_utf8_lossy(&body);
        let values = parse_assignments(&text);
        debug!("Parsed {} assignments from {}", values.len(), path);
        Ok(values)
    }

    /// GETs `path` and returns the body of a 200 response.
    pub fn send_request(&self, path: &str, params: &[(&str, String)]) -> NetwaveResult<Vec<u8>> {
        let start_time = Instant::now();
        let url = self.connection.url_for(path);
        let response = self.transport.get(&url, params)?;
        match response.status {
            200 => {
                debug!("✅ {} answered in {:?}", response.url, start_time.elapsed());
                Ok(response.body)
            }
            401 => {
                warn!("🔒 Authentication failed for {}", response.url);
                Err(NetwaveError::AuthenticationFailed { url: response.url })
            }
            status => {
                warn!("❌ Request to {} failed with status {}", response.url, status);
                Err(NetwaveError::RequestFailed { url: response.url, status })
            }
        }
    }
}

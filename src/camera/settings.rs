use crate::errors::{NetwaveError, NetwaveResult};
use std::collections::HashMap;
use std::fmt;

pub const BRIGHTNESS_MAX: i32 = 15;
pub const CONTRAST_MAX: i32 = 6;
/// Device-side brightness is reported and set on a 0-255 scale.
pub const BRIGHTNESS_WIRE_SCALE: i32 = 16;
pub const BRIGHTNESS_WIRE_MAX: i32 = 255;

/// Wire parameter ids for `camera_control.cgi`.
pub mod param_id {
    pub const RESOLUTION: i32 = 0;
    pub const BRIGHTNESS: i32 = 1;
    pub const CONTRAST: i32 = 2;
    pub const VIDEO_MODE: i32 = 3;
    pub const ORIENTATION: i32 = 5;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 160x120
    Qqvga,
    /// 320x240
    Qvga,
    /// 640x480
    Vga,
}

impl Resolution {
    pub fn wire_value(self) -> i32 {
        match self {
            Resolution::Qqvga => 2,
            Resolution::Qvga => 8,
            Resolution::Vga => 32,
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Resolution::Qqvga => (160, 120),
            Resolution::Qvga => (320, 240),
            Resolution::Vga => (640, 480),
        }
    }
}

impl TryFrom<i32> for Resolution {
    type Error = NetwaveError;

    fn try_from(value: i32) -> NetwaveResult<Self> {
        match value {
            2 => Ok(Resolution::Qqvga),
            8 => Ok(Resolution::Qvga),
            32 => Ok(Resolution::Vga),
            other => Err(NetwaveError::InvalidArgument(format!(
                "Resolution must be 2, 8, or 32 (got {})",
                other
            ))),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{}x{}", w, h)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoMode {
    #[default]
    Hz50,
    Hz60,
    Outdoor,
}

impl VideoMode {
    pub fn wire_value(self) -> i32 {
        match self {
            VideoMode::Hz50 => 0,
            VideoMode::Hz60 => 1,
            VideoMode::Outdoor => 2,
        }
    }
}

impl TryFrom<i32> for VideoMode {
    type Error = NetwaveError;

    fn try_from(value: i32) -> NetwaveResult<Self> {
        match value {
            0 => Ok(VideoMode::Hz50),
            1 => Ok(VideoMode::Hz60),
            2 => Ok(VideoMode::Outdoor),
            other => Err(NetwaveError::InvalidArgument(format!(
                "Video mode must be from 0 to 2 (got {})",
                other
            ))),
        }
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoMode::Hz50 => write!(f, "50Hz"),
            VideoMode::Hz60 => write!(f, "60Hz"),
            VideoMode::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// Two-bit mirror state. Bit 0 is the vertical flag, bit 1 the horizontal flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orientation(u8);

impl Orientation {
    const VERTICAL: u8 = 0b01;
    const HORIZONTAL: u8 = 0b10;

    pub fn from_mirrors(horizontal: bool, vertical: bool) -> Self {
        let mut bits = 0;
        if horizontal {
            bits |= Self::HORIZONTAL;
        }
        if vertical {
            bits |= Self::VERTICAL;
        }
        Orientation(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn horizontal(self) -> bool {
        self.0 & Self::HORIZONTAL != 0
    }

    pub fn vertical(self) -> bool {
        self.0 & Self::VERTICAL != 0
    }

    pub fn with_horizontal(self, mirrored: bool) -> Self {
        Self::from_mirrors(mirrored, self.vertical())
    }

    pub fn with_vertical(self, mirrored: bool) -> Self {
        Self::from_mirrors(self.horizontal(), mirrored)
    }
}

impl TryFrom<i32> for Orientation {
    type Error = NetwaveError;

    fn try_from(value: i32) -> NetwaveResult<Self> {
        if (0..=3).contains(&value) {
            Ok(Orientation(value as u8))
        } else {
            Err(NetwaveError::InvalidArgument(format!(
                "Orientation must be from 0 to 3 (got {})",
                value
            )))
        }
    }
}

pub fn validate_brightness(brightness: i32) -> NetwaveResult<u8> {
    if (0..=BRIGHTNESS_MAX).contains(&brightness) {
        Ok(brightness as u8)
    } else {
        Err(NetwaveError::InvalidArgument(format!(
            "Brightness must be from 0 to {} (got {})",
            BRIGHTNESS_MAX, brightness
        )))
    }
}

pub fn validate_contrast(contrast: i32) -> NetwaveResult<u8> {
    if (0..=CONTRAST_MAX).contains(&contrast) {
        Ok(contrast as u8)
    } else {
        Err(NetwaveError::InvalidArgument(format!(
            "Contrast must be from 0 to {} (got {})",
            CONTRAST_MAX, contrast
        )))
    }
}

/// Last-known video settings of a camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraSettings {
    /// Camera-side 0-15 scale.
    pub brightness: u8,
    pub contrast: u8,
    /// `None` until set or read back from the device.
    pub resolution: Option<Resolution>,
    pub video_mode: VideoMode,
    pub orientation: Orientation,
}

impl CameraSettings {
    /// Decodes the assignments returned by `get_camera_params.cgi`.
    ///
    /// Every field must be present and valid, otherwise nothing is returned.
    pub fn from_assignments(values: &HashMap<String, String>, url: &str) -> NetwaveResult<Self> {
        let raw_brightness = read_int(values, "brightness", url)?;
        if !(0..=BRIGHTNESS_WIRE_MAX).contains(&raw_brightness) {
            return Err(NetwaveError::InvalidResponse {
                url: url.to_string(),
                details: format!(
                    "'brightness': device value must be from 0 to {} (got {})",
                    BRIGHTNESS_WIRE_MAX, raw_brightness
                ),
            });
        }
        let brightness = validate_brightness(raw_brightness / BRIGHTNESS_WIRE_SCALE)
            .map_err(|e| invalid_field(url, "brightness", e))?;
        let contrast = validate_contrast(read_int(values, "contrast", url)?)
            .map_err(|e| invalid_field(url, "contrast", e))?;
        let resolution = Resolution::try_from(read_int(values, "resolution", url)?)
            .map_err(|e| invalid_field(url, "resolution", e))?;
        let video_mode = VideoMode::try_from(read_int(values, "mode", url)?)
            .map_err(|e| invalid_field(url, "mode", e))?;
        let orientation = Orientation::try_from(read_int(values, "flip", url)?)
            .map_err(|e| invalid_field(url, "flip", e))?;

        Ok(CameraSettings {
            brightness,
            contrast,
            resolution: Some(resolution),
            video_mode,
            orientation,
        })
    }
}

fn read_int(values: &HashMap<String, String>, key: &str, url: &str) -> NetwaveResult<i32> {
    let raw = values
        .get(key)
        .ok_or_else(|| NetwaveError::NotFound(format!("'{}' missing from response of {}", key, url)))?;
    raw.trim().parse::<i32>().map_err(|e| NetwaveError::InvalidResponse {
        url: url.to_string(),
        details: format!("'{}' value '{}' is not an integer: {}", key, raw, e),
    })
}

fn invalid_field(url: &str, key: &str, err: NetwaveError) -> NetwaveError {
    NetwaveError::InvalidResponse {
        url: url.to_string(),
        details: format!("'{}': {}", key, err),
    }
}

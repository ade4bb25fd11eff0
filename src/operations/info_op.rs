use crate::camera::camera_client::CameraClient;
use crate::camera::transport::Transport;
use anyhow::Result;
use std::io::Write;

pub fn handle_info_cli<T: Transport>(client: &mut CameraClient<T>, out: &mut dyn Write) -> Result<()> {
    client.update_info()?;
    for (key, value) in client.info() {
        writeln!(out, "{}={}", key, value)?;
    }
    Ok(())
}

pub fn handle_settings_cli<T: Transport>(client: &mut CameraClient<T>, out: &mut dyn Write) -> Result<()> {
    client.update_video_settings()?;
    let resolution = client
        .resolution()
        .map(|r| format!("{} ({})", r, r.wire_value()))
        .unwrap_or_else(|| "unknown".to_string());
    writeln!(out, "brightness={} ({:.4})", client.settings().brightness, client.brightness())?;
    writeln!(out, "contrast={}", client.contrast())?;
    writeln!(out, "resolution={}", resolution)?;
    writeln!(out, "mode={} ({})", client.video_mode(), client.video_mode().wire_value())?;
    writeln!(out, "orientation={}", client.orientation())?;
    writeln!(out, "mirror_horizontal={}", client.horizontal_mirror())?;
    writeln!(out, "mirror_vertical={}", client.vertical_mirror())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::connection::{ConnectionConfig, DEFAULT_TIMEOUT};
    use crate::camera::transport::mock::RecordingTransport;

    fn client() -> CameraClient<RecordingTransport> {
        CameraClient::with_transport(
            ConnectionConfig::new("http://cam", "admin", "", DEFAULT_TIMEOUT),
            RecordingTransport::default(),
        )
    }

    #[test]
    fn info_is_printed_sorted() {
        let mut cam = client();
        cam.transport().respond(200, "var id='X1';\nvar alias='Porch';\nvar zz=1;\n");
        let mut out = Vec::new();
        handle_info_cli(&mut cam, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "alias=Porch\nid=X1\nzz=1\n");
    }

    #[test]
    fn settings_are_printed() {
        let mut cam = client();
        cam.transport().respond(
            200,
            "var resolution=8;\nvar brightness=128;\nvar contrast=3;\nvar mode=1;\nvar flip=1;\n",
        );
        let mut out = Vec::new();
        handle_settings_cli(&mut cam, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("brightness=8 (0.5000)"));
        assert!(text.contains("resolution=320x240 (8)"));
        assert!(text.contains("mode=60Hz (1)"));
        assert!(text.contains("mirror_vertical=true"));
    }
}

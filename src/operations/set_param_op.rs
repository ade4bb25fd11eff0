use crate::camera::camera_client::CameraClient;
use crate::camera::transport::Transport;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::info;
use std::io::Write;

pub fn handle_set_cli<T: Transport>(client: &mut CameraClient<T>, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let param = args.get_one::<String>("param").context("Missing parameter name")?;
    let value = *args.get_one::<i32>("value").context("Missing parameter value")?;
    set_param(client, param, value)?;
    writeln!(out, "Sent parameter")?;
    Ok(())
}

pub fn set_param<T: Transport>(client: &mut CameraClient<T>, param: &str, value: i32) -> Result<()> {
    info!("🎛️ Setting '{}' to {}", param, value);
    match param {
        "resolution" => client.set_resolution(value)?,
        "orientation" => client.set_orientation(value)?,
        "brightness" => client.set_brightness(value)?,
        "contrast" => client.set_contrast(value)?,
        "mode" => client.set_video_mode(value)?,
        "mirror_horizontal" => client.set_mirror_horizontal(value != 0)?,
        "mirror_vertical" => client.set_mirror_vertical(value != 0)?,
        other => bail!("Unknown parameter '{}'", other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::connection::{ConnectionConfig, DEFAULT_TIMEOUT};
    use crate::camera::transport::mock::RecordingTransport;
    use crate::errors::NetwaveError;

    fn client() -> CameraClient<RecordingTransport> {
        CameraClient::with_transport(
            ConnectionConfig::new("http://cam", "admin", "", DEFAULT_TIMEOUT),
            RecordingTransport::default(),
        )
    }

    #[test]
    fn routes_each_parameter() {
        let mut cam = client();
        set_param(&mut cam, "brightness", 4).unwrap();
        assert_eq!(cam.transport().last().unwrap().param("value"), Some("64"));
        set_param(&mut cam, "mode", 1).unwrap();
        assert_eq!(cam.transport().last().unwrap().param("param"), Some("3"));
        set_param(&mut cam, "mirror_horizontal", 1).unwrap();
        set_param(&mut cam, "mirror_vertical", 7).unwrap();
        assert_eq!(cam.orientation(), 3);
    }

    #[test]
    fn invalid_value_sends_nothing() {
        let mut cam = client();
        let err = set_param(&mut cam, "resolution", 16).unwrap_err();
        assert!(matches!(err.downcast_ref::<NetwaveError>(), Some(NetwaveError::InvalidArgument(_))));
        assert_eq!(cam.transport().count(), 0);
    }
}

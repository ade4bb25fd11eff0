use crate::app_config::ApplicationConfig;
use crate::camera::camera_client::CameraClient;
use crate::camera::transport::Transport;
use crate::common::file_utils;
use anyhow::Result;
use clap::ArgMatches;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

pub fn handle_snapshot_cli<T: Transport>(
    app_settings: &ApplicationConfig,
    client: &CameraClient<T>,
    args: &ArgMatches,
    out: &mut dyn Write,
) -> Result<()> {
    let output = args.get_one::<String>("output").map(String::as_str);
    let path = save_snapshot(app_settings, client, output)?;
    writeln!(out, "Saved snapshot to {}", path.display())?;
    Ok(())
}

pub fn save_snapshot<T: Transport>(
    app_settings: &ApplicationConfig,
    client: &CameraClient<T>,
    output: Option<&str>,
) -> Result<PathBuf> {
    let bytes = client.snapshot()?;
    // Alias is only known if info was fetched; the snapshot itself never needs it.
    let base_name = client.alias().unwrap_or("netwave");
    let path = file_utils::resolve_snapshot_path(
        output,
        &app_settings.snapshot_directory,
        base_name,
        &app_settings.filename_timestamp_format,
    )?;
    debug!("Writing {} snapshot bytes to {}", bytes.len(), path.display());
    file_utils::write_snapshot(&path, &bytes)?;
    Ok(path)
}

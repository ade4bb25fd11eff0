use crate::camera::camera_client::CameraClient;
use crate::camera::commands::CameraCommand;
use crate::camera::transport::Transport;
use crate::cli::{FACTORY_RESET_COMMAND, RESTART_COMMAND};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::info;
use std::io::Write;
use std::time::Instant;

pub fn handle_command_cli<T: Transport>(client: &CameraClient<T>, args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let name = args.get_one::<String>("name").context("Missing command name")?;
    let preset = args.get_one::<i32>("preset").copied().unwrap_or(1);
    run_command(client, name, preset)?;
    writeln!(out, "Executed command")?;
    Ok(())
}

pub fn run_command<T: Transport>(client: &CameraClient<T>, name: &str, preset: i32) -> Result<()> {
    let start_time = Instant::now();
    match name {
        RESTART_COMMAND => client.restart()?,
        FACTORY_RESET_COMMAND => client.factory_reset()?,
        other => match CameraCommand::from_name(other, preset) {
            Some(command) => client.send_command(command)?,
            None => bail!("Unknown command '{}'", other),
        },
    }
    info!("✅ Command '{}' acknowledged in {:?}", name, start_time.elapsed());
    Ok(())
}

use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use netwave::cli;
use netwave::common::logging_setup;
use netwave::config_loader;
use netwave::core::camera_manager::CameraManager;
use netwave::operations::{camera_command_op, info_op, op_helper, set_param_op, snapshot_op};
use std::io::Write;
use std::time::Instant;

fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());
    let master_config = match config_loader::load_config_or_default(config_path) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), &matches);
            cfg
        }
        Err(e) => {
            logging_setup::initialize_logging(None, &matches);
            error!("❌ Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    let camera_manager = CameraManager::new(&master_config).context("Failed to initialize CameraManager")?;
    let mut client = op_helper::build_client(&camera_manager, &matches)?;

    let (operation_name, sub_matches) = matches.subcommand().context("No subcommand provided")?;
    debug!("🎬 Dispatching to subcommand: {}", operation_name);
    let op_start_time = Instant::now();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let op_result: Result<()> = match operation_name {
        "command" => camera_command_op::handle_command_cli(&client, sub_matches, &mut out),
        "set" => set_param_op::handle_set_cli(&mut client, sub_matches, &mut out),
        "info" => info_op::handle_info_cli(&mut client, &mut out),
        "settings" => info_op::handle_settings_cli(&mut client, &mut out),
        "snapshot" => snapshot_op::handle_snapshot_cli(&master_config.app_settings, &client, sub_matches, &mut out),
        other => bail!("Subcommand '{}' not implemented.", other),
    };
    out.flush()?;

    if let Err(e) = op_result {
        error!("❌ Operation '{}' failed after {:?}: {:#}", operation_name, op_start_time.elapsed(), e);
        return Err(e.context(format!("'{}' failed", operation_name)));
    }
    info!("🏁 Operation '{}' finished in {:?}.", operation_name, main_start_time.elapsed());
    Ok(())
}

use crate::camera::camera_client::CameraClient;
use crate::camera::connection::ConnectionConfig;
use crate::core::camera_manager::{CameraManager, DirectTarget};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use std::time::Instant;

/// Works out which camera the top-level arguments point at.
pub fn resolve_connection(camera_manager: &CameraManager, matches: &ArgMatches) -> Result<ConnectionConfig> {
    let target = DirectTarget {
        address: matches.get_one::<String>("address").cloned(),
        password: matches.get_one::<String>("password").cloned(),
        username: matches.get_one::<String>("user").cloned(),
        timeout_seconds: matches.get_one::<u64>("timeout").copied(),
    };

    match matches.get_one::<String>("camera") {
        Some(name) => {
            debug!("🎯 Using configured camera '{}'", name);
            if let (Some(address), Some(_)) = (&target.address, &target.password) {
                bail!(
                    "--camera {} takes its address from the config; unexpected address argument '{}'",
                    name,
                    address
                );
            }
            // With --camera, a lone positional is taken as the password.
            let overrides = DirectTarget {
                password: target.password.clone().or_else(|| target.address.clone()),
                address: None,
                ..target
            };
            camera_manager.connection_for(name, &overrides)
        }
        None => camera_manager.direct_connection(&target),
    }
}

pub fn build_client(camera_manager: &CameraManager, matches: &ArgMatches) -> Result<CameraClient> {
    let start_time = Instant::now();
    let connection = resolve_connection(camera_manager, matches)?;
    let address = connection.address().to_string();
    let client = CameraClient::from_connection(connection)
        .with_context(|| format!("Failed to create client for {}", address))?;
    info!("🔌 Client ready for {} in {:?}", address, start_time.elapsed());
    Ok(client)
}

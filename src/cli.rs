use crate::camera::commands::CameraCommand;
use clap::{Arg, ArgAction, Command};
use log::debug;

pub const RESTART_COMMAND: &str = "restart_camera";
pub const FACTORY_RESET_COMMAND: &str = "factory_reset_camera";

pub const SETTABLE_PARAMS: [&str; 7] = [
    "resolution",
    "orientation",
    "brightness",
    "contrast",
    "mode",
    "mirror_horizontal",
    "mirror_vertical",
];

pub fn command_names() -> Vec<&'static str> {
    let mut names = CameraCommand::NAMES.to_vec();
    names.push(RESTART_COMMAND);
    names.push(FACTORY_RESET_COMMAND);
    names
}

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    Command::new("netwave")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Control a Netwave IP camera over its HTTP/CGI interface.")
        .subcommand_required(true)
        .arg(
            Arg::new("address")
                .value_name("ADDRESS")
                .help("Address of camera, e.g. http://192.168.1.20:81 (not needed with --camera)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("password")
                .value_name("PASSWORD")
                .help("Password of camera user")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("user")
                .short('u')
                .long("user")
                .value_name("USER")
                .help("Username of camera user (default: admin)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds (default: 5)")
                .value_parser(clap::value_parser!(u64).range(1..))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("camera")
                .long("camera")
                .value_name("NAME")
                .help("Use a camera defined in the configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file (default: netwave.yaml if present)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("command")
                .about("Execute a command")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .required(true)
                        .help("Command name")
                        .value_parser(command_names())
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .value_name("N")
                        .help("Preset id for saved position (1-15)")
                        .default_value("1")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i32))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set a camera parameter")
                .arg(
                    Arg::new("param")
                        .value_name("PARAM")
                        .required(true)
                        .help("Parameter name")
                        .value_parser(SETTABLE_PARAMS)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("value")
                        .value_name("VALUE")
                        .required(true)
                        .help("Parameter value")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i32))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("info").about("Get camera info"))
        .subcommand(Command::new("settings").about("Read the camera's current video settings"))
        .subcommand(
            Command::new("snapshot")
                .about("Save a raw snapshot image from the camera")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("File or directory to write to (default: snapshot_directory from config)")
                        .action(ArgAction::Set),
                ),
        )
}

use std::fmt;

/// Actions sent to `decoder_control.cgi` as a single `command` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    StopMovement,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveUpLeft,
    MoveUpRight,
    MoveDownLeft,
    MoveDownRight,
    MoveCenter,
    PatrolVertical,
    StopPatrolVertical,
    PatrolHorizontal,
    StopPatrolHorizontal,
    PelcoPatrolHorizontal,
    PelcoStopPatrolHorizontal,
    IoOn,
    IoOff,
    /// Store the current position in a slot (nominally 1-15, not checked here).
    SavePreset(i32),
    /// Return to a stored slot (nominally 1-15, not checked here).
    RecallPreset(i32),
}

impl CameraCommand {
    /// Command names accepted by [`CameraCommand::from_name`].
    pub const NAMES: [&'static str; 20] = [
        "stop_movement",
        "move_up",
        "move_down",
        "move_left",
        "move_right",
        "move_up_left",
        "move_up_right",
        "move_down_left",
        "move_down_right",
        "move_center",
        "patrol_vertical",
        "stop_patrol_vertical",
        "patrol_horizontal",
        "stop_patrol_horizontal",
        "pelco_patrol_horizontal",
        "pelco_stop_patrol_horizontal",
        "turn_io_on",
        "turn_io_off",
        "set_preset",
        "recall_preset",
    ];

    /// Wire code. Preset arithmetic is done in `i64` so any slot maps to a code.
    pub fn code(self) -> i64 {
        match self {
            CameraCommand::MoveUp => 0,
            CameraCommand::StopMovement => 1,
            CameraCommand::MoveDown => 2,
            CameraCommand::MoveLeft => 4,
            CameraCommand::MoveRight => 6,
            CameraCommand::PelcoPatrolHorizontal => 20,
            CameraCommand::PelcoStopPatrolHorizontal => 21,
            CameraCommand::MoveCenter => 25,
            CameraCommand::PatrolVertical => 26,
            CameraCommand::StopPatrolVertical => 27,
            CameraCommand::PatrolHorizontal => 28,
            CameraCommand::StopPatrolHorizontal => 29,
            CameraCommand::MoveUpLeft => 90,
            CameraCommand::MoveUpRight => 91,
            CameraCommand::MoveDownLeft => 92,
            CameraCommand::MoveDownRight => 93,
            CameraCommand::IoOn => 94,
            CameraCommand::IoOff => 95,
            CameraCommand::SavePreset(slot) => 28 + 2 * i64::from(slot),
            CameraCommand::RecallPreset(slot) => 29 + 2 * i64::from(slot),
        }
    }

    /// Looks up a command by its CLI name. `preset` is only used by the preset commands.
    pub fn from_name(name: &str, preset: i32) -> Option<Self> {
        let command = match name {
            "stop_movement" => CameraCommand::StopMovement,
            "move_up" => CameraCommand::MoveUp,
            "move_down" => CameraCommand::MoveDown,
            "move_left" => CameraCommand::MoveLeft,
            "move_right" => CameraCommand::MoveRight,
            "move_up_left" => CameraCommand::MoveUpLeft,
            "move_up_right" => CameraCommand::MoveUpRight,
            "move_down_left" => CameraCommand::MoveDownLeft,
            "move_down_right" => CameraCommand::MoveDownRight,
            "move_center" => CameraCommand::MoveCenter,
            "patrol_vertical" => CameraCommand::PatrolVertical,
            "stop_patrol_vertical" => CameraCommand::StopPatrolVertical,
            "patrol_horizontal" => CameraCommand::PatrolHorizontal,
            "stop_patrol_horizontal" => CameraCommand::StopPatrolHorizontal,
            "pelco_patrol_horizontal" => CameraCommand::PelcoPatrolHorizontal,
            "pelco_stop_patrol_horizontal" => CameraCommand::PelcoStopPatrolHorizontal,
            "turn_io_on" => CameraCommand::IoOn,
            "turn_io_off" => CameraCommand::IoOff,
            "set_preset" => CameraCommand::SavePreset(preset),
            "recall_preset" => CameraCommand::RecallPreset(preset),
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for CameraCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraCommand::SavePreset(slot) => write!(f, "save preset {}", slot),
            CameraCommand::RecallPreset(slot) => write!(f, "recall preset {}", slot),
            other => write!(f, "{:?}", other),
        }
    }
}

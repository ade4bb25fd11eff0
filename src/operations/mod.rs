pub mod camera_command_op;
pub mod info_op;
pub mod op_helper;
pub mod set_param_op;
pub mod snapshot_op;

mod command_result;
pub mod config_links;
pub mod context;
pub mod helper;
pub mod init;
pub mod links;
pub mod unused_assets;

pub use command_result::*;

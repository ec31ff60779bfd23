//! Command implementations for the Huffpress CLI.

pub mod compress;
pub mod decompress;
pub mod info;
pub mod verify;

pub use compress::{CompressOptions, cmd_compress};
pub use decompress::{DecompressOptions, cmd_decompress};
pub use info::cmd_info;
pub use verify::cmd_verify;

mod handle_decode;
mod handle_encode;
mod handle_inspect;

pub use handle_decode::{ScanConfig, handle_decode_command};
pub use handle_encode::handle_encode_command;
pub use handle_inspect::handle_inspect_command;

pub mod cancel;
pub mod exchange;
pub mod initialize_escrow;

pub use cancel::*;
pub use exchange::*;
pub use initialize_escrow::*;

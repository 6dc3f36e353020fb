pub mod multisig;
pub mod transaction;

pub use multisig::*;
pub use transaction::*;

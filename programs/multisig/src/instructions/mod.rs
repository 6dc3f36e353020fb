// Instructions module
// - create_multisig
// - create_transaction
// - approve
// - execute

pub mod approve;
pub mod create_multisig;
pub mod create_transaction;
pub mod execute;

pub use approve::*;
pub use create_multisig::*;
pub use create_transaction::*;
pub use execute::*;

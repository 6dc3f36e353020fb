pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["multisig", creator, multisig_id]
pub const MULTISIG: &[u8] = b"multisig";

// Seeds for PDA derivation: ["transaction", multisig, transaction_id]
pub const TRANSACTION: &[u8] = b"transaction";

// Fixed salt for the derived signing authority: ["authority", multisig]
pub const AUTHORITY: &[u8] = b"authority";

// Maximum number of owners allowed in a multisig
pub const MAX_OWNERS: usize = 10;

// Ceiling on the stored instruction payload
// Bounds the rent cost of a transaction account
pub const MAX_INSTRUCTION_DATA: usize = 1024;

use anchor_lang::prelude::*;

#[error_code]
pub enum MultisigError {
    // Creation errors
    #[msg("Threshold must be between 1 and the number of owners")]
    InvalidThreshold,

    #[msg("Owner list contains a duplicate key")]
    DuplicateOwner,

    #[msg("Owner list exceeds the maximum size")]
    TooManyOwners,

    #[msg("Instruction payload exceeds the maximum size")]
    PayloadTooLarge,

    // Approval errors
    #[msg("Signer is not an owner of this multisig")]
    UnauthorizedApprover,

    #[msg("Transaction does not belong to this multisig")]
    MismatchedMultisig,

    // Execution errors
    #[msg("Transaction has not reached the required number of approvals")]
    ThresholdNotMet,

    #[msg("Transaction was already executed")]
    AlreadyExecuted,

    // Reserved as a stable name for clients; the program itself never
    // raises it and lets a failing CPI propagate the target program's
    // own error instead
    #[msg("Inner instruction dispatch failed")]
    DownstreamDispatchFailure,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}

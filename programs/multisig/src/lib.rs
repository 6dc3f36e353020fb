use anchor_lang::prelude::*;
pub mod instructions;
pub mod errors;
pub mod state;
pub mod constants;

pub use instructions::*;
pub use errors::*;
pub use state::*;

declare_id!("Fdru6jw1KxUBEpkLeXSMikY2ae6ns2MK48DMAZCMrMHW");

#[program]
pub mod quorum_multisig {
    use super::*;

    // Initialize a new multisig wallet
    // Owner set and threshold are fixed for the lifetime of the account
    // Also derives the signing authority PDA and stores its bump
    pub fn create_multisig(
        ctx: Context<CreateMultisig>,
        multisig_id: u64,
        owners: Vec<Pubkey>,
        threshold: u8,
    ) -> Result<()> {
        ctx.accounts.create_multisig(multisig_id, owners, threshold, &ctx.bumps)
    }

    // Propose an instruction for the multisig to execute
    // Any payer may propose; only owners can approve
    // The stored payload is immutable after creation
    pub fn create_transaction(
        ctx: Context<CreateTransaction>,
        target_program: Pubkey,
        instruction_data: Vec<u8>,
    ) -> Result<()> {
        ctx.accounts.create_transaction(target_program, instruction_data, &ctx.bumps)
    }

    // Record an owner's approval on a pending transaction
    // Idempotent: a repeat approval from the same owner is a no-op
    pub fn approve(ctx: Context<Approve>) -> Result<()> {
        ctx.accounts.approve()
    }

    // Dispatch the stored instruction once quorum is reached
    // Remaining accounts supply the inner instruction's account list
    // The authority PDA signs, so the call comes from the multisig itself
    pub fn execute<'info>(ctx: Context<'_, '_, 'info, 'info, Execute<'info>>) -> Result<()> {
        ctx.accounts.execute(ctx.remaining_accounts)
    }
}

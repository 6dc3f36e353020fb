use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Approve Instruction
//
// Records an owner's approval on a pending transaction using the bitmap.
// Approvals are idempotent: a repeat from the same owner is a successful
// no-op, so concurrent or resubmitted approvals merge cleanly.
//
// Approving after execution is also permitted; the bit is still recorded
// but execution is never re-triggered.

#[derive(Accounts)]
pub struct Approve<'info> {
    // Owner recording the approval
    // Must be a member of the multisig's owner set
    pub approver: Signer<'info>,

    // Multisig account - holds the owner set for validation
    #[account(
        seeds = [
            MULTISIG,
            multisig_account.creator.as_ref(),
            &multisig_account.multisig_id.to_le_bytes(),
        ],
        bump = multisig_account.bump,
    )]
    pub multisig_account: Account<'info, Multisig>,

    // Transaction being approved
    // Not seeds-constrained against the multisig so a cross-multisig mix-up
    // surfaces as MismatchedMultisig rather than a raw seeds violation
    #[account(mut)]
    pub transaction: Account<'info, Transaction>,
}

impl<'info> Approve<'info> {
    pub fn approve(&mut self) -> Result<()> {
        // SECURITY CHECKS

        // 1. Transaction-Multisig Relationship
        // The transaction must be bound to the supplied multisig
        require!(
            self.transaction.multisig == self.multisig_account.key(),
            MultisigError::MismatchedMultisig
        );

        // 2. Owner Membership
        // Only owners may approve; rejected before any state change
        let owner_index = self
            .multisig_account
            .owner_index(&self.approver.key())
            .ok_or(MultisigError::UnauthorizedApprover)?;

        // 3. Record Approval
        // Sets the owner's bit; false means the bit was already set
        if self.transaction.approve(owner_index) {
            msg!(
                "approval recorded: {}/{}",
                self.transaction.approval_count,
                self.multisig_account.threshold
            );
        }

        Ok(())
    }
}

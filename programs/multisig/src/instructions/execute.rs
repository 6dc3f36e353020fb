use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke_signed,
};
use crate::{state::*, errors::*, constants::*};

// Execute Instruction
//
// Dispatches the stored instruction once quorum is reached.
//
// remaining_accounts supplies the inner instruction's account list fresh at
// execution time, target program account included. The derived authority PDA
// is forced to signer in the inner metas and signs via invoke_signed, so the
// downstream call is authorized by the multisig rather than any one owner.
//
// The executed flag is checked and set within a single runtime transaction:
// of two racing execute calls exactly one dispatches, the other fails with
// AlreadyExecuted. A failing CPI rolls the flag back with everything else,
// leaving the proposal open for retry.

#[derive(Accounts)]
pub struct Execute<'info> {
    // Multisig the transaction is bound to
    #[account(
        seeds = [
            MULTISIG,
            multisig_account.creator.as_ref(),
            &multisig_account.multisig_id.to_le_bytes(),
        ],
        bump = multisig_account.bump,
    )]
    pub multisig_account: Account<'info, Multisig>,

    // Transaction being executed
    #[account(mut)]
    pub transaction: Account<'info, Transaction>,

    // Derived signing authority
    // Seeds: ["authority", multisig_account]
    /// CHECK: Seeds constraint pins this to the multisig's authority PDA;
    /// it signs the CPI and is never read
    #[account(
        seeds = [
            AUTHORITY,
            multisig_account.key().as_ref(),
        ],
        bump = multisig_account.authority_bump,
    )]
    pub authority: UncheckedAccount<'info>,
}

impl<'info> Execute<'info> {
    pub fn execute(&mut self, remaining_accounts: &[AccountInfo<'info>]) -> Result<()> {
        // SECURITY CHECKS

        // 1. Transaction-Multisig Relationship
        require!(
            self.transaction.multisig == self.multisig_account.key(),
            MultisigError::MismatchedMultisig
        );

        // 2. Replay Guard
        // A transaction dispatches at most once, however many approvals
        // arrive afterwards
        require!(!self.transaction.executed, MultisigError::AlreadyExecuted);

        // 3. Quorum Check
        require!(
            self.transaction.quorum_reached(self.multisig_account.threshold),
            MultisigError::ThresholdNotMet
        );

        // Build the inner instruction from the stored payload and the
        // caller-supplied account list. The authority PDA is forced to
        // signer; every other account keeps the caller's flags. Validating
        // the list against what the payload expects is the target program's
        // job, a mismatch fails the CPI and rolls everything back.
        let multisig_key = self.multisig_account.key();
        let authority_key = self.authority.key();

        // Only the executable target program entry is excluded from the
        // metas; a non-executable account that happens to share its key
        // still passes through as an ordinary meta
        let accounts: Vec<AccountMeta> = remaining_accounts
            .iter()
            .filter(|account| {
                !(account.key == &self.transaction.target_program && account.executable)
            })
            .map(|account| AccountMeta {
                pubkey: *account.key,
                is_signer: account.key == &authority_key || account.is_signer,
                is_writable: account.is_writable,
            })
            .collect();

        let ix = Instruction {
            program_id: self.transaction.target_program,
            accounts,
            data: self.transaction.instruction_data.clone(),
        };

        let signer_seeds: &[&[&[u8]]] = &[&[
            AUTHORITY,
            multisig_key.as_ref(),
            &[self.multisig_account.authority_bump],
        ]];

        invoke_signed(&ix, remaining_accounts, signer_seeds)?;

        // 4. Mark Executed
        // Same atomic state transition as the dispatch above
        self.transaction.executed = true;

        msg!("transaction {} executed", self.transaction.transaction_id);

        Ok(())
    }
}

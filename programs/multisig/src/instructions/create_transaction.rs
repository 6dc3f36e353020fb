use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Create Transaction Instruction
//
// Proposes an instruction for the multisig to execute later.
// The target program and payload are stored once and never change;
// the account list for the inner call is supplied fresh at execution time.
//
// The proposer is not required to be an owner: anyone able to pay rent may
// propose, and a proposal only becomes executable once a quorum of owners
// has approved it.

#[derive(Accounts)]
pub struct CreateTransaction<'info> {
    // Proposer - pays rent for the transaction account
    #[account(mut)]
    pub proposer: Signer<'info>,

    // Multisig the proposal is bound to
    // Anchor's owner and discriminator checks reject fake multisig accounts
    #[account(
        mut,
        seeds = [
            MULTISIG,
            multisig_account.creator.as_ref(),
            &multisig_account.multisig_id.to_le_bytes(),
        ],
        bump = multisig_account.bump,
    )]
    pub multisig_account: Account<'info, Multisig>,

    // Transaction PDA
    // Seeds: ["transaction", multisig_account, transaction_id]
    // transaction_id comes from multisig_account.transaction_count
    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Transaction::INIT_SPACE,
        seeds = [
            TRANSACTION,
            multisig_account.key().as_ref(),
            &multisig_account.transaction_count.to_le_bytes(),
        ],
        bump,
    )]
    pub transaction: Account<'info, Transaction>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateTransaction<'info> {
    pub fn create_transaction(
        &mut self,
        target_program: Pubkey,
        instruction_data: Vec<u8>,
        bumps: &CreateTransactionBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Payload Size Ceiling
        // Bounds the rent cost of the proposal account
        require!(
            instruction_data.len() <= MAX_INSTRUCTION_DATA,
            MultisigError::PayloadTooLarge
        );

        // 2. Increment Transaction Count
        // The counter doubles as the PDA seed for the next proposal
        let transaction_id = self.multisig_account.transaction_count;
        self.multisig_account.transaction_count = transaction_id
            .checked_add(1)
            .ok_or(MultisigError::Overflow)?;

        // 3. Initialize Transaction State
        // Approvals start all-false; no quorum check happens at creation
        self.transaction.set_inner(Transaction {
            multisig: self.multisig_account.key(),
            transaction_id,
            proposer: self.proposer.key(),
            target_program,
            instruction_data,
            approval_bitmap: 0,
            approval_count: 0,
            executed: false,
            bump: bumps.transaction,
        });

        msg!("transaction {} proposed", transaction_id);

        Ok(())
    }
}

use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Create Multisig Instruction
//
// Initializes a new multisig wallet with:
// - A fixed set of distinct owners
// - An approval threshold (1 <= threshold <= owners.len())
//
// Both are immutable for the lifetime of the account. The signing authority
// PDA is derived here and its bump stored, but the account is never
// allocated: it exists only as a program-controlled signer identity.

#[derive(Accounts)]
#[instruction(multisig_id: u64)]
pub struct CreateMultisig<'info> {
    // Pays rent for the multisig account, need not be an owner
    #[account(mut)]
    pub payer: Signer<'info>,

    // Multisig account PDA
    // Seeds: ["multisig", payer, multisig_id]
    // Stores the owner set and configuration
    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Multisig::INIT_SPACE,
        seeds = [
            MULTISIG,
            payer.key().as_ref(),
            &multisig_id.to_le_bytes(),
        ],
        bump,
    )]
    pub multisig_account: Account<'info, Multisig>,

    // Derived signing authority for inner instruction dispatch
    // Seeds: ["authority", multisig_account]
    /// CHECK: Never read or written, derived here only so the bump can be stored
    #[account(
        seeds = [
            AUTHORITY,
            multisig_account.key().as_ref(),
        ],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateMultisig<'info> {
    pub fn create_multisig(
        &mut self,
        multisig_id: u64,
        owners: Vec<Pubkey>,
        threshold: u8,
        bumps: &CreateMultisigBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Owner Count Bound
        // The fixed array and the approval bitmap both cap at MAX_OWNERS
        require!(owners.len() <= MAX_OWNERS, MultisigError::TooManyOwners);

        // 2. Duplicate Owner Check
        // A repeated key would let one signer count twice towards quorum
        for (i, owner) in owners.iter().enumerate() {
            require!(
                !owners[..i].contains(owner),
                MultisigError::DuplicateOwner
            );
        }

        // 3. Threshold Bounds
        // threshold = 0 and threshold > owners.len() are both rejected,
        // which also rules out an empty owner list
        require!(
            threshold >= 1 && (threshold as usize) <= owners.len(),
            MultisigError::InvalidThreshold
        );

        // 4. Set Multisig State
        // Live owners occupy the first owner_count slots
        let mut owner_slots = [Pubkey::default(); MAX_OWNERS];
        owner_slots[..owners.len()].copy_from_slice(&owners);

        self.multisig_account.set_inner(Multisig {
            multisig_id,
            creator: self.payer.key(),
            threshold,
            owner_count: owners.len() as u8,
            owners: owner_slots,
            transaction_count: 0,
            authority_bump: bumps.authority,
            bump: bumps.multisig_account,
        });

        msg!(
            "multisig created: owners={} threshold={}",
            owners.len(),
            threshold
        );

        Ok(())
    }
}

use anchor_lang::prelude::*;
use crate::constants::*;

// Transaction proposal account
// Stores one instruction awaiting quorum approval
#[account]
#[derive(InitSpace)]
pub struct Transaction {
    // The multisig this transaction belongs to
    pub multisig: Pubkey,

    // Sequence number within the multisig
    pub transaction_id: u64,

    // Who created and paid for this proposal
    // Audit only: the proposer is not required to be an owner
    pub proposer: Pubkey,

    // Program the stored instruction will invoke
    pub target_program: Pubkey,

    // Opaque payload, immutable after creation
    #[max_len(MAX_INSTRUCTION_DATA)]
    pub instruction_data: Vec<u8>,

    // Bit i set means owners[i] has approved
    pub approval_bitmap: u64,

    // Current approval count
    pub approval_count: u8,

    // Replay guard, set exactly once on successful dispatch
    pub executed: bool,

    // PDA bump seed
    pub bump: u8,
}

impl Transaction {
    // Check if the owner at a given index has approved
    pub fn has_approved(&self, owner_index: usize) -> bool {
        if owner_index >= MAX_OWNERS {
            return false;
        }
        (self.approval_bitmap & (1u64 << owner_index)) != 0
    }

    // Record an approval from the owner at a given index
    // Returns false if the bit was already set: repeat approvals are
    // absorbed without changing quorum state
    pub fn approve(&mut self, owner_index: usize) -> bool {
        if owner_index >= MAX_OWNERS || self.has_approved(owner_index) {
            return false;
        }

        self.approval_bitmap |= 1u64 << owner_index;
        self.approval_count += 1;
        true
    }

    // Check if the transaction has reached quorum
    pub fn quorum_reached(&self, threshold: u8) -> bool {
        self.approval_count >= threshold
    }
}

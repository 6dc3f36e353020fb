use anchor_lang::prelude::*;
use crate::constants::*;

// Multisig wallet account
// Stores the fixed owner set and approval threshold
#[account]
#[derive(InitSpace)]
pub struct Multisig {
    // Unique identifier chosen by the creator
    // Lets one creator hold several independent multisigs
    pub multisig_id: u64,

    // Payer that created the account
    // Recorded for PDA re-derivation, carries no special authority afterwards
    pub creator: Pubkey,

    // Number of approvals required to execute a transaction
    // Must be: 1 <= threshold <= owner_count, immutable after creation
    pub threshold: u8,

    // Number of live entries in `owners`
    pub owner_count: u8,

    // Fixed-size array avoids realloc and bounds the approval bitmap
    // Entries beyond owner_count are Pubkey::default()
    pub owners: [Pubkey; MAX_OWNERS],

    // Total transactions ever proposed (used for transaction PDA seeds)
    pub transaction_count: u64,

    // Bump for the derived signing authority: ["authority", multisig]
    // The authority PDA signs inner instructions on behalf of the multisig
    pub authority_bump: u8,

    // PDA bump seed for this account
    pub bump: u8,
}

impl Multisig {
    // Check if a pubkey is an owner
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner_index(key).is_some()
    }

    // Get the index of an owner, None if not an owner
    pub fn owner_index(&self, key: &Pubkey) -> Option<usize> {
        self.owners
            .iter()
            .take(self.owner_count as usize)
            .position(|owner| owner == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multisig_with_owners(owners: &[Pubkey]) -> Multisig {
        let mut slots = [Pubkey::default(); MAX_OWNERS];
        slots[..owners.len()].copy_from_slice(owners);
        Multisig {
            multisig_id: 0,
            creator: Pubkey::new_unique(),
            threshold: 1,
            owner_count: owners.len() as u8,
            owners: slots,
            transaction_count: 0,
            authority_bump: 255,
            bump: 254,
        }
    }

    #[test]
    fn owner_index_finds_live_entries() {
        let owners = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
        let ms = multisig_with_owners(&owners);

        assert_eq!(ms.owner_index(&owners[0]), Some(0));
        assert_eq!(ms.owner_index(&owners[2]), Some(2));
        assert!(!ms.is_owner(&Pubkey::new_unique()));
    }

    #[test]
    fn dead_slots_are_not_owners() {
        let owners = [Pubkey::new_unique()];
        let ms = multisig_with_owners(&owners);

        // Slots beyond owner_count hold the default pubkey, which must
        // never count as membership
        assert!(!ms.is_owner(&Pubkey::default()));
        assert_eq!(ms.owner_index(&Pubkey::default()), None);
    }
}

use anchor_lang::prelude::*;
use anchor_spl::token::{self, MintTo, Transfer};

use crate::constants::MINT_AUTHORITY_SEED;

/// Signing handle for the mint/vault authority PDA
///
/// The seeds never leave this type: FLEX can only be minted, and reserves can
/// only leave a vault, through these methods.
pub struct VaultSigner<'info> {
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    bump: u8,
}

impl<'info> VaultSigner<'info> {
    pub fn new(authority: AccountInfo<'info>, token_program: AccountInfo<'info>, bump: u8) -> Self {
        Self {
            authority,
            token_program,
            bump,
        }
    }

    /// Mint `amount` FLEX to `to`
    pub fn mint_receipt(
        &self,
        flex_mint: AccountInfo<'info>,
        to: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let bump = [self.bump];
        let authority_seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &bump];
        let signer_seeds = &[authority_seeds];

        let mint_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            MintTo {
                mint: flex_mint,
                to,
                authority: self.authority.clone(),
            },
            signer_seeds,
        );
        token::mint_to(mint_ctx, amount)
    }

    /// Move `amount` out of a reserve vault
    pub fn release(
        &self,
        vault: AccountInfo<'info>,
        to: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let bump = [self.bump];
        let authority_seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &bump];
        let signer_seeds = &[authority_seeds];

        let transfer_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            Transfer {
                from: vault,
                to,
                authority: self.authority.clone(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)
    }
}

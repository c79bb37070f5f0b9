use anchor_lang::prelude::*;

use crate::errors::BasketError;

/// Authority roles recorded on the config accounts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Guardian,
    EmergencyAdmin,
}

/// Every role-gated instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PauseBasket,
    UnpauseBasket,
    UpdateDepositLimits,
    SetTargets,
    SetThresholds,
    SetCaps,
    PauseRebalancing,
    UnpauseRebalancing,
    SetRebalanceInterval,
}

impl Action {
    /// Permission table: roles allowed to perform each action
    pub const fn permitted_roles(self) -> &'static [Role] {
        match self {
            Action::PauseBasket | Action::UnpauseBasket => &[Role::Guardian, Role::EmergencyAdmin],
            Action::UpdateDepositLimits
            | Action::SetTargets
            | Action::SetThresholds
            | Action::SetCaps
            | Action::SetRebalanceInterval => &[Role::Admin],
            Action::PauseRebalancing | Action::UnpauseRebalancing => &[Role::Guardian],
        }
    }
}

/// Maps roles to the keys holding them on a config account
pub trait RoleHolders {
    fn holder(&self, role: Role) -> Option<Pubkey>;

    /// Returns the first permitted role `signer` holds, or `Unauthorized`
    fn authorize(&self, signer: &Pubkey, action: Action) -> Result<Role> {
        action
            .permitted_roles()
            .iter()
            .copied()
            .find(|role| self.holder(*role).as_ref() == Some(signer))
            .ok_or(error!(BasketError::Unauthorized))
    }
}

/// A zero key in a role argument means the admin holds that role too
pub fn role_or_admin(candidate: Pubkey, admin: Pubkey) -> Pubkey {
    if candidate == Pubkey::default() {
        admin
    } else {
        candidate
    }
}

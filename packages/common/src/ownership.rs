//! Two-step ownership
//!
//! A ledger always has exactly one owner. Handing it over is a two-step
//! transition so that a typo in the new address cannot lock the contract:
//!
//! ```text
//! Active{owner} --propose--> PendingTransfer{owner, proposed_owner}
//! PendingTransfer --accept (proposed_owner)--> Active{proposed_owner}
//! PendingTransfer --cancel (owner)--> Active{owner}
//! ```

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use thiserror::Error;

/// Ownership state of a ledger instance
pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("NOT_AUTHORIZED")]
    NotAuthorized,

    #[error("NOT_PENDING_OWNER")]
    NotPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingTransfer,
}

#[cw_serde]
pub enum Ownership {
    Active { owner: Addr },
    PendingTransfer { owner: Addr, proposed_owner: Addr },
}

impl Ownership {
    pub fn new(owner: Addr) -> Self {
        Ownership::Active { owner }
    }

    pub fn owner(&self) -> &Addr {
        match self {
            Ownership::Active { owner } | Ownership::PendingTransfer { owner, .. } => owner,
        }
    }

    pub fn proposed_owner(&self) -> Option<&Addr> {
        match self {
            Ownership::Active { .. } => None,
            Ownership::PendingTransfer { proposed_owner, .. } => Some(proposed_owner),
        }
    }

    pub fn assert_owner(&self, sender: &Addr) -> Result<(), OwnershipError> {
        if sender != self.owner() {
            return Err(OwnershipError::NotAuthorized);
        }
        Ok(())
    }

    /// Start (or replace) a transfer to `proposed_owner`.
    pub fn propose(self, sender: &Addr, proposed_owner: Addr) -> Result<Self, OwnershipError> {
        self.assert_owner(sender)?;
        let owner = self.owner().clone();
        Ok(Ownership::PendingTransfer {
            owner,
            proposed_owner,
        })
    }

    pub fn accept(self, sender: &Addr) -> Result<Self, OwnershipError> {
        match self {
            Ownership::PendingTransfer { proposed_owner, .. } if &proposed_owner == sender => {
                Ok(Ownership::Active {
                    owner: proposed_owner,
                })
            }
            _ => Err(OwnershipError::NotPendingOwner),
        }
    }

    pub fn cancel(self, sender: &Addr) -> Result<Self, OwnershipError> {
        self.assert_owner(sender)?;
        match self {
            Ownership::PendingTransfer { owner, .. } => Ok(Ownership::Active { owner }),
            Ownership::Active { .. } => Err(OwnershipError::NoPendingTransfer),
        }
    }
}

// Copyright (c) 2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{BTreeMap, BTreeSet};

use common::{AccountAddress, Amount, PositionId};
use utils::ensure;

use super::{AssetError, FungibleAsset, LockedPositionAsset};

/// Fungible token with balances and spender allowances.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryFungibleAsset {
    balances: BTreeMap<AccountAddress, Amount>,
    allowances: BTreeMap<(AccountAddress, AccountAddress), Amount>,
}

impl InMemoryFungibleAsset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self, to: AccountAddress, amount: Amount) -> Result<(), AssetError> {
        let balance = self.balance_of(&to);
        let new_balance = (balance + amount).ok_or(AssetError::BalanceOverflow(to))?;
        self.balances.insert(to, new_balance);
        Ok(())
    }

    /// Sets the allowance of `spender` over the tokens of `owner`, replacing the previous one.
    pub fn approve(&mut self, owner: AccountAddress, spender: AccountAddress, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    pub fn balance_of(&self, account: &AccountAddress) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    pub fn allowance(&self, owner: &AccountAddress, spender: &AccountAddress) -> Amount {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(Amount::ZERO)
    }
}

impl FungibleAsset for InMemoryFungibleAsset {
    fn transfer_from(
        &mut self,
        spender: AccountAddress,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> Result<(), AssetError> {
        let new_allowance = if spender == from {
            None
        } else {
            let available = self.allowance(&from, &spender);
            let remaining = (available - amount).ok_or(AssetError::InsufficientAllowance {
                owner: from,
                spender,
                available,
                required: amount,
            })?;
            Some(remaining)
        };

        let from_balance = self.balance_of(&from);
        let new_from_balance =
            (from_balance - amount).ok_or(AssetError::InsufficientBalance {
                account: from,
                available: from_balance,
                required: amount,
            })?;

        if from != to {
            let new_to_balance =
                (self.balance_of(&to) + amount).ok_or(AssetError::BalanceOverflow(to))?;
            self.balances.insert(from, new_from_balance);
            self.balances.insert(to, new_to_balance);
        }

        if let Some(remaining) = new_allowance {
            self.allowances.insert((from, spender), remaining);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LockedPosition {
    owner: AccountAddress,
    approved: Option<AccountAddress>,
    locked_value: Amount,
}

/// Locked-position tokens with per-token approvals, operators and a transfer gate.
///
/// The gate starts closed: transfers only go to receivers on the allow list until public
/// transfers are enabled.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryLockedPositions {
    positions: BTreeMap<PositionId, LockedPosition>,
    operators: BTreeSet<(AccountAddress, AccountAddress)>,
    allowed_receivers: BTreeSet<AccountAddress>,
    public_transfers: bool,
    next_id: u64,
}

impl InMemoryLockedPositions {
    pub fn new() -> Self {
        Self {
            positions: BTreeMap::new(),
            operators: BTreeSet::new(),
            allowed_receivers: BTreeSet::new(),
            public_transfers: false,
            next_id: 1,
        }
    }

    pub fn mint(
        &mut self,
        owner: AccountAddress,
        locked_value: Amount,
    ) -> Result<PositionId, AssetError> {
        let id = PositionId::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(AssetError::PositionIdsExhausted)?;
        self.positions.insert(
            id,
            LockedPosition {
                owner,
                approved: None,
                locked_value,
            },
        );
        Ok(id)
    }

    /// Approves `spender` for a single position. Only the owner may do this.
    pub fn approve(
        &mut self,
        caller: AccountAddress,
        id: PositionId,
        spender: Option<AccountAddress>,
    ) -> Result<(), AssetError> {
        let position = self.positions.get_mut(&id).ok_or(AssetError::UnknownPosition(id))?;
        ensure!(
            position.owner == caller,
            AssetError::NotPositionOwner {
                position: id,
                account: caller,
            }
        );
        position.approved = spender;
        Ok(())
    }

    pub fn set_approval_for_all(
        &mut self,
        owner: AccountAddress,
        operator: AccountAddress,
        approved: bool,
    ) {
        if approved {
            self.operators.insert((owner, operator));
        } else {
            self.operators.remove(&(owner, operator));
        }
    }

    pub fn set_public_transfers(&mut self, enabled: bool) {
        self.public_transfers = enabled;
    }

    pub fn allow_receiver(&mut self, receiver: AccountAddress) {
        self.allowed_receivers.insert(receiver);
    }

    pub fn transfer_permitted(&self, to: &AccountAddress) -> bool {
        self.public_transfers || self.allowed_receivers.contains(to)
    }

    fn position(&self, id: PositionId) -> Result<&LockedPosition, AssetError> {
        self.positions.get(&id).ok_or(AssetError::UnknownPosition(id))
    }
}

impl Default for InMemoryLockedPositions {
    fn default() -> Self {
        Self::new()
    }
}

impl LockedPositionAsset for InMemoryLockedPositions {
    fn owner_of(&self, id: PositionId) -> Result<AccountAddress, AssetError> {
        self.position(id).map(|p| p.owner)
    }

    fn get_approved(&self, id: PositionId) -> Result<Option<AccountAddress>, AssetError> {
        self.position(id).map(|p| p.approved)
    }

    fn locked_value_of(&self, id: PositionId) -> Result<Amount, AssetError> {
        self.position(id).map(|p| p.locked_value)
    }

    fn transfer_from(
        &mut self,
        spender: AccountAddress,
        from: AccountAddress,
        to: AccountAddress,
        id: PositionId,
    ) -> Result<(), AssetError> {
        let position = self.position(id)?;
        ensure!(
            position.owner == from,
            AssetError::NotPositionOwner {
                position: id,
                account: from,
            }
        );
        ensure!(
            spender == from
                || position.approved == Some(spender)
                || self.operators.contains(&(from, spender)),
            AssetError::NotApproved {
                position: id,
                spender,
            }
        );
        ensure!(
            self.transfer_permitted(&to),
            AssetError::TransferRestricted(id)
        );

        let position = self.positions.get_mut(&id).ok_or(AssetError::UnknownPosition(id))?;
        position.owner = to;
        position.approved = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(v: u64) -> AccountAddress {
        AccountAddress::from_low_u64_be(v)
    }

    #[test]
    fn fungible_transfer_consumes_allowance() {
        let (owner, spender, receiver) = (account(1), account(2), account(3));
        let mut token = InMemoryFungibleAsset::new();
        token.mint(owner, Amount::from_atoms(100)).unwrap();
        token.approve(owner, spender, Amount::from_atoms(30));

        token.transfer_from(spender, owner, receiver, Amount::from_atoms(20)).unwrap();
        assert_eq!(token.balance_of(&owner), Amount::from_atoms(80));
        assert_eq!(token.balance_of(&receiver), Amount::from_atoms(20));
        assert_eq!(token.allowance(&owner, &spender), Amount::from_atoms(10));

        assert_eq!(
            token.transfer_from(spender, owner, receiver, Amount::from_atoms(11)),
            Err(AssetError::InsufficientAllowance {
                owner,
                spender,
                available: Amount::from_atoms(10),
                required: Amount::from_atoms(11),
            })
        );
    }

    #[test]
    fn fungible_transfer_checks_balance_without_side_effects() {
        let (owner, spender, receiver) = (account(1), account(2), account(3));
        let mut token = InMemoryFungibleAsset::new();
        token.mint(owner, Amount::from_atoms(5)).unwrap();
        token.approve(owner, spender, Amount::from_atoms(50));

        let before = token.clone();
        assert_eq!(
            token.transfer_from(spender, owner, receiver, Amount::from_atoms(6)),
            Err(AssetError::InsufficientBalance {
                account: owner,
                available: Amount::from_atoms(5),
                required: Amount::from_atoms(6),
            })
        );
        assert_eq!(token, before);
    }

    #[test]
    fn locked_position_transfer_rules() {
        let (owner, operator, custodian, stranger) =
            (account(1), account(2), account(3), account(4));
        let mut positions = InMemoryLockedPositions::new();
        let id = positions.mint(owner, Amount::from_atoms(1000)).unwrap();
        assert_eq!(positions.owner_of(id), Ok(owner));
        assert_eq!(positions.locked_value_of(id), Ok(Amount::from_atoms(1000)));

        assert_eq!(
            positions.transfer_from(operator, owner, custodian, id),
            Err(AssetError::NotApproved {
                position: id,
                spender: operator,
            })
        );

        positions.set_approval_for_all(owner, operator, true);
        assert_eq!(
            positions.transfer_from(operator, owner, custodian, id),
            Err(AssetError::TransferRestricted(id))
        );

        positions.allow_receiver(custodian);
        positions.transfer_from(operator, owner, custodian, id).unwrap();
        assert_eq!(positions.owner_of(id), Ok(custodian));

        assert_eq!(
            positions.approve(stranger, id, Some(stranger)),
            Err(AssetError::NotPositionOwner {
                position: id,
                account: stranger,
            })
        );
        assert_eq!(
            positions.owner_of(PositionId::new(77)),
            Err(AssetError::UnknownPosition(PositionId::new(77)))
        );
    }

    #[test]
    fn approval_is_cleared_on_transfer() {
        let (owner, approved, receiver) = (account(1), account(2), account(3));
        let mut positions = InMemoryLockedPositions::new();
        positions.set_public_transfers(true);
        let id = positions.mint(owner, Amount::from_atoms(1)).unwrap();

        positions.approve(owner, id, Some(approved)).unwrap();
        assert_eq!(positions.get_approved(id), Ok(Some(approved)));

        positions.transfer_from(approved, owner, receiver, id).unwrap();
        assert_eq!(positions.get_approved(id), Ok(None));
        assert_eq!(positions.owner_of(id), Ok(receiver));
    }

    #[test]
    fn position_ids_start_at_one_and_never_wrap() {
        let owner = account(1);
        let mut positions = InMemoryLockedPositions::default();
        assert_eq!(positions, InMemoryLockedPositions::new());
        assert_eq!(positions.mint(owner, Amount::ZERO), Ok(PositionId::new(1)));
        assert_eq!(positions.mint(owner, Amount::ZERO), Ok(PositionId::new(2)));

        positions.next_id = u64::MAX;
        let before = positions.clone();
        assert_eq!(
            positions.mint(owner, Amount::ZERO),
            Err(AssetError::PositionIdsExhausted)
        );
        assert_eq!(positions, before);
    }
}

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

//! Interfaces of the asset contracts the ledger moves value through. The ledger never holds
//! the assets itself: it only asks them to move value from a participant to the custodian.

use common::{AccountAddress, Amount, PositionId};

pub mod in_memory;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum AssetError {
    #[error("Balance of `{account}` is {available}, {required} required")]
    InsufficientBalance {
        account: AccountAddress,
        available: Amount,
        required: Amount,
    },
    #[error("Allowance of `{spender}` over `{owner}` is {available}, {required} required")]
    InsufficientAllowance {
        owner: AccountAddress,
        spender: AccountAddress,
        available: Amount,
        required: Amount,
    },
    #[error("Balance overflow for `{0}`")]
    BalanceOverflow(AccountAddress),
    #[error("Locked position {0} does not exist")]
    UnknownPosition(PositionId),
    #[error("Locked position {position} is not owned by `{account}`")]
    NotPositionOwner {
        position: PositionId,
        account: AccountAddress,
    },
    #[error("`{spender}` may not move locked position {position}")]
    NotApproved {
        position: PositionId,
        spender: AccountAddress,
    },
    #[error("Transfers of locked position {0} are restricted")]
    TransferRestricted(PositionId),
    #[error("No locked position ids left")]
    PositionIdsExhausted,
}

/// A fungible stake token.
pub trait FungibleAsset {
    /// Moves `amount` from `from` to `to` on behalf of `spender`.
    fn transfer_from(
        &mut self,
        spender: AccountAddress,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> Result<(), AssetError>;
}

/// A non-fungible token, each unit of which locks some amount of the fungible token.
///
/// The asset enforces its own transfer policy and reports a refusal as
/// [AssetError::TransferRestricted].
pub trait LockedPositionAsset {
    fn owner_of(&self, id: PositionId) -> Result<AccountAddress, AssetError>;

    /// The single account approved to move the position, if any.
    fn get_approved(&self, id: PositionId) -> Result<Option<AccountAddress>, AssetError>;

    /// Value currently locked in the position.
    fn locked_value_of(&self, id: PositionId) -> Result<Amount, AssetError>;

    fn transfer_from(
        &mut self,
        spender: AccountAddress,
        from: AccountAddress,
        to: AccountAddress,
        id: PositionId,
    ) -> Result<(), AssetError>;
}

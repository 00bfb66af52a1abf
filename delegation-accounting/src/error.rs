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

use common::{AccountAddress, PositionId};

use crate::AssetError;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("Delegated amount must be greater than zero")]
    InvalidAmount,
    #[error("Start date of an imported position must be greater than zero")]
    InvalidStartDate,
    #[error("Account `{0}` is not authorized for this operation")]
    NotAuthorized(AccountAddress),
    #[error("Asset transfer rejected: {0}")]
    TransferFailed(AssetError),
    #[error("Locked position {0} cannot be transferred to the custodian")]
    TransferRestricted(PositionId),
    #[error("Asset query failed: {0}")]
    AssetQueryFailed(AssetError),
    #[error(
        "Bulk import columns differ in length: addresses {addresses}, amounts {amounts}, start dates {start_dates}, restake flags {restake_flags}"
    )]
    LengthMismatch {
        addresses: usize,
        amounts: usize,
        start_dates: usize,
        restake_flags: usize,
    },
    #[error("Arithmetic overflow while accumulating a position")]
    Overflow,
    #[error("Registry length overflow")]
    RegistryOverflow,

    #[error("Account `{0}` is already present in the registry")]
    InvariantErrorAlreadyEnrolled(AccountAddress),
    #[error("Registry slot {0} is empty")]
    InvariantErrorRegistrySlotEmpty(u64),
    #[error("Enrolled account `{0}` has no position")]
    InvariantErrorPositionMissing(AccountAddress),
    #[error("Registry undo expected to remove `{0}`")]
    InvariantErrorRegistryUndoMismatch(AccountAddress),
    #[error("Registry length after undo is {actual}, expected {expected}")]
    InvariantErrorRegistryLenAfterUndo { expected: u64, actual: u64 },

    // TODO: carry the backend error in ViewFail/StorageWrite instead of dropping it
    #[error("Delegation accounting view query failed")]
    ViewFail,
    #[error("Delegation accounting storage write failed")]
    StorageWrite,
}

pub type Result<T> = core::result::Result<T, Error>;

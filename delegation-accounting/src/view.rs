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

use std::ops::Deref;

use common::AccountAddress;

use crate::data::{DelegationDeltaData, DelegationUndo, DelegatorPosition, RegistryIndex};

pub trait DelegationView {
    /// Error that can occur during queries
    type Error: std::error::Error;

    /// Position of an account, `None` if the account was never enrolled.
    fn get_position(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<DelegatorPosition>, Self::Error>;

    fn get_registry_index(&self, address: &AccountAddress) -> Result<RegistryIndex, Self::Error>;

    /// Number of accounts ever enrolled.
    fn get_registry_len(&self) -> Result<u64, Self::Error>;

    /// Account stored at the 0-based registry slot.
    fn get_registry_entry(&self, slot: u64) -> Result<Option<AccountAddress>, Self::Error>;
}

pub trait FlushableDelegationView {
    /// Errors potentially triggered by flushing the view
    type Error: std::error::Error;

    /// Applies all staged writes and returns the data needed to revert them.
    fn batch_write_delta(
        &mut self,
        delta: DelegationDeltaData,
    ) -> Result<DelegationUndo, Self::Error>;

    /// Reverts a previous [FlushableDelegationView::batch_write_delta]. Undo records must be
    /// applied in reverse order of the writes that produced them.
    fn undo_delta(&mut self, undo: DelegationUndo) -> Result<(), Self::Error>;
}

impl<T> DelegationView for T
where
    T: Deref,
    <T as Deref>::Target: DelegationView,
{
    type Error = <T::Target as DelegationView>::Error;

    fn get_position(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<DelegatorPosition>, Self::Error> {
        self.deref().get_position(address)
    }

    fn get_registry_index(&self, address: &AccountAddress) -> Result<RegistryIndex, Self::Error> {
        self.deref().get_registry_index(address)
    }

    fn get_registry_len(&self) -> Result<u64, Self::Error> {
        self.deref().get_registry_len()
    }

    fn get_registry_entry(&self, slot: u64) -> Result<Option<AccountAddress>, Self::Error> {
        self.deref().get_registry_entry(slot)
    }
}

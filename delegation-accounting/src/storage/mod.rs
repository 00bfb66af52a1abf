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

use std::ops::{Deref, DerefMut};

use common::AccountAddress;

use crate::data::{DelegatorPosition, RegistryIndex};

pub mod db;
pub mod in_memory;

pub trait DelegationStorageRead {
    type Error: std::error::Error;

    /// Provides access to the accounting record of an account.
    fn get_position(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<DelegatorPosition>, Self::Error>;

    /// Provides the registry index of an account; [RegistryIndex::NOT_ENROLLED] for unknown ones.
    ///
    /// Implementations are expected to answer this in constant time.
    fn get_registry_index(&self, address: &AccountAddress) -> Result<RegistryIndex, Self::Error>;

    fn get_registry_len(&self) -> Result<u64, Self::Error>;

    fn get_registry_entry(&self, slot: u64) -> Result<Option<AccountAddress>, Self::Error>;
}

pub trait DelegationStorageWrite: DelegationStorageRead {
    fn set_position(
        &mut self,
        address: &AccountAddress,
        position: &DelegatorPosition,
    ) -> Result<(), Self::Error>;
    fn del_position(&mut self, address: &AccountAddress) -> Result<(), Self::Error>;

    /// Appends an account to the registry and records its index.
    fn push_registry_entry(&mut self, address: &AccountAddress)
        -> Result<RegistryIndex, Self::Error>;
    /// Removes the last registry entry together with its index. Only used to revert writes.
    fn pop_registry_entry(&mut self) -> Result<Option<AccountAddress>, Self::Error>;
}

impl<T> DelegationStorageRead for T
where
    T: Deref,
    <T as Deref>::Target: DelegationStorageRead,
{
    type Error = <T::Target as DelegationStorageRead>::Error;

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

impl<T> DelegationStorageWrite for T
where
    T: DerefMut,
    <T as Deref>::Target: DelegationStorageWrite,
{
    fn set_position(
        &mut self,
        address: &AccountAddress,
        position: &DelegatorPosition,
    ) -> Result<(), Self::Error> {
        self.deref_mut().set_position(address, position)
    }

    fn del_position(&mut self, address: &AccountAddress) -> Result<(), Self::Error> {
        self.deref_mut().del_position(address)
    }

    fn push_registry_entry(
        &mut self,
        address: &AccountAddress,
    ) -> Result<RegistryIndex, Self::Error> {
        self.deref_mut().push_registry_entry(address)
    }

    fn pop_registry_entry(&mut self) -> Result<Option<AccountAddress>, Self::Error> {
        self.deref_mut().pop_registry_entry()
    }
}

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

use std::collections::{BTreeMap, HashMap};

use common::AccountAddress;

use crate::data::{DelegatorPosition, RegistryIndex};

use super::{DelegationStorageRead, DelegationStorageWrite};

/// Positions keyed by account plus the registry arena: an append-only vector of accounts and a
/// hash map from account to its 1-based slot.
#[must_use]
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct InMemoryDelegationStorage {
    positions: BTreeMap<AccountAddress, DelegatorPosition>,
    registry: Vec<AccountAddress>,
    registry_indexes: HashMap<AccountAddress, RegistryIndex>,
}

impl InMemoryDelegationStorage {
    pub fn new() -> Self {
        Self {
            positions: Default::default(),
            registry: Default::default(),
            registry_indexes: Default::default(),
        }
    }

    pub fn positions(&self) -> &BTreeMap<AccountAddress, DelegatorPosition> {
        &self.positions
    }

    pub fn registry(&self) -> &[AccountAddress] {
        &self.registry
    }
}

impl DelegationStorageRead for InMemoryDelegationStorage {
    type Error = crate::Error;

    fn get_position(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<DelegatorPosition>, Self::Error> {
        Ok(self.positions.get(address).cloned())
    }

    fn get_registry_index(&self, address: &AccountAddress) -> Result<RegistryIndex, Self::Error> {
        Ok(self.registry_indexes.get(address).copied().unwrap_or_default())
    }

    fn get_registry_len(&self) -> Result<u64, Self::Error> {
        Ok(self.registry.len() as u64)
    }

    fn get_registry_entry(&self, slot: u64) -> Result<Option<AccountAddress>, Self::Error> {
        let entry = usize::try_from(slot).ok().and_then(|slot| self.registry.get(slot));
        Ok(entry.copied())
    }
}

impl DelegationStorageWrite for InMemoryDelegationStorage {
    fn set_position(
        &mut self,
        address: &AccountAddress,
        position: &DelegatorPosition,
    ) -> Result<(), Self::Error> {
        self.positions.insert(*address, *position);
        Ok(())
    }

    fn del_position(&mut self, address: &AccountAddress) -> Result<(), Self::Error> {
        self.positions.remove(address);
        Ok(())
    }

    fn push_registry_entry(
        &mut self,
        address: &AccountAddress,
    ) -> Result<RegistryIndex, Self::Error> {
        let index = RegistryIndex::from_slot(self.registry.len() as u64)
            .ok_or(crate::Error::RegistryOverflow)?;
        self.registry.push(*address);
        self.registry_indexes.insert(*address, index);
        Ok(index)
    }

    fn pop_registry_entry(&mut self) -> Result<Option<AccountAddress>, Self::Error> {
        let popped = self.registry.pop();
        if let Some(address) = popped.as_ref() {
            self.registry_indexes.remove(address);
        }
        Ok(popped)
    }
}

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

use common::AccountAddress;
use logging::log;
use utils::ensure;

use crate::{
    data::{DelegationDeltaData, DelegationUndo, DelegatorPosition, RegistryIndex},
    error::Error,
    view::{DelegationView, FlushableDelegationView},
};

use super::{DelegationStorageRead, DelegationStorageWrite};

#[must_use]
pub struct DelegationDB<S>(S);

impl<S: DelegationStorageRead> DelegationDB<S> {
    pub fn new(store: S) -> Self {
        Self(store)
    }
}

impl<S: DelegationStorageRead> DelegationView for DelegationDB<S> {
    type Error = S::Error;

    fn get_position(
        &self,
        address: &AccountAddress,
    ) -> Result<Option<DelegatorPosition>, Self::Error> {
        self.0.get_position(address)
    }

    fn get_registry_index(&self, address: &AccountAddress) -> Result<RegistryIndex, Self::Error> {
        self.0.get_registry_index(address)
    }

    fn get_registry_len(&self) -> Result<u64, Self::Error> {
        self.0.get_registry_len()
    }

    fn get_registry_entry(&self, slot: u64) -> Result<Option<AccountAddress>, Self::Error> {
        self.0.get_registry_entry(slot)
    }
}

impl<S: DelegationStorageWrite> FlushableDelegationView for DelegationDB<S> {
    type Error = Error;

    fn batch_write_delta(
        &mut self,
        delta: DelegationDeltaData,
    ) -> Result<DelegationUndo, Self::Error> {
        let DelegationDeltaData {
            positions,
            enrollments,
        } = delta;

        let registry_len_before = self.0.get_registry_len().map_err(|_| Error::ViewFail)?;

        let previous_positions = positions
            .keys()
            .map(|address| {
                self.0
                    .get_position(address)
                    .map(|previous| (*address, previous))
                    .map_err(|_| Error::ViewFail)
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        // All checks happen before the first write so a rejected delta leaves storage untouched
        let mut seen = BTreeSet::new();
        for address in &enrollments {
            let index = self.0.get_registry_index(address).map_err(|_| Error::ViewFail)?;
            ensure!(
                !index.is_enrolled() && seen.insert(*address),
                Error::InvariantErrorAlreadyEnrolled(*address)
            );
            ensure!(
                positions.contains_key(address),
                Error::InvariantErrorPositionMissing(*address)
            );
        }

        for address in &enrollments {
            self.0.push_registry_entry(address).map_err(|_| Error::StorageWrite)?;
        }

        for (address, position) in &positions {
            self.0.set_position(address, position).map_err(|_| Error::StorageWrite)?;
        }

        log::debug!(
            "Flushed {} position(s) and {} enrollment(s)",
            positions.len(),
            enrollments.len()
        );

        Ok(DelegationUndo {
            previous_positions,
            enrollments,
            registry_len_before,
        })
    }

    fn undo_delta(&mut self, undo: DelegationUndo) -> Result<(), Self::Error> {
        let DelegationUndo {
            previous_positions,
            enrollments,
            registry_len_before,
        } = undo;

        for (address, previous) in &previous_positions {
            let restored = match previous {
                Some(position) => self.0.set_position(address, position),
                None => self.0.del_position(address),
            };
            restored.map_err(|_| Error::StorageWrite)?;
        }

        for address in enrollments.iter().rev() {
            let popped = self.0.pop_registry_entry().map_err(|_| Error::StorageWrite)?;
            ensure!(
                popped == Some(*address),
                Error::InvariantErrorRegistryUndoMismatch(*address)
            );
        }

        let registry_len = self.0.get_registry_len().map_err(|_| Error::ViewFail)?;
        ensure!(
            registry_len == registry_len_before,
            Error::InvariantErrorRegistryLenAfterUndo {
                expected: registry_len_before,
                actual: registry_len,
            }
        );

        log::debug!(
            "Reverted {} position(s) and {} enrollment(s)",
            previous_positions.len(),
            enrollments.len()
        );

        Ok(())
    }
}

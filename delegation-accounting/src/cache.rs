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

use std::collections::BTreeMap;

use common::{AccountAddress, Amount, BlockTimestamp};
use logging::log;
use utils::ensure;

use crate::{
    config::RestakeUpdatePolicy,
    data::{DelegationDeltaData, DelegatorPosition, RegistryIndex},
    error::{Error, Result},
    merge::accrual_weighted_merge,
    operations::DelegationOperations,
    view::DelegationView,
};

/// Stages writes on top of a read-only parent view.
///
/// Nothing reaches the parent until the consumed [DelegationDeltaData] is flushed, so dropping
/// a cache after an error discards the whole operation.
pub struct DelegationCache<P> {
    parent: P,
    data: DelegationDeltaData,
    new_indexes: BTreeMap<AccountAddress, RegistryIndex>,
}

impl<P: DelegationView> DelegationCache<P> {
    pub fn new(parent: P) -> Self {
        Self {
            parent,
            data: DelegationDeltaData::new(),
            new_indexes: BTreeMap::new(),
        }
    }

    pub fn consume(self) -> DelegationDeltaData {
        self.data
    }

    pub fn data(&self) -> &DelegationDeltaData {
        &self.data
    }

    fn parent_registry_len(&self) -> Result<u64> {
        self.parent.get_registry_len().map_err(|_| Error::ViewFail)
    }
}

impl<P: DelegationView> DelegationView for DelegationCache<P> {
    type Error = Error;

    fn get_position(&self, address: &AccountAddress) -> Result<Option<DelegatorPosition>> {
        match self.data.positions.get(address) {
            Some(position) => Ok(Some(*position)),
            None => self.parent.get_position(address).map_err(|_| Error::ViewFail),
        }
    }

    fn get_registry_index(&self, address: &AccountAddress) -> Result<RegistryIndex> {
        match self.new_indexes.get(address) {
            Some(index) => Ok(*index),
            None => self.parent.get_registry_index(address).map_err(|_| Error::ViewFail),
        }
    }

    fn get_registry_len(&self) -> Result<u64> {
        let staged = self.data.enrollments.len() as u64;
        self.parent_registry_len()?.checked_add(staged).ok_or(Error::RegistryOverflow)
    }

    fn get_registry_entry(&self, slot: u64) -> Result<Option<AccountAddress>> {
        let parent_len = self.parent_registry_len()?;
        if slot < parent_len {
            return self.parent.get_registry_entry(slot).map_err(|_| Error::ViewFail);
        }

        let staged_slot = usize::try_from(slot - parent_len).map_err(|_| Error::RegistryOverflow)?;
        Ok(self.data.enrollments.get(staged_slot).copied())
    }
}

impl<P: DelegationView> DelegationOperations for DelegationCache<P> {
    fn enroll(&mut self, address: AccountAddress) -> Result<RegistryIndex> {
        let index = self.get_registry_index(&address)?;
        if index.is_enrolled() {
            return Ok(index);
        }

        let index = RegistryIndex::from_slot(self.get_registry_len()?)
            .ok_or(Error::RegistryOverflow)?;
        log::debug!("Enrolling {} at registry index {}", address, index.as_u64());

        self.data.enrollments.push(address);
        self.new_indexes.insert(address, index);
        Ok(index)
    }

    fn credit_position(
        &mut self,
        beneficiary: AccountAddress,
        contribution: Amount,
        now: BlockTimestamp,
        restake: bool,
        restake_policy: RestakeUpdatePolicy,
    ) -> Result<DelegatorPosition> {
        log::debug!(
            "Crediting {} with {} at {}",
            beneficiary,
            contribution,
            now
        );

        let current = self.get_position(&beneficiary)?;
        if contribution.is_zero() {
            return Ok(current.unwrap_or_default());
        }

        let current_or_zero = current.unwrap_or_default();
        let (committed_amount, start_date) = accrual_weighted_merge(
            current_or_zero.committed_amount(),
            current_or_zero.start_date(),
            contribution,
            now,
        )?;

        let restake = match (current, restake_policy) {
            (Some(current), RestakeUpdatePolicy::FirstEnrollmentOnly) => current.restake(),
            (Some(_), RestakeUpdatePolicy::LatestCall) | (None, _) => restake,
        };

        self.enroll(beneficiary)?;

        let position = DelegatorPosition::new(committed_amount, start_date, restake);
        self.data.positions.insert(beneficiary, position);
        Ok(position)
    }

    fn set_position_raw(
        &mut self,
        address: AccountAddress,
        committed_amount: Amount,
        start_date: BlockTimestamp,
        restake: bool,
    ) -> Result<()> {
        log::debug!(
            "Overwriting position of {}: {} from {} (restake: {})",
            address,
            committed_amount,
            start_date,
            restake
        );

        ensure!(!committed_amount.is_zero(), Error::InvalidAmount);
        ensure!(start_date > BlockTimestamp::ZERO, Error::InvalidStartDate);

        self.enroll(address)?;
        self.data
            .positions
            .insert(address, DelegatorPosition::new(committed_amount, start_date, restake));
        Ok(())
    }
}

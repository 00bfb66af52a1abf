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

use common::{AccountAddress, Amount, BlockTimestamp, PositionId};
use logging::log;
use utils::{ensure, tap_log::TapLog};

use crate::{
    assets::{AssetError, FungibleAsset, LockedPositionAsset},
    cache::DelegationCache,
    config::LedgerConfig,
    data::{DelegationUndo, DelegatorPosition, RegistryIndex, UserRecord},
    error::{Error, Result},
    operations::DelegationOperations,
    storage::{db::DelegationDB, DelegationStorageRead, DelegationStorageWrite},
    view::FlushableDelegationView,
};

/// Who is calling and when. Every mutating operation takes one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CallContext {
    caller: AccountAddress,
    block_timestamp: BlockTimestamp,
}

impl CallContext {
    pub fn new(caller: AccountAddress, block_timestamp: BlockTimestamp) -> Self {
        Self {
            caller,
            block_timestamp,
        }
    }

    pub fn caller(&self) -> AccountAddress {
        self.caller
    }

    pub fn block_timestamp(&self) -> BlockTimestamp {
        self.block_timestamp
    }
}

/// The delegation-rewards ledger.
///
/// Every mutating call stages its writes in a [DelegationCache], flushes them to storage and
/// only then calls into the external asset. If the asset rejects the transfer the flushed writes
/// are reverted with the undo data, so a failed call leaves no trace in storage.
pub struct DelegatorRewards<S, F, L> {
    config: LedgerConfig,
    storage: S,
    token: F,
    locked_positions: L,
}

impl<S, F, L> DelegatorRewards<S, F, L>
where
    S: DelegationStorageWrite,
    F: FungibleAsset,
    L: LockedPositionAsset,
{
    pub fn new(config: LedgerConfig, storage: S, token: F, locked_positions: L) -> Self {
        log::info!(
            "Delegation ledger created, owner: {}, custodian: {}",
            config.owner,
            config.custodian
        );
        Self {
            config,
            storage,
            token,
            locked_positions,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn owner(&self) -> AccountAddress {
        self.config.owner
    }

    pub fn custodian(&self) -> AccountAddress {
        self.config.custodian
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn token(&self) -> &F {
        &self.token
    }

    pub fn token_mut(&mut self) -> &mut F {
        &mut self.token
    }

    pub fn locked_positions(&self) -> &L {
        &self.locked_positions
    }

    pub fn locked_positions_mut(&mut self) -> &mut L {
        &mut self.locked_positions
    }

    /// Moves `amount` of the caller's tokens to the custodian and credits `beneficiary` with it.
    pub fn delegate_token(
        &mut self,
        ctx: CallContext,
        amount: Amount,
        beneficiary: AccountAddress,
        restake: bool,
    ) -> Result<DelegatorPosition> {
        ensure!(!amount.is_zero(), Error::InvalidAmount);

        let (position, undo) = self.credit_and_flush(ctx, beneficiary, amount, restake)?;

        let transferred = self.token.transfer_from(
            self.config.ledger_account,
            ctx.caller(),
            self.config.custodian,
            amount,
        );

        if let Err(e) = transferred {
            log::warn!(
                "Token transfer of {} from {} failed, reverting: {}",
                amount,
                ctx.caller(),
                e
            );
            if let Some(undo) = undo {
                DelegationDB::new(&mut self.storage).undo_delta(undo).log_err()?;
            }
            return Err(Error::TransferFailed(e));
        }

        log::debug!(
            "{} delegated {} on behalf of {}",
            ctx.caller(),
            amount,
            beneficiary
        );

        Ok(position)
    }

    /// Moves a locked position to the custodian and credits `beneficiary` with its locked value.
    ///
    /// The caller must own the position or be approved for it. A position with zero locked value
    /// is still moved but credits nothing.
    pub fn delegate_nft(
        &mut self,
        ctx: CallContext,
        position_id: PositionId,
        beneficiary: AccountAddress,
        restake: bool,
    ) -> Result<DelegatorPosition> {
        let owner = self
            .locked_positions
            .owner_of(position_id)
            .map_err(Error::AssetQueryFailed)?;
        let approved = self
            .locked_positions
            .get_approved(position_id)
            .map_err(Error::AssetQueryFailed)?;
        ensure!(
            owner == ctx.caller() || approved == Some(ctx.caller()),
            Error::NotAuthorized(ctx.caller())
        );

        let locked_value = self
            .locked_positions
            .locked_value_of(position_id)
            .map_err(Error::AssetQueryFailed)?;

        let (position, undo) = self.credit_and_flush(ctx, beneficiary, locked_value, restake)?;

        let transferred = self.locked_positions.transfer_from(
            self.config.ledger_account,
            owner,
            self.config.custodian,
            position_id,
        );

        if let Err(e) = transferred {
            log::warn!(
                "Transfer of locked position {} from {} failed, reverting: {}",
                position_id,
                owner,
                e
            );
            if let Some(undo) = undo {
                DelegationDB::new(&mut self.storage).undo_delta(undo).log_err()?;
            }
            return Err(match e {
                AssetError::TransferRestricted(id) => Error::TransferRestricted(id),
                e => Error::TransferFailed(e),
            });
        }

        log::debug!(
            "{} delegated locked position {} worth {} on behalf of {}",
            ctx.caller(),
            position_id,
            locked_value,
            beneficiary
        );

        Ok(position)
    }

    /// Owner-only verbatim import of externally computed positions.
    ///
    /// Row `i` of the four columns overwrites the position of `addresses[i]`. Either every row is
    /// written or none is.
    pub fn bulk_import(
        &mut self,
        ctx: CallContext,
        addresses: &[AccountAddress],
        amounts: &[Amount],
        start_dates: &[BlockTimestamp],
        restake_flags: &[bool],
    ) -> Result<()> {
        ensure!(
            ctx.caller() == self.config.owner,
            Error::NotAuthorized(ctx.caller())
        );

        let rows = addresses.len();
        ensure!(
            amounts.len() == rows && start_dates.len() == rows && restake_flags.len() == rows,
            Error::LengthMismatch {
                addresses: rows,
                amounts: amounts.len(),
                start_dates: start_dates.len(),
                restake_flags: restake_flags.len(),
            }
        );

        let delta = {
            let db = DelegationDB::new(&self.storage);
            let mut cache = DelegationCache::new(&db);

            let columns = addresses.iter().zip(amounts).zip(start_dates).zip(restake_flags);
            for (((address, amount), start_date), restake) in columns {
                cache.set_position_raw(*address, *amount, *start_date, *restake)?;
            }

            cache.consume()
        };

        let enrolled = delta.enrollments().len();
        let _undo = DelegationDB::new(&mut self.storage).batch_write_delta(delta)?;

        log::info!("Imported {rows} position(s), {enrolled} new account(s)");

        Ok(())
    }

    /// Up to `limit` registry entries starting at slot `offset`, in enrollment order.
    pub fn get_users(&self, offset: u64, limit: u64) -> Result<Vec<UserRecord>> {
        let len = self.users_count()?;
        if offset >= len {
            return Ok(Vec::new());
        }
        let end = std::cmp::min(offset.saturating_add(limit), len);

        (offset..end)
            .map(|slot| {
                let address =
                    self.user_at(slot)?.ok_or(Error::InvariantErrorRegistrySlotEmpty(slot))?;
                let position = self
                    .storage
                    .get_position(&address)
                    .map_err(|_| Error::ViewFail)?
                    .ok_or(Error::InvariantErrorPositionMissing(address))?;
                Ok(UserRecord::new(address, &position))
            })
            .collect()
    }

    /// The position of an account, zero-valued if it was never enrolled.
    pub fn position(&self, address: &AccountAddress) -> Result<DelegatorPosition> {
        let position = self.storage.get_position(address).map_err(|_| Error::ViewFail)?;
        Ok(position.unwrap_or_default())
    }

    pub fn committed_amount(&self, address: &AccountAddress) -> Result<Amount> {
        self.position(address).map(|p| p.committed_amount())
    }

    pub fn start_date(&self, address: &AccountAddress) -> Result<BlockTimestamp> {
        self.position(address).map(|p| p.start_date())
    }

    pub fn restake(&self, address: &AccountAddress) -> Result<bool> {
        self.position(address).map(|p| p.restake())
    }

    pub fn registry_index(&self, address: &AccountAddress) -> Result<RegistryIndex> {
        self.storage.get_registry_index(address).map_err(|_| Error::ViewFail)
    }

    pub fn users_count(&self) -> Result<u64> {
        self.storage.get_registry_len().map_err(|_| Error::ViewFail)
    }

    /// Account at the 0-based registry slot.
    pub fn user_at(&self, slot: u64) -> Result<Option<AccountAddress>> {
        self.storage.get_registry_entry(slot).map_err(|_| Error::ViewFail)
    }

    /// Stages the credit in a cache and flushes it. Returns the undo data of the flush, `None`
    /// when there was nothing to write.
    fn credit_and_flush(
        &mut self,
        ctx: CallContext,
        beneficiary: AccountAddress,
        contribution: Amount,
        restake: bool,
    ) -> Result<(DelegatorPosition, Option<DelegationUndo>)> {
        let (position, delta) = {
            let db = DelegationDB::new(&self.storage);
            let mut cache = DelegationCache::new(&db);
            let position = cache.credit_position(
                beneficiary,
                contribution,
                ctx.block_timestamp(),
                restake,
                self.config.restake_update_policy,
            )?;
            (position, cache.consume())
        };

        if delta.is_empty() {
            return Ok((position, None));
        }

        let undo = DelegationDB::new(&mut self.storage).batch_write_delta(delta)?;
        Ok((position, Some(undo)))
    }
}

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

mod assets;
mod cache;
mod config;
mod data;
mod error;
mod ledger;
mod merge;
mod migration;
mod operations;
mod storage;
mod view;

pub use {
    assets::{
        in_memory::{InMemoryFungibleAsset, InMemoryLockedPositions},
        AssetError, FungibleAsset, LockedPositionAsset,
    },
    cache::DelegationCache,
    config::{ConfigError, LedgerConfig, LedgerConfigFile, RestakeUpdatePolicy},
    data::{DelegationDeltaData, DelegationUndo, DelegatorPosition, RegistryIndex, UserRecord},
    error::{Error, Result},
    ledger::{CallContext, DelegatorRewards},
    merge::accrual_weighted_merge,
    migration::{ImportBatch, ImportColumns, ImportRow, MigrationError},
    operations::DelegationOperations,
    storage::{
        db::DelegationDB, in_memory::InMemoryDelegationStorage, DelegationStorageRead,
        DelegationStorageWrite,
    },
    view::{DelegationView, FlushableDelegationView},
};

#[cfg(test)]
mod tests;

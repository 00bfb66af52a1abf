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

//! Migration batches: positions exported from another ledger, in a form bulk import accepts.

use std::path::Path;

use common::{AccountAddress, Amount, BlockTimestamp};
use serde::{Deserialize, Serialize};

use crate::data::UserRecord;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum MigrationError {
    #[error("Failed to read import batch `{path}`: {reason}")]
    Read { path: String, reason: String },
    #[error("Failed to parse import batch: {0}")]
    Parse(String),
}

/// One position to import, written verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImportRow {
    pub address: AccountAddress,
    pub amount: Amount,
    pub start_date: BlockTimestamp,
    #[serde(default)]
    pub restake: bool,
}

/// The four parallel columns taken by [crate::DelegatorRewards::bulk_import].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportColumns {
    pub addresses: Vec<AccountAddress>,
    pub amounts: Vec<Amount>,
    pub start_dates: Vec<BlockTimestamp>,
    pub restake_flags: Vec<bool>,
}

/// A JSON batch of rows:
///
/// ```json
/// {
///   "rows": [
///     { "address": "0x...", "amount": "1000", "start_date": 1700000000, "restake": true }
///   ]
/// }
/// ```
#[must_use]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImportBatch {
    rows: Vec<ImportRow>,
}

impl ImportBatch {
    pub fn new(rows: Vec<ImportRow>) -> Self {
        Self { rows }
    }

    pub fn from_json_str(batch: &str) -> Result<Self, MigrationError> {
        serde_json::from_str(batch).map_err(|e| MigrationError::Parse(e.to_string()))
    }

    pub fn read(path: &Path) -> Result<Self, MigrationError> {
        let batch = std::fs::read_to_string(path).map_err(|e| MigrationError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&batch)
    }

    /// Builds a batch out of registry pages read from another ledger.
    pub fn from_user_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| ImportRow {
                address: record.address,
                amount: record.committed_amount,
                start_date: record.start_date,
                restake: record.restake,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[ImportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_columns(self) -> ImportColumns {
        let mut columns = ImportColumns {
            addresses: Vec::with_capacity(self.rows.len()),
            amounts: Vec::with_capacity(self.rows.len()),
            start_dates: Vec::with_capacity(self.rows.len()),
            restake_flags: Vec::with_capacity(self.rows.len()),
        };

        for row in self.rows {
            columns.addresses.push(row.address);
            columns.amounts.push(row.amount);
            columns.start_dates.push(row.start_date);
            columns.restake_flags.push(row.restake);
        }

        columns
    }
}

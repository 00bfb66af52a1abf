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

use std::path::Path;

use common::AccountAddress;
use serde::{Deserialize, Serialize};

/// What a delegation does to the restake flag of an already enrolled beneficiary.
///
/// Bulk import is not affected: it always writes the flag it is given.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RestakeUpdatePolicy {
    /// The flag passed with the enrolling delegation sticks; later top-ups ignore theirs.
    #[default]
    FirstEnrollmentOnly,
    /// Every delegation overwrites the stored flag.
    LatestCall,
}

/// Runtime configuration of a ledger. Fixed for the lifetime of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// The only account allowed to run bulk imports.
    pub owner: AccountAddress,
    /// Receives every delegated token and locked position.
    pub custodian: AccountAddress,
    /// The account the ledger acts as towards the asset contracts when moving a
    /// participant's assets.
    pub ledger_account: AccountAddress,
    pub restake_update_policy: RestakeUpdatePolicy,
}

impl LedgerConfig {
    pub fn new(
        owner: AccountAddress,
        custodian: AccountAddress,
        ledger_account: AccountAddress,
    ) -> Self {
        Self {
            owner,
            custodian,
            ledger_account,
            restake_update_policy: RestakeUpdatePolicy::default(),
        }
    }

    pub fn with_restake_update_policy(mut self, policy: RestakeUpdatePolicy) -> Self {
        self.restake_update_policy = policy;
        self
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required config option `{0}`")]
    MissingOption(&'static str),
    #[error("Failed to read config file `{path}`: {reason}")]
    Read { path: String, reason: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// The ledger config file, in TOML:
///
/// ```toml
/// owner = "0x..."
/// custodian = "0x..."
/// ledger_account = "0x..."
/// restake_update_policy = "first-enrollment-only" # or "latest-call"
/// ```
#[must_use]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfigFile {
    pub owner: Option<AccountAddress>,
    pub custodian: Option<AccountAddress>,
    pub ledger_account: Option<AccountAddress>,
    pub restake_update_policy: Option<RestakeUpdatePolicy>,
}

impl LedgerConfigFile {
    pub fn from_toml_str(config: &str) -> Result<Self, ConfigError> {
        toml::from_str(config).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&config)
    }
}

impl TryFrom<LedgerConfigFile> for LedgerConfig {
    type Error = ConfigError;

    fn try_from(config_file: LedgerConfigFile) -> Result<Self, Self::Error> {
        let LedgerConfigFile {
            owner,
            custodian,
            ledger_account,
            restake_update_policy,
        } = config_file;

        Ok(Self {
            owner: owner.ok_or(ConfigError::MissingOption("owner"))?,
            custodian: custodian.ok_or(ConfigError::MissingOption("custodian"))?,
            ledger_account: ledger_account.ok_or(ConfigError::MissingOption("ledger_account"))?,
            restake_update_policy: restake_update_policy.unwrap_or_default(),
        })
    }
}

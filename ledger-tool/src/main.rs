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

mod options;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;

use common::BlockTimestamp;
use delegation_accounting::{
    CallContext, DelegatorRewards, ImportBatch, InMemoryDelegationStorage, InMemoryFungibleAsset,
    InMemoryLockedPositions, LedgerConfig, LedgerConfigFile, UserRecord,
};
use logging::log;
use options::{CheckImportOptions, Command, LedgerToolOptions};

#[derive(serde::Serialize)]
struct RegistryPage {
    offset: u64,
    users: Vec<UserRecord>,
}

fn check_import(options: CheckImportOptions) -> anyhow::Result<()> {
    let CheckImportOptions {
        config,
        batch,
        page_size,
    } = options;

    let config: LedgerConfig = LedgerConfigFile::read(&config)?.try_into()?;
    let batch = ImportBatch::read(&batch)?;
    log::info!("Loaded import batch with {} row(s)", batch.len());

    let now = SystemTime::now().duration_since(UNIX_EPOCH).context("System time before epoch")?;
    let ctx = CallContext::new(config.owner, BlockTimestamp::from_duration_since_epoch(now));

    let mut ledger = DelegatorRewards::new(
        config,
        InMemoryDelegationStorage::new(),
        InMemoryFungibleAsset::new(),
        InMemoryLockedPositions::new(),
    );

    let columns = batch.into_columns();
    ledger
        .bulk_import(
            ctx,
            &columns.addresses,
            &columns.amounts,
            &columns.start_dates,
            &columns.restake_flags,
        )
        .context("Bulk import rejected the batch")?;

    let users_count = ledger.users_count()?;
    let mut offset = 0;
    while offset < users_count {
        let users = ledger.get_users(offset, page_size)?;
        let next_offset = offset + users.len() as u64;
        println!("{}", serde_json::to_string(&RegistryPage { offset, users })?);
        offset = next_offset;
    }

    log::info!("Batch imported cleanly, {users_count} account(s) in the registry");

    Ok(())
}

fn run(options: LedgerToolOptions) -> anyhow::Result<()> {
    match options.command {
        Command::CheckImport(options) => check_import(options),
    }
}

fn main() {
    logging::init_logging();

    let options = LedgerToolOptions::parse();

    if let Err(err) = run(options) {
        eprintln!("ledger-tool failed: {err:?}");
        std::process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CONFIG: &str = r#"
        owner = "0x0000000000000000000000000000000000000001"
        custodian = "0x0000000000000000000000000000000000000002"
        ledger_account = "0x0000000000000000000000000000000000000003"
    "#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn options(
        config: &tempfile::NamedTempFile,
        batch: &tempfile::NamedTempFile,
    ) -> CheckImportOptions {
        CheckImportOptions {
            config: config.path().to_path_buf(),
            batch: batch.path().to_path_buf(),
            page_size: 1,
        }
    }

    #[test]
    fn valid_batch() {
        let config = write_temp(CONFIG);
        let batch = write_temp(
            r#"{"rows": [
                {"address": "0x00000000000000000000000000000000000000aa", "amount": "10", "start_date": 5},
                {"address": "0x00000000000000000000000000000000000000bb", "amount": 20, "start_date": 6, "restake": true}
            ]}"#,
        );
        check_import(options(&config, &batch)).unwrap();
    }

    #[test]
    fn invalid_row_fails() {
        let config = write_temp(CONFIG);
        let batch = write_temp(
            r#"{"rows": [
                {"address": "0x00000000000000000000000000000000000000aa", "amount": "0", "start_date": 5}
            ]}"#,
        );
        let err = check_import(options(&config, &batch)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<delegation_accounting::Error>(),
            Some(&delegation_accounting::Error::InvalidAmount)
        );
    }

    #[test]
    fn incomplete_config_fails() {
        let config = write_temp(r#"owner = "0x0000000000000000000000000000000000000001""#);
        let batch = write_temp(r#"{"rows": []}"#);
        let err = check_import(options(&config, &batch)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<delegation_accounting::ConfigError>(),
            Some(&delegation_accounting::ConfigError::MissingOption("custodian"))
        );
    }

    #[test]
    fn parse_command_line() {
        let options = LedgerToolOptions::try_parse_from([
            "ledger-tool",
            "check-import",
            "--config",
            "ledger.toml",
            "--batch",
            "batch.json",
        ])
        .unwrap();
        let Command::CheckImport(options) = options.command;
        assert_eq!(options.page_size, 100);

        assert!(LedgerToolOptions::try_parse_from([
            "ledger-tool",
            "check-import",
            "--config",
            "ledger.toml",
            "--batch",
            "batch.json",
            "--page-size",
            "0",
        ])
        .is_err());
    }
}

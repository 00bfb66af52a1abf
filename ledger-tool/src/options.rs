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

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version)]
#[clap(about = "Tools for delegation ledger operators")]
pub struct LedgerToolOptions {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a migration batch through bulk import on an empty in-memory ledger and print the
    /// resulting registry, page by page, as JSON lines.
    CheckImport(CheckImportOptions),
}

#[derive(clap::Args, Debug)]
pub struct CheckImportOptions {
    /// Ledger config file (TOML)
    #[clap(long)]
    pub config: PathBuf,

    /// Import batch (JSON)
    #[clap(long)]
    pub batch: PathBuf,

    /// Number of registry entries per printed page
    #[clap(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: u64,
}

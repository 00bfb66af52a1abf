// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub use log;

/// Environment variable holding the filter, in `env_logger` syntax
/// (e.g. `info,delegation_accounting=debug`).
pub const LOG_FILTER_ENV_VAR: &str = "RUST_LOG";

const DEFAULT_FILTER: &str = "info";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Initialize the global logger. Only the first call has any effect.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let env = env_logger::Env::new().filter_or(LOG_FILTER_ENV_VAR, DEFAULT_FILTER);
        // Another logger may already be installed by a host binary; keep it.
        let _ = env_logger::Builder::from_env(env).format_timestamp_millis().try_init();
    });
}

/// Same as [init_logging] but routes output through the test harness capture.
pub fn init_test_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let env = env_logger::Env::new().filter_or(LOG_FILTER_ENV_VAR, DEFAULT_FILTER);
        let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
    });
}

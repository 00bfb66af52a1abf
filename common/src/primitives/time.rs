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

use std::time::Duration;

use parity_scale_codec::{Decode, Encode};

/// Seconds since the Unix epoch, as reported by the execution environment for the current call.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct BlockTimestamp {
    #[codec(compact)]
    timestamp: u64,
}

impl std::fmt::Display for BlockTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.timestamp.fmt(f)
    }
}

impl BlockTimestamp {
    pub const ZERO: Self = Self::from_int_seconds(0);

    pub const fn from_int_seconds(timestamp: u64) -> Self {
        Self { timestamp }
    }

    pub fn from_duration_since_epoch(duration: Duration) -> Self {
        Self {
            timestamp: duration.as_secs(),
        }
    }

    pub const fn as_int_seconds(&self) -> u64 {
        self.timestamp
    }
}

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

use serde::de::Error;

use super::Amount;

// JSON numbers cannot carry the full u128 range, so amounts are written as decimal strings.
// Plain numbers are still accepted up to u64.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum StringOrUInt {
    String(String),
    UInt(u64),
}

impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.atoms.to_string().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let atoms: u128 = match StringOrUInt::deserialize(deserializer)? {
            StringOrUInt::String(s) => s
                .parse()
                .map_err(|e| D::Error::custom(format!("Failed to parse amount `{s}`: {e}")))?,
            StringOrUInt::UInt(u) => u.into(),
        };
        Ok(Amount::from_atoms(atoms))
    }
}

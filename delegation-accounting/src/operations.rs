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

use common::{AccountAddress, Amount, BlockTimestamp};

use crate::{
    config::RestakeUpdatePolicy,
    data::{DelegatorPosition, RegistryIndex},
    error::Result,
};

pub trait DelegationOperations {
    /// Appends the account to the registry unless it is already there.
    fn enroll(&mut self, address: AccountAddress) -> Result<RegistryIndex>;

    /// Credits a contribution made at `now` using the accrual-weighted merge and enrolls the
    /// beneficiary if needed. A zero contribution changes nothing, not even enrollment.
    fn credit_position(
        &mut self,
        beneficiary: AccountAddress,
        contribution: Amount,
        now: BlockTimestamp,
        restake: bool,
        restake_policy: RestakeUpdatePolicy,
    ) -> Result<DelegatorPosition>;

    /// Overwrites a position verbatim, enrolling the account if needed.
    fn set_position_raw(
        &mut self,
        address: AccountAddress,
        committed_amount: Amount,
        start_date: BlockTimestamp,
        restake: bool,
    ) -> Result<()>;
}

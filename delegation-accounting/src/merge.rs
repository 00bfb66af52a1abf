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

use common::{Amount, BlockTimestamp};
use num::{BigUint, ToPrimitive};

use crate::error::{Error, Result};

/// Merges a new contribution into a position and returns the new `(amount, start date)`.
///
/// The start date becomes the amount-weighted average of the old start date and `now`:
///
/// ```text
/// S' = floor((A * S + D * T) / (A + D))
/// ```
///
/// where `A`, `S` are the committed amount and start date, `D` the contribution and `T` the
/// current time. With nothing committed yet the start date is simply `now`. A zero contribution
/// leaves the position as it is.
///
/// The products are taken in arbitrary precision, so the only failure is the new total not
/// fitting into [Amount].
pub fn accrual_weighted_merge(
    committed: Amount,
    start_date: BlockTimestamp,
    contribution: Amount,
    now: BlockTimestamp,
) -> Result<(Amount, BlockTimestamp)> {
    if contribution.is_zero() {
        return Ok((committed, start_date));
    }

    let total = (committed + contribution).ok_or(Error::Overflow)?;

    if committed.is_zero() {
        return Ok((total, now));
    }

    let weighted_sum = BigUint::from(committed.into_atoms())
        * BigUint::from(start_date.as_int_seconds())
        + BigUint::from(contribution.into_atoms()) * BigUint::from(now.as_int_seconds());

    // Division of non-negative integers truncates, i.e. this is the floor.
    let new_start_date = (weighted_sum / BigUint::from(total.into_atoms()))
        .to_u64()
        .ok_or(Error::Overflow)?;

    Ok((total, BlockTimestamp::from_int_seconds(new_start_date)))
}

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

use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::{accrual_weighted_merge, Error};

#[test]
fn first_contribution_starts_now() {
    assert_eq!(
        accrual_weighted_merge(Amount::ZERO, BlockTimestamp::ZERO, amount(10), ts(T0)),
        Ok((amount(10), ts(T0)))
    );
}

#[test]
fn three_step_scenario() {
    let (a, s) =
        accrual_weighted_merge(Amount::ZERO, BlockTimestamp::ZERO, amount(10), ts(T0)).unwrap();

    let (a, s) = accrual_weighted_merge(a, s, amount(10), ts(T0 + 5 * DAY)).unwrap();
    assert_eq!(a, amount(20));
    assert_eq!(s, ts(T0 + 5 * DAY / 2));

    let (a, s) = accrual_weighted_merge(a, s, amount(40), ts(T0 + 15 * DAY)).unwrap();
    assert_eq!(a, amount(60));
    // prev + 2/3 * (T0 + 15d - prev)
    let prev = T0 + 5 * DAY / 2;
    assert_eq!(s, ts(prev + 2 * (T0 + 15 * DAY - prev) / 3));
    assert_eq!(s, ts(T0 + 936_000));
}

#[rstest]
#[case(2, 10, 1, 11, 10)]
#[case(1, 10, 2, 11, 10)]
#[case(1, 0, 1, 1, 0)]
#[case(3, 100, 1, 103, 100)]
#[case(1, 100, 3, 103, 102)]
fn merge_rounds_down(
    #[case] committed: u128,
    #[case] start: u64,
    #[case] contribution: u128,
    #[case] now: u64,
    #[case] expected_start: u64,
) {
    let (total, start_date) =
        accrual_weighted_merge(amount(committed), ts(start), amount(contribution), ts(now))
            .unwrap();
    assert_eq!(total, amount(committed + contribution));
    assert_eq!(start_date, ts(expected_start));
}

#[test]
fn zero_contribution_is_noop() {
    assert_eq!(
        accrual_weighted_merge(amount(7), ts(T0), Amount::ZERO, ts(T0 + DAY)),
        Ok((amount(7), ts(T0)))
    );
    assert_eq!(
        accrual_weighted_merge(Amount::ZERO, BlockTimestamp::ZERO, Amount::ZERO, ts(T0)),
        Ok((Amount::ZERO, BlockTimestamp::ZERO))
    );
}

#[test]
fn total_overflow() {
    assert_eq!(
        accrual_weighted_merge(Amount::MAX, ts(T0), amount(1), ts(T0)),
        Err(Error::Overflow)
    );
    assert_eq!(
        accrual_weighted_merge(amount(1), ts(T0), Amount::MAX, ts(T0)),
        Err(Error::Overflow)
    );
}

#[test]
fn wide_products_do_not_overflow() {
    let half = amount(u128::MAX / 2);
    let (total, start_date) =
        accrual_weighted_merge(half, ts(u64::MAX - 2), half, ts(u64::MAX)).unwrap();
    assert_eq!(total, amount(u128::MAX / 2 * 2));
    assert_eq!(start_date, ts(u64::MAX - 1));
}

proptest! {
    #[test]
    fn start_date_stays_between_old_and_now(
        committed in 1u128..=u64::MAX as u128,
        contribution in 1u128..=u64::MAX as u128,
        start in 1u64..(1 << 40),
        elapsed in 0u64..(1 << 30),
    ) {
        let now = start + elapsed;
        let (total, start_date) =
            accrual_weighted_merge(amount(committed), ts(start), amount(contribution), ts(now))
                .unwrap();

        prop_assert_eq!(total, amount(committed + contribution));
        prop_assert!(ts(start) <= start_date && start_date <= ts(now));

        let expected = (committed * start as u128 + contribution * now as u128)
            / (committed + contribution);
        prop_assert_eq!(start_date, ts(expected as u64));
    }

    #[test]
    fn first_contribution_identity(contribution in 1u128.., now in 1u64..) {
        prop_assert_eq!(
            accrual_weighted_merge(
                Amount::ZERO,
                BlockTimestamp::ZERO,
                amount(contribution),
                ts(now)
            ),
            Ok((amount(contribution), ts(now)))
        );
    }
}

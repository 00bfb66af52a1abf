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

use rand::Rng;
use rstest::rstest;
use test_utils::random::{make_seedable_rng, Seed};

use super::*;
use crate::{ImportBatch, RegistryIndex, UserRecord};

fn import_accounts(ledger: &mut TestLedger, n: u64) -> Vec<UserRecord> {
    let records: Vec<_> = (0..n)
        .map(|i| UserRecord {
            address: account(0x200 + i),
            committed_amount: amount(1 + i as u128),
            start_date: ts(T0 + i),
            restake: i % 2 == 0,
        })
        .collect();
    let columns = ImportBatch::from_user_records(records.clone()).into_columns();
    ledger
        .bulk_import(
            ctx(owner(), T0),
            &columns.addresses,
            &columns.amounts,
            &columns.start_dates,
            &columns.restake_flags,
        )
        .unwrap();
    records
}

#[rstest]
#[case(0, 0)]
#[case(0, 10)]
#[case(5, 1)]
#[case(u64::MAX, u64::MAX)]
fn empty_registry_reads_nothing(#[case] offset: u64, #[case] limit: u64) {
    let ledger = make_default_ledger();
    assert_eq!(ledger.get_users(offset, limit), Ok(vec![]));
}

#[rstest]
#[case(0, 0, 0..0)]
#[case(0, 3, 0..3)]
#[case(2, 2, 2..4)]
#[case(4, 10, 4..5)]
#[case(5, 1, 0..0)]
#[case(6, 1, 0..0)]
#[case(3, u64::MAX, 3..5)]
#[case(u64::MAX, u64::MAX, 0..0)]
fn page_boundaries(
    #[case] offset: u64,
    #[case] limit: u64,
    #[case] expected: std::ops::Range<usize>,
) {
    let mut ledger = make_default_ledger();
    let records = import_accounts(&mut ledger, 5);
    assert_eq!(ledger.get_users(offset, limit).unwrap(), records[expected]);
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn pages_cover_the_registry(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let n = rng.gen_range(0..100);
    let page_size = rng.gen_range(1..20);

    let mut ledger = make_default_ledger();
    let records = import_accounts(&mut ledger, n);

    let mut read = Vec::new();
    let mut offset = 0;
    loop {
        let page = ledger.get_users(offset, page_size).unwrap();
        assert!(page.len() as u64 <= page_size);
        if page.is_empty() {
            break;
        }
        offset += page.len() as u64;
        read.extend(page);
    }
    assert_eq!(read, records);
}

#[test]
fn per_field_getters() {
    let mut ledger = make_default_ledger();
    fund(&mut ledger, alice(), amount(10));
    ledger.delegate_token(ctx(alice(), T0), amount(10), bob(), true).unwrap();

    assert_eq!(ledger.committed_amount(&bob()).unwrap(), amount(10));
    assert_eq!(ledger.start_date(&bob()).unwrap(), ts(T0));
    assert!(ledger.restake(&bob()).unwrap());
    assert_eq!(ledger.registry_index(&bob()).unwrap(), RegistryIndex::from_u64(1));
    assert_eq!(ledger.user_at(0).unwrap(), Some(bob()));
    assert_eq!(ledger.user_at(1).unwrap(), None);
    assert_eq!(ledger.users_count().unwrap(), 1);

    assert_eq!(ledger.committed_amount(&alice()).unwrap(), Amount::ZERO);
    assert_eq!(ledger.start_date(&alice()).unwrap(), BlockTimestamp::ZERO);
    assert!(!ledger.restake(&alice()).unwrap());

    assert_eq!(ledger.owner(), owner());
    assert_eq!(ledger.custodian(), custodian());
    assert_eq!(ledger.config().ledger_account, ledger_account());
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn migrate_into_a_new_ledger(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    let mut old_ledger = make_default_ledger();
    for i in 0..20u64 {
        let participant = account(0x300 + rng.gen_range(0..8));
        let value = amount(rng.gen_range(1..1_000_000));
        fund(&mut old_ledger, participant, value);
        old_ledger
            .delegate_token(ctx(participant, T0 + i * DAY), value, participant, rng.gen())
            .unwrap();
    }

    let mut records = Vec::new();
    let mut offset = 0;
    loop {
        let page = old_ledger.get_users(offset, 3).unwrap();
        if page.is_empty() {
            break;
        }
        offset += page.len() as u64;
        records.extend(page);
    }

    let batch = ImportBatch::from_json_str(
        &serde_json::to_string(&ImportBatch::from_user_records(records)).unwrap(),
    )
    .unwrap();
    let columns = batch.into_columns();

    let mut new_ledger = make_default_ledger();
    new_ledger
        .bulk_import(
            ctx(owner(), T0 + 100 * DAY),
            &columns.addresses,
            &columns.amounts,
            &columns.start_dates,
            &columns.restake_flags,
        )
        .unwrap();

    assert_eq!(new_ledger.storage(), old_ledger.storage());
    assert_eq!(
        new_ledger.get_users(0, u64::MAX).unwrap(),
        old_ledger.get_users(0, u64::MAX).unwrap()
    );
}

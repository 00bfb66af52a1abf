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

use common::{AccountAddress, Amount, BlockTimestamp, PositionId};

use crate::{
    CallContext, DelegatorRewards, InMemoryDelegationStorage, InMemoryFungibleAsset,
    InMemoryLockedPositions, LedgerConfig, LockedPositionAsset, RestakeUpdatePolicy,
};

mod merge_tests;
mod reader_tests;

type TestLedger =
    DelegatorRewards<InMemoryDelegationStorage, InMemoryFungibleAsset, InMemoryLockedPositions>;

const DAY: u64 = 24 * 60 * 60;
const T0: u64 = 1_700_000_000;

fn account(v: u64) -> AccountAddress {
    AccountAddress::from_low_u64_be(v)
}

fn owner() -> AccountAddress {
    account(0xA1)
}

fn custodian() -> AccountAddress {
    account(0xA2)
}

fn ledger_account() -> AccountAddress {
    account(0xA3)
}

fn alice() -> AccountAddress {
    account(0xB1)
}

fn bob() -> AccountAddress {
    account(0xB2)
}

fn stranger() -> AccountAddress {
    account(0xBF)
}

fn ts(seconds: u64) -> BlockTimestamp {
    BlockTimestamp::from_int_seconds(seconds)
}

fn amount(atoms: u128) -> Amount {
    Amount::from_atoms(atoms)
}

fn ctx(caller: AccountAddress, seconds: u64) -> CallContext {
    CallContext::new(caller, ts(seconds))
}

fn test_config(policy: RestakeUpdatePolicy) -> LedgerConfig {
    LedgerConfig::new(owner(), custodian(), ledger_account()).with_restake_update_policy(policy)
}

/// A ledger whose locked-position asset lets positions go to the custodian.
fn make_ledger(policy: RestakeUpdatePolicy) -> TestLedger {
    let mut locked_positions = InMemoryLockedPositions::new();
    locked_positions.allow_receiver(custodian());
    DelegatorRewards::new(
        test_config(policy),
        InMemoryDelegationStorage::new(),
        InMemoryFungibleAsset::new(),
        locked_positions,
    )
}

fn make_default_ledger() -> TestLedger {
    make_ledger(RestakeUpdatePolicy::default())
}

/// Mints `value` to `account` and lets the ledger move all of it.
fn fund(ledger: &mut TestLedger, account: AccountAddress, value: Amount) {
    ledger.token_mut().mint(account, value).unwrap();
    let allowance = ledger.token().allowance(&account, &ledger_account());
    ledger
        .token_mut()
        .approve(account, ledger_account(), (allowance + value).unwrap());
}

/// Mints a locked position to `owner` and makes the ledger an operator of the owner.
fn mint_position(ledger: &mut TestLedger, owner: AccountAddress, value: Amount) -> PositionId {
    let positions = ledger.locked_positions_mut();
    let id = positions.mint(owner, value).unwrap();
    positions.set_approval_for_all(owner, ledger_account(), true);
    id
}

/// Every registry slot points back at an enrolled account with a positive position.
fn assert_registry_consistent(ledger: &TestLedger) {
    let len = ledger.users_count().unwrap();
    assert_eq!(len as usize, ledger.storage().registry().len());
    assert_eq!(ledger.storage().positions().len(), ledger.storage().registry().len());

    for slot in 0..len {
        let address = ledger.user_at(slot).unwrap().unwrap();
        assert_eq!(ledger.registry_index(&address).unwrap().slot(), Some(slot));
        assert!(!ledger.committed_amount(&address).unwrap().is_zero());
        assert!(ledger.start_date(&address).unwrap() > BlockTimestamp::ZERO);
    }
    assert_eq!(ledger.user_at(len).unwrap(), None);
}

fn custodian_owns(ledger: &TestLedger, id: PositionId) -> bool {
    ledger.locked_positions().owner_of(id).unwrap() == custodian()
}

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

pub mod random;

use rand::Rng;

/// Split `total` into `parts` non-zero pieces that add up to it exactly.
///
/// Panics if `parts` is zero or greater than `total`.
pub fn split_value(rng: &mut impl Rng, total: u128, parts: usize) -> Vec<u128> {
    assert!(parts > 0 && (parts as u128) <= total);

    let mut remaining = total;
    let mut result = Vec::with_capacity(parts);
    for left in (1..parts).rev() {
        // leave at least one atom for each of the remaining pieces
        let piece = rng.gen_range(1..=remaining - left as u128);
        result.push(piece);
        remaining -= piece;
    }
    result.push(remaining);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{make_seedable_rng, Seed};

    #[test]
    fn split_value_sums_up() {
        let mut rng = make_seedable_rng(Seed::from_entropy());
        for parts in 1..10 {
            let total = rng.gen_range(parts as u128..1_000_000);
            let pieces = split_value(&mut rng, total, parts);
            assert_eq!(pieces.len(), parts);
            assert!(pieces.iter().all(|p| *p > 0));
            assert_eq!(pieces.iter().sum::<u128>(), total);
        }
    }
}

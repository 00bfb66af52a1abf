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

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

#[derive(Debug, Copy, Clone)]
pub struct Seed(pub u64);

impl Seed {
    pub fn from_entropy() -> Self {
        Seed(rand::thread_rng().gen::<u64>())
    }

    pub fn from_u64(v: u64) -> Self {
        Seed(v)
    }
}

#[must_use]
pub fn make_seedable_rng(seed: Seed) -> impl Rng {
    ChaChaRng::seed_from_u64(seed.0)
}

#[macro_export]
macro_rules! make_seedable_rng {
    ($seed:expr) => {{
        println!(
            "{}:{} Using seed '{}' for the PRNG",
            file!(),
            line!(),
            $seed.0
        );
        make_seedable_rng($seed)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let seed = Seed::from_entropy();
        let mut a = make_seedable_rng(seed);
        let mut b = make_seedable_rng(Seed::from_u64(seed.0));
        for _ in 0..16 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }
}

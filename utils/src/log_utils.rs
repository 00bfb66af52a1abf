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

use std::{fmt::Display, panic::Location};

use logging::log;

/// Log an error value together with the caller location that produced it.
pub fn log<E: Display + ?Sized>(
    err: &E,
    target: &str,
    level: log::Level,
    location: &Location<'_>,
) {
    log::log!(
        target: target,
        level,
        "{err} ({}:{})",
        location.file(),
        location.line()
    );
}


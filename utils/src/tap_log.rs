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

use crate::log_utils;

/// Log the error of a `Result` on the way through, leaving the value untouched.
pub trait TapLog
where
    Self: Sized,
{
    fn log_err(self) -> Self;
}

const LOG_TARGET: &str = "TapLog";

impl<T, E: Display> TapLog for Result<T, E> {
    #[inline(always)]
    #[track_caller]
    fn log_err(self) -> Self {
        if let Err(ref err) = self {
            log_utils::log(err, LOG_TARGET, log::Level::Error, Location::caller());
        }
        self
    }
}

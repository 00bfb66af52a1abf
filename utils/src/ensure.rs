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

/// Return early with the given error if the condition does not hold.
///
/// In the single-argument form the enclosing function must return `Option`.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then(|| ())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then(|| ()).ok_or_else(|| $err)?
    };
}

pub mod func_style {
    /// Return `None` if given condition is not satisfied.
    ///
    /// Example:
    /// ```
    /// # use utils::ensure::func_style::*;
    /// fn checked_share(total: u128, parts: u128) -> Option<u128> {
    ///     ensure_some(parts != 0)?;
    ///     Some(total / parts)
    /// }
    ///
    /// assert_eq!(checked_share(60, 3), Some(20));
    /// assert_eq!(checked_share(60, 0), None);
    /// ```
    #[must_use = "Result of ensure_some not used. Use the `?` operator for early exit."]
    pub fn ensure_some(cond: bool) -> Option<()> {
        cond.then_some(())
    }

    /// Return `Err(err)` if given condition is not satisfied.
    ///
    /// Example:
    /// ```
    /// # use utils::ensure::func_style::*;
    /// # #[derive(PartialEq, Eq, Debug)]
    /// enum ColumnsError {
    ///     Empty,
    ///     LengthMismatch,
    /// }
    ///
    /// fn row_count(left: &[u8], right: &[u8]) -> Result<usize, ColumnsError> {
    ///     ensure(!left.is_empty(), ColumnsError::Empty)?;
    ///     ensure(left.len() == right.len(), ColumnsError::LengthMismatch)?;
    ///     Ok(left.len())
    /// }
    ///
    /// assert_eq!(row_count(&[1, 2], &[3, 4]), Ok(2));
    /// assert_eq!(row_count(&[], &[]), Err(ColumnsError::Empty));
    /// assert_eq!(row_count(&[1], &[3, 4]), Err(ColumnsError::LengthMismatch));
    /// ```
    #[must_use = "Result of ensure not used. Use the `?` operator for early exit."]
    pub fn ensure<E>(cond: bool, err: E) -> Result<(), E> {
        ensure_some(cond).ok_or(err)
    }

    /// Same as [ensure()] but the error is only built when the condition fails.
    #[must_use = "Result of ensure_fn not used. Use the `?` operator for early exit."]
    pub fn ensure_fn<E>(cond: bool, err_fn: impl FnOnce() -> E) -> Result<(), E> {
        ensure_some(cond).ok_or_else(err_fn)
    }
}

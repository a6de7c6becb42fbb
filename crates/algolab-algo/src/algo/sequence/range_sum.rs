// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Prefix and suffix sums for O(1) inclusive range queries.
//!
//! - `prefix[i] = values[0] + .. + values[i]`,
//!   `sum(l, r) = prefix[r] - prefix[l - 1]` (`prefix[r]` when `l == 0`)
//! - `suffix[i] = values[i] + .. + values[n - 1]`,
//!   `sum(l, r) = suffix[l] - suffix[r + 1]` (`suffix[l]` when `r == n - 1`)

use algolab_common::{LabError, Result};
use serde::Serialize;

/// One accumulation step: `total = previous + value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStep {
    pub index: usize,
    /// Running total before this element (`None` for the first step)
    pub previous: Option<i64>,
    pub value: i64,
    pub total: i64,
}

fn check_range(left: usize, right: usize, len: usize) -> Result<()> {
    if left > right || right >= len {
        return Err(LabError::InvalidRange { left, right, len });
    }
    Ok(())
}

fn accumulate(acc: i64, value: i64, what: &'static str) -> Result<i64> {
    acc.checked_add(value).ok_or(LabError::Overflow { what })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    values: Vec<i64>,
    prefix: Vec<i64>,
}

impl PrefixSums {
    /// Fails with `Overflow` when a running total leaves the `i64` range.
    pub fn new(values: &[i64]) -> Result<Self> {
        let mut prefix = Vec::with_capacity(values.len());
        let mut acc = 0i64;
        for &v in values {
            acc = accumulate(acc, v, "prefix sums")?;
            prefix.push(acc);
        }
        Ok(Self {
            values: values.to_vec(),
            prefix,
        })
    }

    pub fn sums(&self) -> &[i64] {
        &self.prefix
    }

    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Sum of `values[left..=right]`.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64> {
        check_range(left, right, self.len())?;
        if left == 0 {
            return Ok(self.prefix[right]);
        }
        self.prefix[right]
            .checked_sub(self.prefix[left - 1])
            .ok_or(LabError::Overflow { what: "range sum" })
    }

    /// Left-to-right accumulation steps.
    pub fn build_steps(&self) -> Vec<BuildStep> {
        (0..self.len())
            .map(|i| BuildStep {
                index: i,
                previous: i.checked_sub(1).map(|p| self.prefix[p]),
                value: self.values[i],
                total: self.prefix[i],
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSums {
    values: Vec<i64>,
    suffix: Vec<i64>,
}

impl SuffixSums {
    /// Fails with `Overflow` when a running total leaves the `i64` range.
    pub fn new(values: &[i64]) -> Result<Self> {
        let mut suffix = vec![0i64; values.len()];
        let mut acc = 0i64;
        for (i, &v) in values.iter().enumerate().rev() {
            acc = accumulate(acc, v, "suffix sums")?;
            suffix[i] = acc;
        }
        Ok(Self {
            values: values.to_vec(),
            suffix,
        })
    }

    pub fn sums(&self) -> &[i64] {
        &self.suffix
    }

    pub fn len(&self) -> usize {
        self.suffix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix.is_empty()
    }

    /// Sum of `values[left..=right]`.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64> {
        check_range(left, right, self.len())?;
        if right == self.len() - 1 {
            return Ok(self.suffix[left]);
        }
        self.suffix[left]
            .checked_sub(self.suffix[right + 1])
            .ok_or(LabError::Overflow { what: "range sum" })
    }

    /// Right-to-left accumulation steps, in build order.
    pub fn build_steps(&self) -> Vec<BuildStep> {
        let n = self.len();
        (0..n)
            .rev()
            .map(|i| BuildStep {
                index: i,
                previous: (i + 1 < n).then(|| self.suffix[i + 1]),
                value: self.values[i],
                total: self.suffix[i],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [i64; 5] = [2, 4, 6, 8, 10];

    #[test]
    fn test_prefix_sums() {
        let prefix = PrefixSums::new(&VALUES).unwrap();
        assert_eq!(prefix.sums(), &[2, 6, 12, 20, 30]);
        assert_eq!(prefix.range_sum(0, 2).unwrap(), 12);
        assert_eq!(prefix.range_sum(1, 3).unwrap(), 18);
        assert_eq!(prefix.range_sum(2, 4).unwrap(), 24);
    }

    #[test]
    fn test_suffix_sums() {
        let suffix = SuffixSums::new(&VALUES).unwrap();
        assert_eq!(suffix.sums(), &[30, 28, 24, 18, 10]);
        assert_eq!(suffix.range_sum(0, 2).unwrap(), 12);
        assert_eq!(suffix.range_sum(1, 3).unwrap(), 18);
        assert_eq!(suffix.range_sum(2, 4).unwrap(), 24);
    }

    #[test]
    fn test_invalid_ranges() {
        let prefix = PrefixSums::new(&VALUES).unwrap();
        let suffix = SuffixSums::new(&VALUES).unwrap();
        for (l, r) in [(3, 2), (0, 5), (5, 5)] {
            assert!(matches!(
                prefix.range_sum(l, r),
                Err(LabError::InvalidRange { len: 5, .. })
            ));
            assert!(suffix.range_sum(l, r).is_err());
        }
    }

    #[test]
    fn test_empty_input_rejects_every_query() {
        let prefix = PrefixSums::new(&[]).unwrap();
        assert!(prefix.is_empty());
        assert!(prefix.range_sum(0, 0).is_err());
        assert!(SuffixSums::new(&[]).unwrap().build_steps().is_empty());
    }

    #[test]
    fn test_suffix_build_steps_run_right_to_left() {
        let steps = SuffixSums::new(&VALUES).unwrap().build_steps();
        assert_eq!(
            steps[0],
            BuildStep {
                index: 4,
                previous: None,
                value: 10,
                total: 10
            }
        );
        assert_eq!(
            steps[1],
            BuildStep {
                index: 3,
                previous: Some(10),
                value: 8,
                total: 18
            }
        );
        assert_eq!(steps[4].total, 30);
    }

    #[test]
    fn test_prefix_build_steps() {
        let steps = PrefixSums::new(&VALUES).unwrap().build_steps();
        assert_eq!(steps[0].previous, None);
        assert_eq!(steps[2].previous, Some(6));
        assert_eq!(steps[2].total, 12);
    }

    #[test]
    fn test_running_total_overflow_is_an_error() {
        assert!(matches!(
            PrefixSums::new(&[i64::MAX, 1]),
            Err(LabError::Overflow { what: "prefix sums" })
        ));
        assert!(matches!(
            SuffixSums::new(&[-1, i64::MIN]),
            Err(LabError::Overflow { what: "suffix sums" })
        ));

        // Totals that come back into range along the way are fine
        let prefix = PrefixSums::new(&[i64::MAX, i64::MIN, 5]).unwrap();
        assert_eq!(prefix.sums(), &[i64::MAX, -1, 4]);
        assert_eq!(prefix.range_sum(1, 2).unwrap(), i64::MIN + 5);
    }

    #[test]
    fn test_range_sum_overflow_is_an_error() {
        let prefix = PrefixSums::new(&[i64::MIN, i64::MAX, i64::MAX]).unwrap();
        assert!(matches!(
            prefix.range_sum(1, 2),
            Err(LabError::Overflow { what: "range sum" })
        ));
        assert_eq!(prefix.range_sum(2, 2).unwrap(), i64::MAX);

        let suffix = SuffixSums::new(&[i64::MAX, i64::MAX, i64::MIN]).unwrap();
        assert!(matches!(
            suffix.range_sum(0, 1),
            Err(LabError::Overflow { what: "range sum" })
        ));
        assert_eq!(suffix.range_sum(0, 0).unwrap(), i64::MAX);
    }
}

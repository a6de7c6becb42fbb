// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Longest Common Subsequence by dynamic programming.
//!
//! `dp[i][j]` is the LCS length of the first `i` characters of `x` and the
//! first `j` characters of `y`. Reconstruction walks back from `(m, n)`:
//! diagonal on a match, up when `dp[i-1][j] > dp[i][j-1]`, left otherwise.

use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LcsResult {
    pub length: usize,
    /// One longest common subsequence
    pub subsequence: String,
    /// Full `(m+1) x (n+1)` table, row-major
    #[serde(skip)]
    pub table: Vec<Vec<usize>>,
}

#[instrument(skip_all, fields(x_len = x.len(), y_len = y.len()), level = "debug")]
pub fn lcs(x: &str, y: &str) -> LcsResult {
    let a: Vec<char> = x.chars().collect();
    let b: Vec<char> = y.chars().collect();
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut i = m;
    let mut j = n;
    let mut chars = Vec::with_capacity(dp[m][n]);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            chars.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    chars.reverse();

    let length = dp[m][n];
    debug!(length, "LCS computed");
    LcsResult {
        length,
        subsequence: chars.into_iter().collect(),
        table: dp,
    }
}

/// Whether `sub` can be obtained from `s` by deleting characters.
pub fn is_subsequence(sub: &str, s: &str) -> bool {
    let mut rest = s.chars();
    sub.chars().all(|c| rest.any(|d| d == c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_example() {
        let result = lcs("ABCBDAB", "BDCABA");
        assert_eq!(result.length, 4);
        assert_eq!(result.subsequence, "BDAB");
        assert!(is_subsequence(&result.subsequence, "ABCBDAB"));
        assert!(is_subsequence(&result.subsequence, "BDCABA"));
    }

    #[test]
    fn test_no_common_characters() {
        let result = lcs("ABC", "DEF");
        assert_eq!(result.length, 0);
        assert_eq!(result.subsequence, "");
    }

    #[test]
    fn test_empty_inputs() {
        let result = lcs("", "ABC");
        assert_eq!(result.length, 0);
        assert_eq!(result.table.len(), 1);
        assert_eq!(result.table[0].len(), 4);
    }

    #[test]
    fn test_identical_and_unicode() {
        assert_eq!(lcs("héllo", "héllo").subsequence, "héllo");
        assert_eq!(lcs("AGGTAB", "GXTXAYB").subsequence, "GTAB");
    }

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence("", "abc"));
        assert!(is_subsequence("ac", "abc"));
        assert!(!is_subsequence("ca", "abc"));
    }
}

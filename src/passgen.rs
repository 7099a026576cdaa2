//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use clap::ValueEnum;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a 32-bit random draw is turned into a pool index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IndexSampling {
    /// `draw % n`. Slightly favours low indices whenever `2^32 % n != 0`.
    Modulo,
    /// Redraw anything in the incomplete tail, then `draw % n`. Unbiased.
    #[default]
    Rejection,
}

impl fmt::Display for IndexSampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSampling::Modulo => f.write_str("modulo"),
            IndexSampling::Rejection => f.write_str("rejection"),
        }
    }
}

impl FromStr for IndexSampling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modulo" => Ok(IndexSampling::Modulo),
            "rejection" => Ok(IndexSampling::Rejection),
            other => Err(format!("Unknown sampling strategy '{}' (expected 'modulo' or 'rejection')", other)),
        }
    }
}

const DRAW_RANGE: u64 = 1 << 32;

/// 在 [0, n) 中选取一个下标
///
/// Panics unless `0 < n <= 2^32`; a larger pool cannot be covered by one
/// 32-bit draw and rejection sampling would never terminate.
pub fn sample_index<R>(rng: &mut R, n: usize, sampling: IndexSampling) -> usize
where
    R: RngCore + CryptoRng + ?Sized,
{
    let n = n as u64;
    assert!(n > 0 && n <= DRAW_RANGE, "pool size {} outside 1..=2^32", n);
    match sampling {
        IndexSampling::Modulo => (u64::from(rng.next_u32()) % n) as usize,
        IndexSampling::Rejection => {
            let limit = DRAW_RANGE - DRAW_RANGE % n;
            loop {
                let draw = u64::from(rng.next_u32());
                if draw < limit {
                    break (draw % n) as usize;
                }
            }
        }
    }
}

/// Draw `length` characters from `pool` using `rng`.
///
/// The pool is indexed by `char`, so multi-byte symbols count once. An empty
/// pool or a zero length yields an empty string.
pub fn generate_with<R>(pool: &str, length: usize, sampling: IndexSampling, rng: &mut R) -> String
where
    R: RngCore + CryptoRng + ?Sized,
{
    let chars: Vec<char> = pool.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    (0..length)
        .map(|_| chars[sample_index(rng, chars.len(), sampling)])
        .collect()
}

/// Generate a password from `pool` with the operating system CSPRNG and
/// unbiased index selection.
pub fn generate(pool: &str, length: usize) -> String {
    let mut rng = OsRng;
    generate_with(pool, length, IndexSampling::default(), &mut rng)
}

mod common;

use common::ScriptedRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rpawogen::charset::{LOWERCASE_LETTERS, NUMBERS, SPECIAL_CHARACTERS, UPPERCASE_LETTERS};
use rpawogen::passgen::*;

#[test]
fn test_generate_exact_length() {
    for len in [1, 8, 12, 20, 26] {
        let password = generate(NUMBERS, len);
        assert_eq!(password.chars().count(), len, "Expected {} chars, got {}", len, password);
        assert!(password.chars().all(|c| NUMBERS.contains(c)));
    }
}

#[test]
fn test_generate_zero_length_and_empty_pool() {
    assert_eq!(generate(NUMBERS, 0), "");
    assert_eq!(generate("", 12), "");
}

#[test]
fn test_generate_counts_multibyte_characters_once() {
    let pool = "é½§÷";
    let password = generate(pool, 10);
    assert_eq!(password.chars().count(), 10);
    assert!(password.chars().all(|c| pool.contains(c)));
}

#[test]
fn test_generate_successive_calls_differ() {
    let pool = format!("{}{}{}", UPPERCASE_LETTERS, LOWERCASE_LETTERS, SPECIAL_CHARACTERS);
    let first = generate(&pool, 16);
    let second = generate(&pool, 16);
    assert_ne!(first, second);
}

#[test]
fn test_modulo_keeps_draw_from_biased_tail() {
    // 2^32 % 10 == 6, so draws >= 4294967290 fall in the incomplete tail
    let mut rng = ScriptedRng::new(&[4_294_967_291, 7]);
    let password = generate_with(NUMBERS, 1, IndexSampling::Modulo, &mut rng);
    assert_eq!(password, "1");
    assert_eq!(rng.draws, 1);
}

#[test]
fn test_rejection_redraws_biased_tail() {
    let mut rng = ScriptedRng::new(&[4_294_967_291, 7]);
    let password = generate_with(NUMBERS, 1, IndexSampling::Rejection, &mut rng);
    assert_eq!(password, "7");
    assert_eq!(rng.draws, 2);
}

#[test]
fn test_strategies_agree_below_limit() {
    let draws = [0, 3, 19, 4_294_967_289];
    let mut modulo_rng = ScriptedRng::new(&draws);
    let mut rejection_rng = ScriptedRng::new(&draws);
    let modulo = generate_with(NUMBERS, 4, IndexSampling::Modulo, &mut modulo_rng);
    let rejection = generate_with(NUMBERS, 4, IndexSampling::Rejection, &mut rejection_rng);
    assert_eq!(modulo, "0399");
    assert_eq!(modulo, rejection);
    assert_eq!(rejection_rng.draws, 4);
}

#[test]
fn test_power_of_two_pool_never_rejects() {
    let pool = "0123456789ABCDEF";
    let mut rng = ScriptedRng::new(&[u32::MAX]);
    let password = generate_with(pool, 3, IndexSampling::Rejection, &mut rng);
    assert_eq!(password, "FFF");
    assert_eq!(rng.draws, 3);
}

#[test]
fn test_seeded_generator_is_reproducible() {
    let pool = format!("{}{}", NUMBERS, UPPERCASE_LETTERS);
    let mut a = ChaCha20Rng::seed_from_u64(42);
    let mut b = ChaCha20Rng::seed_from_u64(42);
    assert_eq!(
        generate_with(&pool, 26, IndexSampling::Rejection, &mut a),
        generate_with(&pool, 26, IndexSampling::Rejection, &mut b)
    );
}

#[test]
fn test_sample_index_in_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for n in 1..=100 {
        for _ in 0..50 {
            assert!(sample_index(&mut rng, n, IndexSampling::Rejection) < n);
            assert!(sample_index(&mut rng, n, IndexSampling::Modulo) < n);
        }
    }
}

#[test]
fn test_rejection_sampling_is_roughly_uniform() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut counts = [0usize; 10];
    for _ in 0..100_000 {
        counts[sample_index(&mut rng, 10, IndexSampling::Rejection)] += 1;
    }
    for count in counts {
        assert!((9_400..=10_600).contains(&count), "skewed bucket: {:?}", counts);
    }
}

#[test]
fn test_index_sampling_parse_and_display() {
    assert_eq!("modulo".parse::<IndexSampling>().unwrap(), IndexSampling::Modulo);
    assert_eq!(" Rejection ".parse::<IndexSampling>().unwrap(), IndexSampling::Rejection);
    assert!("biased".parse::<IndexSampling>().is_err());
    assert_eq!(IndexSampling::default(), IndexSampling::Rejection);
    assert_eq!(IndexSampling::Modulo.to_string(), "modulo");
}

#[test]
#[should_panic(expected = "pool size")]
fn test_sample_index_rejects_empty_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    sample_index(&mut rng, 0, IndexSampling::Rejection);
}

#[cfg(target_pointer_width = "64")]
#[test]
#[should_panic(expected = "pool size")]
fn test_sample_index_rejects_range_wider_than_a_draw() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    sample_index(&mut rng, (1usize << 32) + 1, IndexSampling::Rejection);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_sample_index_accepts_full_draw_range() {
    let mut rng = ScriptedRng::new(&[u32::MAX]);
    assert_eq!(sample_index(&mut rng, 1usize << 32, IndexSampling::Rejection), u32::MAX as usize);
}

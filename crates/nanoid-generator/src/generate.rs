use nanoid_entropy::{OsRandom, RandomSource};
use tracing::trace;

use crate::alphabet::{self, DEFAULT_LENGTH, MAX_ALPHABET_SIZE};
use crate::error::{Error, Result};
use crate::NanoId;

/// Batch amplification: fetch enough bytes per round that one round usually
/// covers all rejections.
const STEP_FACTOR: f64 = 1.6;

/// Generates an id of `length` symbols drawn uniformly from `alphabet`.
///
/// Random bytes are masked down to the smallest `2^k - 1` covering every
/// alphabet index, and bytes whose masked value falls outside the alphabet
/// are discarded instead of being reduced with a modulo, which would favour
/// low indices whenever the alphabet size does not divide 256.
///
/// Parameters are checked before any randomness is consumed.
///
/// # Errors
///
/// - [`Error::InvalidAlphabet`] if `alphabet` is empty or has more than
///   [`MAX_ALPHABET_SIZE`] symbols.
/// - [`Error::InvalidLength`] if `length` is zero.
///
/// # Examples
///
/// ```
/// use nanoid_entropy::XorShift;
/// use nanoid_generator::{alphabet, generate};
///
/// let id = generate(alphabet::NUMBERS, 6, &mut XorShift::new()).unwrap();
/// assert_eq!(id.as_str().len(), 6);
/// assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate<R>(alphabet: &[char], length: usize, source: &mut R) -> Result<NanoId>
where
    R: RandomSource + ?Sized,
{
    validate(alphabet, length)?;
    Ok(sample(alphabet, length, source))
}

/// Default alphabet and length, operating system randomness.
pub fn nanoid() -> NanoId {
    generate_with_source(&mut OsRandom::new())
}

/// Default alphabet and length with a caller-supplied source.
pub fn generate_with_source<R>(source: &mut R) -> NanoId
where
    R: RandomSource + ?Sized,
{
    sample(alphabet::DEFAULT, DEFAULT_LENGTH, source)
}

/// Default alphabet, operating system randomness.
pub fn generate_with_length(length: usize) -> Result<NanoId> {
    generate(alphabet::DEFAULT, length, &mut OsRandom::new())
}

/// Default length, operating system randomness.
pub fn generate_with_alphabet(alphabet: &[char]) -> Result<NanoId> {
    generate(alphabet, DEFAULT_LENGTH, &mut OsRandom::new())
}

pub(crate) fn validate(alphabet: &[char], length: usize) -> Result<()> {
    if alphabet.is_empty() || alphabet.len() > MAX_ALPHABET_SIZE {
        return Err(Error::InvalidAlphabet {
            size: alphabet.len(),
        });
    }
    if length == 0 {
        return Err(Error::InvalidLength { length });
    }
    Ok(())
}

/// Rejection sampling loop. Callers must have validated the parameters.
pub(crate) fn sample<R>(alphabet: &[char], length: usize, source: &mut R) -> NanoId
where
    R: RandomSource + ?Sized,
{
    let mask = mask(alphabet.len());
    let step = step(mask, alphabet.len(), length);

    let mut id = String::with_capacity(length);
    let mut accepted = 0;
    let mut bytes = vec![0_u8; step];
    let mut round = 0_u64;

    loop {
        source.fill(&mut bytes);
        for &byte in &bytes {
            let Some(&symbol) = alphabet.get(usize::from(byte) & mask) else {
                continue;
            };
            id.push(symbol);
            accepted += 1;
            if accepted == length {
                return NanoId::new(id);
            }
        }
        round += 1;
        trace!(
            round,
            step,
            accepted,
            length,
            "random batch exhausted, requesting another"
        );
    }
}

/// Smallest `2^k - 1` that is at least `size - 1`.
///
/// Same value as `(2 << floor(log2(size - 1))) - 1` without going through
/// floating point. A single-symbol alphabet only has index 0, so its mask is 0.
pub(crate) fn mask(size: usize) -> usize {
    if size <= 1 {
        return 0;
    }
    let bits = usize::BITS - (size - 1).leading_zeros();
    (1 << bits) - 1
}

/// Bytes requested per round: `ceil(1.6 * mask * length / size)`, at least 1.
///
/// A single-symbol alphabet has mask 0 and therefore step 1: every byte is
/// accepted, one byte per round, so an id of length N costs N fills and N - 1
/// "batch exhausted" trace events.
pub(crate) fn step(mask: usize, size: usize, length: usize) -> usize {
    let step = (STEP_FACTOR * mask as f64 * length as f64 / size as f64).ceil() as usize;
    step.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanoid_entropy::XorShift;

    fn float_mask(size: usize) -> usize {
        (2_usize << ((size - 1) as f64).log2().floor() as u32) - 1
    }

    /// Replays `bytes` in order, wrapping around, and records every batch size.
    fn scripted<'a>(
        bytes: &'static [u8],
        batches: &'a mut Vec<usize>,
    ) -> impl FnMut(&mut [u8]) + 'a {
        let mut cursor = 0;
        move |buf: &mut [u8]| {
            batches.push(buf.len());
            for slot in buf.iter_mut() {
                *slot = bytes[cursor % bytes.len()];
                cursor += 1;
            }
        }
    }

    #[test]
    fn mask_matches_float_formula_for_every_size() {
        for size in 2..=MAX_ALPHABET_SIZE {
            assert_eq!(mask(size), float_mask(size), "size {size}");
        }
    }

    #[test]
    fn mask_at_power_of_two_boundaries() {
        assert_eq!(mask(2), 1);
        assert_eq!(mask(3), 3);
        assert_eq!(mask(4), 3);
        assert_eq!(mask(5), 7);
        assert_eq!(mask(64), 63);
        assert_eq!(mask(65), 127);
        assert_eq!(mask(128), 127);
        assert_eq!(mask(129), 255);
        assert_eq!(mask(254), 255);
    }

    #[test]
    fn mask_for_single_symbol_is_zero() {
        assert_eq!(mask(1), 0);
    }

    #[test]
    fn step_for_default_parameters() {
        // ceil(1.6 * 63 * 21 / 64) = ceil(33.075)
        assert_eq!(step(mask(64), 64, 21), 34);
    }

    #[test]
    fn step_is_never_zero() {
        assert_eq!(step(mask(1), 1, 21), 1);
    }

    #[test]
    fn empty_alphabet_is_rejected_before_consuming_randomness() {
        let mut source = |_: &mut [u8]| panic!("randomness must not be consumed");
        assert_eq!(
            generate(&[], 21, &mut source),
            Err(Error::InvalidAlphabet { size: 0 })
        );
    }

    #[test]
    fn oversized_alphabet_is_rejected() {
        let symbols: Vec<char> = (0..255_u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        assert_eq!(symbols.len(), 255);

        let mut source = |_: &mut [u8]| panic!("randomness must not be consumed");
        assert_eq!(
            generate(&symbols, 21, &mut source),
            Err(Error::InvalidAlphabet { size: 255 })
        );
        assert_eq!(
            generate(&symbols[..254], 21, &mut XorShift::new()).map(|id| id.symbol_count()),
            Ok(21)
        );
    }

    #[test]
    fn zero_length_is_rejected_before_consuming_randomness() {
        let mut source = |_: &mut [u8]| panic!("randomness must not be consumed");
        assert_eq!(
            generate(alphabet::DEFAULT, 0, &mut source),
            Err(Error::InvalidLength { length: 0 })
        );
    }

    #[test]
    fn maps_masked_bytes_onto_alphabet() {
        let mut batches = Vec::new();
        // mask 1: 0b10 -> 0, 0b11 -> 1
        let id = generate(
            &['a', 'b'],
            4,
            &mut scripted(&[0, 1, 2, 3], &mut batches),
        )
        .unwrap();
        assert_eq!(id, "abab");
    }

    #[test]
    fn out_of_range_indices_are_rejected_not_wrapped() {
        let mut batches = Vec::new();
        // mask 3 over 3 symbols: index 3 is rejected, 7 masks to 3 and is rejected too
        let id = generate(
            &['a', 'b', 'c'],
            3,
            &mut scripted(&[3, 2, 7, 1, 3, 0], &mut batches),
        )
        .unwrap();
        assert_eq!(id, "cba");
    }

    #[test]
    fn refills_with_the_same_step_until_satisfied() {
        let mut batches = Vec::new();
        // 3 symbols, length 2: step = ceil(1.6 * 3 * 2 / 3) = 4.
        // First batch is all rejects, the second supplies both symbols.
        let id = generate(
            &['a', 'b', 'c'],
            2,
            &mut scripted(&[3, 3, 3, 3, 2, 1, 0, 0], &mut batches),
        )
        .unwrap();
        assert_eq!(id, "cb");
        assert_eq!(batches, vec![4, 4]);
    }

    #[test]
    fn stops_at_length_and_drops_the_rest_of_the_batch() {
        let mut batches = Vec::new();
        // 3 symbols, length 2: step 4, but the first two bytes already suffice.
        let mut source = scripted(&[0, 1, 2, 2, 1, 0, 0, 0], &mut batches);

        let first = generate(&['a', 'b', 'c'], 2, &mut source).unwrap();
        assert_eq!(first, "ab");

        // The next id starts from a fresh batch (bytes 4..), not at byte 2.
        let second = generate(&['a', 'b', 'c'], 2, &mut source).unwrap();
        assert_eq!(second, "ba");

        drop(source);
        assert_eq!(batches, vec![4, 4]);
    }

    #[test]
    fn single_symbol_alphabet_fetches_one_byte_per_round() {
        let mut batches = Vec::new();
        let id = generate(&['z'], 5, &mut scripted(&[200], &mut batches)).unwrap();
        assert_eq!(id, "zzzzz");
        assert_eq!(batches, vec![1; 5]);
    }

    #[test]
    fn single_symbol_alphabet_repeats_it() {
        let id = generate(&['z'], 30, &mut XorShift::new()).unwrap();
        assert_eq!(id.as_str(), "z".repeat(30));
    }

    #[test]
    fn length_and_membership() {
        let mut source = XorShift::new();
        for (alphabet, length) in [
            (alphabet::DEFAULT, 21),
            (alphabet::NUMBERS, 1),
            (alphabet::UPPERCASE, 50),
            (alphabet::LOWERCASE, 5),
            (alphabet::NO_LOOK_ALIKES, 300),
        ] {
            let id = generate(alphabet, length, &mut source).unwrap();
            assert_eq!(id.symbol_count(), length);
            assert!(id.as_str().chars().all(|c| alphabet.contains(&c)));
        }
    }

    #[test]
    fn non_ascii_symbols() {
        let greek = ['α', 'β', 'γ', 'δ', 'ε'];
        let id = generate(&greek, 12, &mut XorShift::new()).unwrap();
        assert_eq!(id.symbol_count(), 12);
        assert!(id.as_str().chars().all(|c| greek.contains(&c)));
    }

    #[test]
    fn same_seed_same_ids() {
        let mut first = XorShift::new();
        let mut second = XorShift::new();
        for _ in 0..10 {
            assert_eq!(
                generate_with_source(&mut first),
                generate_with_source(&mut second)
            );
        }
    }

    #[test]
    fn convenience_defaults() {
        assert_eq!(nanoid().symbol_count(), DEFAULT_LENGTH);
        assert_eq!(generate_with_length(10).unwrap().symbol_count(), 10);

        let digits = generate_with_alphabet(alphabet::NUMBERS).unwrap();
        assert_eq!(digits.symbol_count(), DEFAULT_LENGTH);
        assert!(digits.as_str().chars().all(|c| c.is_ascii_digit()));

        assert_eq!(
            generate_with_length(0),
            Err(Error::InvalidLength { length: 0 })
        );
        assert_eq!(
            generate_with_alphabet(&[]),
            Err(Error::InvalidAlphabet { size: 0 })
        );
    }

    #[test]
    fn two_default_ids_differ() {
        assert_ne!(nanoid(), nanoid());
    }
}

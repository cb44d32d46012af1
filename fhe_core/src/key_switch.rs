use algebra::{decompose::GadgetBasis, Torus};
use lattice::Lwe;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::FHECoreError;

/// Mask positions handled by one task in [`KeySwitchingKey::par_key_switch`].
const PAR_MIN_LEN: usize = 64;

/// The Key Switching Key.
///
/// This struct stores the key that switches a [`Lwe<T>`] ciphertext
/// of the input secret key to a [`Lwe<T>`] ciphertext of the output secret key.
///
/// ## Layout
///
/// `k_{j, i, v}` is stored at `(j * l + i) * Bg + v` where
///
/// - `j ∈ [0, input_dimension)` is the mask position,
/// - `i ∈ [0, l)` is the digit index, most significant first,
/// - `v = d + Bg/2 ∈ [0, Bg)` encodes the signed digit `d`,
///
/// and `k_{j, i, v}` encrypts `d * s_j * 2^(W - (i+1)·Bgbit)` under the output key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KeySwitchingKey<T: Torus> {
    basis: GadgetBasis<T>,
    input_dimension: usize,
    output_dimension: usize,
    entries: Vec<Lwe<T>>,
}

impl<T: Torus> KeySwitchingKey<T> {
    /// Creates a new [`KeySwitchingKey<T>`] from its entries in the layout above.
    ///
    /// # Errors
    ///
    /// Returns [`FHECoreError::KeySwitchingKeyShape`] if the entry count is not
    /// `input_dimension * l * Bg` (reported as `usize::MAX` when that product
    /// overflows), and [`FHECoreError::KeySwitchingEntryDimension`]
    /// if some entry is not of dimension `output_dimension`.
    #[instrument(level = "debug", skip(entries))]
    pub fn new(
        basis: GadgetBasis<T>,
        input_dimension: usize,
        output_dimension: usize,
        entries: Vec<Lwe<T>>,
    ) -> Result<Self, FHECoreError> {
        let expected = input_dimension
            .checked_mul(basis.length())
            .and_then(|x| x.checked_mul(basis.basis().as_usize()))
            .ok_or(FHECoreError::KeySwitchingKeyShape {
                expected: usize::MAX,
                found: entries.len(),
            })?;
        if entries.len() != expected {
            return Err(FHECoreError::KeySwitchingKeyShape {
                expected,
                found: entries.len(),
            });
        }

        if let Some((index, entry)) = entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.dimension() != output_dimension)
        {
            return Err(FHECoreError::KeySwitchingEntryDimension {
                index,
                expected: output_dimension,
                found: entry.dimension(),
            });
        }

        debug!(entries = expected, "key switching key ready");

        Ok(Self {
            basis,
            input_dimension,
            output_dimension,
            entries,
        })
    }

    /// Returns the decompose basis of this [`KeySwitchingKey<T>`].
    #[inline]
    pub fn basis(&self) -> &GadgetBasis<T> {
        &self.basis
    }

    /// Returns the dimension of the ciphertexts this key accepts.
    #[inline]
    pub fn input_dimension(&self) -> usize {
        self.input_dimension
    }

    /// Returns the dimension of the ciphertexts this key produces.
    #[inline]
    pub fn output_dimension(&self) -> usize {
        self.output_dimension
    }

    /// Returns the entry for mask position `j`, digit index `i` and signed digit `digit`.
    #[inline]
    pub fn entry(&self, j: usize, i: usize, digit: T) -> &Lwe<T> {
        let l = self.basis.length();
        let bg = self.basis.basis().as_usize();
        &self.entries[(j * l + i) * bg + self.basis.digit_index(digit)]
    }

    #[inline]
    fn check_input(&self, ciphertext: &Lwe<T>) {
        assert_eq!(
            ciphertext.dimension(),
            self.input_dimension,
            "ciphertext dimension does not match the key switching key"
        );
    }

    /// Performs key switching operation.
    ///
    /// The accumulator starts at `(0, b)` and for every mask coefficient
    /// `a_j` with digits `d_i`, the entry `k_{j, i, d_i}` is subtracted.
    ///
    /// # Panics
    ///
    /// Panics if the dimension of `ciphertext` is not `input_dimension`.
    pub fn key_switch(&self, ciphertext: &Lwe<T>) -> Lwe<T> {
        self.check_input(ciphertext);

        let mut result = Lwe::new(vec![T::ZERO; self.output_dimension], ciphertext.b());

        let mut digits = vec![T::ZERO; self.basis.length()];
        for (j, &a_j) in ciphertext.a().iter().enumerate() {
            self.basis.decompose_scalar(a_j, &mut digits);
            for (i, &d) in digits.iter().enumerate() {
                if d != T::ZERO {
                    result.sub_assign_component_wise(self.entry(j, i, d));
                }
            }
        }

        result
    }

    /// Same as [`KeySwitchingKey::key_switch`], summing the entries of
    /// chunks of mask positions in parallel.
    ///
    /// # Panics
    ///
    /// Panics if the dimension of `ciphertext` is not `input_dimension`.
    pub fn par_key_switch(&self, ciphertext: &Lwe<T>) -> Lwe<T> {
        self.check_input(ciphertext);

        let zero = || Lwe::zero(self.output_dimension);

        let sum = ciphertext
            .a()
            .par_iter()
            .enumerate()
            .with_min_len(PAR_MIN_LEN)
            .fold(zero, |mut acc, (j, &a_j)| {
                for (i, d) in self.basis.decompose_scalar_iter(a_j).enumerate() {
                    if d != T::ZERO {
                        acc.add_assign_component_wise(self.entry(j, i, d));
                    }
                }
                acc
            })
            .reduce(zero, |acc, partial| acc.add_component_wise(&partial));

        Lwe::new(vec![T::ZERO; self.output_dimension], ciphertext.b()).sub_component_wise(&sum)
    }
}

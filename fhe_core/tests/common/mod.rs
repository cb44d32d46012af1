#![allow(dead_code)]

use algebra::{decompose::GadgetBasis, polynomial::Polynomial, Torus};
use fhe_core::KeySwitchingKey;
use lattice::{Lwe, Rlwe};
use rand::{distributions::Uniform, prelude::Distribution, Rng};
use rand_distr::Normal;

/// Samples a binary secret key.
pub fn binary_secret_key<T: Torus, R: Rng>(dimension: usize, rng: &mut R) -> Vec<T> {
    (0..dimension)
        .map(|_| if rng.gen::<bool>() { T::ONE } else { T::ZERO })
        .collect()
}

/// Samples a torus noise with standard deviation `alpha`.
pub fn sample_noise<T: Torus, R: Rng>(alpha: f64, rng: &mut R) -> T {
    let normal = Normal::new(0.0, alpha).unwrap();
    T::from_fraction(normal.sample(rng))
}

/// Encrypts a torus message under `key`.
pub fn encrypt<T: Torus, R: Rng>(message: T, key: &[T], alpha: f64, rng: &mut R) -> Lwe<T> {
    let uniform = Uniform::new_inclusive(T::ZERO, T::MAX);
    let a: Vec<T> = uniform.sample_iter(&mut *rng).take(key.len()).collect();
    let dot = a
        .iter()
        .zip(key)
        .fold(T::ZERO, |acc, (&a, &s)| acc.wrapping_add(a.wrapping_mul(s)));
    let e: T = sample_noise(alpha, rng);
    Lwe::new(a, dot.wrapping_add(message).wrapping_add(e))
}

/// Encrypts a torus polynomial under the binary ring key `key`.
pub fn encrypt_rlwe<T: Torus, R: Rng>(
    message: &Polynomial<T>,
    key: &[i64],
    alpha: f64,
    rng: &mut R,
) -> Rlwe<T> {
    let uniform = Uniform::new_inclusive(T::ZERO, T::MAX);
    let n = key.len();
    let a = Polynomial::new(uniform.sample_iter(&mut *rng).take(n).collect());
    let e = Polynomial::new((0..n).map(|_| sample_noise(alpha, rng)).collect());
    let b = a.mul_integer_naive(key) + message + &e;
    Rlwe::new(a, b)
}

/// Encodes `m` of a message space of size `space` on the torus.
pub fn encode<T: Torus>(m: usize, space: usize) -> T {
    T::from_fraction(m as f64 / space as f64)
}

/// Decodes a phase by rounding to the nearest multiple of `1/space`.
pub fn decode<T: Torus>(phase: T, space: usize) -> usize {
    (phase.to_fraction() * space as f64).round() as usize % space
}

/// Generates a key switching key from `input_key` to `output_key`.
pub fn generate_key_switching_key<T: Torus, R: Rng>(
    basis: GadgetBasis<T>,
    input_key: &[T],
    output_key: &[T],
    alpha: f64,
    rng: &mut R,
) -> KeySwitchingKey<T> {
    let bg = basis.basis().as_usize();
    let mut entries = Vec::with_capacity(input_key.len() * basis.length() * bg);

    for &s_j in input_key {
        for i in 0..basis.length() {
            let g = basis.gadget_value(i);
            for v in 0..bg {
                let d = T::from_usize(v).wrapping_sub(basis.half_basis());
                let message = d.wrapping_mul(s_j).wrapping_mul(g);
                entries.push(encrypt(message, output_key, alpha, rng));
            }
        }
    }

    KeySwitchingKey::new(basis, input_key.len(), output_key.len(), entries).unwrap()
}

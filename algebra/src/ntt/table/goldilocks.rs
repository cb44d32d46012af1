use itertools::izip;
use tracing::{debug, instrument};

use crate::modulus::{GoldilocksModulus, GOLDILOCKS_P};
use crate::ntt::{NegacyclicTransform, NttTable};
use crate::reduce::*;
use crate::utils::{bit_reverse_permute, reverse_lsbs};
use crate::AlgebraError;

const M: GoldilocksModulus = GoldilocksModulus;

/// This struct store the pre-computed data for the negacyclic number theory
/// transform over the Goldilocks prime `P`.
///
/// ## The structure members meet the following conditions:
///
/// 1. `n = 1 << log_n`
/// 1. `root^{n} ≡ -1 (mod P)`, so `root` is a primitive `2n`-th root of unity
/// 1. `twist[j] = root^j`
/// 1. `inv_twist[j] = root^{-j} * n^{-1}`
/// 1. `roots[k] = root^{2k}` and `inv_roots[k] = root^{-2k}` for `k < n / 2`
///
/// Inputs and results are exact as long as every coefficient `x`
/// satisfies `|x| <= (P - 1) / 2`.
#[derive(Debug, Clone)]
pub struct GoldilocksNttTable {
    log_n: u32,
    n: usize,
    root: u64,
    twist: Vec<u64>,
    inv_twist: Vec<u64>,
    roots: Vec<u64>,
    inv_roots: Vec<u64>,
    reverse_lsbs: Vec<usize>,
}

impl GoldilocksNttTable {
    /// Returns the primitive `2n`-th root of unity of this table.
    #[inline]
    pub fn root(&self) -> u64 {
        self.root
    }

    /// Returns the modulus value, the Goldilocks prime.
    #[inline]
    pub fn modulus_value(&self) -> u64 {
        GOLDILOCKS_P
    }

    /// Cyclic transform of length `n` with the given powers of an `n`-th root,
    /// input and output both in normal order.
    fn cyclic_transform(&self, values: &mut [u64], roots: &[u64]) {
        bit_reverse_permute(values, &self.reverse_lsbs);

        let mut half = 1usize;
        while half < self.n {
            let step = self.n / (half << 1);
            for chunk in values.chunks_exact_mut(half << 1) {
                let (lo, hi) = chunk.split_at_mut(half);
                for (k, (x, y)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                    let t = M.reduce_mul(*y, roots[k * step]);
                    *y = M.reduce_sub(*x, t);
                    *x = M.reduce_add(*x, t);
                }
            }
            half <<= 1;
        }
    }
}

impl NttTable for GoldilocksNttTable {
    type ValueT = u64;

    #[instrument(level = "debug")]
    fn new(log_n: u32) -> Result<Self, AlgebraError> {
        if log_n == 0 || log_n > 31 {
            return Err(AlgebraError::InvalidDimension { log_n });
        }

        let n = 1usize << log_n;
        let root = M.try_primitive_root(log_n + 1)?;
        let inv_root = M.reduce_inv(root);
        let inv_n = M.reduce_inv(n as u64);

        let powers = |base: u64, count: usize, start: u64| -> Vec<u64> {
            let mut power = start;
            (0..count)
                .map(|_| {
                    let current = power;
                    M.reduce_mul_assign(&mut power, base);
                    current
                })
                .collect()
        };

        let twist = powers(root, n, 1);
        let inv_twist = powers(inv_root, n, inv_n);
        let roots = powers(M.reduce_mul(root, root), n >> 1, 1);
        let inv_roots = powers(M.reduce_mul(inv_root, inv_root), n >> 1, 1);

        let reverse_lsbs: Vec<usize> = (0..n).map(|i| reverse_lsbs(i, log_n)).collect();

        debug!(n, root, "goldilocks ntt table ready");

        Ok(Self {
            log_n,
            n,
            root,
            twist,
            inv_twist,
            roots,
            inv_roots,
            reverse_lsbs,
        })
    }

    #[inline(always)]
    fn dimension(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn log_dimension(&self) -> u32 {
        self.log_n
    }
}

impl NegacyclicTransform for GoldilocksNttTable {
    /// `(P - 1) / 2`, the largest centered residue.
    const MAX_MAGNITUDE: u64 = GOLDILOCKS_P >> 1;

    fn transform_slice(&self, coeffs: &[i64], values: &mut [u64]) {
        debug_assert_eq!(coeffs.len(), self.n);
        debug_assert_eq!(values.len(), self.n);
        debug_assert!(
            coeffs.iter().all(|c| c.unsigned_abs() <= Self::MAX_MAGNITUDE),
            "coefficient out of the centered range of P"
        );

        values
            .iter_mut()
            .zip(coeffs)
            .zip(&self.twist)
            .for_each(|((v, &c), &w)| *v = M.reduce_mul(M.lift_signed(c), w));

        self.cyclic_transform(values, &self.roots);
    }

    fn inverse_transform_slice(&self, values: &[u64], coeffs: &mut [i64]) {
        debug_assert_eq!(coeffs.len(), self.n);
        debug_assert_eq!(values.len(), self.n);

        let mut buf = values.to_vec();
        self.cyclic_transform(&mut buf, &self.inv_roots);

        coeffs
            .iter_mut()
            .zip(buf)
            .zip(&self.inv_twist)
            .for_each(|((c, v), &w)| *c = M.center(M.reduce_mul(v, w)));
    }

    #[inline]
    fn mul_assign_values(&self, a: &mut [u64], b: &[u64]) {
        debug_assert_eq!(a.len(), b.len());
        a.iter_mut()
            .zip(b)
            .for_each(|(x, &y)| M.reduce_mul_assign(x, y));
    }

    #[inline]
    fn add_mul_assign_values(&self, acc: &mut [u64], a: &[u64], b: &[u64]) {
        debug_assert_eq!(acc.len(), a.len());
        debug_assert_eq!(acc.len(), b.len());
        for (r, &x, &y) in izip!(acc, a, b) {
            M.reduce_add_assign(r, M.reduce_mul(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, prelude::*};

    use crate::integer::Torus;
    use crate::polynomial::Polynomial;

    use super::*;

    fn naive_negacyclic(a: &[i64], b: &[i64]) -> Vec<i64> {
        let n = a.len();
        let mut r = vec![0i64; n];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                let k = i + j;
                if k < n {
                    r[k] += x * y;
                } else {
                    r[k - n] -= x * y;
                }
            }
        }
        r
    }

    #[test]
    fn test_table_constants() {
        let table = GoldilocksNttTable::new(10).unwrap();
        assert_eq!(table.dimension(), 1024);
        assert_eq!(table.log_dimension(), 10);
        assert_eq!(table.modulus_value(), GOLDILOCKS_P);
        assert_eq!(M.reduce_pow(table.root(), 1024), GOLDILOCKS_P - 1);
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            GoldilocksNttTable::new(0).unwrap_err(),
            AlgebraError::InvalidDimension { log_n: 0 }
        );
        assert!(GoldilocksNttTable::new(32).is_err());
    }

    #[test]
    fn test_transform_inverse() {
        let mut rng = thread_rng();
        let table = GoldilocksNttTable::new(8).unwrap();
        let half = (GOLDILOCKS_P >> 1) as i64;
        let dis = Uniform::new_inclusive(-half, half);

        let coeffs: Vec<i64> = (&mut rng).sample_iter(dis).take(256).collect();
        let values = table.transform(&coeffs);
        assert_eq!(table.inverse_transform(&values), coeffs);
    }

    #[test]
    fn test_negacyclic_mul() {
        let mut rng = thread_rng();
        let table = GoldilocksNttTable::new(5).unwrap();
        let dis = Uniform::new_inclusive(-1000i64, 1000);

        let a: Vec<i64> = (&mut rng).sample_iter(dis).take(32).collect();
        let b: Vec<i64> = (&mut rng).sample_iter(dis).take(32).collect();

        assert_eq!(table.negacyclic_mul(&a, &b), naive_negacyclic(&a, &b));
    }

    #[test]
    fn test_add_mul_assign() {
        let table = GoldilocksNttTable::new(3).unwrap();
        let x = [1i64, 0, 0, 0, 0, 0, 0, 0];
        let y = [0i64, 0, 0, 0, 0, 0, 0, 2];
        let z = [0i64, 3, 0, 0, 0, 0, 0, 0];

        let tx = table.transform(&x);
        let ty = table.transform(&y);
        let tz = table.transform(&z);

        let mut acc = table.transform(&[0; 8]);
        table.add_mul_assign_values(acc.as_mut_slice(), tx.as_slice(), ty.as_slice());
        table.add_mul_assign_values(acc.as_mut_slice(), ty.as_slice(), tz.as_slice());

        // 2X^7 + 2X^7 * 3X = 2X^7 - 6
        assert_eq!(table.inverse_transform(&acc), vec![-6, 0, 0, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_torus_round_trip_at_bound() {
        let table = GoldilocksNttTable::new(3).unwrap();
        let bound = GoldilocksNttTable::MAX_MAGNITUDE as i64;
        let coeffs = [bound, 1, -1, 0, 2, -bound, bound - 1, -(bound - 1)];
        let poly: Polynomial<u64> = Polynomial::new(coeffs.map(u64::from_signed).to_vec());

        let values = table.transform_torus(&poly);
        let back: Polynomial<u64> = table.inverse_transform_torus(&values);
        assert_eq!(back, poly);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "coefficient out of the centered range of P")]
    fn test_transform_rejects_out_of_range() {
        let table = GoldilocksNttTable::new(3).unwrap();
        let mut coeffs = vec![0u64; 8];
        coeffs[0] = 0x7fff_ffff_ffff_ffff;
        coeffs[7] = 0x8000_0000_0000_0000;
        table.transform_torus(&Polynomial::new(coeffs));
    }
}

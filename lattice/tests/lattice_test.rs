use algebra::polynomial::Polynomial;
use algebra::Torus;
use lattice::{Lwe, Rlwe};
use rand::distributions::Uniform;
use rand::prelude::Distribution;
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

const N: usize = 64;

#[test]
fn test_lwe() {
    let rng = &mut thread_rng();

    let a1: Vec<u32> = (0..N).map(|_| rng.gen()).collect();
    let a2: Vec<u32> = (0..N).map(|_| rng.gen()).collect();
    let a3: Vec<u32> = a1
        .iter()
        .zip(a2.iter())
        .map(|(&u, &v)| u.wrapping_add(v))
        .collect();

    let b1: u32 = rng.gen();
    let b2: u32 = rng.gen();

    let lwe1 = Lwe::new(a1, b1);
    let lwe2 = Lwe::new(a2, b2);
    let lwe3 = Lwe::new(a3, b1.wrapping_add(b2));

    assert_eq!(lwe1.add_component_wise_ref(&lwe2), lwe3);
    assert_eq!(lwe1.clone().add_component_wise(&lwe2), lwe3);
    assert_eq!(lwe3.sub_component_wise_ref(&lwe2), lwe1);
    assert_eq!(lwe3.sub_component_wise(&lwe2), lwe1);
}

#[test]
fn test_lwe_phase_is_linear() {
    let mut rng = ChaCha12Rng::seed_from_u64(11);
    let key_dis = Uniform::new_inclusive(0u64, 1);

    let s: Vec<u64> = key_dis.sample_iter(&mut rng).take(N).collect();

    let encrypt = |m: u64, rng: &mut ChaCha12Rng| {
        let a: Vec<u64> = (0..N).map(|_| rng.gen()).collect();
        let dot = a
            .iter()
            .zip(&s)
            .fold(0u64, |acc, (&a, &s)| acc.wrapping_add(a.wrapping_mul(s)));
        Lwe::new(a, dot.wrapping_add(m))
    };

    let m1 = 1u64 << 61;
    let m2 = 3u64 << 61;
    let c1 = encrypt(m1, &mut rng);
    let c2 = encrypt(m2, &mut rng);

    assert_eq!(c1.phase(&s), m1);
    assert_eq!(c1.add_component_wise_ref(&c2).phase(&s), m1.wrapping_add(m2));

    let mut c3 = c2.clone();
    c3.mul_scalar_assign(2);
    assert_eq!(c3.phase(&s), m2.wrapping_mul(2));
}

#[test]
fn test_sample_extract() {
    let mut rng = ChaCha12Rng::seed_from_u64(5);

    let s: Vec<i64> = (0..N).map(|_| rng.gen_range(0..=1)).collect();
    let a = Polynomial::new((0..N).map(|_| rng.gen::<u32>()).collect());
    let m = Polynomial::new((0..N).map(|i| (i as u32) << 24).collect());

    let b = a.mul_integer_naive(&s) + &m;
    let rlwe = Rlwe::from((a, b));

    assert_eq!(rlwe.phase(&s), m);

    let key: Vec<u32> = s.iter().map(|&v| <u32 as Torus>::from_signed(v)).collect();
    for index in [0, 1, N / 2, N - 1] {
        let lwe = rlwe.sample_extract_index(index);
        assert_eq!(lwe.dimension(), N);
        assert_eq!(lwe.phase(&key), m[index]);
    }
}

#[test]
fn test_sample_extract_of_zero() {
    let rlwe = Rlwe::<u64>::zero(N);
    assert_eq!(rlwe.dimension(), N);
    assert_eq!(rlwe.sample_extract_index(3), Lwe::zero(N));
    assert!(rlwe.a().is_zero() && rlwe.b().is_zero());
}

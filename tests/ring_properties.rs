use crypto_bigint::U256;
use proptest::prelude::*;
use rlwe_pke::math::non_zero_u256;
use rlwe_pke::{BigIntPoly, NativePoly, PolyRing};

const N: usize = 8;
const NATIVE_Q: u64 = (1 << 61) - 1;

fn bigint_modulus() -> crypto_bigint::NonZero<U256> {
    non_zero_u256((U256::ONE << 150u32).wrapping_sub(&U256::from_u64(3))).unwrap()
}

fn coeffs_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), N)
}

fn native_strategy() -> impl Strategy<Value = NativePoly<N>> {
    coeffs_strategy().prop_map(|c| NativePoly::from_coeffs(&c, &NATIVE_Q))
}

fn bigint_strategy() -> impl Strategy<Value = BigIntPoly<N>> {
    coeffs_strategy().prop_map(|c| BigIntPoly::from_coeffs(&c, &bigint_modulus()))
}

fn add<P: PolyRing<N>>(a: &P, b: &P) -> P {
    let mut out = a.clone();
    out += b;
    out
}

fn mul<P: PolyRing<N>>(a: &P, b: &P) -> P {
    let mut out = a.clone();
    out *= b;
    out
}

macro_rules! ring_laws {
    ($module:ident, $strategy:ident) => {
        mod $module {
            use super::*;

            proptest! {
                #[test]
                fn addition_is_commutative(a in $strategy(), b in $strategy()) {
                    prop_assert_eq!(add(&a, &b), add(&b, &a));
                }

                #[test]
                fn multiplication_is_associative(
                    a in $strategy(),
                    b in $strategy(),
                    c in $strategy(),
                ) {
                    prop_assert_eq!(mul(&mul(&a, &b), &c), mul(&a, &mul(&b, &c)));
                }

                #[test]
                fn multiplication_is_commutative(a in $strategy(), b in $strategy()) {
                    prop_assert_eq!(mul(&a, &b), mul(&b, &a));
                }

                #[test]
                fn multiplication_distributes(
                    a in $strategy(),
                    b in $strategy(),
                    c in $strategy(),
                ) {
                    prop_assert_eq!(mul(&a, &add(&b, &c)), add(&mul(&a, &b), &mul(&a, &c)));
                }

                #[test]
                fn subtraction_undoes_addition(a in $strategy(), b in $strategy()) {
                    let mut back = add(&a, &b);
                    back -= &b;
                    prop_assert_eq!(back, a);
                }

                #[test]
                fn negation_matches_subtraction_from_zero(a in $strategy()) {
                    let mut expected = a.clone();
                    expected -= &a;
                    expected -= &a;
                    prop_assert_eq!(-a, expected);
                }
            }
        }
    };
}

ring_laws!(native, native_strategy);
ring_laws!(bigint, bigint_strategy);

proptest! {
    #[test]
    fn backends_agree_on_products(a in coeffs_strategy(), b in coeffs_strategy()) {
        // Both backends reduce modulo the same odd modulus.
        let q_big = non_zero_u256(U256::from_u64(NATIVE_Q)).unwrap();
        let native = mul(
            &NativePoly::<N>::from_coeffs(&a, &NATIVE_Q),
            &NativePoly::<N>::from_coeffs(&b, &NATIVE_Q),
        );
        let bigint = mul(
            &BigIntPoly::<N>::from_coeffs(&a, &q_big),
            &BigIntPoly::<N>::from_coeffs(&b, &q_big),
        );
        prop_assert_eq!(native.coefficients_u256(), bigint.coefficients_u256());
    }

    #[test]
    fn x_to_the_degree_is_minus_one(k in 0..N) {
        let mut xk = [0i64; N];
        xk[k] = 1;
        let mut xnk = [0i64; N];
        xnk[N - k - 1] = 1;
        // x^k * x^(N-k-1) * x = x^N = -1
        let mut x = [0i64; N];
        x[1] = 1;
        let prod = mul(
            &mul(
                &NativePoly::<N>::from_coeffs(&xk, &NATIVE_Q),
                &NativePoly::<N>::from_coeffs(&xnk, &NATIVE_Q),
            ),
            &NativePoly::<N>::from_coeffs(&x, &NATIVE_Q),
        );
        let mut minus_one = [0i64; N];
        minus_one[0] = -1;
        prop_assert_eq!(prod, NativePoly::<N>::from_coeffs(&minus_one, &NATIVE_Q));
    }
}

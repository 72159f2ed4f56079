use super::*;
use crate::assert_fp_eq;

fn check_identities<S: Semiring + crate::math::NearlyEqual<f64>>(samples: &[S]) {
    for &a in samples {
        assert_fp_eq!(a.add(S::zero()), a);
        assert_fp_eq!(a.mul(S::one()), a);
        assert_fp_eq!(S::one().mul(a), a);
        for &b in samples {
            assert_fp_eq!(a.add(b), b.add(a), 1e-12);
            for &c in samples {
                assert_fp_eq!(a.mul(b.add(c)), a.mul(b).add(a.mul(c)), 1e-10);
                assert_fp_eq!(a.add(b).add(c), a.add(b.add(c)), 1e-10);
            }
        }
    }
}

#[test]
fn log_laws() {
    let samples = [-1.5, 0.0, 0.25, 2.0].map(Log::<f64>::convert);
    check_identities(&samples);
}

#[test]
fn max_laws() {
    let samples = [-1.5, 0.0, 0.25, 2.0].map(Max::<f64>::convert);
    check_identities(&samples);
}

#[test]
fn real_laws() {
    let samples = [0.5, 1.0, 0.25, 2.0].map(Real::<f64>::convert);
    check_identities(&samples);
}

#[test]
fn entropy_laws() {
    let samples = [-1.5, 0.0, 0.25, 2.0].map(Entropy::<f64>::convert);
    let mixed = [samples[0].add(samples[1]), samples[2].mul(samples[3]).add(samples[0])];
    check_identities(&[samples[0], samples[3], mixed[0], mixed[1]]);
}

#[test]
fn kmax_laws() {
    let samples = [-1.5, 0.0, 0.25, 2.0].map(KMax::<f64, 3>::convert);
    let mixed = samples[0].add(samples[1]).add(samples[3]);
    check_identities(&[samples[0], samples[2], mixed]);
}

#[test]
fn log_sum_and_dot_agree_with_folds() {
    let a = [0.3, -1.2, 2.5].map(Log::<f64>::convert);
    let b = [1.0, 0.5, -0.5].map(Log::<f64>::convert);

    let folded_sum = a.iter().fold(Log::zero(), |acc, &x| acc.add(x));
    assert_fp_eq!(Log::sum(&a), folded_sum, 1e-12);

    let folded_dot = a.iter().zip(&b).fold(Log::zero(), |acc, (&x, &y)| acc.add(x.mul(y)));
    assert_fp_eq!(Log::dot(&a, &b), folded_dot, 1e-12);

    assert_eq!(Log::<f32>::sum(&[]), Log::zero());
}

#[test]
fn counting_with_log_and_real() {
    let ones = [Real(1.0_f64); 5];
    assert_fp_eq!(Real::sum(&ones), Real(5.0));

    let zeros = [Log(0.0_f64); 5];
    assert_fp_eq!(Log::sum(&zeros), Log(5.0_f64.ln()));
}

#[test]
fn kmax_keeps_best_scores() {
    let v = [1.0, 4.0, 2.0, 3.0].map(KMax::<f64, 3>::convert);
    let best = KMax::sum(&v);
    assert_eq!(best.scores(), &[4.0, 3.0, 2.0]);

    let pairs = best.mul(KMax([1.0, 0.0, f64::NEG_INFINITY]));
    assert_eq!(pairs.scores(), &[5.0, 4.0, 4.0]);

    let short = KMax::<f64, 3>::convert(1.0).add(KMax::convert(0.5));
    assert_eq!(short.scores(), &[1.0, 0.5, f64::NEG_INFINITY]);
    assert_eq!(short.value(), 1.0);
}

#[test]
fn entropy_of_uniform_choice() {
    let n = 4;
    let leaves = vec![Entropy::<f64>::convert(0.0); n];
    let total = Entropy::sum(&leaves);
    assert_fp_eq!(total.log_z, 4.0_f64.ln());
    assert_fp_eq!(total.entropy(), 4.0_f64.ln());

    // Two independent uniform choices have additive entropy
    let product = total.mul(Entropy::sum(&leaves[..2]));
    assert_fp_eq!(product.entropy(), 8.0_f64.ln());
}

#[test]
fn entropy_of_skewed_choice() {
    let potentials = [0.0_f64, 1.0, -2.0];
    let total = Entropy::sum(&potentials.map(Entropy::convert));

    let z: f64 = potentials.iter().map(|p| p.exp()).sum();
    let expected: f64 = potentials.iter().map(|p| p.exp() / z).map(|p| -p * p.ln()).sum();

    assert_fp_eq!(total.log_z, z.ln(), 1e-12);
    assert_fp_eq!(total.entropy(), expected, 1e-12);
}

#[test]
fn entropy_zero_absorbs() {
    let x = Entropy::<f64>::convert(1.0).add(Entropy::convert(0.0));
    assert_fp_eq!(Entropy::zero().mul(x).add(x), x);
    assert_eq!(Entropy::<f64>::zero().add(Entropy::zero()), Entropy::zero());
}

#[test]
fn dual_tangent_matches_finite_difference() {
    // ln(e^a + e^(a + b)), derivative with respect to b
    let (a, b) = (0.3_f64, -0.7_f64);
    let f = |b: f64| LogDual::convert(a).add(LogDual::convert(a).mul(LogDual::convert(b))).value;

    let seeded = LogDual::convert(a).add(LogDual::convert(a).mul(LogDual::seed(b)));

    let h = 1e-6;
    let numeric = (f(b + h) - f(b - h)) / (2.0 * h);
    assert_fp_eq!(seeded.tangent, numeric, 1e-6);
    assert_fp_eq!(seeded.value, f(b));
}

#[test]
fn dual_zero_has_no_tangent() {
    let seeded = LogDual::<f64>::seed(2.0);
    let total = seeded.mul(LogDual::zero()).add(LogDual::convert(0.0));
    assert_fp_eq!(total.tangent, 0.0);
    assert_fp_eq!(total.value, 0.0);
}

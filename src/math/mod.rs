mod float;
mod float_compare;

pub use float::*;
pub use float_compare::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_fp_eq;

    #[test]
    fn log_add_exp_identities() {
        assert_fp_eq!(log_add_exp(0.0_f64, 0.0), 2.0_f64.ln());
        assert_fp_eq!(log_add_exp(f64::NEG_INFINITY, 1.5), 1.5);
        assert_fp_eq!(log_add_exp(1.5, f64::NEG_INFINITY), 1.5);
        assert_eq!(log_add_exp(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn log_add_exp_is_symmetric_and_stable() {
        assert_fp_eq!(log_add_exp(1000.0_f64, 1000.0), 1000.0 + 2.0_f64.ln());
        assert_fp_eq!(log_add_exp(-3.0_f64, 2.0), log_add_exp(2.0, -3.0));
    }

    #[test]
    fn log_sum_exp_matches_direct_sum() {
        let values = [0.1_f64, -2.0, 0.7, 1.3];
        let direct = values.iter().map(|x| x.exp()).sum::<f64>().ln();
        assert_fp_eq!(log_sum_exp(values), direct);

        assert_eq!(log_sum_exp(std::iter::empty::<f32>()), f32::NEG_INFINITY);
        assert_eq!(log_sum_exp([f32::NEG_INFINITY; 3]), f32::NEG_INFINITY);
    }
}

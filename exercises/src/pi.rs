/// Approximate pi with the first `terms` terms of the Leibniz series
/// 4/1 - 4/3 + 4/5 - 4/7 + ...
///
/// The error after `n` terms is on the order of `1/n`.
pub fn calculate_pi(terms: u32) -> f64 {
    let mut pi = 0.0;
    let mut denominator = 1.0;
    let mut sign = 1.0;
    for _ in 0..terms {
        pi += sign * (4.0 / denominator);
        denominator += 2.0;
        sign = -sign;
    }
    pi
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_terms() {
        assert_eq!(calculate_pi(0), 0.0);
    }

    #[test]
    fn test_first_terms() {
        assert_eq!(calculate_pi(1), 4.0);
        assert!((calculate_pi(2) - (4.0 - 4.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_converges() {
        let approx = calculate_pi(1_000_000);
        assert!((approx - PI).abs() < 1e-5, "got {}", approx);
    }

    #[test]
    fn test_alternates_around_pi() {
        assert!(calculate_pi(1001) > PI);
        assert!(calculate_pi(1000) < PI);
    }
}

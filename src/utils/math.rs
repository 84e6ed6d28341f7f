/// Standard normal cumulative distribution function.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / (2.0f64).sqrt()))
}

/// Index and value of the largest entry; ties keep the first index.
pub fn max_index(values: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_probability_is_symmetric() {
        assert!((normal_probability(0.0) - 0.5).abs() < 1e-12);
        let p = normal_probability(1.0);
        assert!((p + normal_probability(-1.0) - 1.0).abs() < 1e-12);
        assert!((p - 0.841_344_746).abs() < 1e-6);
    }

    #[test]
    fn max_index_prefers_first_of_ties() {
        assert_eq!(max_index(&[1.0, 3.0, 3.0, 2.0]), Some((1, 3.0)));
        assert_eq!(max_index(&[]), None);
        assert_eq!(max_index(&[0.0, 0.0]), Some((0, 0.0)));
    }
}

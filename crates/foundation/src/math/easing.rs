/// Cubic ease-out: fast start, decelerating to rest at `t = 1`.
///
/// Input is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::ease_out_cubic;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn decelerates() {
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        let first = ease_out_cubic(0.1) - ease_out_cubic(0.0);
        let last = ease_out_cubic(1.0) - ease_out_cubic(0.9);
        assert!(first > last);
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}

/// Most results kept for a query of `query_len` characters.
pub fn max_results(query_len: usize) -> usize {
    match query_len {
        0 => 100,
        1..=2 => 8,
        3..=4 => 5,
        _ => 3,
    }
}

/// Lowest score a file may have and still be shown.
pub fn min_threshold(query_len: usize) -> u8 {
    match query_len {
        0 => 0,
        1..=2 => 40,
        3..=4 => 50,
        _ => 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_steps() {
        assert_eq!(max_results(0), 100);
        assert_eq!(max_results(2), 8);
        assert_eq!(max_results(3), 5);
        assert_eq!(max_results(4), 5);
        assert_eq!(max_results(5), 3);
        assert_eq!(max_results(40), 3);
    }

    #[test]
    fn cap_never_grows_with_length() {
        for len in 0..32 {
            assert!(max_results(len + 1) <= max_results(len));
        }
    }

    #[test]
    fn threshold_steps() {
        assert_eq!(min_threshold(0), 0);
        assert_eq!(min_threshold(1), 40);
        assert_eq!(min_threshold(4), 50);
        assert_eq!(min_threshold(9), 60);
        for len in 0..32 {
            assert!(min_threshold(len + 1) >= min_threshold(len));
        }
    }
}

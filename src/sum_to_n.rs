//! Three interchangeable ways to sum the first `n` natural numbers.

/// Accumulates with a plain loop. O(n) time, O(1) space. Returns 0 for
/// `n < 1`.
pub fn sum_to_n_loop(n: i64) -> i64 {
    if n < 1 {
        return 0;
    }
    let mut sum = 0;
    for i in 1..=n {
        sum += i;
    }
    sum
}

/// Recursive form, bottoming out at `n == 0`. Stack depth grows linearly
/// with `n`; callers must keep `n` non-negative and small enough for the
/// stack.
pub fn sum_to_n_recursive(n: i64) -> i64 {
    if n == 0 {
        return 0;
    }
    n + sum_to_n_recursive(n - 1)
}

/// Closed form `n * (n + 1) / 2`. O(1). Returns 0 for `n < 1`.
pub fn sum_to_n_formula(n: i64) -> i64 {
    if n < 1 {
        return 0;
    }
    n * (n + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_agree_up_to_ten_thousand() {
        for n in 0..=10_000 {
            let expected = n * (n + 1) / 2;
            assert_eq!(sum_to_n_loop(n), expected);
            assert_eq!(sum_to_n_recursive(n), expected);
            assert_eq!(sum_to_n_formula(n), expected);
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(sum_to_n_loop(5), 15);
        assert_eq!(sum_to_n_recursive(5), 15);
        assert_eq!(sum_to_n_formula(5), 15);
    }

    #[test]
    fn inputs_below_one_collapse_to_zero() {
        assert_eq!(sum_to_n_loop(0), 0);
        assert_eq!(sum_to_n_loop(-3), 0);
        assert_eq!(sum_to_n_recursive(0), 0);
        assert_eq!(sum_to_n_formula(0), 0);
        assert_eq!(sum_to_n_formula(-3), 0);
    }
}

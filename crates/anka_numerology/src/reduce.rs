//! Digit-sum reduction.

/// Master numbers that survive [`reduce_keep_master`].
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum down to a single digit.
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Like [`reduce`], but stops at 11, 22 or 33.
pub fn reduce_keep_master(mut n: u32) -> u32 {
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

/// Sum of a slice of single digits.
pub fn sum_digits(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(sum_digits(&[1, 5, 0, 6]), 12);
    }

    #[test]
    fn plain_reduction() {
        assert_eq!(reduce(0), 0);
        assert_eq!(reduce(7), 7);
        assert_eq!(reduce(29), 2);
        assert_eq!(reduce(11), 2);
        assert_eq!(reduce(999), 9);
    }

    #[test]
    fn master_numbers_kept() {
        assert_eq!(reduce_keep_master(29), 11);
        assert_eq!(reduce_keep_master(22), 22);
        assert_eq!(reduce_keep_master(33), 33);
        assert_eq!(reduce_keep_master(38), 11);
        assert_eq!(reduce_keep_master(44), 8);
    }
}

/// Integer percentage of `completed` out of `total`, rounded half up.
///
/// An empty total yields 0 and the result never exceeds 100.
#[must_use]
pub fn percentage(completed: u64, total: u64) -> i32 {
    if total == 0 {
        return 0;
    }
    let completed = u128::from(completed.min(total));
    let total = u128::from(total);
    let rounded = (200 * completed + total) / (2 * total);
    i32::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(percentage(0, 4), 0);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(2, 2), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(3, 8), 38); // 37.5 rounds up
        assert_eq!(percentage(9, 4), 100);
    }

    #[test]
    fn test_large_counts() {
        assert_eq!(percentage(u64::MAX, u64::MAX), 100);
        assert_eq!(percentage(u64::MAX / 2, u64::MAX), 50);
    }
}

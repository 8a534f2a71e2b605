/// convert a number of bytes to kilobytes, truncating
pub fn to_kilobytes(bytes: u64) -> u64 {
    bytes / 1_024
}

/// convert a number of bytes to megabytes, truncating
pub fn to_megabytes(bytes: u64) -> u64 {
    bytes / 1_048_576
}

/// convert a number of bytes to gigabytes, truncating
pub fn to_gigabytes(bytes: u64) -> u64 {
    bytes / 1_073_741_824
}

#[test]
fn test_exact_scaling() {
    assert_eq!(to_kilobytes(1_024), 1);
    assert_eq!(to_megabytes(1_048_576), 1);
    assert_eq!(to_gigabytes(1_073_741_824), 1);
}

#[test]
fn test_truncating_scaling() {
    assert_eq!(to_kilobytes(1_023), 0);
    assert_eq!(to_kilobytes(2_047), 1);
    assert_eq!(to_megabytes(1_048_575), 0);
    assert_eq!(to_gigabytes(1_073_741_823), 0);
}

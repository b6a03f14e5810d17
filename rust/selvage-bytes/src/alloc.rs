use selvage_common::{Result, error::Error, fatal::OrFatal};

/// Allocates a zero-filled byte vector of the requested length.
///
/// Allocation failure is reported as an `OutOfMemory` error instead of
/// aborting, so callers at the tool boundary can choose between propagating
/// and terminating.
pub fn try_zeroed_vec(len: usize) -> Result<Vec<u8>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|_| Error::out_of_memory(len))?;
    vec.resize(len, 0);
    Ok(vec)
}

/// Allocates a zero-filled byte vector, terminating the process with a
/// "low memory" diagnostic if the allocation fails.
pub fn zeroed_vec(len: usize) -> Vec<u8> {
    try_zeroed_vec(len).or_fatal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use selvage_common::error::ErrorKind;

    #[test]
    fn test_zeroed_vec() {
        let v = zeroed_vec(1024);
        assert_eq!(v.len(), 1024);
        assert!(v.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zeroed_vec_empty() {
        assert!(zeroed_vec(0).is_empty());
    }

    #[test]
    fn test_try_zeroed_vec_reports_oom() {
        let result = try_zeroed_vec(usize::MAX / 2);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::OutOfMemory { .. }
        ));
    }
}

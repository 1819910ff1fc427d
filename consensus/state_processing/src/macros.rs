/// Returns from the enclosing function with `$result` (converted into the
/// caller's error type) when `$condition` does not hold.
macro_rules! verify {
    ($condition: expr, $result: expr) => {
        if !$condition {
            return Err($result.into());
        }
    };
}

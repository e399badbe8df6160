/// Source of the only non-determinism in the engine: which pre-written line
/// gets surfaced among equally ranked alternatives.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Chooses one option through `random`, `None` when `options` is empty.
pub fn choose<'a, R>(random: &R, options: &[&'a str]) -> Option<&'a str>
where
    R: RandomSource + ?Sized,
{
    if options.is_empty() {
        return None;
    }

    let index = random.pick(options.len()) % options.len();
    Some(options[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_uses_picked_index() {
        let mut random = MockRandomSource::new();
        random.expect_pick().returning(|_| 1);

        assert_eq!(choose(&random, &["a", "b", "c"]), Some("b"));
    }

    #[test]
    fn test_choose_wraps_out_of_range_index() {
        let mut random = MockRandomSource::new();
        random.expect_pick().returning(|len| len + 2);

        assert_eq!(choose(&random, &["a", "b", "c"]), Some("c"));
    }

    #[test]
    fn test_choose_empty_options() {
        let random = MockRandomSource::new();

        assert_eq!(choose(&random, &[]), None);
    }
}

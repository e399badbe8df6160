use rand::Rng;

use crate::domain::common::ports::RandomSource;

/// Uniform picks from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let random = ThreadRandom;

        for len in 1..20 {
            assert!(random.pick(len) < len);
        }
        assert_eq!(random.pick(0), 0);
    }
}

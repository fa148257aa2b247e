use std::{collections::BTreeMap, time::Duration};

/// Iterator yielding pause durations between retry attempts, with
/// phase-dependent intervals.
#[derive(Clone, Debug)]
pub struct RetryInterval {
    count: usize,
    limit: usize,
    phases: BTreeMap<usize, Duration>,
}

impl RetryInterval {
    #[must_use]
    pub fn new(max_try_count: usize, fallback_interval: Duration) -> Self {
        Self {
            count: 0,
            limit: max_try_count,
            phases: BTreeMap::from([(max_try_count, fallback_interval)]),
        }
    }

    #[must_use]
    pub fn add_phase(mut self, upper_bound: usize, interval: Duration) -> Self {
        let _unused = self.phases.insert(upper_bound, interval);
        self
    }

    pub fn reset(&mut self) { self.count = 0; }

    #[must_use]
    pub const fn limit(&self) -> usize { self.limit }
}

impl Default for RetryInterval {
    // the OS clipboard is only transiently busy, a short fixed backoff suffices
    fn default() -> Self { Self::new(8, Duration::from_millis(40)) }
}

impl Iterator for RetryInterval {
    type Item = Duration;

    fn next(&mut self) -> Option<Self::Item> {
        self.count += 1;
        if self.count <= self.limit {
            self.phases.range(self.count..).next().map(|(_, interval)| interval).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::RetryInterval;

    #[test]
    fn default_profile() {
        let intervals: Vec<_> = RetryInterval::default().collect();
        assert_eq!(intervals.len(), 8);
        assert!(intervals.iter().all(|d| *d == Duration::from_millis(40)));
    }

    #[test]
    fn phased_intervals() {
        let mut retry = RetryInterval::new(5, Duration::from_millis(100))
            .add_phase(2, Duration::from_millis(10));
        assert_eq!(retry.next(), Some(Duration::from_millis(10)));
        assert_eq!(retry.next(), Some(Duration::from_millis(10)));
        assert_eq!(retry.next(), Some(Duration::from_millis(100)));
        retry.reset();
        assert_eq!(retry.next(), Some(Duration::from_millis(10)));
    }
}

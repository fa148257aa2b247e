mod retry_interval;

pub use self::retry_interval::RetryInterval;

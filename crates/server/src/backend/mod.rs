mod error;
mod local;
mod mock;
mod subscriber;
mod system;
mod traits;

use std::{sync::Arc, time::Duration};

use self::error::Result;
pub use self::{
    error::Error, local::LocalBackend, mock::MockBackend, subscriber::Subscriber,
    system::SystemBackend, traits::Backend,
};

/// # Errors
pub fn new_shared(poll_interval: Duration) -> Result<Arc<dyn Backend>> {
    Ok(Arc::new(SystemBackend::new(poll_interval)?))
}

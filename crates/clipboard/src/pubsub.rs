use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::{ClipboardWait, Error};

pub fn new() -> (Publisher, Subscriber) {
    let inner = Arc::new((Mutex::new(State::Running(mime::TEXT_PLAIN_UTF_8)), Condvar::new()));
    let publisher = Publisher(inner.clone());
    let subscriber = Subscriber { inner };
    (publisher, subscriber)
}

#[derive(Clone, Debug)]
enum State {
    Running(mime::Mime),
    Stopped,
}

#[derive(Debug)]
pub struct Publisher(Arc<(Mutex<State>, Condvar)>);

impl Publisher {
    pub fn notify_all(&self, mime: mime::Mime) {
        let (lock, condvar) = &*self.0;
        *lock.lock() = State::Running(mime);
        let _unused = condvar.notify_all();
    }

    pub fn close(&self) {
        let (lock, condvar) = &*self.0;
        *lock.lock() = State::Stopped;
        let _unused = condvar.notify_all();
    }
}

impl Drop for Publisher {
    fn drop(&mut self) { self.close(); }
}

#[derive(Clone, Debug)]
pub struct Subscriber {
    inner: Arc<(Mutex<State>, Condvar)>,
}

#[allow(clippy::significant_drop_in_scrutinee)]
impl ClipboardWait for Subscriber {
    fn wait(&self) -> Result<mime::Mime, Error> {
        let (lock, condvar) = &*self.inner;
        let result = {
            let mut state = lock.lock();
            condvar.wait(&mut state);
            match &*state {
                State::Running(mime) => Ok(mime.clone()),
                State::Stopped => Err(Error::NotifierClosed),
            }
        };
        result
    }
}

use clipstash_clipboard::ClipboardWait;
use tokio::{sync::mpsc, task};

#[derive(Debug)]
pub struct Subscriber {
    receiver: mpsc::UnboundedReceiver<mime::Mime>,
    join_handles: task::JoinSet<()>,
}

impl Subscriber {
    pub async fn next(&mut self) -> Option<mime::Mime> { self.receiver.recv().await }
}

impl Drop for Subscriber {
    fn drop(&mut self) {
        self.receiver.close();
        self.join_handles.abort_all();
    }
}

impl From<clipstash_clipboard::Subscriber> for Subscriber {
    fn from(subscriber: clipstash_clipboard::Subscriber) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let mut join_handles = task::JoinSet::new();
        let _unused = join_handles.spawn_blocking({
            let event_sender = sender;
            move || {
                while let Ok(mime) = subscriber.wait() {
                    if event_sender.is_closed() {
                        break;
                    }

                    if let Err(_err) = event_sender.send(mime) {
                        break;
                    }
                }
            }
        });

        Self { receiver, join_handles }
    }
}

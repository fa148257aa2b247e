use clipstash_base::ClipboardContent;
use clipstash_clipboard::{ClipboardLoad, ClipboardStore, Error, MockClipboard};

mod common;

use self::common::ClipboardTester;

#[derive(Debug)]
pub struct MockClipboardTester;

impl Default for MockClipboardTester {
    fn default() -> Self { Self::new() }
}

impl MockClipboardTester {
    #[must_use]
    pub const fn new() -> Self { Self }
}

impl ClipboardTester for MockClipboardTester {
    type Clipboard = MockClipboard;

    fn new_clipboard(&self) -> Self::Clipboard { MockClipboard::new() }
}

#[test]
fn test_mock() -> Result<(), Error> {
    let tester = MockClipboardTester::new();
    tester.run()
}

#[test]
fn test_injected_failure() {
    let clipboard = MockClipboard::new();
    clipboard.store(ClipboardContent::Plaintext("before".to_string())).unwrap();

    clipboard.fail_next_operation();
    assert!(matches!(clipboard.load(None), Err(Error::Mocked)));

    // failure is one-shot, the clipboard recovers afterwards
    assert_eq!(
        clipboard.load(None).unwrap(),
        ClipboardContent::Plaintext("before".to_string())
    );
}

use crate::ClipboardContent;

#[derive(Clone, Debug)]
pub struct Filter {
    regex_set: regex::RegexSet,
    deny_image: bool,
    filter_text_min_length: usize,
    filter_text_max_length: usize,
    filter_image_max_size: usize,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regex_set: regex::RegexSet::default(),

            deny_image: false,

            filter_text_min_length: 1,

            // 2,000,000 characters
            filter_text_max_length: 2_000_000,

            // 5 MiB
            filter_image_max_size: 5 * (1 << 20),
        }
    }

    pub fn set_regex_patterns(&mut self, regex_patterns: regex::RegexSet) {
        self.regex_set = regex_patterns;
    }

    pub fn set_text_min_length(&mut self, size: usize) { self.filter_text_min_length = size; }

    pub fn set_text_max_length(&mut self, size: usize) { self.filter_text_max_length = size; }

    pub fn set_image_max_size(&mut self, size: usize) { self.filter_image_max_size = size; }

    pub fn deny_image(&mut self, deny_image: bool) { self.deny_image = deny_image; }

    /// Returns `true` when the content must not be captured.
    pub fn filter_clipboard_content<C>(&self, content: C) -> bool
    where
        C: AsRef<ClipboardContent>,
    {
        match content.as_ref() {
            ClipboardContent::Plaintext(text) => {
                self.filter_by_text_size(text) || self.filter_text_by_regular_expression(text)
            }
            ClipboardContent::Image { bytes, .. } => {
                self.deny_image || self.filter_by_image_size(bytes)
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn filter_by_mime_type(&self, mime: &mime::Mime) -> bool {
        self.deny_image && mime.type_() == mime::IMAGE
    }

    #[inline]
    #[must_use]
    pub fn filter_by_text_size<S>(&self, text: S) -> bool
    where
        S: AsRef<str>,
    {
        let count = text.as_ref().chars().count();
        count < self.filter_text_min_length || count > self.filter_text_max_length
    }

    #[inline]
    pub fn filter_text_by_regular_expression<S>(&self, text: S) -> bool
    where
        S: AsRef<str>,
    {
        if self.regex_set.is_empty() {
            false
        } else {
            self.regex_set.is_match(text.as_ref())
        }
    }

    #[inline]
    #[must_use]
    pub fn filter_by_image_size<D>(&self, data: D) -> bool
    where
        D: AsRef<[u8]>,
    {
        data.as_ref().len() > self.filter_image_max_size
    }
}

impl Default for Filter {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::Filter;
    use crate::ClipboardContent;

    #[test]
    fn empty_text_is_rejected() {
        let filter = Filter::new();
        assert!(filter.filter_clipboard_content(ClipboardContent::Plaintext(String::new())));
        assert!(!filter.filter_clipboard_content(ClipboardContent::Plaintext("x".to_owned())));
    }

    #[test]
    fn text_length_bounds() {
        let mut filter = Filter::new();
        filter.set_text_min_length(3);
        filter.set_text_max_length(5);
        assert!(filter.filter_by_text_size("ab"));
        assert!(!filter.filter_by_text_size("abc"));
        assert!(!filter.filter_by_text_size("abcde"));
        assert!(filter.filter_by_text_size("abcdef"));
    }

    #[test]
    fn denied_regex_patterns() {
        let mut filter = Filter::new();
        filter.set_regex_patterns(regex::RegexSet::new(["^\\d{16}$"]).unwrap());
        assert!(filter.filter_clipboard_content(ClipboardContent::Plaintext(
            "4000123412341234".to_owned()
        )));
        assert!(
            !filter.filter_clipboard_content(ClipboardContent::Plaintext("hello".to_owned()))
        );
    }

    #[test]
    fn image_toggle_and_size_cap() {
        let mut filter = Filter::new();
        let image = ClipboardContent::Image { width: 1, height: 1, bytes: vec![0; 8].into() };
        assert!(!filter.filter_clipboard_content(&image));

        filter.deny_image(true);
        assert!(filter.filter_clipboard_content(&image));
        assert!(filter.filter_by_mime_type(&mime::IMAGE_PNG));

        filter.deny_image(false);
        filter.set_image_max_size(4);
        assert!(filter.filter_clipboard_content(&image));
    }
}

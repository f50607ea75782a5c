pub(crate) trait OrUnknownExt {
    fn or_unknown(&self) -> &str;
}

impl OrUnknownExt for Option<String> {
    fn or_unknown(&self) -> &str {
        self.as_deref().unwrap_or("unknown")
    }
}

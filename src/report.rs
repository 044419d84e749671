/// Per-item outcome of a continue-on-error loop (downloads, mail sends).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BatchReport {
    pub(crate) succeeded: Vec<String>,
    /// (item, reason)
    pub(crate) failed: Vec<(String, String)>,
}

impl BatchReport {
    pub(crate) fn record_ok(&mut self, item: impl Into<String>) {
        self.succeeded.push(item.into());
    }

    pub(crate) fn record_err(&mut self, item: impl Into<String>, reason: impl ToString) {
        self.failed.push((item.into(), reason.to_string()));
    }

    pub(crate) fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// One-way toast channel of the embedding console. Fire-and-forget; no
/// return value is consumed by the core.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn report_error(&self, message: &str);

    fn report_success(&self, message: &str);
}

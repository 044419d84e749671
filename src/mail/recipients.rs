/// Who receives the photo mail.
///
/// With regular recipients configured, only those also listed as admins are
/// kept (in `recipients` order). Without them, the admins receive it. Both
/// empty means nobody does.
pub(crate) fn effective_recipients(recipients: &[String], admins: &[String]) -> Vec<String> {
    if recipients.is_empty() {
        if admins.is_empty() {
            tracing::warn!("No recipients!");
        }
        return admins.to_vec();
    }

    recipients
        .iter()
        .filter(|r| admins.contains(r))
        .cloned()
        .collect()
}

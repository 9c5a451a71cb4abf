use crate::schema::DockConfig;

/// The storage key becomes a file name, so keep it to a safe alphabet.
pub(crate) fn validate_persistence(errors: &mut Vec<String>, config: &DockConfig) {
    let key = &config.persistence.storage_key;
    if key.is_empty() {
        errors.push("persistence.storage_key must not be empty".into());
    } else if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        errors.push(format!(
            "persistence.storage_key = {key:?} may only contain letters, digits, '_' and '-'"
        ));
    }
}

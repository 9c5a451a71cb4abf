/// Mint a fresh identifier for a newly requested panel.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

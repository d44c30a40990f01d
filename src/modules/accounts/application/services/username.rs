use uuid::Uuid;

/// `{local part}-{8 hex chars}`, e.g. `jane_doe-1f3a9c0b` for `jane.doe@...`.
/// Characters the sign-in form rejects in a username become `_`.
pub fn generate_username(email: &str) -> String {
    let base: String = email
        .split('@')
        .next()
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", base, &suffix[..8])
}

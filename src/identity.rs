use crate::store::{IndicatorSource, StoreError};

pub const FALLBACK_USER_NAME: &str = "Usuário";
pub const FALLBACK_COMPANY_NAME: &str = "Empresa";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub user_name: String,
    pub company_name: String,
}

/// Looks up the display name and company. A missing row (or a NULL column)
/// falls back to the placeholders instead of failing.
pub fn resolve_identity(
    source: &impl IndicatorSource,
    user_id: i64,
) -> Result<Identity, StoreError> {
    let profile = source.user_profile(user_id)?;
    if profile.is_none() {
        log::info!("identity_fallback user_id={} reason=no_user_row", user_id);
    }

    let (name, company) = profile
        .map(|profile| (profile.name, profile.company))
        .unwrap_or_default();

    Ok(Identity {
        user_id,
        user_name: name.unwrap_or_else(|| FALLBACK_USER_NAME.to_string()),
        company_name: company.unwrap_or_else(|| FALLBACK_COMPANY_NAME.to_string()),
    })
}

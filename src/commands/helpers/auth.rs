use crate::{access::RequestContext, config::Config};

/// Builds the per-request context for a Telegram caller from the configured
/// bindings. Unknown callers get an anonymous context, which authorization
/// then rejects.
pub(crate) fn request_context(telegram_id: Option<u64>, config: &Config) -> RequestContext {
    let Some(telegram_id) = telegram_id else {
        return RequestContext::anonymous();
    };

    match config.binding_for(telegram_id) {
        Some(binding) => RequestContext::new(binding.user_id, binding.profile.clone()),
        None => {
            log::warn!(
                "SECURITY: unbound caller. telegram_id={}",
                telegram_id
            );
            RequestContext::anonymous()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::request_context;
    use crate::{access::RequestContext, config::Config};

    fn config() -> Config {
        toml::from_str::<Config>(
            r#"
bot_token = "t"

[[users]]
telegram_id = 42
user_id = 7
profile = "Adm"
"#,
        )
        .expect("config")
    }

    #[test]
    fn bound_caller_carries_user_and_profile() {
        assert_eq!(
            request_context(Some(42), &config()),
            RequestContext::new(7, "Adm")
        );
    }

    #[test]
    fn unbound_or_missing_caller_is_anonymous() {
        assert_eq!(request_context(Some(43), &config()), RequestContext::anonymous());
        assert_eq!(request_context(None, &config()), RequestContext::anonymous());
    }
}

//! Deployment base path for the router.

/// Base path for the router (e.g., `/quiz` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::router_base_with_base;

    #[test]
    fn router_base_is_none_without_public_url() {
        assert_eq!(router_base_with_base(""), None);
        assert_eq!(router_base_with_base("/"), None);
    }

    #[test]
    fn router_base_trims_trailing_slash() {
        assert_eq!(router_base_with_base("/quiz/"), Some("/quiz".to_string()));
        assert_eq!(router_base_with_base(" /mbti "), Some("/mbti".to_string()));
    }
}

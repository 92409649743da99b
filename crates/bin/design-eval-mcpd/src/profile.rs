use design_eval_core::PromptProfile;
use design_eval_core::profile::ProfileError;
use design_eval_core::TemplateRenderer;
use tracing::info;

use crate::config::DaemonConfig;

/// Loads the configured profile (or the built-in one) and applies CLI overrides.
pub fn build_renderer(config: &DaemonConfig) -> Result<TemplateRenderer, ProfileError> {
    let profile = resolve_profile(config)?;
    info!(
        server = %profile.server_name,
        locale = %profile.locale,
        wiki = %profile.wiki.name,
        "prompt profile ready"
    );
    Ok(TemplateRenderer::new(profile))
}

fn resolve_profile(config: &DaemonConfig) -> Result<PromptProfile, ProfileError> {
    let mut profile = match config.profile_path.as_deref() {
        Some(path) => PromptProfile::load(path)?,
        None => PromptProfile::default(),
    };
    if let Some(locale) = config.locale {
        profile = profile.with_locale(locale);
    }
    if let Some(server_name) = &config.server_name {
        profile = profile.with_server_name(server_name.clone());
    }
    profile.validate()?;
    Ok(profile)
}

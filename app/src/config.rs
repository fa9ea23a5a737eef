//! Application settings loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use menu_catalog::PricePolicy;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values for the menu shell.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MENU")]
pub struct MenuSettings {
    /// Reject new items priced at zero.
    #[ortho_config(default = false)]
    pub strict_price: bool,
    /// Optional seed menu file replacing the built-in dishes.
    pub seed_path: Option<PathBuf>,
}

impl MenuSettings {
    /// Price policy applied to new items.
    #[must_use]
    pub const fn price_policy(&self) -> PricePolicy {
        PricePolicy::from_strict(self.strict_price)
    }

    /// Configured seed menu path, if any.
    #[must_use]
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> MenuSettings {
        MenuSettings::load_from_iter([OsString::from("menu-app")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("MENU_STRICT_PRICE", None::<String>),
            ("MENU_SEED_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.strict_price);
        assert_eq!(settings.price_policy(), PricePolicy::NonNegative);
        assert!(settings.seed_path().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("MENU_STRICT_PRICE", Some("true".to_owned())),
            ("MENU_SEED_PATH", Some("/tmp/bistro.json".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.strict_price);
        assert_eq!(settings.price_policy(), PricePolicy::StrictlyPositive);
        assert_eq!(settings.seed_path(), Some(Path::new("/tmp/bistro.json")));
    }
}

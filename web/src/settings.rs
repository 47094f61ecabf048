use serde::{Deserialize, Serialize};

use crate::utils::StorageKey;

/// Player preferences kept between visits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Preferences {
    /// Last button count a round was started with.
    pub last_count: Option<u32>,
}

impl Preferences {
    pub(crate) fn count_input(&self) -> String {
        self.last_count.map(|count| count.to_string()).unwrap_or_default()
    }
}

impl StorageKey for Preferences {
    const KEY: &'static str = "memorder:preferences:v1";
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::utils::LocalOrDefault;
    use gloo::storage::{LocalStorage, Storage};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn saved_preferences_are_restored() {
        LocalStorage::delete(Preferences::KEY);
        assert_eq!(Preferences::local_or_default(), Preferences::default());

        let prefs = Preferences {
            last_count: Some(5),
        };
        prefs.local_save();
        assert_eq!(Preferences::local_or_default(), prefs);

        LocalStorage::delete(Preferences::KEY);
    }
}

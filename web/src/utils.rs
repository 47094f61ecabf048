use std::future::Future;

use gloo::storage::{LocalStorage, Storage};
use gloo::timers::future::TimeoutFuture;
use memorder_core::Delay;
use serde::{Serialize, de::DeserializeOwned};

/// Key under which a value is persisted in the browser's local storage.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
    fn local_save(&self);
}

impl<T> LocalOrDefault for T
where
    T: StorageKey + Serialize + DeserializeOwned + Default,
{
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("no stored {}: {:?}", T::KEY, err);
            Default::default()
        })
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("Could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Browser timer backing the round sequence.
pub(crate) struct BrowserDelay;

impl Delay for BrowserDelay {
    fn sleep(&self, millis: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(millis)
    }
}

/// Reads the leading digits of the button count field, like `parseInt` does.
pub(crate) fn parse_count(input: &str) -> Option<u32> {
    let input = input.trim_start();
    let input = input.strip_prefix('+').unwrap_or(input);
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input[..end].parse().ok()
}

/// Parses a computed CSS length such as `"16px"`.
pub(crate) fn parse_px(value: &str) -> Option<f32> {
    value
        .trim()
        .strip_suffix("px")?
        .trim()
        .parse()
        .ok()
        .filter(|px: &f32| px.is_finite() && *px > 0.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_takes_leading_digits() {
        assert_eq!(parse_count("5"), Some(5));
        assert_eq!(parse_count("  7 "), Some(7));
        assert_eq!(parse_count("+4"), Some(4));
        assert_eq!(parse_count("3buttons"), Some(3));
        assert_eq!(parse_count("4.9"), Some(4));
    }

    #[test]
    fn count_rejects_non_numbers() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("99999999999"), None);
    }

    #[test]
    fn px_values_parse() {
        assert_eq!(parse_px("16px"), Some(16.));
        assert_eq!(parse_px(" 14.5px "), Some(14.5));
        assert_eq!(parse_px("1em"), None);
        assert_eq!(parse_px("0px"), None);
    }
}

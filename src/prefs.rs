//! Durable user preferences: exactly two scalar keys in localStorage.
//!
//! Only the locale and region codes are persisted — navigation, menu, and
//! scroll state are session-local by design. Writes are fire-and-forget: a
//! storage failure is logged to the console and the in-memory state stays
//! authoritative. Unknown or corrupted values decode to the defaults, so a
//! fresh boot can never be invalid.

#[cfg(any(target_arch = "wasm32", test))]
use crate::locale::{Locale, Region, BASE_LOCALE, GLOBAL_REGION};

#[cfg(target_arch = "wasm32")]
const LOCALE_KEY: &str = "dev_atlas_locale";

#[cfg(target_arch = "wasm32")]
const REGION_KEY: &str = "dev_atlas_region";

/// Decode a stored locale code, falling back to the base locale.
#[cfg(any(target_arch = "wasm32", test))]
pub fn decode_locale(raw: Option<&str>) -> Locale {
    raw.and_then(Locale::from_code).unwrap_or(BASE_LOCALE)
}

/// Decode a stored region code, falling back to the global region.
#[cfg(any(target_arch = "wasm32", test))]
pub fn decode_region(raw: Option<&str>) -> Region {
    raw.and_then(Region::from_code).unwrap_or(GLOBAL_REGION)
}

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read both preferences. Absent storage behaves like absent keys.
#[cfg(target_arch = "wasm32")]
pub fn load() -> (Locale, Region) {
    let storage = match get_storage() {
        Some(s) => s,
        None => return (BASE_LOCALE, GLOBAL_REGION),
    };
    let locale = decode_locale(storage.get_item(LOCALE_KEY).ok().flatten().as_deref());
    let region = decode_region(storage.get_item(REGION_KEY).ok().flatten().as_deref());
    (locale, region)
}

/// Write both preferences. Failures are logged and swallowed.
#[cfg(target_arch = "wasm32")]
pub fn store(locale: Locale, region: Region) {
    let Some(storage) = get_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(LOCALE_KEY, locale.code()) {
        web_sys::console::warn_1(&format!("dev-atlas: failed to persist locale: {e:?}").into());
    }
    if let Err(e) = storage.set_item(REGION_KEY, region.code()) {
        web_sys::console::warn_1(&format!("dev-atlas: failed to persist region: {e:?}").into());
    }
}

//! Shared cache-control policies for HTTP handlers.

/// Search results may be cached by intermediaries for a minute.
pub const PUBLIC_MAX_AGE_60: &str = "public, max-age=60";

/// Probe and write responses must never be cached.
pub const NO_STORE: &str = "no-store";

/// Header tuple for cacheable public reads.
pub const fn public_short_lived_header() -> (&'static str, &'static str) {
    ("Cache-Control", PUBLIC_MAX_AGE_60)
}

/// Header tuple for responses that must not be stored.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}

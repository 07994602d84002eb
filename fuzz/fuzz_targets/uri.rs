#![no_main]

use libfuzzer_sys::fuzz_target;
use std::convert::TryFrom;
use uricow::Uri;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        if let Ok(uri) = Uri::try_from(value) {
            Uri::try_from(uri.as_str()).ok();
            uri.resolve_relative_uri(value).ok();
        }
    }
});

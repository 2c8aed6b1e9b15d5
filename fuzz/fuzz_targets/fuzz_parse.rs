#![no_main]

use libfuzzer_sys::fuzz_target;
use tricode::ErrorCode;

// Parsing arbitrary text must never panic, and anything it accepts must
// survive a trip through the canonical string form.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(code) = text.parse::<ErrorCode>() {
        let canonical = code.to_string();
        assert_eq!(canonical.parse::<ErrorCode>(), Ok(code));
    }
});

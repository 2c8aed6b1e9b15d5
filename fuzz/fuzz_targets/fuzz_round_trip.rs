#![no_main]

use libfuzzer_sys::fuzz_target;
use tricode::ErrorCode;

// Every u32 is a valid code: unpack, repack, and the string codec must all
// agree on it.
fuzz_target!(|raw: u32| {
    let code = ErrorCode::from_u32(raw);
    let (service, category, subcode) = code.fields();

    assert_eq!(ErrorCode::new(service, category, subcode), code);
    assert_eq!(code.to_string().parse::<ErrorCode>(), Ok(code));
});

//! Prints a grid of sample error codes for manual eyeballing.
//!
//! Steps through representative service, subcode, and category values,
//! packs each triple, and writes the canonical string form to stdout one
//! per line. Purely illustrative; the codec's contract lives in the tests.
//!
//! ```sh
//! cargo run --example sample_codes | head
//! ```

use tricode::ErrorCode;

fn main() {
    for service in (0..=4095u16).step_by(7) {
        for subcode in (0..=4095u16).step_by(89) {
            for category in (0..=255u16).step_by(30) {
                let code = ErrorCode::new(service, category as u8, subcode);
                println!("{code}");
            }
        }
    }
}

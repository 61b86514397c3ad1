//! Hex text fuzz target: feed arbitrary text to the stream, endian-value and MAC parsers,
//! then extract and checksum whatever parsed. Nothing may panic.
//! Build with: cargo fuzz run hexstream_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use packet_essentials::{
        compute_fcs, extract, swap_text, ChecksumRequest, ExtractionRequest, HexStream, MacAddr,
    };

    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let _ = swap_text(s);
    let _ = s.parse::<MacAddr>();
    if let Ok(stream) = HexStream::parse(s) {
        let qty = data.len() % 8;
        let _ = extract(&stream, &ExtractionRequest::last(qty).chop(true));
        let _ = compute_fcs(&stream, &ChecksumRequest::default().range(0..qty));
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run hexstream_fuzz");
}

#![no_main]
use libfuzzer_sys::fuzz_target;

// Decoding must never panic. As a differential oracle, any text serde_json
// accepts must decode here too, except texts with `\u` escapes: this decoder
// treats every escape in isolation and so rejects surrogate pairs that
// serde_json combines. (The reverse direction does not hold either way; this
// grammar is more permissive around leading zeros and object separators.)
fn decode(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let decoded = jsontape::decode(text);

    if !text.contains("\\u") && serde_json::from_str::<serde_json::Value>(text).is_ok() {
        assert!(
            decoded.is_ok(),
            "serde_json accepted input this decoder rejected: {text:?} -> {decoded:?}"
        );
    }
}

fuzz_target!(|data: &[u8]| decode(data));

#![no_main]

use imperial::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Diagnostics are accumulated; the stream always ends in Eof
        let lexed = lexer::tokenize("fuzz.ic", s);
        assert!(matches!(lexed.tokens.last().map(|t| &t.kind), Some(lexer::TokenKind::Eof)));

        // The parser must not panic on any token stream, even one with lexical errors
        let _ = parser::parse(&lexed.tokens);
    }
});

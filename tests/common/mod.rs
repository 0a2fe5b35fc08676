#![allow(dead_code)]

use xbps_template_rs::{Document, serialize, tokenize};

/// Tokenize `input`, require full consumption, and assert the
/// serialized document is byte-identical to the source.
pub fn roundtrip(input: &str) {
    let tokenized = tokenize(input);
    assert!(
        tokenized.rest.is_empty(),
        "tokenizer stopped early, leftover:\n{}",
        tokenized.rest
    );
    let output = serialize(&tokenized.document);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Tokenize `input`, requiring full consumption.
pub fn parse(input: &str) -> Document {
    let tokenized = tokenize(input);
    assert!(
        tokenized.rest.is_empty(),
        "tokenizer stopped early, leftover:\n{}",
        tokenized.rest
    );
    tokenized.document
}

/// A realistic template in the shape produced by void-packages.
pub const SAMPLE: &str = "\
# Template file for 'oniguruma'
pkgname=oniguruma
version=6.9.8
revision=1
build_style=gnu-configure
configure_args=\"--enable-posix-api\"
short_desc=\"Multi-charset regular expression library\"
maintainer=\"Orphaned <orphan@voidlinux.org>\"
license=\"BSD-2-Clause\"
homepage=\"https://github.com/kkos/oniguruma\"
distfiles=\"https://github.com/kkos/oniguruma/archive/v${version}.tar.gz\"
checksum=28eb62d2d91adf7a0d40e0dd4c4f48b93c7a25674f35d9de2240d437099a7a6a

post_install() {
\tvlicense COPYING
}
";

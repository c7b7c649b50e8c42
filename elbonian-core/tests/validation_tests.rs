//! End-to-end conversion scenarios through the public crate interface.

use elbonian_core::{validate, NumberError};

fn arabic(raw: &str) -> u16 {
    validate(raw).unwrap().to_arabic()
}

fn elbonian(raw: &str) -> String {
    validate(raw).unwrap().to_elbonian()
}

#[test]
fn converts_decimals_to_numerals() {
    assert_eq!(elbonian("1"), "I");
    assert_eq!(elbonian("2"), "II");
    assert_eq!(elbonian("312"), "CCCXII");
    assert_eq!(elbonian("1354"), "MCCCLv");
    assert_eq!(elbonian("2120"), "MMCXX");
    assert_eq!(elbonian("9999"), "NnDdLlVv");
}

#[test]
fn converts_numerals_to_decimals() {
    assert_eq!(arabic("I"), 1);
    assert_eq!(arabic("MMCXX"), 2120);
    assert_eq!(arabic("CCXII"), 212);
    assert_eq!(arabic("MMMCCv"), 3204);
    assert_eq!(arabic("NMMCCCI"), 7301);
    assert_eq!(arabic("DLI"), 551);
    assert_eq!(arabic("CLXXVIII"), 178);
    assert_eq!(arabic("NnDdLlVv"), 9999);
}

#[test]
fn identity_in_the_origin_notation() {
    assert_eq!(arabic("2120"), 2120);
    assert_eq!(elbonian("X"), "X");
    assert_eq!(elbonian("MMCCV"), "MMCCV");
    assert_eq!(elbonian("dLv"), "dLv");
}

#[test]
fn accepts_surrounding_whitespace_only() {
    assert_eq!(arabic("   MMCXX"), 2120);
    assert_eq!(arabic("MMCXX "), 2120);
    assert!(matches!(
        validate("MMC XX"),
        Err(NumberError::Malformed(_))
    ));
    assert!(matches!(
        validate("M M C X X"),
        Err(NumberError::Malformed(_))
    ));
    assert!(matches!(validate("DdL v"), Err(NumberError::Malformed(_))));
}

#[test]
fn leading_zeros_are_stripped() {
    assert_eq!(elbonian("0000000000000000000000002"), "II");
}

#[test]
fn rejects_out_of_bounds_decimals() {
    for raw in ["0", "-1", "10000", "1000000", "2147483649", "-2.3"] {
        assert!(
            matches!(validate(raw), Err(NumberError::OutOfBounds(_))),
            "expected OutOfBounds for {raw}"
        );
    }
}

#[test]
fn rejects_malformed_input() {
    let malformed = [
        "",
        "2.3",
        "MMMM",
        "MMCCCC",
        "MMn",
        "MCd",
        "MdC",
        "MMCXXl",
        "nIv",
        "vv",
        "LVVVV",
        "NCllI",
        "MCLLLLLV",
        "NNd",
        "MDDX",
        "nnnnnnn",
        "NN",
        "vLCM",
        "MMXCX",
        "MMDx",
        "Mll",
        "vV",
        "`",
        "6942)(*&^^",
        "M & C",
        "F",
        "MCF",
        "0*",
        "0M",
        "I0",
        "IO",
    ];
    for raw in malformed {
        assert!(
            matches!(validate(raw), Err(NumberError::Malformed(_))),
            "expected Malformed for {raw:?}"
        );
    }
}

//! Named curve constants, reproduced bit-exactly from the source tables.
//!
//! All of them are process-lifetime values; clone freely, never mutate.

use dashu::integer::UBig;
use once_cell::sync::Lazy;

use crate::arith::big_from_hex;
use crate::curve::CurveParams;

/// ### secp256k1
///
/// The Koblitz curve `y² = x³ + 7` over
///
/// 𝑃 = `fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f`
///
/// 𝑁 = `fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141`
///
/// with base point
///
/// 𝐺.𝑥 = `79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798`
///
/// 𝐺.𝑦 = `483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8`
pub static SECP256K1: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: big_from_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    n: big_from_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    a: UBig::ZERO,
    b: UBig::from_word(7),
    gx: big_from_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: big_from_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    bit_size: 256,
    name: "secp256k1",
});

/// ### Tiny pedagogical curve
///
/// `y² = x³ + 7` over `p = 17` with `G = (15, 13)` and group order 18.
/// Every group element can be enumerated by hand, which makes it the
/// workhorse of the test suite.
pub static TINY_EC: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: UBig::from_word(17),
    n: UBig::from_word(18),
    a: UBig::ZERO,
    b: UBig::from_word(7),
    gx: UBig::from_word(15),
    gy: UBig::from_word(13),
    bit_size: 18,
    name: "p1707",
});

/// ### GOST R 34.10 example curve, 256 bit
///
/// The test parameter set from the 34.10-2012 standard text:
/// `a = 7` over
///
/// 𝑃 = `8000000000000000000000000000000000000000000000000000000000000431`
///
/// 𝑁 = `8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3`
///
/// Note `p ≡ 1 (mod 4)`: x-lifting this curve exercises the general
/// Tonelli–Shanks square root.
pub static GOST_EX1: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: big_from_hex("8000000000000000000000000000000000000000000000000000000000000431"),
    n: big_from_hex("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3"),
    a: UBig::from_word(7),
    b: big_from_hex("5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E"),
    gx: big_from_hex("2"),
    gy: big_from_hex("8E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8"),
    bit_size: 256,
    name: "GostEx1",
});

/// ### GOST R 34.10 example curve, 512 bit
///
/// The 512-bit example set from the 34.10-2012 standard text.
pub static GOST_EX2: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: big_from_hex(
        "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DF1D852741AF4704A0458047E80E4546D35B8336FAC224DD81664BBF528BE6373",
    ),
    n: big_from_hex(
        "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DA82F2D7ECB1DBAC719905C5EECC423F1D86E25EDBE23C595D644AAF187E6E6DF",
    ),
    a: big_from_hex("7"),
    b: big_from_hex(
        "1CFF0806A31116DA29D8CFA54E57EB748BC5F377E49400FDD788B649ECA1AC4361834013B2AD7322480A89CA58E0CF74BC9E540C2ADD6897FAD0A3084F302ADC",
    ),
    gx: big_from_hex(
        "24D19CC64572EE30F396BF6EBBFD7A6C5213B3B3D7057CC825F91093A68CD762FD60611262CD838DC6B60AA7EEE804E28BC849977FAC33B4B530F1B120248A9A",
    ),
    gy: big_from_hex(
        "2BB312A43BD2CE6E0D020613C857ACDDCFBF061E91E5F2C3F32447C259F39B2C83AB156D77F1496BF7EB3351E1EE4E43DC1A18B91B24640B6DBB92CB1ADD371E",
    ),
    bit_size: 512,
    name: "GostEx2",
});

/// ### GOST R 34.10-2001 CryptoPro ParamSet A
///
/// `a = p − 3`, so the curve equation takes the NIST `x³ − 3x + b` shape.
pub static GOST_34102001_PARAM_SET_A: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: big_from_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"),
    n: big_from_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893"),
    a: big_from_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94"),
    b: big_from_hex("A6"),
    gx: big_from_hex("1"),
    gy: big_from_hex("8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14"),
    bit_size: 256,
    name: "Gost34102001paramSetA",
});

/// ### GOST R 34.10-2012 512-bit ParamSet A
pub static GOST_341012512_PARAM_SET_A: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: big_from_hex(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7",
    ),
    n: big_from_hex(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275",
    ),
    a: big_from_hex(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4",
    ),
    b: big_from_hex(
        "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760",
    ),
    gx: big_from_hex("3"),
    gy: big_from_hex(
        "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4",
    ),
    bit_size: 512,
    name: "Gost341012512paramSetA",
});

/// ### GOST R 34.10-2012 512-bit ParamSet B
pub static GOST_341012512_PARAM_SET_B: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: big_from_hex(
        "8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006F",
    ),
    n: big_from_hex(
        "800000000000000000000000000000000000000000000000000000000000000149A1EC142565A545ACFDB77BD9D40CFA8B996712101BEA0EC6346C54374F25BD",
    ),
    a: big_from_hex(
        "8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006C",
    ),
    b: big_from_hex(
        "687D1B459DC841457E3E06CF6F5E2517B97C7D614AF138BCBF85DC806C4B289F3E965D2DB1416D217F8B276FAD1AB69C50F78BEE1FA3106EFB8CCBC7C5140116",
    ),
    gx: big_from_hex("2"),
    gy: big_from_hex(
        "1A8F7EDA389B094C2C071E3647A8940F3C123B697578C213BE6DD9E6C8EC7335DCB228FD1EDF4A39152CBCAAF8C0398828041055F94CEEEC7E21340780FE41BD",
    ),
    bit_size: 512,
    name: "Gost341012512paramSetB",
});

/// Looks a named curve up by its canonical name.
pub fn by_name(name: &str) -> Option<&'static CurveParams> {
    match name {
        "secp256k1" => Some(&*SECP256K1),
        "p1707" => Some(&*TINY_EC),
        "GostEx1" => Some(&*GOST_EX1),
        "GostEx2" => Some(&*GOST_EX2),
        "Gost34102001paramSetA" => Some(&*GOST_34102001_PARAM_SET_A),
        "Gost341012512paramSetA" => Some(&*GOST_341012512_PARAM_SET_A),
        "Gost341012512paramSetB" => Some(&*GOST_341012512_PARAM_SET_B),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_generator_is_on_its_curve() {
        for curve in [
            &*SECP256K1,
            &*TINY_EC,
            &*GOST_EX1,
            &*GOST_EX2,
            &*GOST_34102001_PARAM_SET_A,
            &*GOST_341012512_PARAM_SET_A,
            &*GOST_341012512_PARAM_SET_B,
        ] {
            assert!(curve.is_on_curve(&curve.generator()), "{}", curve.name);
        }
    }

    #[test]
    fn lookup_by_name_round_trips() {
        for name in [
            "secp256k1",
            "p1707",
            "GostEx1",
            "GostEx2",
            "Gost34102001paramSetA",
            "Gost341012512paramSetA",
            "Gost341012512paramSetB",
        ] {
            assert_eq!(by_name(name).unwrap().name, name);
        }
        assert!(by_name("p256").is_none());
    }

    #[test]
    fn nist_shape_is_detected_for_the_2001_set() {
        let c = &*GOST_34102001_PARAM_SET_A;
        assert_eq!(c.a, &c.p - UBig::from_word(3));
    }
}

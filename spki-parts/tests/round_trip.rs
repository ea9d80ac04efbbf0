use hex_literal::hex;
use rand::Rng;
use spki_parts::{dsa, ecdsa, rsa, ErrorKind, NamedCurve, PublicKey};
use spki_parts::bignum::{to_be_bytes_padded, trim_leading_zeros};


/// Random big-endian bytes without leading zeros.
fn random_value<R: Rng>(rng: &mut R, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(1..=max_len);
    let mut ret = vec![0u8; len];
    rng.fill(&mut ret[..]);
    ret[0] = ret[0].max(1);
    ret
}

/// The value as returned in minimal safe width: one zero byte in front if the top bit is set.
fn minimal_width(value: &[u8]) -> Vec<u8> {
    let trimmed = trim_leading_zeros(value);
    let mut ret = Vec::with_capacity(trimmed.len() + 1);
    if trimmed.first().map(|b| b & 0x80 != 0).unwrap_or(true) {
        ret.push(0x00);
    }
    ret.extend_from_slice(trimmed);
    ret
}


#[test]
fn rsa_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..32 {
        let exponent = random_value(&mut rng, 8);
        let modulus = random_value(&mut rng, 512);

        let der = rsa::build(&exponent, &modulus).unwrap();
        let parts = rsa::decompose(&der).unwrap();
        assert_eq!(parts.exponent, minimal_width(&exponent));
        assert_eq!(parts.modulus, minimal_width(&modulus));

        // decomposed parts build the same key again
        assert_eq!(rsa::build(&parts.exponent, &parts.modulus).unwrap(), der);
    }
}


#[test]
fn dsa_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..32 {
        let p = random_value(&mut rng, 384);
        let q = random_value(&mut rng, 32);
        let g = random_value(&mut rng, 384);
        let y = random_value(&mut rng, 384);

        let der = dsa::build(&p, &q, &g, &y).unwrap();
        let parts = dsa::decompose(&der).unwrap().into_vec();
        assert_eq!(
            parts,
            vec![minimal_width(&p), minimal_width(&q), minimal_width(&g), minimal_width(&y)],
        );
    }
}


#[test]
fn ecdsa_round_trip_keeps_leading_zeros() {
    // points whose x coordinate begins with a zero byte: 379G on P-256, 197G on P-384, G on P-521
    let points: [(&str, &[u8], &[u8]); 3] = [
        (
            "P-256",
            &hex!("005543894AF3D00ED7D740ABDBD75C96B06877B787DB5F70EEA78B90A8D7C00A"),
            &hex!("BB4C85A3D8EA29EFAAFA24406912DD84D5B14DC32BF656EF6C6BD58A5D943F92"),
        ),
        (
            "P-384",
            &hex!("
                004D104B26EE5671F72C10C986841D3E65D285E2516161B7BAA341B12631B9E3
                2B6F0D5896D8431C51D5D93A37CBC90E
            "),
            &hex!("
                F11A1E3F8B7B90538EE42CC00EE934A6E2EE25541607D8FB65C7A8B11E2F8868
                53886EEF3865EC933200B9F25599F29F
            "),
        ),
        (
            "P-521",
            &hex!("
                00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D
                3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5
                BD66
            "),
            &hex!("
                011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E
                662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD1
                6650
            "),
        ),
    ];

    for (name, x, y) in points {
        let width = NamedCurve::from_name(name).unwrap().coordinate_width();
        assert_eq!(x.len(), width);
        assert_eq!(x[0], 0x00);

        // leading zeros are insignificant on input
        let der = ecdsa::build(trim_leading_zeros(x), y, name).unwrap();
        assert_eq!(der, ecdsa::build(x, y, name).unwrap());

        let parts = ecdsa::decompose(&der).unwrap();
        assert_eq!(parts.curve_name, name);
        assert_eq!(parts.x, x.to_vec());
        assert_eq!(parts.y, y.to_vec());
    }
}


#[test]
fn ecdsa_known_multiples() {
    // 2G and 3G on each curve
    let points: [(NamedCurve, &[u8], &[u8]); 6] = [
        (
            NamedCurve::P256,
            &hex!("7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978"),
            &hex!("07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1"),
        ),
        (
            NamedCurve::P256,
            &hex!("5ECBE4D1A6330A44C8F7EF951D4BF165E6C6B721EFADA985FB41661BC6E7FD6C"),
            &hex!("8734640C4998FF7E374B06CE1A64A2ECD82AB036384FB83D9A79B127A27D5032"),
        ),
        (
            NamedCurve::P384,
            &hex!("
                08D999057BA3D2D969260045C55B97F089025959A6F434D651D207D19FB96E9E
                4FE0E86EBE0E64F85B96A9C75295DF61
            "),
            &hex!("
                8E80F1FA5B1B3CEDB7BFE8DFFD6DBA74B275D875BC6CC43E904E505F256AB425
                5FFD43E94D39E22D61501E700A940E80
            "),
        ),
        (
            NamedCurve::P384,
            &hex!("
                077A41D4606FFA1464793C7E5FDC7D98CB9D3910202DCD06BEA4F240D3566DA6
                B408BBAE5026580D02D7E5C70500C831
            "),
            &hex!("
                C995F7CA0B0C42837D0BBE9602A9FC998520B41C85115AA5F7684C0EDC111EAC
                C24ABD6BE4B5D298B65F28600A2F1DF1
            "),
        ),
        (
            NamedCurve::P521,
            &hex!("
                00433C219024277E7E682FCB288148C282747403279B1CCC06352C6E5505D769
                BE97B3B204DA6EF55507AA104A3A35C5AF41CF2FA364D60FD967F43E3933BA6D
                783D
            "),
            &hex!("
                00F4BB8CC7F86DB26700A7F3ECEEEED3F0B5C6B5107C4DA97740AB21A29906C4
                2DBBB3E377DE9F251F6B93937FA99A3248F4EAFCBE95EDC0F4F71BE356D661F4
                1B02
            "),
        ),
        (
            NamedCurve::P521,
            &hex!("
                01A73D352443DE29195DD91D6A64B5959479B52A6E5B123D9AB9E5AD7A112D7A
                8DD1AD3F164A3A4832051DA6BD16B59FE21BAEB490862C32EA05A5919D2EDE37
                AD7D
            "),
            &hex!("
                013E9B03B97DFA62DDD9979F86C6CAB814F2F1557FA82A9D0317D2F8AB1FA355
                CEEC2E2DD4CF8DC575B02D5ACED1DEC3C70CF105C9BC93A590425F588CA1EE86
                C0E5
            "),
        ),
    ];

    for (curve, x, y) in points {
        let width = curve.coordinate_width();
        assert_eq!((x.len(), y.len()), (width, width));

        let der = ecdsa::build(x, y, curve.name()).unwrap();
        let (curve_name, coordinates) = ecdsa::decompose(&der).unwrap().into_named_vec();
        assert_eq!(curve_name, curve.name());
        assert_eq!(coordinates, vec![x.to_vec(), y.to_vec()]);
    }
}


#[test]
fn compressed_point_decomposes_like_uncompressed() {
    let der = hex!("
        30 39
           30 13
              06 07 2A 86 48 CE 3D 02 01
              06 08 2A 86 48 CE 3D 03 01 07
           03 22 00
              03 6B 17 D1 F2 E1 2C 42 47 F8 BC E6 E5 63 A4 40 F2
                 77 03 7D 81 2D EB 33 A0 F4 A1 39 45 D8 98 C2 96
    ");
    let parts = ecdsa::decompose(&der).unwrap();
    assert_eq!(parts.curve_name, "P-256");
    assert_eq!(parts.x, hex!("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296").to_vec());
    assert_eq!(parts.y, hex!("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5").to_vec());

    let uncompressed = ecdsa::build(&parts.x, &parts.y, "P-256").unwrap();
    assert_eq!(
        PublicKey::from_der(&der).unwrap(),
        PublicKey::from_der(&uncompressed).unwrap(),
    );
}


#[test]
fn wrong_algorithm_is_a_format_error() {
    let rsa_der = rsa::build(&hex!("01 00 01"), &hex!("C5 3A 1B 2C 3D 4E 5F 61")).unwrap();
    assert_eq!(dsa::decompose(&rsa_der).unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(ecdsa::decompose(&rsa_der).unwrap_err().kind(), ErrorKind::Format);

    let dsa_der = dsa::build(&hex!("17"), &hex!("0B"), &hex!("04"), &hex!("12")).unwrap();
    assert_eq!(rsa::decompose(&dsa_der).unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(ecdsa::decompose(&dsa_der).unwrap_err().kind(), ErrorKind::Format);
}


#[test]
fn unsupported_curve_parameters() {
    // implicitCurve (NULL)
    let implicit = hex!("
        30 11
           30 0B
              06 07 2A 86 48 CE 3D 02 01
              05 00
           03 02 00
              04
    ");
    assert_eq!(ecdsa::decompose(&implicit).unwrap_err().kind(), ErrorKind::UnsupportedCurve);

    // secp256k1 (1.3.132.0.10)
    let secp256k1 = hex!("
        30 16
           30 10
              06 07 2A 86 48 CE 3D 02 01
              06 05 2B 81 04 00 0A
           03 02 00
              04
    ");
    assert_eq!(ecdsa::decompose(&secp256k1).unwrap_err().kind(), ErrorKind::UnsupportedCurve);

    // specifiedCurve (SEQUENCE of explicit domain parameters, truncated to its version)
    let specified = hex!("
        30 14
           30 0E
              06 07 2A 86 48 CE 3D 02 01
              30 03 02 01 01
           03 02 00
              04
    ");
    assert_eq!(ecdsa::decompose(&specified).unwrap_err().kind(), ErrorKind::UnsupportedCurve);
}


#[test]
fn trailing_bytes_are_rejected() {
    let generator = NamedCurve::P256.parameters().generator();
    let x = to_be_bytes_padded(generator.x(), Some(32)).unwrap();
    let y = to_be_bytes_padded(generator.y(), Some(32)).unwrap();
    let mut der = ecdsa::build(&x, &y, "P-256").unwrap();
    assert!(ecdsa::decompose(&der).is_ok());

    der.extend_from_slice(&[0xDE, 0xAD]);
    assert_eq!(ecdsa::decompose(&der).unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(PublicKey::from_der(&der).unwrap_err().kind(), ErrorKind::Format);

    let mut rsa_der = rsa::build(&hex!("01 00 01"), &hex!("C5 3A 1B 2C 3D 4E 5F 61")).unwrap();
    rsa_der.push(0x00);
    assert_eq!(rsa::decompose(&rsa_der).unwrap_err().kind(), ErrorKind::Format);
}


#[test]
fn concurrent_use() {
    spki_parts::init();
    let handles: Vec<_> = NamedCurve::ALL.into_iter()
        .map(|curve| std::thread::spawn(move || {
            spki_parts::init();
            let generator = curve.parameters().generator();
            let width = curve.coordinate_width();
            let x = to_be_bytes_padded(generator.x(), Some(width)).unwrap();
            let y = to_be_bytes_padded(generator.y(), Some(width)).unwrap();
            let der = ecdsa::build(&x, &y, curve.name()).unwrap();
            let parts = ecdsa::decompose(&der).unwrap();
            assert_eq!((parts.x, parts.y), (x, y));
        }))
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

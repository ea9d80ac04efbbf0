//! Object identifiers of public key algorithms and named curves.


use rasn::types::Oid;


macro_rules! oids {
    ($($name:ident => $($num:literal),+);+ $(;)?) => {
        $(
            pub const $name: &'static Oid = Oid::const_new(&[$($num),+]);
        )+
    };
}

oids! {
    // RFC 8017 Appendix A.1
    RSA_ENCRYPTION => 1, 2, 840, 113549, 1, 1, 1;

    // RFC 3279 § 2.3.2
    DSA => 1, 2, 840, 10040, 4, 1;

    // RFC 5480 § 2.1.1
    EC_PUBLIC_KEY => 1, 2, 840, 10045, 2, 1;

    // RFC 5480 § 2.1.1.1
    PRIME256V1 => 1, 2, 840, 10045, 3, 1, 7;
    SECP384R1 => 1, 3, 132, 0, 34;
    SECP521R1 => 1, 3, 132, 0, 35;
}

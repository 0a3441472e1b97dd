//! Property-based tests for IPv4 parsing and classification.

use config_vet::net::Ipv4Address;
use proptest::prelude::*;

proptest! {
    /// Every dotted quad with octets in range parses, and is valid unless it
    /// is the 0.0.0.0 sentinel.
    #[test]
    fn valid_quads_parse(a: u8, b: u8, c: u8, d: u8) {
        let candidate = format!("{}.{}.{}.{}", a, b, c, d);
        let addr = Ipv4Address::parse(&candidate).expect("in-range quad must parse");
        prop_assert_eq!(addr.octets(), [a, b, c, d]);

        let sentinel = a == 0 && b == 0 && c == 0 && d == 0;
        prop_assert_eq!(Ipv4Address::is_valid(&candidate), !sentinel);
    }

    /// Any octet above 255 makes the candidate unparseable.
    #[test]
    fn out_of_range_octet_rejected(
        good: [u8; 4],
        bad in 256u32..100_000,
        position in 0usize..4,
    ) {
        let mut parts = [
            good[0].to_string(),
            good[1].to_string(),
            good[2].to_string(),
            good[3].to_string(),
        ];
        parts[position] = bad.to_string();
        let candidate = parts.join(".");
        prop_assert!(Ipv4Address::parse(&candidate).is_none());
        prop_assert!(!Ipv4Address::is_valid(&candidate));
    }

    /// A wrong number of separators never parses.
    #[test]
    fn wrong_separator_count_rejected(octets in prop::collection::vec(0u8..=255, 1..8)) {
        prop_assume!(octets.len() != 4);
        let candidate = octets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(".");
        prop_assert!(Ipv4Address::parse(&candidate).is_none());
    }

    /// 10.0.0.0/8 is private end to end.
    #[test]
    fn ten_slash_eight_is_private(b: u8, c: u8, d: u8) {
        let addr = Ipv4Address::parse(&format!("10.{}.{}.{}", b, c, d)).unwrap();
        prop_assert!(addr.is_private());
        prop_assert!(!addr.is_public());
    }

    /// 172.16.0.0/12 is private exactly for second octets 16..=31.
    #[test]
    fn one_seven_two_slash_twelve_boundaries(b: u8, c: u8, d: u8) {
        let addr = Ipv4Address::parse(&format!("172.{}.{}.{}", b, c, d)).unwrap();
        let inside = (16..=31).contains(&b);
        prop_assert_eq!(addr.is_private(), inside);
        prop_assert_eq!(addr.is_public(), !inside);
    }

    /// 192.168.0.0/16 is private for every host part.
    #[test]
    fn one_nine_two_one_six_eight_is_private(c: u8, d: u8) {
        let addr = Ipv4Address::parse(&format!("192.168.{}.{}", c, d)).unwrap();
        prop_assert!(addr.is_private());
        prop_assert!(!addr.is_public());
    }

    /// Addresses outside all three ranges classify public (sentinel aside).
    #[test]
    fn non_private_quads_are_public(a: u8, b: u8, c: u8, d: u8) {
        prop_assume!(a != 10);
        prop_assume!(!(a == 172 && (16..=31).contains(&b)));
        prop_assume!(!(a == 192 && b == 168));
        prop_assume!(!(a == 0 && b == 0 && c == 0 && d == 0));

        let addr = Ipv4Address::parse(&format!("{}.{}.{}.{}", a, b, c, d)).unwrap();
        prop_assert!(addr.is_public());
        prop_assert!(!addr.is_private());
    }

    /// Display round-trips through parse.
    #[test]
    fn display_round_trips(a: u8, b: u8, c: u8, d: u8) {
        let addr = Ipv4Address::parse(&format!("{}.{}.{}.{}", a, b, c, d)).unwrap();
        let reparsed = Ipv4Address::parse(&addr.to_string()).unwrap();
        prop_assert_eq!(addr, reparsed);
    }
}

//! Tests for the header flag bitset.

use linelog::Flags;

#[test]
fn std_is_date_and_time() {
    assert!(Flags::STD.contains(Flags::DATE));
    assert!(Flags::STD.contains(Flags::TIME));
    assert!(!Flags::STD.contains(Flags::MICROSECONDS));
    assert_eq!(Flags::STD, Flags::DATE | Flags::TIME);
}

#[test]
fn union_and_contains() {
    let flags = Flags::DATE.union(Flags::SHORT_FILE);
    assert!(flags.contains(Flags::DATE));
    assert!(flags.contains(Flags::SHORT_FILE));
    assert!(!flags.contains(Flags::TIME));
    assert!(!flags.contains(Flags::DATE | Flags::TIME));
}

#[test]
fn intersects_matches_any_bit() {
    assert!(Flags::STD.intersects(Flags::TIME | Flags::UTC));
    assert!(!Flags::STD.intersects(Flags::UTC));
    assert!(!Flags::NONE.intersects(Flags::STD));
}

#[test]
fn caller_and_clock_queries() {
    assert!(Flags::SHORT_FILE.wants_caller());
    assert!(Flags::LONG_FILE.wants_caller());
    assert!(!Flags::STD.wants_caller());
    assert!(Flags::MICROSECONDS.wants_clock());
    assert!(!(Flags::SHORT_FILE | Flags::UTC).wants_clock());
}

#[test]
fn from_name() {
    assert_eq!(Flags::from_name("date"), Some(Flags::DATE));
    assert_eq!(Flags::from_name("time"), Some(Flags::TIME));
    assert_eq!(Flags::from_name("microseconds"), Some(Flags::MICROSECONDS));
    assert_eq!(Flags::from_name("longfile"), Some(Flags::LONG_FILE));
    assert_eq!(Flags::from_name("shortfile"), Some(Flags::SHORT_FILE));
    assert_eq!(Flags::from_name("utc"), Some(Flags::UTC));
    assert_eq!(Flags::from_name("colour"), None);
    assert_eq!(Flags::from_name("DATE"), None);
}

#[test]
fn default_is_none() {
    assert_eq!(Flags::default(), Flags::NONE);
}

//! Key and keypad layout tests.

use pretty_assertions::assert_eq;
use t9spelling::{EncodeError, Key, KeyPress, Keypad, LayoutError};

#[test]
fn key_encodes_by_position() {
    let key = Key::new(1, ['a', 'b', 'c']).unwrap();
    assert_eq!(key.encode_char('a').unwrap(), "1");
    assert_eq!(key.encode_char('b').unwrap(), "11");
    assert_eq!(key.encode_char('c').unwrap(), "111");
}

#[test]
fn key_respects_given_order() {
    let key = Key::new(8, "xzwa".chars()).unwrap();
    assert_eq!(key.encode_char('x').unwrap(), "8");
    assert_eq!(key.encode_char('z').unwrap(), "88");
    assert_eq!(key.encode_char('w').unwrap(), "888");
    assert_eq!(key.encode_char('a').unwrap(), "8888");
}

#[test]
fn key_rejects_foreign_character() {
    let key = Key::new(1, ['a']).unwrap();
    let err = key.encode_char('b').unwrap_err();
    assert_eq!(
        err,
        EncodeError::UnsupportedCharacter {
            ch: 'b',
            component: "key 1".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported character: 'b' (U+0062) rejected by key 1"
    );
}

#[test]
fn key_press_keeps_digits_on_the_pad() {
    assert_eq!(KeyPress::new(12, 2), Err(LayoutError::DigitOutOfRange(12)));
    assert_eq!(KeyPress::new(250, 1), Err(LayoutError::DigitOutOfRange(250)));
    assert_eq!(KeyPress::new(1, 0), Err(LayoutError::ZeroPosition));
    let press = KeyPress::new(5, 3).unwrap();
    assert_eq!((press.digit(), press.position()), (5, 3));
    assert_eq!(press.render(), "555");
}

#[test]
fn key_lists_supported_characters_in_order() {
    let key = Key::new(1, ['z', 'a', 'w']).unwrap();
    assert_eq!(key.supported_characters(), &['z', 'a', 'w']);
}

#[test]
fn key_construction_is_validated() {
    assert_eq!(Key::new(10, ['a']), Err(LayoutError::DigitOutOfRange(10)));
    assert_eq!(
        Key::new(1, std::iter::empty()),
        Err(LayoutError::NoCharacters(1))
    );
    assert!(matches!(
        Key::new(1, ['a', 'a']),
        Err(LayoutError::DuplicateCharacters { digit: 1, .. })
    ));
    assert!(matches!(
        Key::new(1, ['a', 'b', 'a']),
        Err(LayoutError::DuplicateCharacters { digit: 1, .. })
    ));
    assert!(Key::new(0, [' ']).is_ok());
    assert!(Key::new(9, ['w']).is_ok());
}

#[test]
fn standard_layout_lookups() {
    let keypad = Keypad::standard();
    let expected = [
        ('a', 2, 1),
        ('c', 2, 3),
        ('f', 3, 3),
        ('h', 4, 2),
        ('l', 5, 3),
        ('o', 6, 3),
        ('s', 7, 4),
        ('v', 8, 3),
        ('z', 9, 4),
        (' ', 0, 1),
    ];
    for (ch, digit, position) in expected {
        let press = keypad.lookup(ch).unwrap();
        assert_eq!((press.digit(), press.position()), (digit, position), "{ch:?}");
    }
}

#[test]
fn standard_layout_covers_lowercase_and_space_only() {
    let keypad = Keypad::standard();
    for ch in ('a'..='z').chain([' ']) {
        assert!(keypad.is_supported(ch), "{ch:?}");
    }
    for ch in ['A', '1', '!', '\t', 'é'] {
        assert_eq!(keypad.lookup(ch), None, "{ch:?}");
    }
}

#[test]
fn keypad_encode_char_matches_press_count() {
    let keypad = Keypad::standard();
    for key in keypad.keys() {
        for (idx, &ch) in key.supported_characters().iter().enumerate() {
            let encoded = keypad.encode_char(ch).unwrap();
            assert_eq!(encoded.len(), idx + 1);
            assert!(encoded.chars().all(|c| c == char::from(b'0' + key.digit())));
        }
    }
    assert!(matches!(
        keypad.encode_char('#'),
        Err(EncodeError::UnsupportedCharacter { ch: '#', .. })
    ));
}

#[test]
fn later_registration_wins_across_keys() {
    let keypad = Keypad::from_keys(vec![
        Key::new(2, ['a', 'b']).unwrap(),
        Key::new(3, ['x', 'a']).unwrap(),
    ]);
    assert_eq!(keypad.lookup('a'), KeyPress::new(3, 2).ok());
    assert_eq!(keypad.lookup('b'), KeyPress::new(2, 2).ok());
}

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use api_key::base62;
use api_key::{
    ApiKey, ApiKeyConfig, ApiKeyError, ApiKeyHandler, Base62Error, CHECKSUM_LEN, KeyHandler,
    checksum, generate_random,
};

fn short_handler() -> ApiKeyHandler {
    ApiKeyHandler::new(ApiKeyConfig::new("short").with_entropy_length(50)).unwrap()
}

#[test]
fn test_generated_keys_have_expected_shape() {
    let handler = short_handler();
    for _ in 0..100 {
        let key = handler.generate().unwrap();
        assert_eq!(key.len(), "short".len() + 1 + 50 + CHECKSUM_LEN);

        let parsed = handler.parse(&key).unwrap();
        assert_eq!(parsed.entropy().len(), 50);
        assert!(base62::is_base62(parsed.entropy()));
        assert_eq!(parsed.checksum(), checksum(parsed.entropy()));
    }
}

#[test]
fn test_validate_never_returns_false() {
    let handler = short_handler();
    let key = handler.generate().unwrap();
    let inputs = [
        key.clone(),
        key[..key.len() - 1].to_string(),
        key.replace("short", "shore"),
        format!("{}_", &key[..key.len() - 1]),
        String::new(),
    ];

    for input in &inputs {
        if let Ok(valid) = handler.validate(input) {
            assert!(valid);
        }
    }
}

#[test]
fn test_structural_rejections() {
    let handler = short_handler();
    let key = handler.generate().unwrap();

    assert!(matches!(
        handler.validate(&format!("{key}x")),
        Err(ApiKeyError::InvalidLength { .. })
    ));
    assert!(matches!(
        handler.validate(&key.replacen("short", "SHORT", 1)),
        Err(ApiKeyError::InvalidPrefix { .. })
    ));

    let mut extra_separator = key.clone().into_bytes();
    extra_separator[10] = b'_';
    let extra_separator = String::from_utf8(extra_separator).unwrap();
    assert!(matches!(
        handler.validate(&extra_separator),
        Err(ApiKeyError::InvalidStructure)
    ));

    let missing_separator = key.replacen('_', "X", 1);
    assert!(matches!(
        handler.validate(&missing_separator),
        Err(ApiKeyError::InvalidStructure)
    ));
}

#[test]
fn test_handlers_with_different_prefixes_reject_each_other() {
    let live = ApiKeyHandler::new(ApiKeyConfig::new("live")).unwrap();
    let test = ApiKeyHandler::new(ApiKeyConfig::new("test")).unwrap();

    let key = live.generate().unwrap();
    assert!(live.validate(&key).unwrap());
    assert!(matches!(
        test.validate(&key),
        Err(ApiKeyError::InvalidPrefix { .. })
    ));
}

#[test]
fn test_hand_built_key_formats_verbatim() {
    let handler = short_handler();
    let key = ApiKey::new("short", "tooShort", "ff");
    let formatted = handler.format(&key);
    assert_eq!(formatted, "short_tooShortff");
    assert!(matches!(
        handler.validate(&formatted),
        Err(ApiKeyError::InvalidLength { .. })
    ));
}

#[test]
fn test_concurrent_generate_and_validate() {
    let handler = Arc::new(short_handler());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let handler = Arc::clone(&handler);
            thread::spawn(move || {
                (0..25)
                    .map(|_| {
                        let key = handler.generate().unwrap();
                        assert!(handler.validate(&key).unwrap());
                        key
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for key in handle.join().unwrap() {
            assert!(seen.insert(key), "duplicate key generated");
        }
    }
    assert_eq!(seen.len(), 200);
}

#[test]
fn test_random_and_codec_share_alphabet() {
    let s = generate_random(64).unwrap();
    assert!(s.chars().all(|c| base62::digit_value(c).is_some()));
    assert!(base62::decode(&s).is_ok());
}

#[test]
fn test_codec_errors() {
    assert_eq!(base62::decode(""), Err(Base62Error::EmptyInput));
    assert_eq!(
        base62::decode("short_key"),
        Err(Base62Error::InvalidCharacter('_'))
    );
}

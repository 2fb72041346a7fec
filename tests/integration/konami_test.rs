//! Tests for the hidden-sequence matcher

use garden::konami::{InputCode, KonamiBuffer, KONAMI_CODE};

#[test]
fn exact_sequence_activates_exactly_once() {
    let mut buffer = KonamiBuffer::new();
    let mut activations = 0;
    for code in KONAMI_CODE {
        if buffer.push(code) {
            activations += 1;
        }
    }
    assert_eq!(activations, 1);
}

#[test]
fn every_single_code_substitution_misses() {
    let substitutes = [
        InputCode::Up,
        InputCode::Down,
        InputCode::Left,
        InputCode::Right,
        InputCode::Char('b'),
        InputCode::Char('a'),
        InputCode::Other,
    ];
    for position in 0..KONAMI_CODE.len() {
        for substitute in substitutes {
            if substitute == KONAMI_CODE[position] {
                continue;
            }
            let mut codes = KONAMI_CODE;
            codes[position] = substitute;
            let mut buffer = KonamiBuffer::new();
            let activated = codes.iter().any(|code| buffer.push(*code));
            assert!(!activated, "{substitute:?} at {position} must not activate");
        }
    }
}

#[test]
fn repeated_sequences_keep_activating() {
    let mut buffer = KonamiBuffer::new();
    for round in 0..3 {
        let mut activations = 0;
        for code in KONAMI_CODE {
            if buffer.push(code) {
                activations += 1;
            }
        }
        assert_eq!(activations, 1, "round {round}");
    }
}

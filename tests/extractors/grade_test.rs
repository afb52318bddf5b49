//! Grade reading across the pattern priority list.

use quickadd::extractors::grade::{
    extract_grade, CONFIDENCE_BARE_NUMBER, CONFIDENCE_FRACTION, CONFIDENCE_LETTER,
    CONFIDENCE_PERCENT_SIGN, CONFIDENCE_PERCENT_WORD,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}

#[test]
fn percent_word_and_sign_read_exact_value() {
    for n in 0u32..=100 {
        let word = extract_grade(&format!("I got {n} percent on the quiz"));
        assert_eq!(word.percentage, Some(f64::from(n)), "{n} percent");
        assert!(close(word.confidence, CONFIDENCE_PERCENT_WORD));

        let sign = extract_grade(&format!("I got {n}% on the quiz"));
        assert_eq!(sign.percentage, Some(f64::from(n)), "{n}%");
        assert!(close(sign.confidence, CONFIDENCE_PERCENT_SIGN));
    }
}

#[test]
fn letter_grades_are_uppercased_without_percentage() {
    for letter in ['A', 'B', 'C', 'D', 'E', 'F'] {
        for sign in ["", "+", "-"] {
            let reading = extract_grade(&format!("I got {letter}{sign} on the essay"));
            assert_eq!(reading.letter_grade, Some(format!("{letter}{sign}")));
            assert_eq!(reading.percentage, None);
            assert!(close(reading.confidence, CONFIDENCE_LETTER));
        }
    }
    let lower = extract_grade("got a b- in chem");
    assert_eq!(lower.letter_grade.as_deref(), Some("B-"));
}

#[test]
fn fraction_is_kept_verbatim() {
    let reading = extract_grade("scored 45 / 50 on the lab");
    assert_eq!(reading.raw_score.as_deref(), Some("45/50"));
    assert_eq!(reading.normalized, "45/50");
    assert!(close(reading.confidence, CONFIDENCE_FRACTION));
}

#[test]
fn bare_number_is_low_confidence_percentage() {
    let reading = extract_grade("got 88 on the quiz");
    assert_eq!(reading.percentage, Some(88.0));
    assert_eq!(reading.normalized, "88.0%");
    assert!(close(reading.confidence, CONFIDENCE_BARE_NUMBER));
    assert!(reading.is_confident());
}

#[test]
fn percent_beats_letter() {
    let reading = extract_grade("B on the test, 85%");
    assert_eq!(reading.percentage, Some(85.0));
    assert_eq!(reading.letter_grade, None);
}

#[test]
fn pass_fail() {
    assert_eq!(extract_grade("I passed the driving test").pass_fail, Some(true));
    assert_eq!(extract_grade("failed it").normalized, "Fail");
}

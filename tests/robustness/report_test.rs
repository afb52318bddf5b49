//! `IntentParser::run_robustness_tests` over real utterances.

use quickadd::config::RobustnessSettings;
use quickadd::{Perturbation, ResultKind};

use crate::support::{categories, courses, parser};

#[test]
fn chem_lab_survives_formatting_noise() {
    let (parser, _clock) = parser();
    let results = parser.run_robustness_tests(
        "chem lab every tuesday and thursday 2pm to 3:30pm",
        &categories(),
        &courses(),
    );

    assert_eq!(results.len(), 8);
    assert_eq!(
        results.first().map(|r| (r.perturbation, r.kind)),
        Some((Perturbation::Original, ResultKind::ScheduleItem))
    );
    for result in results.iter().take(5) {
        assert!(result.stable, "{:?} drifted to {}", result.perturbation, result.kind);
    }
}

#[test]
fn report_opens_no_sessions() {
    let (parser, _clock) = parser();
    let results = parser.run_robustness_tests("calc exam on friday at 10am", &categories(), &[]);
    assert!(results.iter().any(|r| r.kind == ResultKind::NeedsMoreInfo));
    assert!(parser.sessions().is_empty());
}

#[test]
fn seed_controls_typos() {
    let (parser, _clock) = parser();
    let text = "dentist appointment tomorrow at 3pm";
    let a = parser
        .with_robustness(RobustnessSettings {
            seed: 42,
            substitutions: 4,
        })
        .run_robustness_tests(text, &[], &[]);
    let (parser, _clock) = crate::support::parser();
    let b = parser
        .with_robustness(RobustnessSettings {
            seed: 42,
            substitutions: 4,
        })
        .run_robustness_tests(text, &[], &[]);
    assert_eq!(a, b);
    assert_eq!(a.len(), 9);
}

#[test]
fn report_serializes_to_json() {
    let (parser, _clock) = parser();
    let results = parser.run_robustness_tests("I got a B+ on the calc final", &[], &courses());
    let json = match serde_json::to_value(&results) {
        Ok(json) => json,
        Err(e) => panic!("report should serialize: {e}"),
    };
    assert_eq!(json[0]["perturbation"], "original");
    assert_eq!(json[0]["stable"], true);
}

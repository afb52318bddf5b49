//! Title derivation.

use quickadd::extractors::title::{event_title, schedule_title};

#[test]
fn event_titles() {
    assert_eq!(event_title("I have a physics exam next monday at 9am"), "Physics exam");
    assert_eq!(event_title("need to pick up groceries tomorrow"), "Pick up groceries");
    assert_eq!(event_title("dinner with Alex on March 20th at 7pm"), "Dinner with Alex");
}

#[test]
fn event_fallbacks() {
    assert_eq!(event_title("quiz tmrw"), "Quiz");
    assert_eq!(event_title("on friday at 3pm"), "Event");
}

#[test]
fn schedule_titles() {
    assert_eq!(
        schedule_title("chem lab every tuesday and thursday 2pm to 3:30pm"),
        "Chem lab"
    );
    assert_eq!(schedule_title("library every sunday at 2pm"), "Library study");
    assert_eq!(schedule_title("work weekdays 9am to 5pm"), "Work shift");
    assert_eq!(schedule_title("every monday at 9am"), "Recurring event");
}

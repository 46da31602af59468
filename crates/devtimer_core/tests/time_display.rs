use devtimer_core::{format_time, TimeDisplay};

fn fields(display: &TimeDisplay) -> (&str, &str, &str, &str) {
    (
        display.hours.as_str(),
        display.minutes.as_str(),
        display.seconds.as_str(),
        display.ms.as_str(),
    )
}

#[test]
fn zero_formats_as_all_zero_fields() {
    assert_eq!(fields(&format_time(0)), ("00", "00", "00", "00"));
}

#[test]
fn one_hour_one_minute_one_second() {
    assert_eq!(fields(&format_time(3_661_000)), ("01", "01", "01", "00"));
}

#[test]
fn ms_field_is_centiseconds_of_remainder() {
    assert_eq!(fields(&format_time(1_005)), ("00", "00", "01", "00"));
    assert_eq!(format_time(1_050).ms, "05");
    assert_eq!(format_time(59_999).seconds, "59");
    assert_eq!(format_time(59_999).ms, "99");
}

#[test]
fn hours_are_not_clamped_on_display() {
    assert_eq!(format_time(25 * 3_600_000).hours, "25");
    assert_eq!(format_time(100 * 3_600_000).hours, "100");
}

#[test]
fn full_omits_fractional_field() {
    let display = format_time(86_399_990);
    assert_eq!(display.full(), "23:59:59");
    assert_eq!(display.to_string(), "23:59:59:99");
}

#[test]
fn display_serializes_with_field_names() {
    let json = serde_json::to_value(format_time(1_050)).expect("serialize display");
    assert_eq!(
        json,
        serde_json::json!({"hours": "00", "minutes": "00", "seconds": "01", "ms": "05"})
    );
}

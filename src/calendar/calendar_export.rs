//! ICS rendering for domain expiration events.

use super::calendar_types::EventRecord;
use std::fmt::Write as _;
use std::io;

pub const PRODUCT_ID: &str = "-//domainics//Domain Expiration Calendar//EN";

const LINE_END: &str = "\r\n";

/// Render the whole calendar document for `events`, in order.
pub fn render_calendar(events: &[EventRecord]) -> String {
    let mut out = String::with_capacity(128 + events.len() * 320);
    push_line(&mut out, format_args!("BEGIN:VCALENDAR"));
    push_line(&mut out, format_args!("VERSION:2.0"));
    push_line(&mut out, format_args!("PRODID:{}", PRODUCT_ID));
    for event in events {
        push_event(&mut out, event);
    }
    push_line(&mut out, format_args!("END:VCALENDAR"));
    out
}

/// Write the rendered calendar to `writer`.
pub fn write_calendar<W: io::Write>(mut writer: W, events: &[EventRecord]) -> io::Result<()> {
    writer.write_all(render_calendar(events).as_bytes())?;
    writer.flush()
}

fn push_event(out: &mut String, event: &EventRecord) {
    let domain = event.domain();
    let date = event.date_value();
    push_line(out, format_args!("BEGIN:VEVENT"));
    push_line(out, format_args!("SUMMARY:Domain expiration: {}", domain));
    push_line(out, format_args!("DTSTART;VALUE=DATE:{}", date));
    push_line(out, format_args!("DTEND;VALUE=DATE:{}", date));
    push_line(out, format_args!("DESCRIPTION:Expiration date for domain {}.", domain));
    push_line(out, format_args!("RRULE:FREQ=YEARLY"));
    push_line(out, format_args!("BEGIN:VALARM"));
    push_line(out, format_args!("TRIGGER:-P1D"));
    push_line(out, format_args!("ACTION:DISPLAY"));
    push_line(out, format_args!("DESCRIPTION:Reminder"));
    push_line(out, format_args!("END:VALARM"));
    push_line(out, format_args!("END:VEVENT"));
}

fn push_line(out: &mut String, line: std::fmt::Arguments<'_>) {
    let _ = out.write_fmt(line);
    out.push_str(LINE_END);
}

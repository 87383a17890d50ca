use crate::playground::CalendarEvent;
use rust_i18n::t;

/// One parsed event as shown in the output card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    pub date: String,
    pub time: String,
    pub ends: Option<String>,
    pub location: String,
    pub reminder: Option<String>,
    pub notes: Option<String>,
}

/// Present and not blank
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl From<&CalendarEvent> for EventCard {
    fn from(event: &CalendarEvent) -> Self {
        let all_day = event.all_day.unwrap_or(false);

        let time = if all_day {
            t!("event_all_day").to_string()
        } else if event.time_unspecified.unwrap_or(false) {
            t!("event_time_tbd").to_string()
        } else {
            filled(&event.start_time)
                .map(str::to_string)
                .unwrap_or_else(|| t!("event_time_tbd").to_string())
        };

        let ends = if all_day {
            None
        } else {
            filled(&event.end_time).map(|end| t!("event_ends", time = end).to_string())
        };

        Self {
            title: filled(&event.title)
                .map(str::to_string)
                .unwrap_or_else(|| t!("event_untitled").to_string()),
            date: filled(&event.date)
                .map(str::to_string)
                .unwrap_or_else(|| t!("event_date_tbd").to_string()),
            time,
            ends,
            location: filled(&event.location)
                .map(str::to_string)
                .unwrap_or_else(|| t!("event_no_location").to_string()),
            reminder: event
                .reminder_minutes_before
                .map(|minutes| t!("event_reminder", minutes = minutes).to_string()),
            notes: filled(&event.notes)
                .or_else(|| filled(&event.description))
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_event_falls_back_everywhere() {
        let card = EventCard::from(&CalendarEvent::default());

        assert_eq!(card.title, "Untitled");
        assert_eq!(card.date, "TBD");
        assert_eq!(card.time, "Time TBD");
        assert_eq!(card.location, "No location");
        assert_eq!(card.ends, None);
        assert_eq!(card.reminder, None);
        assert_eq!(card.notes, None);
    }

    #[test]
    fn all_day_wins_over_start_time() {
        let card = EventCard::from(&CalendarEvent {
            start_time: Some("10:00".to_string()),
            end_time: Some("11:00".to_string()),
            all_day: Some(true),
            ..Default::default()
        });

        assert_eq!(card.time, "All day");
        assert_eq!(card.ends, None);
    }

    #[test]
    fn timed_event_shows_start_end_and_reminder() {
        let card = EventCard::from(&CalendarEvent {
            title: Some("Lunch with Sarah".to_string()),
            date: Some("2025-01-02".to_string()),
            start_time: Some("13:00".to_string()),
            end_time: Some("14:00".to_string()),
            reminder_minutes_before: Some(15),
            ..Default::default()
        });

        assert_eq!(card.time, "13:00");
        assert_eq!(card.ends.as_deref(), Some("Ends 14:00"));
        assert_eq!(card.reminder.as_deref(), Some("Reminder 15 min before"));
    }

    #[test]
    fn blank_strings_count_as_absent() {
        let card = EventCard::from(&CalendarEvent {
            title: Some("  ".to_string()),
            location: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(card.title, "Untitled");
        assert_eq!(card.location, "No location");
    }

    #[test]
    fn unspecified_time_hides_guessed_start() {
        let card = EventCard::from(&CalendarEvent {
            start_time: Some("00:00".to_string()),
            time_unspecified: Some(true),
            ..Default::default()
        });

        assert_eq!(card.time, "Time TBD");
    }

    #[test]
    fn notes_fall_back_to_description() {
        let card = EventCard::from(&CalendarEvent {
            description: Some("Bring racket".to_string()),
            ..Default::default()
        });
        assert_eq!(card.notes.as_deref(), Some("Bring racket"));

        let card = EventCard::from(&CalendarEvent {
            notes: Some("Court 3".to_string()),
            description: Some("Bring racket".to_string()),
            ..Default::default()
        });
        assert_eq!(card.notes.as_deref(), Some("Court 3"));
    }
}

//! Display strings for the supported locales

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::WorkState;
use crate::schedule::RelativeDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    pub fn state_label(self, state: WorkState) -> &'static str {
        match (self, state) {
            (Locale::Ru, WorkState::WorkingDay) => "Работает в день",
            (Locale::Ru, WorkState::WorkingNight) => "Работает в ночь",
            (Locale::Ru, WorkState::RestingAfterNight) => "Не работает после ночи",
            (Locale::Ru, WorkState::FreeDay) => "Свободный день",
            (Locale::En, WorkState::WorkingDay) => "Working day shift",
            (Locale::En, WorkState::WorkingNight) => "Working night shift",
            (Locale::En, WorkState::RestingAfterNight) => "Resting after night shift",
            (Locale::En, WorkState::FreeDay) => "Free day",
        }
    }

    pub fn relative_caption(self, relative: RelativeDay) -> &'static str {
        match (self, relative) {
            (Locale::Ru, RelativeDay::Today) => "Сегодня",
            (Locale::Ru, RelativeDay::Tomorrow) => "Завтра",
            (Locale::Ru, RelativeDay::DayAfterTomorrow) => "Послезавтра",
            (Locale::Ru, RelativeDay::Selected) => "В выбранный день",
            (Locale::En, RelativeDay::Today) => "Today",
            (Locale::En, RelativeDay::Tomorrow) => "Tomorrow",
            (Locale::En, RelativeDay::DayAfterTomorrow) => "Day after tomorrow",
            (Locale::En, RelativeDay::Selected) => "On the selected day",
        }
    }

    /// Who the schedule belongs to when no subject is configured
    pub fn default_subject(self) -> &'static str {
        match self {
            Locale::Ru => "папа",
            Locale::En => "dad",
        }
    }

    pub fn title(self, subject: &str) -> String {
        match self {
            Locale::Ru => format!("Работает ли {} ... ?", subject),
            Locale::En => format!("Is {} working ... ?", subject),
        }
    }

    /// Question shown above the anchor date editor
    pub fn anchor_prompt(self) -> &'static str {
        match self {
            Locale::Ru => "Когда работает в день? Можно выбрать в прошлом и в будущем.",
            Locale::En => "When is the day shift? Past and future dates both work.",
        }
    }

    pub fn anchor_field_label(self) -> &'static str {
        match self {
            Locale::Ru => "День работы в день",
            Locale::En => "Day shift date",
        }
    }

    pub fn legend_title(self) -> &'static str {
        match self {
            Locale::Ru => "Обозначения",
            Locale::En => "Legend",
        }
    }

    /// Two-letter weekday header for the month grid
    pub fn weekday_short(self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (Locale::Ru, Weekday::Mon) => "Пн",
            (Locale::Ru, Weekday::Tue) => "Вт",
            (Locale::Ru, Weekday::Wed) => "Ср",
            (Locale::Ru, Weekday::Thu) => "Чт",
            (Locale::Ru, Weekday::Fri) => "Пт",
            (Locale::Ru, Weekday::Sat) => "Сб",
            (Locale::Ru, Weekday::Sun) => "Вс",
            (Locale::En, Weekday::Mon) => "Mo",
            (Locale::En, Weekday::Tue) => "Tu",
            (Locale::En, Weekday::Wed) => "We",
            (Locale::En, Weekday::Thu) => "Th",
            (Locale::En, Weekday::Fri) => "Fr",
            (Locale::En, Weekday::Sat) => "Sa",
            (Locale::En, Weekday::Sun) => "Su",
        }
    }

    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        const RU: [&str; 7] = [
            "Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота", "Воскресенье",
        ];
        const EN: [&str; 7] = [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ];

        let index = weekday.num_days_from_monday() as usize;
        match self {
            Locale::Ru => RU[index],
            Locale::En => EN[index],
        }
    }

    /// Month name in nominative case, `month` is 1-based
    pub fn month_name(self, month: u32) -> &'static str {
        const RU: [&str; 12] = [
            "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
            "Октябрь", "Ноябрь", "Декабрь",
        ];
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ];

        let names = match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        };
        names.get(month.wrapping_sub(1) as usize).copied().unwrap_or("?")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CYCLE;

    #[test]
    fn test_ru_labels() {
        assert_eq!(Locale::Ru.state_label(WorkState::WorkingDay), "Работает в день");
        assert_eq!(Locale::Ru.state_label(WorkState::FreeDay), "Свободный день");
    }

    #[test]
    fn test_every_state_has_distinct_label() {
        for locale in [Locale::Ru, Locale::En] {
            let labels: std::collections::HashSet<_> =
                CYCLE.iter().map(|s| locale.state_label(*s)).collect();
            assert_eq!(labels.len(), CYCLE.len());
        }
    }

    #[test]
    fn test_title_includes_subject() {
        assert_eq!(Locale::Ru.title("папа"), "Работает ли папа ... ?");
        assert_eq!(Locale::En.title("Alex"), "Is Alex working ... ?");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Locale::Ru.weekday_name(Weekday::Mon), "Понедельник");
        assert_eq!(Locale::Ru.weekday_name(Weekday::Sun), "Воскресенье");
        assert_eq!(Locale::En.weekday_name(Weekday::Wed), "Wednesday");
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(Locale::En.month_name(1), "January");
        assert_eq!(Locale::Ru.month_name(12), "Декабрь");
        assert_eq!(Locale::En.month_name(0), "?");
        assert_eq!(Locale::En.month_name(13), "?");
    }
}

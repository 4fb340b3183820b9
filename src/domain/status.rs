//! Review status catalog and notification rendering.

use crate::error::ContractError;

use super::homework::HomeworkEntry;

/// Placeholder used when the API omits the homework name.
const UNNAMED: &str = "без названия";

/// Review states the Practicum API can report for a homework.
///
/// A closed set: any other status code is treated as an upstream contract
/// change and surfaced as [`ContractError::UnknownStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse the raw status code reported by the API.
    pub fn parse(code: &str) -> Result<Self, ContractError> {
        match code {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(ContractError::UnknownStatus(other.to_string())),
        }
    }

    /// Human-readable verdict shown to the student.
    #[must_use]
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Build the notification text for a single homework entry.
pub fn render_status(entry: &HomeworkEntry) -> Result<String, ContractError> {
    let status = ReviewStatus::parse(&entry.status)?;
    let name = entry.homework_name.as_deref().unwrap_or(UNNAMED);
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: Option<&str>, status: &str) -> HomeworkEntry {
        HomeworkEntry {
            homework_name: name.map(str::to_string),
            status: status.to_string(),
        }
    }

    #[test]
    fn approved_entry_renders_full_verdict() {
        let text = render_status(&entry(Some("hw1"), "approved")).expect("render");
        assert_eq!(
            text,
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn each_known_status_has_a_distinct_verdict() {
        let verdicts = [
            ReviewStatus::Approved.verdict(),
            ReviewStatus::Reviewing.verdict(),
            ReviewStatus::Rejected.verdict(),
        ];
        assert_ne!(verdicts[0], verdicts[1]);
        assert_ne!(verdicts[1], verdicts[2]);
        assert_ne!(verdicts[0], verdicts[2]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let e = entry(Some("hw2"), "reviewing");
        assert_eq!(render_status(&e).expect("render"), render_status(&e).expect("render"));
    }

    #[test]
    fn unnamed_homework_gets_placeholder() {
        let text = render_status(&entry(None, "rejected")).expect("render");
        assert!(text.contains("\"без названия\""), "got: {text}");
    }

    #[test]
    fn unknown_status_is_rejected_with_raw_value() {
        let err = render_status(&entry(Some("hw1"), "unknown_code")).unwrap_err();
        match err {
            ContractError::UnknownStatus(code) => assert_eq!(code, "unknown_code"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }
}

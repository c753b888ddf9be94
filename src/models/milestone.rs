use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(from = "MilestoneRecord")]
pub struct Milestone {
    pub number: u64,
    pub title: String,
    pub due_on: Option<DateTime<Utc>>,
    pub open_issues: u64,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneRecord {
    number: Option<u64>,
    title: Option<String>,
    due_on: Option<DateTime<Utc>>,
    open_issues: Option<u64>,
}

impl From<MilestoneRecord> for Milestone {
    fn from(record: MilestoneRecord) -> Self {
        Milestone {
            number: record.number.unwrap_or(0),
            title: record.title.unwrap_or_default(),
            due_on: record.due_on,
            open_issues: record.open_issues.unwrap_or(0),
        }
    }
}

/// Orders milestones by due date; milestones without one go last.
pub fn sort_by_due_date(milestones: &mut [Milestone]) {
    milestones.sort_by(|a, b| match (a.due_on, b.due_on) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn milestone(title: &str, due: Option<(i32, u32, u32)>) -> Milestone {
        Milestone {
            title: title.to_string(),
            due_on: due.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_by_due_date() {
        let mut all = vec![
            milestone("Unplanned", None),
            milestone("Go1.5", Some((2015, 7, 31))),
            milestone("Go1.4.1", Some((2015, 1, 15))),
            milestone("Go1.5Maybe", Some((2015, 7, 31))),
        ];
        sort_by_due_date(&mut all);
        let titles: Vec<_> = all.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Go1.4.1", "Go1.5", "Go1.5Maybe", "Unplanned"]);
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job posting. Serialized in camelCase so caches written by the
/// browser board load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<u64>,
    pub category: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub published_date: String,
    pub short_description: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    pub apply_url: String,
}

impl Job {
    /// Case-insensitive substring match over title, company, description
    /// and category. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        [&self.title, &self.company, &self.description, &self.category]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Parse `published_date`. Accepts RFC 3339, a naive date-time (taken
    /// as UTC) or a bare `YYYY-MM-DD` date (midnight UTC).
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Salary used for ordering; undisclosed counts as zero.
    pub fn salary_or_zero(&self) -> u64 {
        self.salary.unwrap_or(0)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::job;
    use super::*;

    #[test]
    fn query_matches_any_searchable_field_ignoring_case() {
        let j = Job {
            title: "Engenheiro de Petróleo".into(),
            company: "Sonangol".into(),
            ..job("job-1")
        };
        assert!(j.matches_query("petróleo"));
        assert!(j.matches_query("SONANGOL"));
        assert!(j.matches_query("finanças"));
        assert!(j.matches_query("descri"));
        assert!(!j.matches_query("luanda"));
        assert!(j.matches_query(""));
    }

    #[test]
    fn parses_supported_date_formats() {
        let mut j = job("job-1");
        j.published_date = "2024-03-01T10:30:00.000Z".into();
        assert_eq!(
            j.published_at().map(|d| d.to_rfc3339()),
            Some("2024-03-01T10:30:00+00:00".to_string())
        );

        j.published_date = "2024-03-01".into();
        assert_eq!(
            j.published_at().map(|d| d.date_naive().to_string()),
            Some("2024-03-01".to_string())
        );

        j.published_date = "2024-03-01T10:30:00".into();
        assert!(j.published_at().is_some());

        j.published_date = "ontem".into();
        assert!(j.published_at().is_none());
    }

    #[test]
    fn serializes_with_browser_field_names() {
        let j = Job {
            salary: Some(250000),
            requirements: Some(vec!["Formação em Finanças".into()]),
            ..job("job-7")
        };
        let value = serde_json::to_value(&j).unwrap();
        assert_eq!(value["type"], "Tempo Integral");
        assert_eq!(value["publishedDate"], "2024-01-01T00:00:00.000Z");
        assert_eq!(value["applyUrl"], "#");
        assert_eq!(value["salary"], 250000);

        let undisclosed = serde_json::to_value(job("job-8")).unwrap();
        assert!(undisclosed.get("salary").is_none());
        assert!(undisclosed.get("requirements").is_none());
    }
}

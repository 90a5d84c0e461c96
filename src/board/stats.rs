use serde::Serialize;

use crate::models::Job;

/// Half-open `[min, max)` salary buckets used only for charts.
const SALARY_BUCKETS: [(u64, u64, &str); 6] = [
    (0, 100_000, "0-100k"),
    (100_000, 200_000, "100k-200k"),
    (200_000, 300_000, "200k-300k"),
    (300_000, 400_000, "300k-400k"),
    (400_000, 500_000, "400k-500k"),
    (500_000, u64::MAX, "500k+"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_jobs: usize,
    pub category_count: usize,
    pub location_count: usize,
    pub average_salary: Option<u64>,
    pub by_category: Vec<Count>,
    pub by_location: Vec<Count>,
    pub by_salary_bucket: Vec<Count>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

/// Renderer-agnostic chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

impl ChartSpec {
    fn from_counts(kind: ChartKind, title: &str, counts: &[Count]) -> Self {
        Self {
            kind,
            title: title.to_string(),
            labels: counts.iter().map(|c| c.label.clone()).collect(),
            data: counts.iter().map(|c| c.count).collect(),
        }
    }
}

fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Count> {
    let mut counts: Vec<Count> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        match counts.iter_mut().find(|c| c.label == value) {
            Some(c) => c.count += 1,
            None => counts.push(Count {
                label: value.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

impl Statistics {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let by_category = tally(jobs.iter().map(|j| j.category.as_str()));
        let by_location = tally(jobs.iter().map(|j| j.location.as_str()));

        let salaries: Vec<u64> = jobs.iter().filter_map(|j| j.salary).collect();
        let average_salary = if salaries.is_empty() {
            None
        } else {
            let n = salaries.len() as u128;
            let sum: u128 = salaries.iter().map(|&s| s as u128).sum();
            Some(((sum + n / 2) / n) as u64)
        };

        let by_salary_bucket = if salaries.is_empty() {
            Vec::new()
        } else {
            SALARY_BUCKETS
                .iter()
                .map(|&(min, max, label)| Count {
                    label: label.to_string(),
                    count: salaries.iter().filter(|&&s| s >= min && s < max).count(),
                })
                .collect()
        };

        Self {
            total_jobs: jobs.len(),
            category_count: by_category.len(),
            location_count: by_location.len(),
            average_salary,
            by_category,
            by_location,
            by_salary_bucket,
        }
    }

    pub fn charts(&self) -> Vec<ChartSpec> {
        let mut charts = vec![
            ChartSpec::from_counts(ChartKind::Bar, "Vagas por Categoria", &self.by_category),
            ChartSpec::from_counts(
                ChartKind::Doughnut,
                "Vagas por Localização",
                &self.by_location,
            ),
        ];
        if !self.by_salary_bucket.is_empty() {
            charts.push(ChartSpec::from_counts(
                ChartKind::Bar,
                "Vagas por Faixa Salarial (AOA)",
                &self.by_salary_bucket,
            ));
        }
        charts
    }
}

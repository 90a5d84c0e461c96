use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::Job;

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

const CSV_HEADERS: [&str; 7] = [
    "Título",
    "Empresa",
    "Localização",
    "Categoria",
    "Tipo",
    "Salário",
    "Data de Publicação",
];

/// Commas become semicolons; nothing is quoted.
fn clean(field: &str) -> String {
    field.replace(',', ";")
}

/// Serialize jobs with the board's minimal comma-replacing scheme. This is
/// not RFC 4180: quotes and newlines pass through untouched.
pub fn jobs_to_csv(jobs: &[Job]) -> String {
    let mut lines = Vec::with_capacity(jobs.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for job in jobs {
        let row = [
            clean(&job.title),
            clean(&job.company),
            clean(&job.location),
            clean(&job.category),
            clean(&job.job_type),
            job.salary
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            job.published_date.clone(),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// `ango-job-vagas-<YYYY-MM-DD>.csv`
pub fn csv_filename(date: NaiveDate) -> String {
    format!("ango-job-vagas-{}.csv", date.format("%Y-%m-%d"))
}

/// Write `content` to `dir/filename`, creating `dir` if needed.
pub fn save_csv(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::Export(format!("Failed to create {}: {e}", dir.display())))?;
    let path = dir.join(filename);
    fs::write(&path, content)
        .map_err(|e| AppError::Export(format!("Failed to write {}: {e}", path.display())))?;
    tracing::info!("Exported CSV to {}", path.display());
    Ok(path)
}

// One-shot CLI commands. Each loads the board the same way the server
// does at startup, then works on the loaded list.

use std::path::PathBuf;

use chrono::Utc;

use crate::board::{SalaryRange, Statistics, filter_jobs, sort_jobs, window};
use crate::config::ExportArgs;
use crate::export::{csv_filename, jobs_to_csv, save_csv};
use crate::state::AppState;

/// Filter, sort and write the board to `<out_dir>/ango-job-vagas-<date>.csv`.
pub async fn export(state: &AppState, args: &ExportArgs) -> anyhow::Result<PathBuf> {
    state.bootstrap().await;

    let range = SalaryRange::new(
        args.salary_min.unwrap_or(SalaryRange::FULL.min),
        args.salary_max.unwrap_or(SalaryRange::FULL.max),
    );
    if range.min > range.max {
        anyhow::bail!("--salary-min ({}) exceeds --salary-max ({})", range.min, range.max);
    }

    let board = state.board.read().await;
    let filtered = filter_jobs(&board.jobs, &args.categories, &args.locations, range, &args.query);
    let mut jobs = sort_jobs(&filtered, args.sort_key());
    if let Some(pages) = args.pages {
        jobs = window(jobs, pages).jobs;
    }

    let content = jobs_to_csv(&jobs);
    let path = save_csv(&args.out_dir, &csv_filename(Utc::now().date_naive()), &content)?;
    tracing::info!("{} jobs exported", jobs.len());
    Ok(path)
}

/// Refetch from the source and overwrite the cache.
pub async fn fetch(state: &AppState) -> anyhow::Result<usize> {
    Ok(state.refresh().await?)
}

pub async fn stats(state: &AppState) -> Statistics {
    state.bootstrap().await;
    Statistics::from_jobs(&state.board.read().await.jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{ScriptedSource, batch, state_with};

    fn args(out_dir: PathBuf) -> ExportArgs {
        ExportArgs {
            out_dir,
            categories: Vec::new(),
            locations: Vec::new(),
            salary_min: None,
            salary_max: None,
            query: String::new(),
            sort: "salary".to_string(),
            pages: None,
        }
    }

    #[tokio::test]
    async fn export_writes_filtered_sorted_csv() {
        let tmp = tempfile::tempdir().unwrap();
        let (state, _) = state_with(ScriptedSource::new(vec![batch("vaga", 30)]));
        let mut args = args(tmp.path().to_path_buf());
        args.salary_max = Some(2_000_000);

        let path = export(&state, &args).await.unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("ango-job-vagas-"));

        let text = std::fs::read_to_string(path).unwrap();
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 20);
        assert!(rows[0].starts_with("vaga 20,"));
        assert!(rows[19].starts_with("vaga 1,"));
    }

    #[tokio::test]
    async fn export_can_limit_to_window() {
        let tmp = tempfile::tempdir().unwrap();
        let (state, _) = state_with(ScriptedSource::new(vec![batch("vaga", 30)]));
        let mut args = args(tmp.path().to_path_buf());
        args.pages = Some(1);

        let path = export(&state, &args).await.unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 13);
    }

    #[tokio::test]
    async fn export_rejects_inverted_range() {
        let tmp = tempfile::tempdir().unwrap();
        let (state, _) = state_with(ScriptedSource::new(vec![batch("vaga", 1)]));
        let mut args = args(tmp.path().to_path_buf());
        args.salary_min = Some(5);
        args.salary_max = Some(1);
        assert!(export(&state, &args).await.is_err());
    }

    #[tokio::test]
    async fn fetch_then_stats_uses_cache() {
        let (state, store) = state_with(ScriptedSource::new(vec![batch("a", 3), batch("b", 6)]));
        assert_eq!(fetch(&state).await.unwrap(), 3);

        let (fresh, _) = state_with(ScriptedSource::new(vec![batch("c", 9)]));
        let fresh = AppState {
            cache: crate::cache::JobCache::new(store),
            ..fresh
        };
        assert_eq!(stats(&fresh).await.total_jobs, 3);
    }
}

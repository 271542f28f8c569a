//! Nightly sync task.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime};
use pms_systems::PmsRegistry;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Spawn a task that runs `update_tomorrows_stays` for every registered PMS
/// each night at local midnight.
pub fn spawn_nightly_sync(registry: Arc<PmsRegistry>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let wait = until_next_midnight(Local::now().naive_local());
            info!(wait_secs = wait.as_secs(), "Next nightly sync scheduled");
            tokio::time::sleep(wait).await;

            run_nightly_sync(&registry).await;
        }
    })
}

/// Run tomorrow's sync for every registered PMS once.
pub async fn run_nightly_sync(registry: &PmsRegistry) {
    for pms in registry.systems() {
        match pms.update_tomorrows_stays().await {
            Ok(report) => {
                let summary = report.summary();
                info!(
                    pms = pms.name(),
                    reconciled = summary.reconciled,
                    skipped = summary.skipped,
                    failed = summary.failed,
                    "Nightly sync finished"
                );
            }
            Err(e) => error!(pms = pms.name(), error = %e, "Nightly sync failed"),
        }
    }
}

/// Time left until the next midnight after `now`.
fn until_next_midnight(now: NaiveDateTime) -> Duration {
    let next = now
        .date()
        .succ_opt()
        .map(|day| day.and_time(NaiveTime::MIN));

    match next {
        Some(next) => (next - now).to_std().unwrap_or(Duration::from_secs(1)),
        None => Duration::from_secs(24 * 60 * 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_until_next_midnight() {
        assert_eq!(until_next_midnight(at(23, 0)), Duration::from_secs(3600));
        assert_eq!(until_next_midnight(at(0, 0)), Duration::from_secs(24 * 3600));
        assert_eq!(until_next_midnight(at(12, 30)), Duration::from_secs(11 * 3600 + 1800));
    }

    #[tokio::test]
    async fn test_run_nightly_sync_with_empty_registry() {
        run_nightly_sync(&PmsRegistry::new()).await;
    }
}

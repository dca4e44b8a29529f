use chrono::Duration;
use log::*;
use sparkd_notifier_engine::{CleanupApi, SqliteDatabase};
use tokio::{task::JoinHandle, time::MissedTickBehavior};

const FALLBACK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

/// Starts the cleanup worker. It runs once at start-up and then once every `interval`, deleting read notifications
/// older than `retention`. Do not await the returned JoinHandle, as it will run indefinitely.
pub fn start_cleanup_worker(db: SqliteDatabase, interval: Duration, retention: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = match interval.to_std() {
            Ok(period) if !period.is_zero() => period,
            _ => {
                warn!("🧹️ {interval} is not a valid cleanup interval. Running once a day instead.");
                FALLBACK_INTERVAL
            },
        };
        let mut timer = tokio::time::interval(period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let api = CleanupApi::new(db).with_retention(retention);
        let days = retention.num_days();
        info!("🧹️ Notification cleanup worker started. Read notifications are kept for {days} days");
        loop {
            timer.tick().await;
            info!("🧹️ Running notification cleanup job");
            match api.purge_now().await {
                Ok(result) => {
                    debug!("🧹️ Cutoff was {}. Deleted notifications: {}", result.cutoff, id_list(&result.deleted));
                },
                Err(e) => {
                    error!("🧹️ Error running notification cleanup job: {e}");
                },
            }
        }
    })
}

fn id_list(ids: &[i64]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    ids.iter().map(|id| format!("#{id}")).collect::<Vec<String>>().join(", ")
}

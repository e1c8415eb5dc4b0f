use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::attendance::derivation::{TargetDay, derive_attendance};
use crate::db::AttendanceStore;

/// Re-derives today's attendance every `every`. Failures are logged and the
/// next tick tries again with whatever events exist by then.
pub fn spawn_periodic_derivation(store: Arc<dyn AttendanceStore>, every: Duration) {
    actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(every);
        info!(interval_secs = every.as_secs(), "Attendance scheduler started");

        loop {
            ticker.tick().await;
            match derive_attendance(store.as_ref(), TargetDay::Today).await {
                Ok(outcome) => info!(
                    date = %outcome.date_processed,
                    records_affected = outcome.records_affected,
                    "Scheduled attendance derivation finished"
                ),
                Err(e) => error!(error = %e, "Scheduled attendance derivation failed"),
            }
        }
    });
}

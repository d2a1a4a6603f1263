use consent_core::{NoticeError, PageEnv};
use tokio::time::sleep;
use tracing::debug;

use crate::timing::NoticeTiming;

/// Fade the notice out and detach it.
///
/// Starts at full opacity, steps down by `fade_step` every `fade_tick`, and
/// removes the element once opacity drops below 0.01. Purely time-based; once
/// started it runs to completion.
pub(crate) async fn fade_out(env: &dyn PageEnv, timing: &NoticeTiming) -> Result<(), NoticeError> {
    let mut opacity = 1.0_f64;
    env.set_notice_opacity(opacity).await?;

    loop {
        opacity -= timing.fade_step;
        env.set_notice_opacity(opacity).await?;
        if opacity < 0.01 {
            env.remove_notice().await?;
            debug!("notice detached");
            return Ok(());
        }
        sleep(timing.fade_tick).await;
    }
}

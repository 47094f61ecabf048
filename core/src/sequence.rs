use core::future::Future;

use crate::*;

/// Timer used between the steps of a round.
pub trait Delay {
    fn sleep(&self, millis: u32) -> impl Future<Output = ()>;
}

/// Runs `scramble` `times` times, waiting `interval_ms` after each one.
///
/// The returned future resolves exactly once, after the wait that follows the last scramble, or right away when
/// `times` is 0. The first error from `scramble` stops the sequence and is returned.
pub async fn scramble_repeated<D, S>(
    delay: &D,
    times: u32,
    interval_ms: u32,
    mut scramble: S,
) -> Result<()>
where
    D: Delay,
    S: FnMut() -> Result<()>,
{
    for _ in 0..times {
        scramble()?;
        delay.sleep(interval_ms).await;
    }
    Ok(())
}

/// Drives the timed part of a round: the pause on the numbered grid, the scrambles and the switch to playing.
///
/// Each step goes through `apply`, normally [`GameController::advance`] with the plan's token. Once the round was
/// replaced or finished `apply` fails, and the remaining steps are dropped.
pub async fn play_round<D, F>(delay: &D, plan: RoundPlan, mut apply: F) -> Result<()>
where
    D: Delay,
    F: FnMut(RoundStep) -> Result<()>,
{
    delay.sleep(plan.pause_ms).await;
    apply(RoundStep::StartScrambling)?;

    scramble_repeated(delay, plan.scrambles, plan.interval_ms, || apply(RoundStep::Scramble)).await?;

    apply(RoundStep::StartPlaying)
}

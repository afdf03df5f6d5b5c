//! Progress estimation and the observer-side contract.
//!
//! The estimator is a pure function over two byte counts; the rest of
//! this module is the mutable record shown to a progress sink while a
//! transfer runs, and the sink trait itself.

/// Lifecycle stage of a transfer task.
///
/// The collector only ever sets `InProgress` on the task it publishes;
/// terminal outcomes are communicated by the collection result, not by
/// the task record. The full enum exists for sinks that track stages on
/// their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskStage {
  /// The transfer has not begun.
  #[default]
  NotStarted,
  /// Bytes are flowing. The only stage the collector sets.
  InProgress,
  /// The transfer finished successfully.
  Complete,
  /// The transfer ended with an error.
  Failed,
}

/// The mutable progress record for one stream collection.
///
/// Created fresh when collection begins, mutated on every chunk, and
/// discarded when the collection settles. The byte count is monotonically
/// non-decreasing across chunks.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferTask {
  /// Bytes accumulated so far.
  pub bytes_transferred: u64,
  /// The caller's estimate of the total size. An estimate of zero is a
  /// caller contract violation; the percentage becomes NaN or infinite
  /// rather than being silently guarded.
  pub estimated_total: u64,
  /// `100 * bytes_transferred / estimated_total`, unclamped: when the
  /// actual size overshoots the estimate the percentage exceeds 100.
  pub percent_complete: f64,
  /// Human status line carrying both byte counts.
  pub status_message: String,
  /// Lifecycle stage. See [`TaskStage`].
  pub stage: TaskStage,
}

impl TransferTask {
  /// The fresh task published to a sink's `start` call.
  #[must_use]
  pub fn starting(estimated_total: u64) -> Self {
    Self {
      bytes_transferred: 0,
      estimated_total,
      percent_complete: 0.0,
      status_message: "Starting transfer...".to_string(),
      stage: TaskStage::InProgress,
    }
  }

  /// Fold one chunk into the record: `total_bytes` is the accumulated
  /// length after the append, never less than the previous value.
  pub fn record_chunk(&mut self, total_bytes: u64) {
    let (percent, message) = estimate(total_bytes, self.estimated_total);
    self.bytes_transferred = total_bytes;
    self.percent_complete = percent;
    self.status_message = message;
  }
}

/// Compute the percentage and status line for a running transfer.
///
/// The percentage is `100 * bytes_so_far / estimated_total`, with no
/// clamping and no rounding. A zero `estimated_total` yields NaN (when
/// `bytes_so_far` is also zero) or infinity; the caller owes a positive
/// estimate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate(bytes_so_far: u64, estimated_total: u64) -> (f64, String) {
  let percent = 100.0 * bytes_so_far as f64 / estimated_total as f64;
  let message = format!("Downloaded {bytes_so_far} of {estimated_total} (Estimated) bytes");
  (percent, message)
}

/// The external observer fed by a collection.
///
/// For one collection the collector guarantees: `start` at most once,
/// `update` only between `start` and `end`, and `end` on every path
/// that saw `start`, including the mid-stream error path. A sink is
/// borrowed for the duration of the collection and never owned.
pub trait ProgressSink {
  /// The transfer has begun; `task` is the fresh record.
  fn start(&mut self, task: &TransferTask);

  /// A chunk arrived; `task` reflects the new accumulated state.
  fn update(&mut self, task: &TransferTask);

  /// The transfer is over (successfully or not). Tear the bar down.
  fn end(&mut self);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn estimate_formats_counts_and_percent() {
    let (percent, message) = estimate(50, 100);
    assert!((percent - 50.0).abs() < f64::EPSILON);
    assert_eq!(message, "Downloaded 50 of 100 (Estimated) bytes");
  }

  #[test]
  fn estimate_does_not_clamp_overshoot() {
    let (percent, _) = estimate(150, 100);
    assert!((percent - 150.0).abs() < f64::EPSILON);
  }

  #[test]
  fn zero_estimate_is_nan_or_infinite() {
    // Documented caller contract violation, deliberately unguarded.
    assert!(estimate(0, 0).0.is_nan());
    assert!(estimate(10, 0).0.is_infinite());
  }

  #[test]
  fn starting_task_shape() {
    let task = TransferTask::starting(512);
    assert_eq!(task.bytes_transferred, 0);
    assert_eq!(task.estimated_total, 512);
    assert!((task.percent_complete - 0.0).abs() < f64::EPSILON);
    assert_eq!(task.status_message, "Starting transfer...");
    assert_eq!(task.stage, TaskStage::InProgress);
  }

  #[test]
  fn record_chunk_updates_all_derived_fields() {
    let mut task = TransferTask::starting(200);
    task.record_chunk(50);
    assert_eq!(task.bytes_transferred, 50);
    assert!((task.percent_complete - 25.0).abs() < f64::EPSILON);
    assert_eq!(task.status_message, "Downloaded 50 of 200 (Estimated) bytes");

    task.record_chunk(200);
    assert_eq!(task.bytes_transferred, 200);
    assert!((task.percent_complete - 100.0).abs() < f64::EPSILON);
  }
}

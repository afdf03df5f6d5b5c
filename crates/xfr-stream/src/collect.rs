//! The stream collector: drain an async byte source into one buffer.
//!
//! Collection is an explicit state machine driven by read completions:
//!
//! ```text
//!   Pending ──(source resolves)──▶ Streaming ──(EOF)──▶ Complete
//!      │                              │
//!      │ (source rejects)             │ (read error)
//!      ▼                              ▼
//!   Failed  [sink untouched]       Failed  [sink.end() still called]
//! ```
//!
//! The two failure paths differ on purpose: a mid-stream error tears the
//! progress bar down (`end` is called on every path that saw `start`),
//! while a source that rejects before a stream exists never started a
//! bar, so there is nothing to clean up. Errors propagate unchanged in
//! both cases, and a failed collection yields no buffer even when bytes
//! were already accumulated.

use std::io;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::progress::{ProgressSink, TransferTask};

/// Read granularity. Chunk sizes observed by the sink are whatever the
/// source hands back per read, capped by this buffer.
const READ_CHUNK: usize = 8 * 1024;

/// Internal state machine for one collection.
///
/// `Pending` covers the await on the source-producing future. A
/// collector is single-use: `collect` consumes it, so `Complete` and
/// `Failed` are terminal by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CollectState {
  Pending,
  Streaming,
  Complete,
  Failed,
}

/// Accumulates an asynchronous byte source into a single buffer while
/// reporting progress.
///
/// One collector runs one collection: construct it with the caller's
/// size estimate, optionally attach a borrowed [`ProgressSink`], then
/// await [`collect`](Self::collect). Chunks are appended in emission
/// order with no internal parallelism; there is no timeout and no
/// cancellation primitive; a stalled source stalls the collection.
///
/// # Example
///
/// ```rust,no_run
/// use xfr_stream::StreamCollector;
///
/// async fn slurp(path: &str, estimated: u64) -> std::io::Result<bytes::Bytes> {
///     StreamCollector::new(estimated)
///         .collect(tokio::fs::File::open(path.to_string()))
///         .await
/// }
/// ```
pub struct StreamCollector<'s> {
  estimated_size: u64,
  sink: Option<&'s mut dyn ProgressSink>,
  state: CollectState,
  buf: BytesMut,
}

impl<'s> StreamCollector<'s> {
  /// Create a collector for a transfer of roughly `estimated_size` bytes.
  ///
  /// The estimate only feeds the percentage math; collection itself is
  /// unbounded. A zero estimate produces NaN/infinite percentages (see
  /// [`estimate`](crate::progress::estimate)).
  #[must_use]
  pub fn new(estimated_size: u64) -> Self {
    Self {
      estimated_size,
      sink: None,
      state: CollectState::Pending,
      buf: BytesMut::new(),
    }
  }

  /// Attach a progress sink for the duration of the collection.
  #[must_use]
  pub fn with_sink(mut self, sink: &'s mut dyn ProgressSink) -> Self {
    self.sink = Some(sink);
    self
  }

  /// Drive `source` to completion and return the accumulated bytes.
  ///
  /// `source` is the eventual byte stream: a future resolving to any
  /// `AsyncRead`. The three terminal paths are documented on the module;
  /// all errors are returned unchanged, with no retry and no partial
  /// result.
  ///
  /// # Errors
  ///
  /// Propagates the source future's rejection or the first read error,
  /// verbatim.
  #[allow(clippy::cast_possible_truncation)] // usize byte counts fit u64
  pub async fn collect<R, F>(mut self, source: F) -> io::Result<Bytes>
  where
    F: Future<Output = io::Result<R>>,
    R: AsyncRead + Unpin,
  {
    debug_assert_eq!(self.state, CollectState::Pending);
    let mut reader = match source.await {
      Ok(reader) => reader,
      Err(rejection) => {
        // No stream was ever obtained, so no bar was started and none
        // is torn down.
        self.state = CollectState::Failed;
        return Err(rejection);
      }
    };

    self.state = CollectState::Streaming;
    let mut task = TransferTask::starting(self.estimated_size);
    if let Some(sink) = self.sink.as_deref_mut() {
      sink.start(&task);
    }

    let mut chunk = [0u8; READ_CHUNK];
    loop {
      match reader.read(&mut chunk).await {
        Ok(0) => break,
        Ok(n) => {
          self.buf.extend_from_slice(&chunk[..n]);
          task.record_chunk(self.buf.len() as u64);
          if let Some(sink) = self.sink.as_deref_mut() {
            sink.update(&task);
          }
        }
        Err(error) => {
          self.state = CollectState::Failed;
          // The bar was started, so it is always torn down, even on
          // the error path.
          if let Some(sink) = self.sink.as_deref_mut() {
            sink.end();
          }
          return Err(error);
        }
      }
    }

    debug_assert_eq!(self.state, CollectState::Streaming);
    self.state = CollectState::Complete;
    if let Some(sink) = self.sink.as_deref_mut() {
      sink.end();
    }
    Ok(self.buf.freeze())
  }
}

/// Collect `source` into a buffer, reporting to `sink` when supplied.
///
/// Free-function shape of [`StreamCollector::collect`] for callers that
/// have all three pieces in hand.
///
/// # Errors
///
/// Same as [`StreamCollector::collect`].
pub async fn stream_to_buffer<R, F>(
  estimated_size: u64,
  source: F,
  sink: Option<&mut dyn ProgressSink>,
) -> io::Result<Bytes>
where
  F: Future<Output = io::Result<R>>,
  R: AsyncRead + Unpin,
{
  let collector = StreamCollector::new(estimated_size);
  match sink {
    Some(sink) => collector.with_sink(sink).collect(source).await,
    None => collector.collect(source).await,
  }
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;
  use std::pin::Pin;
  use std::task::{Context, Poll};

  use tokio::io::ReadBuf;

  use super::*;
  use crate::progress::TaskStage;

  /// Test source with scripted per-read outcomes: each entry is one
  /// chunk or one error, and exhaustion is EOF.
  struct ScriptedReader {
    events: VecDeque<io::Result<Vec<u8>>>,
  }

  impl ScriptedReader {
    fn new(events: Vec<io::Result<Vec<u8>>>) -> Self {
      Self {
        events: events.into(),
      }
    }
  }

  impl AsyncRead for ScriptedReader {
    fn poll_read(
      self: Pin<&mut Self>,
      _cx: &mut Context<'_>,
      buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
      match self.get_mut().events.pop_front() {
        Some(Ok(chunk)) => {
          buf.put_slice(&chunk);
          Poll::Ready(Ok(()))
        }
        Some(Err(error)) => Poll::Ready(Err(error)),
        None => Poll::Ready(Ok(())), // EOF: zero bytes written
      }
    }
  }

  #[derive(Default)]
  struct RecordingSink {
    started: Vec<TransferTask>,
    updates: Vec<TransferTask>,
    ended: usize,
  }

  impl ProgressSink for RecordingSink {
    fn start(&mut self, task: &TransferTask) {
      self.started.push(task.clone());
    }

    fn update(&mut self, task: &TransferTask) {
      self.updates.push(task.clone());
    }

    fn end(&mut self) {
      self.ended += 1;
    }
  }

  fn ready<R>(reader: R) -> impl Future<Output = io::Result<R>> {
    async move { Ok(reader) }
  }

  #[tokio::test]
  async fn collects_chunks_in_order_with_progress() {
    let reader = ScriptedReader::new(vec![
      Ok(vec![b'a'; 10]),
      Ok(vec![b'b'; 10]),
      Ok(vec![b'c'; 30]),
    ]);
    let mut sink = RecordingSink::default();

    let buf = StreamCollector::new(50)
      .with_sink(&mut sink)
      .collect(ready(reader))
      .await
      .unwrap();

    assert_eq!(buf.len(), 50);
    assert_eq!(&buf[..10], b"aaaaaaaaaa");
    assert_eq!(&buf[20..], [b'c'; 30]);

    assert_eq!(sink.started.len(), 1);
    assert_eq!(sink.started[0].status_message, "Starting transfer...");
    assert_eq!(sink.started[0].stage, TaskStage::InProgress);

    let percents: Vec<f64> = sink.updates.iter().map(|t| t.percent_complete).collect();
    assert_eq!(percents, [20.0, 40.0, 100.0]);
    assert_eq!(
      sink.updates.last().unwrap().status_message,
      "Downloaded 50 of 50 (Estimated) bytes"
    );
    assert_eq!(sink.ended, 1);
  }

  #[tokio::test]
  async fn empty_source_yields_empty_buffer() {
    let mut sink = RecordingSink::default();
    let buf = StreamCollector::new(10)
      .with_sink(&mut sink)
      .collect(ready(ScriptedReader::new(vec![])))
      .await
      .unwrap();

    assert!(buf.is_empty());
    assert_eq!(sink.started.len(), 1);
    assert!(sink.updates.is_empty());
    assert_eq!(sink.ended, 1);
  }

  #[tokio::test]
  async fn overshoot_percentage_is_not_clamped() {
    let reader = ScriptedReader::new(vec![Ok(vec![0u8; 50])]);
    let mut sink = RecordingSink::default();

    StreamCollector::new(40)
      .with_sink(&mut sink)
      .collect(ready(reader))
      .await
      .unwrap();

    assert_eq!(sink.updates.len(), 1);
    assert!((sink.updates[0].percent_complete - 125.0).abs() < f64::EPSILON);
  }

  #[tokio::test]
  async fn mid_stream_error_rejects_and_still_ends_bar() {
    let reader = ScriptedReader::new(vec![
      Ok(vec![0u8; 10]),
      Err(io::Error::new(io::ErrorKind::ConnectionReset, "boom")),
    ]);
    let mut sink = RecordingSink::default();

    let err = StreamCollector::new(50)
      .with_sink(&mut sink)
      .collect(ready(reader))
      .await
      .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
    assert_eq!(err.to_string(), "boom");
    assert_eq!(sink.started.len(), 1);
    assert_eq!(sink.updates.len(), 1);
    assert_eq!(sink.ended, 1);
  }

  #[tokio::test]
  async fn source_rejection_never_touches_the_sink() {
    let mut sink = RecordingSink::default();
    let source =
      async { Err::<ScriptedReader, _>(io::Error::new(io::ErrorKind::NotFound, "no stream")) };

    let err = StreamCollector::new(50)
      .with_sink(&mut sink)
      .collect(source)
      .await
      .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(sink.started.is_empty());
    assert!(sink.updates.is_empty());
    assert_eq!(sink.ended, 0);
  }

  #[tokio::test]
  async fn collection_without_a_sink() {
    let reader = ScriptedReader::new(vec![Ok(b"hello".to_vec())]);
    let buf = StreamCollector::new(5).collect(ready(reader)).await.unwrap();
    assert_eq!(&buf[..], b"hello");
  }

  #[tokio::test]
  async fn stream_to_buffer_free_function() {
    let reader = ScriptedReader::new(vec![Ok(b"abc".to_vec()), Ok(b"def".to_vec())]);
    let mut sink = RecordingSink::default();

    let buf = stream_to_buffer(6, ready(reader), Some(&mut sink)).await.unwrap();

    assert_eq!(&buf[..], b"abcdef");
    assert_eq!(sink.ended, 1);
  }
}

//! SSE streaming support for xAI chat completions.
//!
//! Adapts a raw `reqwest` byte stream into [`StreamChunk`] values and offers
//! [`ChatCompletionStream::collect_content`] to drain a whole completion into
//! one string. Handles `data: [DONE]`, CRLF line endings, and events split
//! across network reads.

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::{Result, XaiError};

/// A single chunk from a streaming chat completion.
#[derive(Debug, Clone)]
pub struct StreamChunk {
    /// The text delta for this chunk. Empty for keep-alive or usage-only
    /// events.
    pub delta: String,
    /// Whether the stream is done.
    pub done: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ChunkRaw {
    #[serde(default)]
    choices: Vec<ChunkChoiceRaw>,
}

#[derive(Debug, serde::Deserialize)]
struct ChunkChoiceRaw {
    delta: ChunkDeltaRaw,
}

#[derive(Debug, serde::Deserialize)]
struct ChunkDeltaRaw {
    #[serde(default)]
    content: Option<String>,
}

/// Stream adapter over the raw SSE bytes of a chat completion.
pub struct ChatCompletionStream {
    inner: Pin<Box<dyn Stream<Item = std::result::Result<Bytes, reqwest::Error>> + Send>>,
    buffer: String,
}

impl ChatCompletionStream {
    pub(crate) fn new(
        byte_stream: impl Stream<Item = std::result::Result<Bytes, reqwest::Error>> + Send + 'static,
    ) -> Self {
        Self {
            inner: Box::pin(byte_stream),
            buffer: String::new(),
        }
    }

    /// Drain the stream and concatenate all deltas into a single string.
    ///
    /// Stops at the `[DONE]` sentinel or when the connection closes. This is
    /// the accumulate-then-parse consumption mode: callers get one completed
    /// response, never a partial one.
    pub async fn collect_content(mut self) -> Result<String> {
        let mut content = String::new();
        while let Some(chunk) = self.next().await {
            let chunk = chunk?;
            if chunk.done {
                break;
            }
            content.push_str(&chunk.delta);
        }
        Ok(content)
    }
}

impl Stream for ChatCompletionStream {
    type Item = Result<StreamChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(chunk) = next_event(&mut this.buffer) {
                return Poll::Ready(Some(chunk));
            }

            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => match std::str::from_utf8(&bytes) {
                    Ok(text) => this.buffer.push_str(text),
                    Err(e) => {
                        return Poll::Ready(Some(Err(XaiError::Parse(format!(
                            "Invalid UTF-8 in stream: {}",
                            e
                        )))));
                    }
                },
                Poll::Ready(Some(Err(e))) => {
                    return Poll::Ready(Some(Err(XaiError::Network(e.to_string()))));
                }
                Poll::Ready(None) => {
                    // Connection closed; flush whatever complete lines remain.
                    if let Some(chunk) = next_event(&mut this.buffer) {
                        return Poll::Ready(Some(chunk));
                    }
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Pop complete lines off the buffer until a data event is found.
/// Returns `None` when no complete data line is buffered yet.
fn next_event(buffer: &mut String) -> Option<Result<StreamChunk>> {
    while let Some(newline_pos) = buffer.find('\n') {
        let line = buffer[..newline_pos].trim_end_matches('\r').to_string();
        buffer.drain(..=newline_pos);

        let line = line.trim();
        // Blank lines separate events; "event:"/"id:" lines carry no payload.
        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };

        return Some(parse_data(data.trim()));
    }
    None
}

/// Parse one SSE data payload into a chunk.
fn parse_data(data: &str) -> Result<StreamChunk> {
    if data == "[DONE]" {
        return Ok(StreamChunk {
            delta: String::new(),
            done: true,
        });
    }

    match serde_json::from_str::<ChunkRaw>(data) {
        Ok(raw) => {
            // The final usage-bearing event has an empty choices array;
            // surface it as an empty delta rather than an error.
            let delta = raw
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.delta.content)
                .unwrap_or_default();
            Ok(StreamChunk { delta, done: false })
        }
        Err(e) => Err(XaiError::Parse(format!(
            "Failed to parse stream chunk: {} (data: {})",
            e,
            &data[..data.len().min(200)]
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sse_stream(frames: &[&str]) -> ChatCompletionStream {
        let bytes: Vec<std::result::Result<Bytes, reqwest::Error>> = frames
            .iter()
            .map(|frame| Ok(Bytes::from(frame.to_string())))
            .collect();
        ChatCompletionStream::new(futures::stream::iter(bytes))
    }

    #[tokio::test]
    async fn test_single_chunk_then_done() {
        let mut stream = sse_stream(&[
            "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\n",
            "data: [DONE]\n",
        ]);

        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.delta, "Hello");
        assert!(!chunk.done);

        let done = stream.next().await.unwrap().unwrap();
        assert!(done.done);
    }

    #[tokio::test]
    async fn test_collect_content_concatenates_deltas() {
        let stream = sse_stream(&[
            "data: {\"choices\":[{\"delta\":{\"content\":\"[{\\\"text\\\":\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"\\\"A\\\"}]\"}}]}\n\n",
            "data: [DONE]\n",
        ]);

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "[{\"text\":\"A\"}]");
    }

    #[tokio::test]
    async fn test_event_split_across_reads() {
        let stream = sse_stream(&[
            "data: {\"choices\":[{\"delta\":{\"con",
            "tent\":\"Hi\"}}]}\n\ndata: [DONE]\n",
        ]);

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "Hi");
    }

    #[tokio::test]
    async fn test_crlf_lines() {
        let stream = sse_stream(&[
            "data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\r\n\r\ndata: [DONE]\r\n",
        ]);

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "ok");
    }

    #[tokio::test]
    async fn test_usage_only_event_yields_empty_delta() {
        let mut stream = sse_stream(&[
            "data: {\"choices\":[],\"usage\":{\"prompt_tokens\":1,\"completion_tokens\":1,\"total_tokens\":2}}\n\n",
            "data: [DONE]\n",
        ]);

        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.delta, "");
        assert!(!chunk.done);
    }

    #[tokio::test]
    async fn test_non_data_lines_skipped() {
        let stream = sse_stream(&[
            ": keep-alive\n",
            "event: message\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"x\"}}]}\n\n",
            "data: [DONE]\n",
        ]);

        let content = stream.collect_content().await.unwrap();
        assert_eq!(content, "x");
    }

    #[tokio::test]
    async fn test_garbage_data_is_a_parse_error() {
        let mut stream = sse_stream(&["data: {not json}\n"]);

        let err = stream.next().await.unwrap();
        assert!(matches!(err, Err(XaiError::Parse(_))));
    }
}

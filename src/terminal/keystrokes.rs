//! Shared live feed of decoded keystrokes.
//!
//! One reader task pumps the input device into a broadcast channel; every
//! subscriber sees the keys that arrive after it subscribed. There is no
//! replay, and a slow subscriber skips what it missed rather than stalling
//! the others.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

/// One decoded input character.
pub type Keystroke = String;

const FEED_CAPACITY: usize = 256;
const READ_CHUNK_BYTES: usize = 64;

type ByteSource = Box<dyn AsyncRead + Send + Unpin>;
type SenderSlot = Arc<Mutex<Option<broadcast::Sender<Keystroke>>>>;

/// Broadcast feed of keystrokes read from one byte source.
///
/// The source is not touched until the first subscription, so nothing is
/// read before someone is listening.
pub struct KeystrokeFeed {
    sender: SenderSlot,
    source: Mutex<Option<ByteSource>>,
}

impl KeystrokeFeed {
    /// Build a feed over any async byte source.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self {
            sender: Arc::new(Mutex::new(Some(sender))),
            source: Mutex::new(Some(Box::new(reader))),
        }
    }

    /// The process-wide feed over standard input.
    pub fn shared() -> Arc<Self> {
        static STDIN_FEED: OnceLock<Arc<KeystrokeFeed>> = OnceLock::new();
        Arc::clone(STDIN_FEED.get_or_init(|| Arc::new(Self::from_reader(tokio::io::stdin()))))
    }

    /// Subscribe to keys arriving from now on.
    ///
    /// The first call starts the reader task and must run inside a tokio
    /// runtime. Subscribing after the source hit end-of-input returns an
    /// already finished stream.
    pub fn subscribe(&self) -> Keystrokes {
        let rx = lock(&self.sender).as_ref().map(broadcast::Sender::subscribe);
        self.start_pump();
        Keystrokes { rx }
    }

    fn start_pump(&self) {
        let Some(source) = lock(&self.source).take() else {
            return;
        };
        debug!("starting keystroke feed");
        tokio::spawn(pump(source, Arc::clone(&self.sender)));
    }
}

impl std::fmt::Debug for KeystrokeFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeystrokeFeed")
            .field("open", &lock(&self.sender).is_some())
            .field("started", &lock(&self.source).is_none())
            .finish()
    }
}

async fn pump(mut source: ByteSource, slot: SenderSlot) {
    let Some(sender) = lock(&slot).clone() else {
        return;
    };
    let mut decoder = LossyDecoder::default();
    let mut buf = [0u8; READ_CHUNK_BYTES];
    loop {
        match source.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                for key in decoder.push(&buf[..n]) {
                    // No receivers just means nobody is prompting right now.
                    let _ = sender.send(key);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!(error = %e, "keystroke source failed");
                break;
            }
        }
    }
    if let Some(key) = decoder.finish() {
        let _ = sender.send(key);
    }
    // Dropping the last sender closes the channel for every subscriber.
    drop(sender);
    lock(&slot).take();
    debug!("keystroke feed closed");
}

/// One subscriber's view of a [`KeystrokeFeed`].
#[derive(Debug)]
pub struct Keystrokes {
    rx: Option<broadcast::Receiver<Keystroke>>,
}

impl Keystrokes {
    /// Wait for the next key; `None` once the feed has ended.
    pub async fn next(&mut self) -> Option<Keystroke> {
        let rx = self.rx.as_mut()?;
        loop {
            match rx.recv().await {
                Ok(key) => return Some(key),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "keystroke subscriber fell behind");
                }
                Err(RecvError::Closed) => {
                    self.rx = None;
                    return None;
                }
            }
        }
    }
}

/// Incremental UTF-8 decoder that never fails.
///
/// Invalid sequences become U+FFFD; an incomplete sequence at the end of a
/// chunk waits for the next chunk.
#[derive(Debug, Default)]
pub struct LossyDecoder {
    pending: Vec<u8>,
}

impl LossyDecoder {
    /// Feed raw bytes and return every complete character.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Keystroke> {
        self.pending.extend_from_slice(bytes);
        let mut keys = Vec::new();
        let mut rest: &[u8] = &self.pending;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    keys.extend(valid.chars().map(String::from));
                    rest = &[];
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    if let Ok(valid) = std::str::from_utf8(valid) {
                        keys.extend(valid.chars().map(String::from));
                    }
                    match err.error_len() {
                        Some(len) => {
                            keys.push(char::REPLACEMENT_CHARACTER.to_string());
                            rest = &after[len..];
                        }
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }
        let consumed = self.pending.len() - rest.len();
        self.pending.drain(..consumed);
        keys
    }

    /// Flush a dangling partial sequence at end of input.
    pub fn finish(&mut self) -> Option<Keystroke> {
        if self.pending.is_empty() {
            return None;
        }
        self.pending.clear();
        Some(char::REPLACEMENT_CHARACTER.to_string())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoder_splits_ascii_into_single_keys() {
        let mut decoder = LossyDecoder::default();
        assert_eq!(decoder.push(b"yn\n"), vec!["y", "n", "\n"]);
    }

    #[test]
    fn decoder_joins_multibyte_across_chunks() {
        let mut decoder = LossyDecoder::default();
        let bytes = "é".as_bytes();
        assert!(decoder.push(&bytes[..1]).is_empty());
        assert_eq!(decoder.push(&bytes[1..]), vec!["é"]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn decoder_substitutes_invalid_bytes() {
        let mut decoder = LossyDecoder::default();
        assert_eq!(decoder.push(b"a\xffb"), vec!["a", "\u{fffd}", "b"]);
    }

    #[test]
    fn decoder_flushes_truncated_tail() {
        let mut decoder = LossyDecoder::default();
        assert_eq!(decoder.push(b"x\xe2\x82"), vec!["x"]);
        assert_eq!(decoder.finish(), Some("\u{fffd}".to_string()));
        assert_eq!(decoder.finish(), None);
    }

    #[tokio::test]
    async fn first_subscriber_sees_all_bytes_then_end() {
        let feed = KeystrokeFeed::from_reader(&b"ab"[..]);
        let mut keys = feed.subscribe();
        assert_eq!(keys.next().await.as_deref(), Some("a"));
        assert_eq!(keys.next().await.as_deref(), Some("b"));
        assert_eq!(keys.next().await, None);
        assert_eq!(keys.next().await, None);
    }

    #[tokio::test]
    async fn concurrent_subscribers_share_one_feed() {
        let (mut writer, reader) = tokio::io::duplex(16);
        let feed = KeystrokeFeed::from_reader(reader);
        let mut first = feed.subscribe();
        let mut second = feed.subscribe();

        tokio::io::AsyncWriteExt::write_all(&mut writer, b"q").await.unwrap();
        assert_eq!(first.next().await.as_deref(), Some("q"));
        assert_eq!(second.next().await.as_deref(), Some("q"));

        drop(writer);
        assert_eq!(first.next().await, None);
        assert_eq!(second.next().await, None);
    }

    #[tokio::test]
    async fn subscribing_after_close_yields_nothing() {
        let feed = KeystrokeFeed::from_reader(&b""[..]);
        let mut early = feed.subscribe();
        assert_eq!(early.next().await, None);
        let mut late = feed.subscribe();
        assert_eq!(late.next().await, None);
    }
}

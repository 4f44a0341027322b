//! Decodes a chunked body read from stdin and writes the payload to stdout.
//!
//! ```text
//! printf '4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n' | cargo run --example decode_stdin
//! cargo run --example decode_stdin -- --trailer --max-chunk-size 65536 < body.txt
//! ```

use futures::StreamExt;
use micro_chunked::codec::PayloadDecoder;
use micro_chunked::protocol::{ParseError, PayloadItem, Settings};
use std::io::ErrorKind;
use tokio::io::AsyncWriteExt;
use tokio_util::codec::FramedRead;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut trailer = false;
    let mut settings = Settings::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--trailer" => trailer = true,
            "--max-chunk-size" => match args.next().map(|v| v.parse::<u64>()) {
                Some(Ok(size)) => settings = Settings::new(size),
                _ => {
                    error!("--max-chunk-size expects a number");
                    return;
                }
            },
            other => warn!(arg = other, "ignoring unknown argument"),
        }
    }

    info!(trailer, max_chunk_size = settings.max_chunk_size(), "decoding chunked body from stdin");

    let mut framed = FramedRead::new(tokio::io::stdin(), PayloadDecoder::new(settings, trailer));
    let mut stdout = tokio::io::stdout();
    let mut total = 0usize;

    while let Some(item) = framed.next().await {
        match item {
            Ok(PayloadItem::Chunk(bytes)) => {
                total += bytes.len();
                if let Err(e) = stdout.write_all(&bytes).await {
                    error!(cause = %e, "failed to write stdout");
                    return;
                }
            }
            Ok(PayloadItem::Eof) => {
                info!(total, leftover = framed.read_buffer().len(), "finished decoding body");
                break;
            }
            Err(ParseError::Io { source }) if source.kind() == ErrorKind::UnexpectedEof => {
                warn!(total, "stdin closed before the body was complete");
                break;
            }
            Err(e) => {
                error!(cause = %e, status = %e.status_code(), "invalid chunked body");
                break;
            }
        }
    }

    if let Err(e) = stdout.flush().await {
        error!(cause = %e, "failed to flush stdout");
    }
}

//! stdio transport — newline-delimited JSON-RPC on stdin/stdout.

use crate::server::McpServer;
use crate::McpError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Serve until stdin closes.
pub async fn serve(server: &McpServer) -> Result<(), McpError> {
    tracing::info!("stdio transport ready");
    serve_lines(server, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Handle one message per line from `reader`, writing one response line per
/// request to `writer`. Notifications produce no output.
pub async fn serve_lines<R, W>(server: &McpServer, reader: R, mut writer: W) -> Result<(), McpError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(response) = server.handle_message(line).await {
            let json = serde_json::to_string(&response)?;
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }
    tracing::info!("stdin closed, stopping stdio transport");
    Ok(())
}

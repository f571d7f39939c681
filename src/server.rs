//! Static asset server
//!
//! Serves files below a root directory over plain HTTP/1.1. Unknown paths
//! fall back to the entry page so the game loads from any URL; a 404 is only
//! returned when the entry page itself is missing.

use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Asset server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_address: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory files are served from
    pub root: PathBuf,
    /// Entry document, relative to `root`
    pub entry: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            root: PathBuf::from("."),
            entry: "index.html".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("BIND_ADDRESS") {
            if let Ok(parsed) = addr.parse() {
                config.bind_address = parsed;
            } else {
                warn!("Invalid BIND_ADDRESS '{}', using default", addr);
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(parsed) if parsed > 0 => config.port = parsed,
                Ok(_) => warn!("PORT must be > 0, using default"),
                Err(_) => warn!("Invalid PORT '{}', using default", port),
            }
        }

        if let Ok(root) = std::env::var("ASSET_ROOT") {
            config.root = PathBuf::from(root);
        }

        if let Ok(entry) = std::env::var("ASSET_ENTRY") {
            if entry.trim().is_empty() {
                warn!("ASSET_ENTRY is empty, using default");
            } else {
                config.entry = entry.trim_start_matches('/').to_string();
            }
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Content type by file extension; anything unknown is served as HTML
pub fn content_type_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "text/html",
    }
}

/// A response ready to be written to the socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl AssetResponse {
    fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }

    /// Serialize status line, headers and body
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len()
        );
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// Split `GET /path HTTP/1.1` into method and path
pub fn parse_request_line(request: &str) -> Option<(&str, &str)> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;
    Some((method, path))
}

/// Map a URL path to a file below the root. `None` if it would escape.
fn relative_path(url_path: &str, entry: &str) -> Option<PathBuf> {
    let path = url_path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Some(PathBuf::from(entry));
    }
    let relative = PathBuf::from(trimmed);
    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    safe.then_some(relative)
}

/// Resolve a GET request to a response
pub async fn resolve(config: &ServerConfig, url_path: &str) -> AssetResponse {
    let entry_path = PathBuf::from(&config.entry);

    let requested = match relative_path(url_path, &config.entry) {
        Some(path) => path,
        None => {
            debug!("Rejected path {}, serving entry page", url_path);
            return serve_entry(config).await;
        }
    };

    let file_path = config.root.join(&requested);
    debug!("Serving file: {}", file_path.display());

    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let content_type = content_type_for(&requested.to_string_lossy());
            AssetResponse::new(200, content_type, content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if requested == entry_path {
                AssetResponse::new(404, "text/html", "File not found")
            } else {
                debug!(
                    "File not found: {}, trying {} instead",
                    file_path.display(),
                    config.entry
                );
                serve_entry(config).await
            }
        }
        Err(e) => {
            warn!("Failed to read {}: {}", file_path.display(), e);
            AssetResponse::new(500, "text/plain", format!("Server Error: {:?}", e.kind()))
        }
    }
}

async fn serve_entry(config: &ServerConfig) -> AssetResponse {
    match tokio::fs::read(config.root.join(&config.entry)).await {
        Ok(content) => AssetResponse::new(200, "text/html", content),
        Err(_) => AssetResponse::new(404, "text/html", "File not found"),
    }
}

/// Read one request from the socket and answer it
async fn handle_connection(mut socket: TcpStream, config: &ServerConfig) {
    let peer = socket
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    let mut buffer = [0u8; 4096];

    let n = match socket.read(&mut buffer).await {
        Ok(0) => return,
        Ok(n) => n,
        Err(e) => {
            debug!("Failed to read from {}: {}", peer, e);
            return;
        }
    };

    let request = String::from_utf8_lossy(&buffer[..n]);
    let response = match parse_request_line(&request) {
        Some(("GET", path)) => resolve(config, path).await,
        Some((method, _)) => {
            debug!("Rejected {} from {}", method, peer);
            AssetResponse::new(405, "text/plain", "Method Not Allowed")
        }
        None => AssetResponse::new(500, "text/plain", "Server Error: malformed request"),
    };

    if let Err(e) = socket.write_all(&response.to_bytes()).await {
        debug!("Failed to write response to {}: {}", peer, e);
    }
}

/// Accept connections forever, one task per connection
pub async fn serve_listener(listener: TcpListener, config: Arc<ServerConfig>) -> anyhow::Result<()> {
    loop {
        let (socket, _peer) = listener.accept().await?;
        let config = config.clone();
        tokio::spawn(async move {
            handle_connection(socket, &config).await;
        });
    }
}

/// Bind and serve
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!("Server running on port {}", config.port);
    info!(
        "Serving {} from {} (open http://localhost:{})",
        config.entry,
        config.root.display(),
        config.port
    );
    serve_listener(listener, Arc::new(config)).await
}

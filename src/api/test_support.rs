use std::net::SocketAddr;
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::{ Arc, Mutex };
use tokio::io::{ AsyncReadExt, AsyncWriteExt };
use tokio::net::TcpListener;

/// Nothing listens on port 1, so connecting fails straight away.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/api/json/v1/1";

#[derive(Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>
}

impl StubResponse {
    pub fn json(status: u16, body: &str) -> Self {
        StubResponse { status, content_type: "application/json", body: body.as_bytes().to_vec() }
    }

    pub fn bytes(status: u16, content_type: &'static str, body: &[u8]) -> Self {
        StubResponse { status, content_type, body: body.to_vec() }
    }
}

/// Canned upstream answering every request with the same response.
pub struct StubUpstream {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    request_lines: Arc<Mutex<Vec<String>>>
}

impl StubUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }
}

pub async fn spawn_stub(response: StubResponse) -> StubUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    let hits = Arc::new(AtomicUsize::new(0));
    let request_lines = Arc::new(Mutex::new(vec![]));
    let task_hits = hits.clone();
    let task_request_lines = request_lines.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buffer = vec![0u8; 8192];
            let mut read = 0;
            while read < buffer.len() {
                let count = socket.read(&mut buffer[read..]).await.unwrap_or(0);
                if count == 0 {
                    break;
                }
                read += count;
                if buffer[..read].windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }
            let request = String::from_utf8_lossy(&buffer[..read]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            task_request_lines.lock().unwrap().push(request_line);
            task_hits.fetch_add(1, Ordering::SeqCst);
            let reason = match response.status {
                200 => "OK",
                404 => "Not Found",
                _ => "Stub"
            };
            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                response.status, reason, response.content_type, response.body.len()
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&response.body).await;
            let _ = socket.shutdown().await;
        }
    });
    StubUpstream { addr, hits, request_lines }
}

use std::sync::OnceLock;

use verify_slip::ServerConfig;

static SERVER_URL: OnceLock<String> = OnceLock::new();

// Start the server once per test binary and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        // Bound before the server thread starts, so connections queue until it accepts.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener
            .set_nonblocking(true)
            .expect("nonblocking test listener");
        let addr = listener.local_addr().expect("get local addr");

        let config = ServerConfig::from_lookup(|key| match key {
            "VERIFY_SLIP_HOST" => Some(addr.ip().to_string()),
            "VERIFY_SLIP_PORT" => Some(addr.port().to_string()),
            _ => None,
        });

        // Own thread and runtime, so the server outlives each `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio test listener");
                verify_slip::run(listener, &config)
                    .await
                    .expect("server failed");
            });
        });

        format!("http://{addr}")
    })
}

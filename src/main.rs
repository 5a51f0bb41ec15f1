#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point; it has already logged any failure.
    if verify_slip::start().await.is_err() {
        std::process::exit(1);
    }
}

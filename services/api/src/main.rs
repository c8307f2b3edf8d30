#[tokio::main]
async fn main() {
    if let Err(err) = swissclean_api::run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

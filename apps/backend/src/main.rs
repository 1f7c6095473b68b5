#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quizbowl_backend::run().await
}

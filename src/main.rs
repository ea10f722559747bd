#[tokio::main]
async fn main() -> anyhow::Result<()> {
    newsdash::run().await
}

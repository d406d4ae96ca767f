use std::sync::Arc;

use clap::Parser;
use productsafe_api::{
    application::{
        http::server::http_server::{router, serve, state},
        logging::init_logging,
    },
    args::Args,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logging(&args.log);

    let app_state = state(args.clone())?;
    let app = router(app_state)?;

    serve(app, &args.server).await
}

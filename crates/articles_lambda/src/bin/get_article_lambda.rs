use articles_lambda::handlers::get::handle_get_event;
use articles_lambda::handlers::ApiGatewayResponse;
use articles_lambda::runtime::RuntimeDependencies;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    deps: &RuntimeDependencies,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_get_event(
        &event.payload,
        &deps.config.layout,
        &deps.content_store,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let deps = RuntimeDependencies::from_env().await?;
    let deps = &deps;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(deps, event).await
    }))
    .await
}

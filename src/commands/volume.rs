use tracing::{debug, warn};
use crate::context::AppContext;
use crate::services::volume_service::{self, VolumeError};
use crate::transport::ChatTransport;

pub async fn execute<T: ChatTransport>(
    app: &AppContext,
    transport: &T,
    args: &str,
) -> Result<(), String> {
    if args.is_empty() {
        transport
            .send("❌ Specify an address: `/volume EQ...`")
            .await
            .map_err(|e| e.to_string())?;
        return Ok(());
    }

    let placeholder = transport
        .send("⏳ Analyzing...")
        .await
        .map_err(|e| e.to_string())?;

    let result = volume_service::calculate_volume(app.source.as_ref(), args, &app.fetch_options).await;

    match &result {
        Err(VolumeError::InvalidAddress(_)) => debug!("Rejected address {:?}", args),
        Err(VolumeError::Api(e)) => warn!("Indexer request failed for {:?}: {}", args, e),
        _ => {}
    }

    transport
        .edit(&placeholder, &volume_service::create_result_message(&result))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

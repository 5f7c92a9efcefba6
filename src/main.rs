use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use popup_engine::subscribe_popup;

/// Dumps evaluated snapshots of the subscribe-popup timeline as JSON, either
/// one frame (`popup-engine 150`) or the whole composition as JSON lines.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let timeline = subscribe_popup().context("failed to compile the popup timeline")?;

    let arg = std::env::args().nth(1);
    match arg {
        Some(raw) => {
            let frame: i64 = raw
                .parse()
                .with_context(|| format!("not a frame number: {raw}"))?;
            let snapshot = timeline.evaluate(frame);
            let cues: Vec<_> = timeline.cues_at(frame).collect();
            let doc = json!({ "snapshot": snapshot, "cues": cues });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        None => {
            info!(
                frames = timeline.duration_frames(),
                fps = timeline.fps(),
                "dumping full composition"
            );
            for frame in 0..timeline.duration_frames() {
                let snapshot = timeline.evaluate(frame);
                println!("{}", serde_json::to_string(&snapshot)?);
            }
        }
    }

    Ok(())
}

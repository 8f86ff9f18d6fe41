use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use gridfall_engine::{GameSnapshot, PieceSeed};
use serde::{Deserialize, Serialize};

use crate::{command::play::app::PlayApp, tui::Runtime};

mod app;
mod screen;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Piece sequence seed as 32 hex characters (random when omitted)
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Hide the landing preview under the falling piece
    #[clap(long)]
    no_ghost: bool,
    /// Save a snapshot of the final game state when the session ends
    #[clap(long)]
    save_snapshot: bool,
    /// Directory to save snapshot files
    #[clap(long, default_value = "./data/snapshots/")]
    snapshot_dir: PathBuf,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        no_ghost,
        save_snapshot,
        snapshot_dir,
    } = arg;

    let mut app = PlayApp::new(*seed, !no_ghost);
    Runtime::new().run(&mut app)?;

    if *save_snapshot {
        save_snapshot_file(&app.into_snapshot(), snapshot_dir)?;
    }

    Ok(())
}

/// On-disk wrapper around a snapshot, stamped with the save time.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    saved_at: DateTime<Utc>,
    #[serde(flatten)]
    game: GameSnapshot,
}

/// Writes the snapshot to `dir/game_{YYYYMMDD_HHMMSS}.json`.
fn save_snapshot_file(snapshot: &GameSnapshot, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let saved_at = Utc::now();
    let filename = format!("game_{}.json", saved_at.format("%Y%m%d_%H%M%S"));
    let filepath = dir.join(filename);

    let data = SnapshotFile {
        saved_at,
        game: snapshot.clone(),
    };

    let file = File::create(&filepath)
        .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &data)
        .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

    Ok(())
}

use snapkv_core::{Cursor, MemEnv, Options, Snapshot, Store};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), snapkv_core::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let env = MemEnv::new();
    let db = env.open("demo", &Options::default())?;

    let mut batch = db.write_batch();
    batch.put([0u8, 0, 1], [1u8]).put([0u8, 0, 2], [2u8]).put([0u8, 0, 3], [3u8]);
    batch.write_to(&db, false)?;

    let snapshot = db.obtain_snapshot()?;
    db.put([0u8, 0, 4], Some([4u8]), true)?;
    db.delete([0u8, 0, 1], false)?;

    let mut cursor = db.new_cursor(true, Some(&snapshot))?;
    cursor.seek_to_first()?;
    while cursor.is_valid()? {
        let (key, value) = (cursor.key()?, cursor.value()?);
        tracing::info!("snapshot {:?} => {:?}", key.as_bytes(), value);
        cursor.next()?;
    }
    cursor.close();

    let mut cursor = db.new_cursor(true, None)?;
    cursor.seek_to_last()?;
    while cursor.is_valid()? {
        let (key, value) = (cursor.key()?, cursor.value()?);
        tracing::info!("live {:?} => {:?}", key.as_bytes(), value);
        cursor.previous()?;
    }
    cursor.close();

    db.release_snapshot(&snapshot)?;
    tracing::info!("snapshot released: {}", snapshot.is_released());

    if let Err(e) = db.get_property(b"engine.stats") {
        tracing::info!("{}", e);
    }

    db.close();
    db.close();
    Ok(())
}

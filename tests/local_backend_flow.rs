//! Integration tests for the filesystem backend driven through the install worker.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use lta_switcher::app::workers::spawn_install_worker;
use lta_switcher::backend::{Backend, LocalBackend, MARKER_SUFFIX, SharedBackend};
use lta_switcher::state::{InstallOutcome, InstallRequest};

/// What: Write a two-country catalog and return the manifest path.
fn write_catalog(dir: &Path) -> PathBuf {
    fs::create_dir_all(dir.join("files")).expect("files dir");
    fs::write(dir.join("files/lpf.big"), b"LPF").expect("lpf");
    fs::write(dir.join("files/bra.big"), b"BRA").expect("bra");
    let manifest = dir.join("catalog.toml");
    fs::write(
        &manifest,
        r#"[[entry]]
country = "Argentina"
competition = "Liga Profesional"
country_flag = "flags/arg.svg"
competition_logo = "logos/lpf.png"
file = "files/lpf.big"

[[entry]]
country = "Brasil"
competition = "Brasileirão"
country_flag = "flags/bra.svg"
competition_logo = "logos/bra.png"
file = "files/bra.big"
"#,
    )
    .expect("manifest");
    manifest
}

async fn next(rx: &mut mpsc::UnboundedReceiver<InstallOutcome>) -> InstallOutcome {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("outcome in time")
        .expect("channel open")
}

#[tokio::test]
/// What: Install over an original, switch competitions, then restore the original.
///
/// Inputs:
/// - Target file containing "ORIGINAL"; install 1, install 2, remove, remove again.
///
/// Output:
/// - Target holds each scoreboard in turn, then "ORIGINAL"; the second remove fails.
async fn install_switch_and_restore_through_worker() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest = write_catalog(dir.path());
    let target = dir.path().join("game/overlay_9002.BIG");
    fs::create_dir_all(target.parent().expect("parent")).expect("game dir");
    fs::write(&target, b"ORIGINAL").expect("original");

    let local = LocalBackend::open(&manifest, target.clone()).expect("open catalog");
    let countries = local.get_countries().await.expect("countries");
    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Argentina", "Brasil"]);

    let backend: SharedBackend = Arc::new(local);
    let (tx, req_rx) = mpsc::unbounded_channel();
    let (out_tx, mut rx) = mpsc::unbounded_channel();
    spawn_install_worker(backend, req_rx, out_tx, Duration::from_millis(10));

    tx.send(InstallRequest::Apply { competition_id: 1 }).expect("send");
    assert_eq!(next(&mut rx).await, InstallOutcome::Applied(Ok(())));
    assert_eq!(next(&mut rx).await, InstallOutcome::ApplySettled);
    assert_eq!(fs::read(&target).expect("read"), b"LPF");

    tx.send(InstallRequest::Apply { competition_id: 2 }).expect("send");
    assert_eq!(next(&mut rx).await, InstallOutcome::Applied(Ok(())));
    assert_eq!(next(&mut rx).await, InstallOutcome::ApplySettled);
    assert_eq!(fs::read(&target).expect("read"), b"BRA");

    tx.send(InstallRequest::Remove).expect("send");
    assert_eq!(
        next(&mut rx).await,
        InstallOutcome::Removed(Ok("Original scoreboard restored".into()))
    );
    assert_eq!(fs::read(&target).expect("read"), b"ORIGINAL");
    let mut marker = target.clone().into_os_string();
    marker.push(MARKER_SUFFIX);
    assert!(!PathBuf::from(marker).exists());

    tx.send(InstallRequest::Remove).expect("send");
    assert_eq!(
        next(&mut rx).await,
        InstallOutcome::Removed(Err("No custom scoreboard is installed".into()))
    );
}

use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use unisteg_core::crypto::{ExchangeKeyPair, SigningKeyPair};
use unisteg_core::keyring::{IdentityKeys, MemoryKeyring};
use unisteg_core::{api, commands, UniStegError};

fn write_cover(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let base = (x * 3 + y * 11) as u8;
        Rgb([base, base.wrapping_add(60), base.wrapping_add(120)])
    });
    img.save(path).expect("cover was not written");
}

fn keyring_for(alice: &IdentityKeys, bob: &IdentityKeys) -> MemoryKeyring {
    let mut ring = MemoryKeyring::new();
    ring.add_identity("alice", alice.clone());
    ring.add_identity("bob", bob.clone());
    ring
}

fn fresh_identity() -> IdentityKeys {
    IdentityKeys::new(&ExchangeKeyPair::generate(), &SigningKeyPair::generate())
}

#[test]
fn should_conceal_and_reveal_through_the_file_api() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("cover.png");
    let stego = dir.path().join("stego.png");
    write_cover(&cover, 80, 60);

    let recipient = ExchangeKeyPair::generate();
    let sender = SigningKeyPair::generate();

    api::conceal::prepare()
        .with_image(&cover)
        .with_output(&stego)
        .with_message("the cake is a lie")
        .for_recipient(*recipient.public())
        .signed_by(sender.signing().clone())
        .execute()
        .expect("conceal failed");

    let message = api::reveal::prepare()
        .with_stego_image(&stego)
        .with_identity(recipient.secret().clone())
        .from_sender(*sender.verifying())
        .execute()
        .expect("reveal failed");

    assert_eq!(message, "the cake is a lie");
}

#[test]
fn should_resolve_keys_through_a_keyring() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("cover.png");
    let stego = dir.path().join("stego.png");
    write_cover(&cover, 80, 60);

    let alice = fresh_identity();
    let bob = fresh_identity();
    let ring = keyring_for(&alice, &bob);

    commands::conceal(&cover, &stego, "brief an bob", "bob", "alice", &ring)
        .expect("conceal failed");
    let message =
        commands::reveal(&stego, "bob", "alice", &ring).expect("reveal failed");

    assert_eq!(message, "brief an bob");
}

#[test]
fn should_report_unknown_recipients() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("cover.png");
    write_cover(&cover, 80, 60);

    let alice = fresh_identity();
    let mut ring = MemoryKeyring::new();
    ring.add_identity("alice", alice);

    let res = commands::conceal(
        &cover,
        &dir.path().join("stego.png"),
        "hi",
        "mallory",
        "alice",
        &ring,
    );

    assert!(matches!(res, Err(UniStegError::KeyNotFound(id)) if id == "mallory"));
}

#[test]
fn should_fail_cleanly_on_a_plain_cover() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("cover.png");
    write_cover(&cover, 80, 60);

    let alice = fresh_identity();
    let bob = fresh_identity();
    let ring = keyring_for(&alice, &bob);

    let res = commands::reveal(&cover, "bob", "alice", &ring);

    assert!(matches!(
        res,
        Err(UniStegError::KeyMismatch) | Err(UniStegError::SignatureMismatch)
    ));
}

#[test]
fn should_measure_low_distortion_after_concealing() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("cover.png");
    let stego = dir.path().join("stego.png");
    write_cover(&cover, 100, 100);

    let alice = fresh_identity();
    let bob = fresh_identity();
    let ring = keyring_for(&alice, &bob);

    commands::conceal(&cover, &stego, "hi", "bob", "alice", &ring).expect("conceal failed");
    let report = commands::evaluate(&cover, &stego).expect("evaluation failed");

    // only LSBs may differ, so the MSE stays below one and the PSNR high
    assert!(report.mse > 0.0, "stego image should differ from the cover");
    assert!(report.mse < 1.0, "MSE was {}", report.mse);
    assert!(report.psnr > 45.0, "PSNR was {}", report.psnr);
    assert!(report.quality_index > 0.99, "QI was {}", report.quality_index);
}

#[test]
fn should_reject_an_oversized_message_before_writing() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("cover.png");
    write_cover(&cover, 16, 16);

    let recipient = ExchangeKeyPair::generate();
    let sender = SigningKeyPair::generate();

    let res = api::conceal::prepare()
        .with_image(&cover)
        .with_output(&dir.path().join("stego.png"))
        .with_message("this will not fit into a 16x16 cover")
        .for_recipient(*recipient.public())
        .signed_by(sender.signing().clone())
        .execute();

    assert!(matches!(res, Err(UniStegError::CapacityExceeded { .. })));
    assert!(
        !dir.path().join("stego.png").exists(),
        "no output may be written for a rejected conceal"
    );
}

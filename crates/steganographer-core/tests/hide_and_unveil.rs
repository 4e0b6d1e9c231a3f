use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use tempfile::TempDir;

use steganographer_core::commands::{hide, inspect, unveil};
use steganographer_core::transfer::{run, CancellationToken, Outcome};
use steganographer_core::*;

const CARRIER: &str = "tests/images/plain/carrier-image.png";

fn noisy_image(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2_654_435_761).wrapping_add(y.wrapping_mul(40_503));
        Rgba([(v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8, 255])
    })
}

fn encode(image: HostImage, payload: &[u8], name: &str, password: &str) -> Result<HostImage> {
    let mut encoder = Encoder::new(
        image,
        Cursor::new(payload.to_vec()),
        payload.len() as u64,
        name,
        password,
        &StegoOptions::default(),
    )?;
    assert_eq!(run(&mut encoder, &CancellationToken::new(), |_| {})?, Outcome::Completed);

    Ok(encoder.into_image())
}

#[test]
fn should_hide_and_unveil_a_file_through_the_commands() -> Result<()> {
    let out_dir = TempDir::new()?;
    let secret_image = out_dir.path().join("secret.png");

    hide(
        CARRIER.as_ref(),
        &secret_image,
        "Cargo.toml".as_ref(),
        Some("SuperSecret42".to_string()),
        StegoOptions::default(),
        |_| {},
    )?;
    assert!(fs::metadata(&secret_image)?.len() > 0);

    let unveiled = unveil(
        &secret_image,
        out_dir.path(),
        Some("SuperSecret42".to_string()),
        StegoOptions::default(),
        |_| {},
    )?;
    assert_eq!(unveiled, out_dir.path().join("Cargo.toml"));
    assert_eq!(fs::read(&unveiled)?, fs::read("Cargo.toml")?);

    let inspection = inspect(
        &secret_image,
        Some("SuperSecret42".to_string()),
        StegoOptions::default(),
    )?;
    let hidden = inspection.hidden.expect("hidden file should be found");
    assert_eq!(hidden.file_name, "Cargo.toml");
    assert_eq!(hidden.size, fs::metadata("Cargo.toml")?.len());

    Ok(())
}

#[test]
fn should_unveil_from_an_output_named_jpg() -> Result<()> {
    let out_dir = TempDir::new()?;
    let secret_image = out_dir.path().join("secret.jpg");

    api::hide::prepare()
        .with_file("Cargo.toml")
        .with_image(CARRIER)
        .with_password("SuperSecret42")
        .with_output(&secret_image)
        .execute()?;

    let unveiled = api::unveil::prepare()
        .from_secret_file(&secret_image)
        .into_output_folder(out_dir.path())
        .using_password("SuperSecret42")
        .execute()?;
    assert_eq!(fs::read(&unveiled)?, fs::read("Cargo.toml")?);

    Ok(())
}

#[test]
fn should_refuse_the_wrong_password() -> Result<()> {
    let out_dir = TempDir::new()?;
    let secret_image = out_dir.path().join("secret.png");
    hide(
        CARRIER.as_ref(),
        &secret_image,
        "Cargo.toml".as_ref(),
        Some("right".to_string()),
        StegoOptions::default(),
        |_| {},
    )?;

    let unveil_dir = TempDir::new()?;
    let result = unveil(
        &secret_image,
        unveil_dir.path(),
        Some("wrong".to_string()),
        StegoOptions::default(),
        |_| {},
    );
    assert!(matches!(result, Err(SteganoError::CannotDecode)));
    assert_eq!(fs::read_dir(unveil_dir.path())?.count(), 0);

    Ok(())
}

#[test]
fn should_refuse_a_different_marker() -> Result<()> {
    let out_dir = TempDir::new()?;
    let secret_image = out_dir.path().join("secret.png");
    hide(
        CARRIER.as_ref(),
        &secret_image,
        "Cargo.toml".as_ref(),
        None,
        StegoOptions::default().with_marker("HIDDEN"),
        |_| {},
    )?;

    let result = unveil(
        &secret_image,
        out_dir.path(),
        None,
        StegoOptions::default(),
        |_| {},
    );
    assert!(matches!(result, Err(SteganoError::CannotDecode)));

    let unveiled = unveil(
        &secret_image,
        out_dir.path(),
        None,
        StegoOptions::default().with_marker("HIDDEN"),
        |_| {},
    )?;
    assert_eq!(fs::read(unveiled)?, fs::read("Cargo.toml")?);

    Ok(())
}

#[test]
fn should_round_trip_ten_bytes_in_a_100x100_image() -> Result<()> {
    let stegano = Steganographer::new();
    let image = HostImage::from_image(noisy_image(100, 100));
    assert_eq!(stegano.capacity_bytes(&image), 30_000);
    // 12 bytes marker, 8 bytes lengths, 10 bytes name, 10 bytes payload
    assert!(stegano.can_encode(&image, 10, 5));

    let payload = b"0123456789";
    let image = encode(image, payload, "a.txt", "pw")?;
    assert_eq!(
        stegano.describe_hidden_payload(&image, "pw"),
        Some(HiddenPayload {
            file_name: "a.txt".to_string(),
            size: 10
        })
    );

    let out_dir = TempDir::new()?;
    let mut decoder = stegano.decoder(image, out_dir.path(), "pw")?;
    assert_eq!(run(&mut decoder, &CancellationToken::new(), |_| {})?, Outcome::Completed);
    assert_eq!(fs::read(out_dir.path().join("a.txt"))?, payload);

    Ok(())
}

#[test]
fn should_survive_saving_and_loading_as_png() -> Result<()> {
    let out_dir = TempDir::new()?;
    let payload: Vec<u8> = (0..2_000u32).map(|i| (i * 7 % 251) as u8).collect();
    let mut image = encode(
        HostImage::from_image(noisy_image(64, 64)),
        &payload,
        "data.bin",
        "pw",
    )?;
    let saved = out_dir.path().join("saved.png");
    image.save_as(&saved)?;

    let loaded = HostImage::from_file(&saved)?;
    assert_eq!(loaded, image);
    let mut decoder = Decoder::new(loaded, out_dir.path(), "pw", &StegoOptions::default())?;
    run(&mut decoder, &CancellationToken::new(), |_| {})?;
    assert_eq!(fs::read(out_dir.path().join("data.bin"))?, payload);

    Ok(())
}

#[test]
fn should_fill_the_image_exactly() -> Result<()> {
    // 8 * 8 * 3 = 192 bytes, header for "a.txt" takes 30
    let payload = vec![0xffu8; 162];
    let image = HostImage::from_image(noisy_image(8, 8));
    assert!(matches!(
        Encoder::new(
            image.clone(),
            Cursor::new(vec![0; 163]),
            163,
            "a.txt",
            "pw",
            &StegoOptions::default()
        ),
        Err(SteganoError::CannotEncode {
            required: 193,
            capacity: 192
        })
    ));

    let image = encode(image, &payload, "a.txt", "pw")?;
    let out_dir = TempDir::new()?;
    let mut decoder = Decoder::new(image, out_dir.path(), "pw", &StegoOptions::default())?;
    run(&mut decoder, &CancellationToken::new(), |_| {})?;
    assert_eq!(fs::read(out_dir.path().join("a.txt"))?, payload);

    Ok(())
}

#[test]
fn should_refuse_a_virgin_image() -> Result<()> {
    let out_dir = TempDir::new()?;
    let uniform = HostImage::from_image(ImageBuffer::from_pixel(50, 50, Rgba([90, 90, 90, 255])));

    let result = Decoder::new(uniform, out_dir.path(), "pw", &StegoOptions::default());
    assert!(matches!(result, Err(SteganoError::CannotDecode)));
    assert_eq!(fs::read_dir(out_dir.path())?.count(), 0);

    Ok(())
}

#[test]
fn should_remove_the_partial_file_when_cancelled() -> Result<()> {
    let image = encode(
        HostImage::from_image(noisy_image(64, 64)),
        &[42; 5_000],
        "big.bin",
        "pw",
    )?;
    let out_dir = TempDir::new()?;
    let mut decoder = Decoder::new(image, out_dir.path(), "pw", &StegoOptions::default())?;

    let token = CancellationToken::new();
    let outcome = run(&mut decoder, &token, |percent| {
        if percent >= 50 {
            token.cancel();
        }
    })?;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(decoder.completed_segments(), 50);
    assert!(!Path::new(&out_dir.path().join("big.bin")).exists());

    Ok(())
}

#[test]
fn should_encode_in_the_background() -> Result<()> {
    let out_dir = TempDir::new()?;
    let payload = out_dir.path().join("payload.txt");
    fs::write(&payload, "hidden in the background")?;

    let stegano = Steganographer::new();
    let encoder = stegano.encoder(HostImage::from_image(noisy_image(40, 40)), &payload, "pw")?;
    let task = stegano.spawn(encoder)?;
    let progress: Vec<u8> = task.progress().iter().collect();

    let image = match task.join()? {
        TaskOutcome::Completed(Operation::Encoder(encoder)) => encoder.into_image(),
        _ => panic!("encoding should have completed"),
    };
    assert_eq!(progress.len(), 101);
    assert!(!stegano.has_active_operations());
    assert!(stegano.can_decode(&image, "pw"));

    Ok(())
}

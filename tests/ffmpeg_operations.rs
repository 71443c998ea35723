use vidkit::concat;
use vidkit::config::Config;
use vidkit::discovery::{find_media_files, SortMethod};
use vidkit::ffmpeg::Ffmpeg;
use vidkit::media::{MediaFile, MediaKind};
use vidkit::overlay::{self, OverlaySpec, Position};
use vidkit::synth::{self, ColorClip, ImageStyle, StillImage};

fn ffmpeg_or_skip() -> Option<Ffmpeg> {
    match Ffmpeg::locate(&Config::default()) {
        Ok(ffmpeg) => Some(ffmpeg),
        Err(e) => {
            eprintln!("Skipping ffmpeg integration test: {}", e);
            None
        }
    }
}

// Captions are left off so the test does not depend on a drawtext-enabled build.
fn clip(name: &str, color: &str) -> ColorClip {
    ColorClip {
        file_name: name.to_string(),
        color: color.to_string(),
        width: 320,
        height: 240,
        duration: 1,
        caption: None,
    }
}

#[test]
fn test_concat_then_overlay_integration() {
    let Some(ffmpeg) = ffmpeg_or_skip() else {
        return;
    };
    let work = tempfile::tempdir().unwrap();
    let clips_dir = work.path().join("clips");

    // 1. Setup: two short clips and a logo
    let report = synth::generate(
        &ffmpeg,
        &clips_dir,
        &[clip("b_second.mp4", "green"), clip("a_first.mp4", "red")],
    )
    .unwrap();
    assert_eq!(report.created.len(), 2, "clip generation failed: {:?}", report.failed);

    let logo = StillImage {
        file_name: "logo.png".to_string(),
        style: ImageStyle::Solid("blue".to_string()),
        width: 64,
        height: 32,
        caption: None,
        fontsize: 24,
    };
    let report = synth::generate(&ffmpeg, work.path(), &[logo]).unwrap();
    assert_eq!(report.created.len(), 1, "logo generation failed: {:?}", report.failed);

    // 2. Concatenate
    let files = find_media_files(&clips_dir, "mp4", SortMethod::Alphabetical).unwrap();
    assert_eq!(files[0].file_name(), "a_first.mp4");
    let joined = work.path().join("out").join("joined.mp4");
    std::fs::create_dir_all(joined.parent().unwrap()).unwrap();
    concat::concatenate(&ffmpeg, &files, &joined).unwrap();
    assert!(std::fs::metadata(&joined).unwrap().len() > 0);

    // 3. Overlay onto the joined clip
    let video = MediaFile::open(&joined, MediaKind::Video).unwrap();
    let image = MediaFile::open(work.path().join("logo.png"), MediaKind::Image).unwrap();
    let spec = OverlaySpec {
        position: Position::BottomRight,
        scale: Some("50%".to_string()),
        opacity: 0.5,
        start_time: Some("0".to_string()),
        duration: Some("1".to_string()),
        ..OverlaySpec::default()
    };
    let out = work.path().join("out").join("joined_overlay.mp4");
    overlay::overlay_image(&ffmpeg, &video, &image, &spec, &out).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn test_ffmpeg_failure_carries_stderr() {
    let Some(ffmpeg) = ffmpeg_or_skip() else {
        return;
    };
    let work = tempfile::tempdir().unwrap();
    let bogus = work.path().join("not_really.mp4");
    std::fs::write(&bogus, b"this is not a video").unwrap();

    let files = vec![MediaFile::open(&bogus, MediaKind::Video).unwrap()];
    let err = concat::concatenate(&ffmpeg, &files, &work.path().join("out.mp4")).unwrap_err();
    match err {
        vidkit::MediaError::ExternalToolFailure { stderr, .. } => assert!(!stderr.is_empty()),
        other => panic!("expected ExternalToolFailure, got {:?}", other),
    }
}
